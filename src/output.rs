//! Numeric result codes printed by the `connectz` binary.

use std::fmt;

use crate::error::{GameError, InputError, PlayError};
use crate::game::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Output {
    Draw = 0,
    PlayerOneWin = 1,
    PlayerTwoWin = 2,
    Incomplete = 3,
    IllegalContinue = 4,
    IllegalRow = 5,
    IllegalColumn = 6,
    IllegalGame = 7,
    InvalidFile = 8,
    FileError = 9,
}

impl Output {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<Status> for Output {
    fn from(status: Status) -> Self {
        match status {
            Status::InProgress => Output::Incomplete,
            Status::PlayerOneWin => Output::PlayerOneWin,
            Status::PlayerTwoWin => Output::PlayerTwoWin,
            Status::Draw => Output::Draw,
        }
    }
}

impl From<&GameError> for Output {
    fn from(err: &GameError) -> Self {
        match err {
            GameError::IllegalGameSpec { .. } => Output::IllegalGame,
            GameError::IllegalColumn { .. } => Output::IllegalColumn,
            GameError::IllegalRow { .. } => Output::IllegalRow,
            GameError::IllegalContinue => Output::IllegalContinue,
        }
    }
}

impl From<&InputError> for Output {
    fn from(err: &InputError) -> Self {
        match err {
            InputError::NotFound(_) | InputError::Io { .. } => Output::FileError,
            InputError::Header { .. } | InputError::Move { .. } => Output::InvalidFile,
        }
    }
}

impl From<&PlayError> for Output {
    fn from(err: &PlayError) -> Self {
        match err {
            PlayError::Input(e) => e.into(),
            PlayError::Game(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_codes() {
        assert_eq!(Output::Draw.to_string(), "0");
        assert_eq!(Output::Incomplete.code(), 3);
        assert_eq!(Output::FileError.to_string(), "9");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(Output::from(Status::InProgress), Output::Incomplete);
        assert_eq!(Output::from(Status::PlayerTwoWin), Output::PlayerTwoWin);
        assert_eq!(Output::from(Status::Draw), Output::Draw);
    }

    #[test]
    fn test_error_mapping() {
        assert_eq!(Output::from(&GameError::IllegalContinue), Output::IllegalContinue);
        assert_eq!(
            Output::from(&GameError::IllegalRow { column: 2 }),
            Output::IllegalRow
        );
        assert_eq!(
            Output::from(&InputError::NotFound(PathBuf::from("missing.txt"))),
            Output::FileError
        );
        let err = PlayError::from(InputError::Header {
            line: "7 6".to_string(),
        });
        assert_eq!(Output::from(&err), Output::InvalidFile);
        let err = PlayError::from(GameError::IllegalGameSpec {
            width: 3,
            height: 3,
            win_length: 4,
        });
        assert_eq!(Output::from(&err), Output::IllegalGame);
    }
}
