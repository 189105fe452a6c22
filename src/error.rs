use std::path::PathBuf;

/// Errors raised by the game engine. Each one aborts the current drop
/// without changing the game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("win length {win_length} can never fit on a {width}x{height} board")]
    IllegalGameSpec {
        width: i64,
        height: i64,
        win_length: i64,
    },

    #[error("column {column} is outside the board (width {width})")]
    IllegalColumn { column: i64, width: usize },

    #[error("column {column} is already full")]
    IllegalRow { column: usize },

    #[error("the game is already over")]
    IllegalContinue,
}

/// Errors that can occur while reading a game file.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("game file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read game file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("header must be three integers, got {line:?}")]
    Header { line: String },

    #[error("move on line {line_number} is not a single integer: {line:?}")]
    Move { line_number: usize, line: String },
}

/// Anything that can end a game read from a file early.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Game(#[from] GameError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
