//! Game file reader: a `width height win_length` header line followed by one
//! 1-indexed column per line.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use crate::error::InputError;

/// Raw header values, before the engine validates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub width: i64,
    pub height: i64,
    pub win_length: i64,
}

impl Header {
    pub fn parse(line: &str) -> Result<Self, InputError> {
        let bad = || InputError::Header {
            line: line.trim_end().to_string(),
        };
        let values = line
            .split_whitespace()
            .map(str::parse::<i64>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| bad())?;
        match values[..] {
            [width, height, win_length] => Ok(Header {
                width,
                height,
                win_length,
            }),
            _ => Err(bad()),
        }
    }
}

/// An opened game file. The header is read once; moves are streamed from a
/// fresh handle on every call to [`GameFile::moves`].
#[derive(Debug, Clone)]
pub struct GameFile {
    path: PathBuf,
    header: Header,
}

impl GameFile {
    pub fn open(path: &Path) -> Result<Self, InputError> {
        let mut lines = open_lines(path)?;
        let first = match lines.next() {
            Some(line) => line.map_err(|e| io_error(path, e))?,
            None => String::new(),
        };
        Ok(GameFile {
            path: path.to_path_buf(),
            header: Header::parse(&first)?,
        })
    }

    pub fn header(&self) -> Header {
        self.header
    }

    /// Lazily read the moves, starting again from the first one.
    pub fn moves(&self) -> Result<Moves, InputError> {
        let mut lines = open_lines(&self.path)?;
        // header was already parsed
        lines.next();
        Ok(Moves {
            path: self.path.clone(),
            lines,
            line_number: 1,
        })
    }
}

/// Iterator over the 1-indexed columns of a game file.
pub struct Moves {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    line_number: usize,
}

impl Iterator for Moves {
    type Item = Result<i64, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(io_error(&self.path, e))),
        };
        self.line_number += 1;
        Some(line.trim().parse::<i64>().map_err(|_| InputError::Move {
            line_number: self.line_number,
            line,
        }))
    }
}

fn open_lines(path: &Path) -> Result<Lines<BufReader<File>>, InputError> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file).lines()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(InputError::NotFound(path.to_path_buf()))
        }
        Err(e) => Err(io_error(path, e)),
    }
}

fn io_error(path: &Path, source: io::Error) -> InputError {
    InputError::Io {
        path: path.to_path_buf(),
        source,
    }
}
