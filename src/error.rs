use std::fmt::Display;

use crate::huffman::CodingError;

#[derive(Debug)]
pub enum Error {
    InputFileNotFound(String),
    NoReadPermissionForInputFile(String),
    UnableToReadInputFile(String, std::io::Error),
    Coding(CodingError),
    RoundTripMismatch,
    WorkerDisconnected,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputFileNotFound(path) => {
                write!(f, "Input file '{}' not found", path)
            }
            Self::NoReadPermissionForInputFile(path) => {
                write!(
                    f,
                    "Unable to open file '{}' for reading. Permission denied.",
                    path
                )
            }
            Self::UnableToReadInputFile(path, error) => {
                write!(f, "Unable to read input file '{}': {}", path, error)
            }
            Self::Coding(error) => write!(f, "{}", error),
            Self::RoundTripMismatch => {
                write!(f, "Decoded text does not match the original input")
            }
            Self::WorkerDisconnected => {
                write!(f, "A worker thread stopped before reporting its result")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToReadInputFile(_, error) => Some(error),
            Self::Coding(error) => Some(error),
            _ => None,
        }
    }
}

impl From<CodingError> for Error {
    fn from(value: CodingError) -> Self {
        Self::Coding(value)
    }
}
