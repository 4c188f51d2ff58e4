//! Error enum
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    /// A pre-defined vocabulary artifact without a `dict` section.
    MissingDictionary(PathBuf),
    /// Every pair of the named split has been filtered out.
    EmptySplit(String),
    /// A setting value that cannot be used, with the reason why.
    InvalidSetting(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Serde(e) => write!(f, "(de)serialization error: {}", e),
            Error::MissingDictionary(path) => {
                write!(f, "no dictionary section in pre-defined vocabulary {:?}", path)
            }
            Error::EmptySplit(split) => write!(
                f,
                "no {} instances left after removing empty pairs",
                split
            ),
            Error::InvalidSetting(s) => write!(f, "invalid setting: {}", s),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}
