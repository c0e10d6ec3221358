use std::fmt;

#[derive(Debug)]
pub enum Error {
    ManifestParse(String),
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ManifestParse(msg) => write!(f, "Manifest parse error: {}", msg),
            Error::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ManifestParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
