use std::fmt::Display;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    IOError(std::io::Error),
    LogCorrupt(serde_json::Error),
    InvalidTimestamp { timestamp: String, source: chrono::ParseError },
}

impl From<tokio::io::Error> for Error {
    fn from(value: tokio::io::Error) -> Self {
        Error::IOError(value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::LogCorrupt(value)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IOError(e) => write!(f, "backup log I/O error: {e}"),
            Error::LogCorrupt(e) => write!(f, "backup log is corrupt: {e}"),
            Error::InvalidTimestamp { timestamp, source } =>
                write!(f, "backup log has an invalid timestamp {timestamp:?}: {source}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IOError(e) => Some(e),
            Error::LogCorrupt(e) => Some(e),
            Error::InvalidTimestamp { source, .. } => Some(source),
        }
    }
}
