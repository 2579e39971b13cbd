use std::fmt::Display;

use crate::data_layer_error::DataLayerError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    DataLayerError(DataLayerError),
    IOError(std::io::Error),
}

impl From<DataLayerError> for Error {
    fn from(value: DataLayerError) -> Self {
        Error::DataLayerError(value)
    }
}

impl From<sqlx::Error> for Error {
    fn from(value: sqlx::Error) -> Self {
        Error::DataLayerError(value.into())
    }
}

impl From<tokio::io::Error> for Error {
    fn from(value: tokio::io::Error) -> Self {
        Error::IOError(value)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::DataLayerError(e) => write!(f, "could not read highlights: {e}"),
            Error::IOError(e) => write!(f, "could not write highlight: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::DataLayerError(e) => Some(e),
            Error::IOError(e) => Some(e),
        }
    }
}
