use std::fmt::Display;

#[derive(Debug)]
pub struct DataLayerError {
    pub err: Box<dyn std::error::Error + Send + Sync>
}
pub type Result<T> = std::result::Result<T, DataLayerError>;

impl From<sqlx::Error> for DataLayerError {
    fn from(value: sqlx::Error) -> Self {
        Self { err: Box::new(value) }
    }
}

impl Display for DataLayerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl std::error::Error for DataLayerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.err.as_ref())
    }
}
