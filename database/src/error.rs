use std::fmt::{Display, Formatter};

/// Errors that can occur when reading from the store
#[derive(Debug)]
pub enum Error {
    /// Error while interacting with the database
    Sqlx(sqlx::Error),
    /// The store was shut down and can no longer serve queries
    Closed,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlx(_) => write!(f, "error while interacting with the database"),
            Self::Closed => write!(f, "the store is closed"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Sqlx(e) => Some(e),
            Self::Closed => None,
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::PoolClosed => Self::Closed,
            error => Self::Sqlx(error),
        }
    }
}
