use async_graphql::{Error, ErrorExtensions};
use std::sync::Arc;
use tracing::error;

/// An error raised when the requested entity does not exist
#[derive(Debug)]
pub struct NotFound(pub &'static str);

impl From<NotFound> for Error {
    fn from(NotFound(entity): NotFound) -> Self {
        Error::new(format!("{entity} can't be found"))
            .extend_with(|_, extensions| extensions.set("code", "NOT_FOUND"))
    }
}

/// An error raised when a listing's host does not exist
#[derive(Debug)]
pub struct HostNotFound;

impl From<HostNotFound> for Error {
    fn from(_: HostNotFound) -> Self {
        Error::new("host can't be found")
            .extend_with(|_, extensions| extensions.set("code", "HOST_NOT_FOUND"))
    }
}

/// An error raised when a page is requested with a limit less than 1
#[derive(Debug)]
pub struct InvalidLimit;

impl From<InvalidLimit> for Error {
    fn from(_: InvalidLimit) -> Self {
        Error::new("limit must be greater than or equal to 1")
            .extend_with(|_, extensions| extensions.set("code", "BAD_USER_INPUT"))
    }
}

/// An error raised when the store could not answer a query
#[derive(Debug)]
pub struct QueryFailed {
    what: &'static str,
    source: Arc<database::Error>,
}

impl QueryFailed {
    pub fn new(what: &'static str, source: impl Into<Arc<database::Error>>) -> Self {
        Self {
            what,
            source: source.into(),
        }
    }
}

impl From<QueryFailed> for Error {
    fn from(QueryFailed { what, source }: QueryFailed) -> Self {
        use std::error::Error as _;

        match source.source() {
            Some(cause) => error!(error = %source, %cause, what, "failed to query the store"),
            None => error!(error = %source, what, "failed to query the store"),
        }

        Error::new(format!("failed to query {what}: {source}"))
            .extend_with(|_, extensions| extensions.set("code", "QUERY_FAILED"))
    }
}

/// Wrap store errors with what was being queried
pub(crate) trait QueryResultExt<T> {
    fn failed_to_query(self, what: &'static str) -> Result<T, QueryFailed>;
}

impl<T, E> QueryResultExt<T> for Result<T, E>
where
    E: Into<Arc<database::Error>>,
{
    fn failed_to_query(self, what: &'static str) -> Result<T, QueryFailed> {
        self.map_err(|source| QueryFailed::new(what, source))
    }
}
