//! Fetch Errors
//!
//! The single failure type raised at the REST boundary.

/// Any failed request: non-2xx status, transport failure, or a body that
/// does not decode into the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("{method} {url} returned HTTP {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },
    #[error("{method} {url} failed: {message}")]
    Network {
        method: &'static str,
        url: String,
        message: String,
    },
    #[error("{method} {url} sent an unreadable body: {message}")]
    Decode {
        method: &'static str,
        url: String,
        message: String,
    },
}

impl FetchError {
    /// HTTP status of the failed response, when there was one
    #[cfg(test)]
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
