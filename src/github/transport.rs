use crate::error::FetchError;
use std::future::Future;

/// Status and body of a finished HTTP read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A read-only HTTP client rooted at the API base URL.
///
/// `get` only fails when no status could be obtained; non-success statuses are
/// returned as ordinary responses so the caller decides what they mean.
pub trait Transport {
    fn get(&self, path: &str) -> impl Future<Output = Result<RawResponse, FetchError>> + Send;
}
