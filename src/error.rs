use thiserror::Error;

#[derive(Error, Debug)]
pub enum GhpeekError {
    #[error("github error: {0}")]
    GitHub(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GhpeekError>;

/// Why a lookup failed. The display text is what the user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("User not found")]
    ProfileNotFound,

    #[error("Repositories not found")]
    RepositoriesNotFound,

    #[error("network error: {0}")]
    TransportFailure(String),

    #[error("unexpected response: {0}")]
    MalformedResponse(String),
}
