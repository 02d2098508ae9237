use thiserror::Error;

/// Configuration and build-time failures. Per-request failures never pass
/// through here; they are classified and counted by the workers instead.
#[derive(Debug, Error)]
pub enum StampedeError {
    #[error("Cannot parse URL: {0}")]
    CannotParseUrl(String),
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
    #[error("Cannot build the HTTP transport")]
    TransportBuild(#[from] reqwest::Error),
}
