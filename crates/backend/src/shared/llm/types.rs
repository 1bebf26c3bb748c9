use thiserror::Error;

/// Refactoring engine failures
#[derive(Debug, Error)]
pub enum RefactorError {
    #[error("API error: {0}")]
    Api(String),

    #[error("authentication error: {0}")]
    Auth(String),

    #[error("rate limit exceeded")]
    RateLimited,

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("model returned an empty reply")]
    EmptyReply,
}
