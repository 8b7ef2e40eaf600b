use thiserror::Error;

/// Errors raised at the client/backend boundary.
///
/// These are handled at the point of occurrence (logged or spoken); nothing
/// here propagates to a top-level handler.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Rejected client configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Network or server-unreachable failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend replied with a non-success status or an unusable body.
    #[error("speech backend error: {0}")]
    Backend(String),

    /// The audio payload was not valid base64.
    #[error("audio decode error: {0}")]
    AudioDecode(#[from] base64::DecodeError),
}
