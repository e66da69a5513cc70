//! Typed transport errors

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("timeout")]
    Timeout,

    /// Upstream rejected the bearer token. The caller is expected to force
    /// a sign-out; this is the one error class with a global side effect.
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),

    #[error("http {status}: {message}")]
    Http { status: u16, message: String },

    #[error("invalid response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Whether this failure must trigger the global sign-out flow
    pub fn is_auth(&self) -> bool {
        matches!(self, ClientError::Unauthorized)
    }
}

pub(crate) fn map_reqwest_error(e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::Timeout
    } else {
        ClientError::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_unauthorized_is_auth() {
        assert!(ClientError::Unauthorized.is_auth());
        assert!(!ClientError::Timeout.is_auth());
        assert!(!ClientError::NotFound("Document not found".to_string()).is_auth());
        assert!(!ClientError::Http { status: 500, message: "boom".to_string() }.is_auth());
    }
}
