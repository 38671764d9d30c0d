//! Error Types
//!
//! Failures surfaced by the service layer and the display controller.

/// Result alias used across the frontend
pub type TodoResult<T> = Result<T, TodoError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoError {
    /// Submitted title was blank
    #[error("Title not valid")]
    InvalidTitle,

    /// No backend service is wired into the controller
    #[error("todo service not available")]
    ServiceUnavailable,

    /// Request never produced a response
    #[error("transport error: {0}")]
    Transport(String),

    /// Backend answered with a non-success status
    #[error("server returned status {0}")]
    Status(u16),

    /// Response body was not the expected JSON
    #[error("decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for TodoError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            TodoError::Status(status.as_u16())
        } else if err.is_decode() {
            TodoError::Decode(err.to_string())
        } else {
            TodoError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for TodoError {
    fn from(err: serde_json::Error) -> Self {
        TodoError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(TodoError::InvalidTitle.to_string(), "Title not valid");
        assert_eq!(TodoError::Status(404).to_string(), "server returned status 404");
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(matches!(TodoError::from(err), TodoError::Decode(_)));
    }
}
