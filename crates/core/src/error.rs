//! Failure kinds of the Article Query Client
//!
//! The shell maps every reqwest outcome onto one of these variants so the state
//! machines can stay ignorant of the HTTP stack.

use serde::Serialize;

/// Error returned by the three article read operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, aborted body)
    #[error("Network error: {0}")]
    Transport(String),

    /// The remote source answered outside the 2xx range
    #[error("HTTP error: {code}")]
    HttpStatus { code: u16 },

    /// The body did not match the expected article schema
    #[error("Invalid response: {0}")]
    Decode(String),

    /// The caller broke a precondition (empty query or identifier)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl FetchError {
    /// Message shown to the user when a view lands in its error state
    pub fn user_message(&self) -> String {
        match self {
            FetchError::HttpStatus { code: 404 } => {
                "HTTP error: 404 (the article was not found)".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::HttpStatus { code: 404 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_message() {
        let err = FetchError::HttpStatus { code: 500 };
        assert_eq!(err.to_string(), "HTTP error: 500");
        assert_eq!(err.user_message(), "HTTP error: 500");
    }

    #[test]
    fn test_not_found_message() {
        let err = FetchError::HttpStatus { code: 404 };
        assert!(err.is_not_found());
        assert!(err.user_message().starts_with("HTTP error: 404"));
        assert!(err.user_message().contains("not found"));
    }

    #[test]
    fn test_transport_and_decode_messages() {
        let transport = FetchError::Transport("connection refused".to_string());
        assert_eq!(transport.user_message(), "Network error: connection refused");
        assert!(!transport.is_not_found());

        let decode = FetchError::Decode("missing field `results`".to_string());
        assert_eq!(
            decode.user_message(),
            "Invalid response: missing field `results`"
        );
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_string(&FetchError::HttpStatus { code: 404 }).unwrap();
        assert_eq!(json, r#"{"kind":"http_status","detail":{"code":404}}"#);
    }
}
