//! Crate-level error type for client operations.

use crate::traits::HttpError;

/// Error type for Vaelis client operations.
#[derive(Debug)]
pub enum ClientError {
    /// HTTP request failed
    Http(HttpError),
    /// JSON serialization or deserialization failed
    Json(serde_json::Error),
    /// Server returned an error status
    Server { status: u16, message: String },
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Http(e) => write!(f, "HTTP error: {}", e),
            ClientError::Json(e) => write!(f, "JSON error: {}", e),
            ClientError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Http(e) => Some(e),
            ClientError::Json(e) => Some(e),
            ClientError::Server { .. } => None,
        }
    }
}

impl From<HttpError> for ClientError {
    fn from(e: HttpError) -> Self {
        ClientError::Http(e)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_display() {
        let err = ClientError::Server {
            status: 502,
            message: "Bad Gateway".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.contains("502"));
        assert!(display.contains("Bad Gateway"));
    }

    #[test]
    fn test_client_error_from_http() {
        let err: ClientError = HttpError::Cancelled.into();
        assert!(matches!(err, ClientError::Http(_)));
    }

    #[test]
    fn test_client_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ClientError = json_err.into();
        assert!(matches!(err, ClientError::Json(_)));
    }
}
