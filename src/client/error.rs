//! Client Error Types
//!
//! Tagged errors returned by every API call, plus the rule that turns an
//! error response body into a single user-facing message.

use thiserror::Error;

/// API client errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A success response did not match the expected shape
    #[error("Parse error: {0}")]
    Decode(String),

    /// The request body could not be serialized
    #[error("Request build error: {0}")]
    Encode(String),
}

impl ClientError {
    /// HTTP status for `Api` errors
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The server rejected the credentials
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    /// Build an `Api` error from a raw error response
    pub fn from_response(status: u16, body: &str) -> Self {
        ClientError::Api {
            status,
            message: error_message(status, body),
        }
    }
}

/// Message carried by an error response
///
/// Precedence: `detail`, then `error`, then the compact JSON of any other
/// non-empty object (field validation bodies), then `API Error: <status>`.
pub fn error_message(status: u16, body: &str) -> String {
    let fallback = || format!("API Error: {}", status);

    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return fallback(),
    };

    let object = match value.as_object() {
        Some(object) if !object.is_empty() => object,
        _ => return fallback(),
    };

    for key in ["detail", "error"] {
        if let Some(text) = object.get(key).and_then(|v| v.as_str()) {
            if !text.is_empty() {
                return text.to_string();
            }
        }
    }

    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_wins() {
        assert_eq!(error_message(400, r#"{"detail": "X"}"#), "X");
        assert_eq!(error_message(400, r#"{"error": "Y", "detail": "X"}"#), "X");
    }

    #[test]
    fn test_error_field() {
        assert_eq!(
            error_message(401, r#"{"error": "Geçersiz kullanıcı adı veya şifre."}"#),
            "Geçersiz kullanıcı adı veya şifre."
        );
    }

    #[test]
    fn test_validation_body_is_stringified() {
        assert_eq!(
            error_message(400, r#"{"phone": ["Bu alan boş bırakılamaz."]}"#),
            r#"{"phone":["Bu alan boş bırakılamaz."]}"#
        );
    }

    #[test]
    fn test_generic_fallbacks() {
        assert_eq!(error_message(502, "<html>Bad Gateway</html>"), "API Error: 502");
        assert_eq!(error_message(500, ""), "API Error: 500");
        assert_eq!(error_message(404, "{}"), "API Error: 404");
        assert_eq!(error_message(400, r#"["a"]"#), "API Error: 400");
    }

    #[test]
    fn test_display_is_the_message() {
        let err = ClientError::from_response(400, r#"{"detail": "Bu saat dolu"}"#);
        assert_eq!(err.to_string(), "Bu saat dolu");
        assert_eq!(err.status(), Some(400));
        assert!(!err.is_unauthorized());
        assert!(ClientError::from_response(401, "").is_unauthorized());
    }
}
