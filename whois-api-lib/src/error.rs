//! Error handling for WhoisXML API operations.
//!
//! This module defines the error type covering all the ways a lookup can
//! fail, from invalid caller input to transport failures to errors the
//! vendor reports inside an otherwise successful response.
//!
//! Display strings are part of the contract: callers of the original API
//! match on exact error text, so the message forms here are fixed.

use std::fmt;

use crate::types::ErrorMessage;

/// Main error type for WhoisXML API operations.
///
/// The variants map one-to-one onto the failure classes of the service:
/// bad arguments fail before any network activity, transport and body-read
/// failures wrap their underlying cause, decode failures carry the decoder
/// message verbatim, and `Api` carries the structured error object the
/// vendor embeds in the JSON payload (which can arrive with HTTP 200).
#[derive(Debug, Clone)]
pub enum WhoisApiError {
    /// Caller supplied an invalid argument; no request was made
    InvalidArgument { name: String, message: String },

    /// The HTTP request itself failed (connection, TLS, timeout, cancellation)
    Transport { message: String },

    /// The response body could not be read in full
    ReadBody { message: String },

    /// The response body is not valid JSON matching the expected envelope
    Parse { message: String },

    /// The API answered with a non-success HTTP status (raw-data path only)
    Status { code: u16 },

    /// A structured error returned by the remote service inside the payload
    Api(ErrorMessage),

    /// Client configuration errors (missing API key, bad endpoint URL)
    Config { message: String },
}

impl WhoisApiError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<N: Into<String>, M: Into<String>>(name: N, message: M) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a new transport error.
    pub fn transport<M: Into<String>>(message: M) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new body-read error.
    pub fn read_body<M: Into<String>>(message: M) -> Self {
        Self::ReadBody {
            message: message.into(),
        }
    }

    /// Create a new parse error.
    pub fn parse<M: Into<String>>(message: M) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new status-code error.
    pub fn status(code: u16) -> Self {
        Self::Status { code }
    }

    /// Create a new configuration error.
    pub fn config<M: Into<String>>(message: M) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// The structured vendor error, if this is an application-level failure.
    pub fn as_api_error(&self) -> Option<&ErrorMessage> {
        match self {
            Self::Api(message) => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for WhoisApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { name, message } => {
                write!(f, "invalid argument: \"{}\" {}", name, message)
            }
            Self::Transport { message } => {
                write!(f, "request failed: {}", message)
            }
            Self::ReadBody { message } => {
                write!(f, "cannot read response: {}", message)
            }
            Self::Parse { message } => {
                write!(f, "cannot parse response: {}", message)
            }
            Self::Status { code } => {
                write!(f, "API failed with status code: {}", code)
            }
            Self::Api(message) => message.fmt(f),
            Self::Config { message } => {
                write!(f, "configuration error: {}", message)
            }
        }
    }
}

impl std::error::Error for WhoisApiError {}

impl From<ErrorMessage> for WhoisApiError {
    fn from(message: ErrorMessage) -> Self {
        Self::Api(message)
    }
}

// Send failures are transport errors; body-read failures are mapped
// explicitly at the call site so the two stay distinguishable.
impl From<reqwest::Error> for WhoisApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(err.to_string())
    }
}

impl From<serde_json::Error> for WhoisApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message() {
        let err = WhoisApiError::invalid_argument("name", "cannot be empty");
        assert_eq!(err.to_string(), "invalid argument: \"name\" cannot be empty");
    }

    #[test]
    fn read_body_message() {
        let err = WhoisApiError::read_body("unexpected EOF");
        assert_eq!(err.to_string(), "cannot read response: unexpected EOF");
    }

    #[test]
    fn parse_message() {
        let err = WhoisApiError::parse("unexpected EOF");
        assert_eq!(err.to_string(), "cannot parse response: unexpected EOF");
    }

    #[test]
    fn status_message() {
        let err = WhoisApiError::status(500);
        assert_eq!(err.to_string(), "API failed with status code: 500");
    }

    #[test]
    fn api_error_message() {
        let err = WhoisApiError::from(ErrorMessage {
            error_code: "WHOIS_00".to_string(),
            message: "test error message".to_string(),
        });
        assert_eq!(err.to_string(), "API error: [WHOIS_00] test error message");
        assert_eq!(err.as_api_error().unwrap().error_code, "WHOIS_00");
    }

    #[test]
    fn serde_json_errors_become_parse_errors() {
        let decode_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let text = decode_err.to_string();
        let err = WhoisApiError::from(decode_err);
        assert_eq!(err.to_string(), format!("cannot parse response: {}", text));
    }
}
