//! Unified Error Type System
//!
//! Centralized error types for the entire application, plus the
//! classifier that turns heterogeneous failures (HTTP status, vendor
//! error body, transport exception) into a single short user-facing
//! sentence.
//!
//! ## Design Principles
//!
//! - Single unified error type (FramedocError) for the entire application
//! - Category-based classification in strict priority order
//! - No panic/unwrap - all errors are recoverable
//! - Nothing reaches the user unformatted

use thiserror::Error;

use crate::constants::classify::MAX_USER_MESSAGE_CHARS;

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum FramedocError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Provider Errors
    // -------------------------------------------------------------------------
    /// Vendor responded with a non-2xx status. Carries the raw body so the
    /// classifier can inspect vendor error payloads.
    #[error("{provider} API error ({status}): {body}")]
    Api {
        provider: String,
        status: u16,
        body: String,
    },

    /// Request never produced a vendor response (DNS, TLS, timeout, refused).
    #[error("Network error: {0}")]
    Network(String),

    /// Vendor responded 2xx but the envelope was missing the expected fields.
    #[error("Unexpected {provider} response: {message}")]
    Envelope { provider: String, message: String },

    // -------------------------------------------------------------------------
    // Precondition Errors (reported before any network call)
    // -------------------------------------------------------------------------
    #[error("No screens selected")]
    NoSelection,

    #[error("No API key configured")]
    MissingApiKey,

    /// A second action was requested while one is still in flight.
    #[error("An action is already running")]
    Busy,

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    #[error("Document error: {0}")]
    Document(String),
}

pub type Result<T> = std::result::Result<T, FramedocError>;

impl FramedocError {
    /// Wrap a reqwest transport failure. Status-bearing responses go through
    /// `Api` instead; this is for requests that never completed.
    pub fn network(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

// =============================================================================
// Error Categories
// =============================================================================

/// User-facing error categories, checked in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Unauthorized / invalid API key
    InvalidKey,
    /// Vendor rate limiting
    RateLimit,
    /// Account out of credit or over quota
    Quota,
    /// Request rejected as malformed
    BadRequest,
    /// Upstream overloaded or unavailable
    Overloaded,
    /// Connectivity failure
    Network,
    /// Nothing selected before starting an action
    NoSelection,
    /// Vendor response could not be parsed
    ParseFailure,
    /// Anything else
    Unknown,
}

// =============================================================================
// Error Classifier
// =============================================================================

/// Maps raw errors to one short user-facing sentence.
pub struct ErrorClassifier;

impl ErrorClassifier {
    /// Classify an error into a category, in priority order.
    pub fn classify(err: &FramedocError) -> ErrorCategory {
        match err {
            FramedocError::Api { status, body, .. } => Self::classify_http(*status, body),
            FramedocError::Network(_) => ErrorCategory::Network,
            FramedocError::NoSelection => ErrorCategory::NoSelection,
            FramedocError::MissingApiKey => ErrorCategory::InvalidKey,
            FramedocError::Envelope { .. } | FramedocError::Json(_) => ErrorCategory::ParseFailure,
            _ => ErrorCategory::Unknown,
        }
    }

    /// Classify an HTTP status plus vendor error body.
    pub fn classify_http(status: u16, body: &str) -> ErrorCategory {
        let lower = body.to_lowercase();

        match status {
            401 | 403 => ErrorCategory::InvalidKey,
            402 => ErrorCategory::Quota,
            429 => {
                // OpenAI reports exhausted credit as 429 insufficient_quota
                if lower.contains("quota") || lower.contains("billing") || lower.contains("credit")
                {
                    ErrorCategory::Quota
                } else {
                    ErrorCategory::RateLimit
                }
            }
            400 => ErrorCategory::BadRequest,
            500 | 502 | 503 | 529 => ErrorCategory::Overloaded,
            _ => Self::classify_body(&lower),
        }
    }

    /// Substring fallback for errors that carry no usable status code.
    fn classify_body(lower: &str) -> ErrorCategory {
        if lower.contains("unauthorized")
            || lower.contains("invalid api key")
            || lower.contains("invalid x-api-key")
            || lower.contains("authentication")
        {
            return ErrorCategory::InvalidKey;
        }
        if lower.contains("rate limit") || lower.contains("too many requests") {
            return ErrorCategory::RateLimit;
        }
        if lower.contains("quota") || lower.contains("insufficient") || lower.contains("credit") {
            return ErrorCategory::Quota;
        }
        if lower.contains("invalid request") || lower.contains("malformed") {
            return ErrorCategory::BadRequest;
        }
        if lower.contains("overloaded") || lower.contains("unavailable") {
            return ErrorCategory::Overloaded;
        }
        if lower.contains("connection") || lower.contains("timed out") || lower.contains("dns") {
            return ErrorCategory::Network;
        }
        ErrorCategory::Unknown
    }

    /// Produce the single user-facing sentence for an error.
    ///
    /// Unrecognized errors fall through to an `Error: ` prefix, truncated
    /// at [`MAX_USER_MESSAGE_CHARS`] characters with an ellipsis.
    pub fn user_message(err: &FramedocError) -> String {
        match Self::classify(err) {
            ErrorCategory::InvalidKey => {
                "Invalid API key. Check your key and try again.".to_string()
            }
            ErrorCategory::RateLimit => {
                "Rate limit reached. Wait a moment and try again.".to_string()
            }
            ErrorCategory::Quota => "Your API account is out of credit or over quota.".to_string(),
            ErrorCategory::BadRequest => {
                "The provider rejected the request as malformed.".to_string()
            }
            ErrorCategory::Overloaded => {
                "The provider is overloaded or unavailable. Try again later.".to_string()
            }
            ErrorCategory::Network => {
                "Could not reach the provider. Check your network connection.".to_string()
            }
            ErrorCategory::NoSelection => "Select at least one screen first.".to_string(),
            ErrorCategory::ParseFailure => {
                "The provider returned a response that could not be parsed.".to_string()
            }
            ErrorCategory::Unknown => Self::generic_message(&err.to_string()),
        }
    }

    fn generic_message(detail: &str) -> String {
        if detail.chars().count() > MAX_USER_MESSAGE_CHARS {
            let truncated: String = detail.chars().take(MAX_USER_MESSAGE_CHARS).collect();
            format!("Error: {truncated}…")
        } else {
            format!("Error: {detail}")
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16, body: &str) -> FramedocError {
        FramedocError::Api {
            provider: "anthropic".to_string(),
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_401_maps_to_invalid_key() {
        let msg = ErrorClassifier::user_message(&api(401, "authentication_error"));
        assert_eq!(msg, "Invalid API key. Check your key and try again.");
    }

    #[test]
    fn test_429_maps_to_rate_limit() {
        let msg = ErrorClassifier::user_message(&api(429, "rate_limit_error"));
        assert_eq!(msg, "Rate limit reached. Wait a moment and try again.");
    }

    #[test]
    fn test_429_with_quota_body_maps_to_quota() {
        let err = api(429, r#"{"error":{"code":"insufficient_quota"}}"#);
        assert_eq!(ErrorClassifier::classify(&err), ErrorCategory::Quota);
    }

    #[test]
    fn test_server_errors_map_to_overloaded() {
        for status in [500, 502, 503, 529] {
            let msg = ErrorClassifier::user_message(&api(status, "overloaded"));
            assert_eq!(
                msg, "The provider is overloaded or unavailable. Try again later.",
                "status {status}"
            );
        }
    }

    #[test]
    fn test_400_maps_to_bad_request() {
        let msg = ErrorClassifier::user_message(&api(400, "invalid_request_error"));
        assert_eq!(msg, "The provider rejected the request as malformed.");
    }

    #[test]
    fn test_network_error() {
        let err = FramedocError::Network("connection refused".to_string());
        let msg = ErrorClassifier::user_message(&err);
        assert_eq!(
            msg,
            "Could not reach the provider. Check your network connection."
        );
    }

    #[test]
    fn test_no_selection() {
        let msg = ErrorClassifier::user_message(&FramedocError::NoSelection);
        assert_eq!(msg, "Select at least one screen first.");
    }

    #[test]
    fn test_envelope_maps_to_parse_failure() {
        let err = FramedocError::Envelope {
            provider: "gemini".to_string(),
            message: "no candidates".to_string(),
        };
        let msg = ErrorClassifier::user_message(&err);
        assert_eq!(
            msg,
            "The provider returned a response that could not be parsed."
        );
    }

    #[test]
    fn test_short_unknown_error_passes_through() {
        let err = FramedocError::Document("frame vanished mid-action".to_string());
        let msg = ErrorClassifier::user_message(&err);
        assert_eq!(msg, "Error: Document error: frame vanished mid-action");
    }

    #[test]
    fn test_long_unknown_error_truncated_with_ellipsis() {
        let err = FramedocError::Document("x".repeat(500));
        let msg = ErrorClassifier::user_message(&err);
        assert!(msg.starts_with("Error: "));
        assert!(msg.ends_with('…'));
        // "Error: " prefix + capped detail + ellipsis
        assert_eq!(msg.chars().count(), 7 + MAX_USER_MESSAGE_CHARS + 1);
    }

    #[test]
    fn test_busy_is_unknown_category_with_readable_message() {
        let msg = ErrorClassifier::user_message(&FramedocError::Busy);
        assert_eq!(msg, "Error: An action is already running");
    }
}
