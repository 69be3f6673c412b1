//! Error types for the Printful API SDK.
//!
//! This module contains the error type used throughout the SDK for
//! configuration and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Errors raised while *executing* requests never reach
//! the caller as `Err`: they are folded into the error envelope, see
//! [`ApiResponse`](crate::clients::ApiResponse).
//!
//! # Example
//!
//! ```rust
//! use printful_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Printful API token.")]
    EmptyApiKey,

    /// API key contains characters that cannot be sent in an HTTP header.
    #[error("API key contains invalid characters. Only visible ASCII characters are allowed.")]
    InvalidApiKey,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.printful.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A default header has an invalid name or value.
    #[error("Invalid default header '{name}'.")]
    InvalidHeader {
        /// The header name that was rejected.
        name: String,
    },

    /// The underlying HTTP client could not be created.
    #[error("Failed to create HTTP client: {reason}")]
    HttpClient {
        /// Description of the failure reported by the HTTP stack.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_error_message() {
        let error = ConfigError::EmptyApiKey;
        let message = error.to_string();
        assert!(message.contains("API key cannot be empty"));
        assert!(message.contains("Printful API token"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "api.printful.com".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("api.printful.com"));
        assert!(message.contains("with scheme"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "api_key" };
        let message = error.to_string();
        assert!(message.contains("api_key"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_invalid_header_names_the_header() {
        let error = ConfigError::InvalidHeader {
            name: "X-Bad Header".to_string(),
        };
        assert!(error.to_string().contains("X-Bad Header"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyApiKey;
        let _: &dyn std::error::Error = &error;
    }
}
