//! Failure types of the request execution layer.
//!
//! [`HttpError`] describes everything that can go wrong between building a
//! request and decoding its response. It is used with `?` inside the
//! execution layer only: the dispatcher converts it into a synthetic
//! [`ErrorResponse`](crate::clients::ErrorResponse) at its single recovery
//! boundary, so callers of endpoint functions never see it as an `Err`.
//!
//! # Example
//!
//! ```rust
//! use printful_api::clients::{ErrorResponse, HttpError};
//!
//! let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
//! let error = HttpError::Decode { status: 200, source };
//!
//! let envelope = ErrorResponse::synthetic(&error);
//! assert_eq!(envelope.code, 444);
//! assert_eq!(envelope.error_name(), Some("DecodeError"));
//! ```

use std::error::Error as _;

use thiserror::Error;

/// Unified error type for all failures of a single dispatched call.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request could not be sent or its body could not be read.
    ///
    /// Displays as the underlying transport error.
    #[error(transparent)]
    Network(#[from] reqwest::Error),

    /// The response body is not valid JSON, or fits neither envelope shape.
    #[error("Failed to decode response body (status {status}): {source}")]
    Decode {
        /// HTTP status code of the response whose body failed to decode.
        status: u16,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Query parameters or the request body could not be serialized.
    #[error("Failed to encode request {part}: {source}")]
    Encode {
        /// Which part of the request failed ("query" or "body").
        part: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl HttpError {
    /// Returns a short, stable name for the error kind.
    ///
    /// Used as the `name` field of synthetic error envelopes.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Network(_) => "NetworkError",
            Self::Decode { .. } => "DecodeError",
            Self::Encode { .. } => "EncodeError",
        }
    }

    /// Renders the chain of underlying causes, outermost first.
    ///
    /// Each line holds the message of one error in the `source()` chain.
    #[must_use]
    pub fn stack(&self) -> String {
        let mut lines = vec![format!("{}: {}", self.name(), self)];
        let mut current = self.source();
        while let Some(cause) = current {
            lines.push(format!("caused by: {cause}"));
            current = cause.source();
        }
        lines.join("\n")
    }
}
