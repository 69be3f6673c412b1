//! Response envelopes.
//!
//! Every dispatched call resolves to an [`ApiResponse`]: either the
//! success shape `{code, result, paging?}` or the error shape
//! `{code, result, error}`. Error envelopes come from the server, or are
//! synthesized locally with code [`SYNTHETIC_ERROR_CODE`] when no usable
//! server response exists.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::errors::HttpError;

/// Status code of locally synthesized error envelopes.
pub const SYNTHETIC_ERROR_CODE: u16 = 444;

/// Paging information returned by list endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    /// Total number of items.
    pub total: u64,
    /// Offset of the first returned item.
    pub offset: u64,
    /// Maximum number of items per page.
    pub limit: u64,
}

/// A successful response envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SuccessResponse<T> {
    /// Status code reported in the body.
    pub code: u16,
    /// The decoded payload.
    pub result: T,
    /// Paging information, present on list endpoints only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
}

/// An error response envelope.
///
/// Server errors are passed through unmodified. Synthetic errors (see
/// [`ErrorResponse::synthetic`]) carry `name`, `message` and `stack` in
/// `error`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Status code reported in the body, or 444 for synthetic errors.
    pub code: u16,
    /// Human-readable error message.
    pub result: String,
    /// Error details.
    pub error: Map<String, Value>,
}

impl ErrorResponse {
    /// Builds the synthetic envelope for a failure of the execution layer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use printful_api::clients::{ErrorResponse, HttpError};
    ///
    /// let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
    /// let error = HttpError::Decode { status: 502, source };
    /// let envelope = ErrorResponse::synthetic(&error);
    ///
    /// assert!(envelope.is_synthetic());
    /// assert_eq!(envelope.result, error.to_string());
    /// assert_eq!(envelope.error_message(), Some(envelope.result.as_str()));
    /// ```
    #[must_use]
    pub fn synthetic(error: &HttpError) -> Self {
        let message = error.to_string();

        let mut details = Map::new();
        details.insert("name".to_string(), Value::from(error.name()));
        details.insert("message".to_string(), Value::from(message.clone()));
        details.insert("stack".to_string(), Value::from(error.stack()));

        Self {
            code: SYNTHETIC_ERROR_CODE,
            result: message,
            error: details,
        }
    }

    /// Returns `true` if this envelope was produced locally.
    #[must_use]
    pub fn is_synthetic(&self) -> bool {
        self.code == SYNTHETIC_ERROR_CODE && self.error.contains_key("stack")
    }

    /// Returns `error.name`, if present.
    #[must_use]
    pub fn error_name(&self) -> Option<&str> {
        self.detail("name")
    }

    /// Returns `error.message`, if present.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.detail("message")
    }

    /// Returns `error.reason`, if present. Printful sets it on server errors.
    #[must_use]
    pub fn error_reason(&self) -> Option<&str> {
        self.detail("reason")
    }

    fn detail(&self, key: &str) -> Option<&str> {
        self.error.get(key).and_then(Value::as_str)
    }
}

/// The result of every dispatched call.
///
/// The error shape is tried first when decoding, so a body carrying an
/// `error` object is never mistaken for a success.
///
/// # Example
///
/// ```rust
/// use printful_api::clients::ApiResponse;
/// use serde_json::Value;
///
/// let ok: ApiResponse<Value> =
///     serde_json::from_str(r#"{"code":200,"result":{"id":1}}"#).unwrap();
/// assert!(ok.is_success());
///
/// let err: ApiResponse<Value> = serde_json::from_str(
///     r#"{"code":404,"result":"Not found","error":{"reason":"NotFound","message":"Not found"}}"#,
/// )
/// .unwrap();
/// assert_eq!(err.code(), 404);
/// assert!(err.into_result().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    /// The error shape.
    Error(ErrorResponse),
    /// The success shape.
    Success(SuccessResponse<T>),
}

impl<T> ApiResponse<T> {
    /// Returns the `code` of either shape.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::Success(success) => success.code,
            Self::Error(error) => error.code,
        }
    }

    /// Returns `true` for the success shape.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the success envelope, if any.
    #[must_use]
    pub const fn success(&self) -> Option<&SuccessResponse<T>> {
        match self {
            Self::Success(success) => Some(success),
            Self::Error(_) => None,
        }
    }

    /// Returns the error envelope, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&ErrorResponse> {
        match self {
            Self::Success(_) => None,
            Self::Error(error) => Some(error),
        }
    }

    /// Converts into a `Result` for use with `?`.
    ///
    /// # Errors
    ///
    /// Returns the error envelope when the call did not succeed.
    pub fn into_result(self) -> Result<SuccessResponse<T>, ErrorResponse> {
        match self {
            Self::Success(success) => Ok(success),
            Self::Error(error) => Err(error),
        }
    }
}

impl<T> From<ErrorResponse> for ApiResponse<T> {
    fn from(error: ErrorResponse) -> Self {
        Self::Error(error)
    }
}
