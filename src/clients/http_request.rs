//! HTTP request types for the Printful API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the Printful API.

use std::fmt;

use serde::Serialize;

use crate::clients::errors::HttpError;
use crate::clients::query::{with_query_string, QueryParams};

/// HTTP methods supported by the Printful API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the upper-case method name used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// A fully resolved request: method, path, query parameters and optional body.
///
/// The path is relative to the configured base URL and should start with `/`.
///
/// # Example
///
/// ```rust
/// use printful_api::clients::{HttpRequest, HttpMethod};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Post, "/orders")
///     .query_param("confirm", true)
///     .json(&json!({"recipient": {"name": "John"}}))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path_and_query(), "/orders?confirm=true");
/// assert!(request.body.is_some());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the base URL) for this request.
    pub path: String,
    /// Query parameters appended to the path.
    pub query: QueryParams,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Returns the path with the rendered query string appended.
    #[must_use]
    pub fn path_and_query(&self) -> String {
        with_query_string(&self.path, &self.query)
    }
}

/// Builder for constructing [`HttpRequest`] instances.
///
/// Serialization failures of query parameters or the body are recorded and
/// reported by [`build`](Self::build), so the builder chain itself stays
/// infallible.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    inner: Result<HttpRequest, HttpError>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            inner: Ok(HttpRequest {
                http_method: method,
                path: path.into(),
                query: QueryParams::new(),
                body: None,
            }),
        }
    }

    /// Appends query parameters from a serializable parameter struct.
    ///
    /// See [`QueryParams::from_serialize`] for the conversion rules.
    #[must_use]
    pub fn query<Q: Serialize + ?Sized>(mut self, query: &Q) -> Self {
        if let Ok(request) = &mut self.inner {
            match QueryParams::from_serialize(query) {
                Ok(params) => request.query.extend(params),
                Err(source) => {
                    self.inner = Err(HttpError::Encode {
                        part: "query",
                        source,
                    });
                }
            }
        }
        self
    }

    /// Appends already-built query parameters.
    #[must_use]
    pub fn query_params(mut self, params: QueryParams) -> Self {
        if let Ok(request) = &mut self.inner {
            request.query.extend(params);
        }
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        if let Ok(request) = &mut self.inner {
            request.query.push(key, value);
        }
        self
    }

    /// Sets the request body, serialized as JSON.
    #[must_use]
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        if let Ok(request) = &mut self.inner {
            match serde_json::to_value(body) {
                Ok(value) => request.body = Some(value),
                Err(source) => {
                    self.inner = Err(HttpError::Encode {
                        part: "body",
                        source,
                    });
                }
            }
        }
        self
    }

    /// Builds the [`HttpRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Encode`] if the query parameters or the body
    /// failed to serialize.
    pub fn build(self) -> Result<HttpRequest, HttpError> {
        self.inner
    }
}

impl From<HttpRequest> for HttpRequestBuilder {
    fn from(request: HttpRequest) -> Self {
        Self { inner: Ok(request) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_http_method_converts_to_reqwest() {
        assert_eq!(reqwest::Method::from(HttpMethod::Delete), reqwest::Method::DELETE);
        assert_eq!(reqwest::Method::from(HttpMethod::Put), reqwest::Method::PUT);
    }

    #[test]
    fn test_builder_creates_bare_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "/store").build().unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "/store");
        assert!(request.query.is_empty());
        assert!(request.body.is_none());
        assert_eq!(request.path_and_query(), "/store");
    }

    #[test]
    fn test_builder_allows_post_without_body() {
        let request = HttpRequest::builder(HttpMethod::Post, "/orders/1/confirm")
            .build()
            .unwrap();
        assert!(request.body.is_none());
    }

    #[test]
    fn test_builder_with_query_struct_and_body() {
        #[derive(Serialize)]
        struct Query {
            confirm: Option<bool>,
            update_existing: Option<bool>,
        }

        let request = HttpRequest::builder(HttpMethod::Put, "/orders/@ext-1")
            .query(&Query {
                confirm: Some(true),
                update_existing: None,
            })
            .json(&json!({"shipping": "STANDARD"}))
            .build()
            .unwrap();

        assert_eq!(request.path_and_query(), "/orders/@ext-1?confirm=true");
        assert_eq!(request.body, Some(json!({"shipping": "STANDARD"})));
    }

    #[test]
    fn test_builder_records_query_encoding_failure() {
        let result = HttpRequest::builder(HttpMethod::Get, "/orders")
            .query(&vec![1, 2, 3])
            .query_param("limit", 1)
            .build();

        assert!(matches!(result, Err(HttpError::Encode { part: "query", .. })));
    }

    #[test]
    fn test_builder_records_body_encoding_failure() {
        // Maps with non-string keys cannot be represented as JSON objects.
        let mut body = BTreeMap::new();
        body.insert(vec![1u8], "value");

        let result = HttpRequest::builder(HttpMethod::Post, "/webhooks")
            .json(&body)
            .build();

        assert!(matches!(result, Err(HttpError::Encode { part: "body", .. })));
    }
}
