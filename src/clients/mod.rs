//! Request execution layer for the Printful API.
//!
//! Every endpoint of the SDK sends its requests through this module. It
//! handles request construction, rate limit tracking, retries and decoding
//! of the response envelope.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The dispatcher. Its [`request`](HttpClient::request)
//!   method always resolves to an [`ApiResponse`]
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: The raw outcome of a single attempt
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`QueryParams`]: Ordered query parameters
//! - [`RateLimiter`]: Per-client quota tracking and admission gate
//! - [`RetryPolicy`] and [`retry`]: The retry engine
//! - [`ApiResponse`], [`SuccessResponse`], [`ErrorResponse`]: Response envelopes
//!
//! # Example
//!
//! ```rust,no_run
//! use printful_api::{ApiKey, PrintfulConfig};
//! use printful_api::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PrintfulConfig::builder()
//!     .api_key(ApiKey::new("my-api-token")?)
//!     .build()?;
//! let client = HttpClient::new(&config)?;
//!
//! let response = client
//!     .request::<serde_json::Value>(HttpRequest::builder(HttpMethod::Get, "/store"))
//!     .await;
//! println!("status {}", response.code());
//! # Ok(())
//! # }
//! ```
//!
//! # Retry Behavior
//!
//! By default, HTTP 429 responses are retried up to 5 times, waiting for the
//! number of seconds given in the `Retry-After` header. A 429 without a
//! numeric `Retry-After` is returned as-is. Other status codes are never
//! retried.
//!
//! # Rate Limits
//!
//! The `x-ratelimit-limit`, `x-ratelimit-remaining` and `x-ratelimit-reset`
//! headers of every final response are recorded. When the remaining quota is
//! known to be zero, the next call waits until the reset time before it is
//! sent. Header names are configurable through [`RateLimitOptions`].

mod envelope;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod query;
mod rate_limit;
mod retry;

pub use envelope::{ApiResponse, ErrorResponse, Paging, SuccessResponse, SYNTHETIC_ERROR_CODE};
pub use errors::HttpError;
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use query::{with_query_string, QueryParams};
pub use rate_limit::{
    RateLimitOptions, RateLimitState, RateLimiter, DEFAULT_LIMIT_HEADER,
    DEFAULT_RATE_LIMIT_RETRIES, DEFAULT_REMAINING_HEADER, DEFAULT_RESET_HEADER,
};
pub use retry::{retry, RetryDecision, RetryPolicy};
