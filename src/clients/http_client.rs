//! Request dispatcher for the Printful API.
//!
//! This module provides the [`HttpClient`] type, which sends requests built
//! with [`HttpRequest::builder`] through the rate limit gate and the retry
//! engine, and decodes the response body into an [`ApiResponse`].

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::de::DeserializeOwned;

use crate::clients::envelope::{ApiResponse, ErrorResponse};
use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpRequest, HttpRequestBuilder};
use crate::clients::http_response::HttpResponse;
use crate::clients::rate_limit::RateLimiter;
use crate::config::PrintfulConfig;
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Printful API.
///
/// The client handles:
/// - URL construction from the configured base URL, path and query string
/// - Default headers including User-Agent and the bearer token
/// - JSON request bodies with `Content-Type: application/json`
/// - Rate limit tracking and retries of HTTP 429 responses
/// - Decoding of the response envelope
///
/// [`request`](Self::request) never fails: every failure below it becomes a
/// synthetic [`ErrorResponse`] with code 444.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and cheap to clone. Clones share the
/// connection pool and the rate limit state.
///
/// # Example
///
/// ```rust,no_run
/// use printful_api::{ApiKey, PrintfulConfig};
/// use printful_api::clients::{ApiResponse, HttpClient, HttpMethod, HttpRequest};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = PrintfulConfig::builder()
///     .api_key(ApiKey::new("my-api-token")?)
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/orders")
///     .query_param("offset", 10)
///     .query_param("limit", 20);
///
/// match client.request::<serde_json::Value>(request).await {
///     ApiResponse::Success(orders) => println!("{}", orders.result),
///     ApiResponse::Error(error) => eprintln!("{}: {}", error.code, error.result),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL without trailing slash (e.g., `https://api.printful.com`).
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HeaderMap,
    /// Quota tracker wrapped around every call.
    rate_limiter: RateLimiter,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHeader`] if the user agent prefix cannot
    /// be sent as a header, or [`ConfigError::HttpClient`] if the underlying
    /// reqwest client cannot be created.
    pub fn new(config: &PrintfulConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Printful API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&user_agent).map_err(|_| ConfigError::InvalidHeader {
                name: USER_AGENT.as_str().to_string(),
            })?,
        );
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut authorization = HeaderValue::from_str(&config.api_key().bearer())
            .map_err(|_| ConfigError::InvalidApiKey)?;
        authorization.set_sensitive(true);
        default_headers.insert(AUTHORIZATION, authorization);

        for (name, value) in config.default_headers() {
            default_headers.insert(name.clone(), value.clone());
        }

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ConfigError::HttpClient {
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url: config.base_url().as_ref().to_string(),
            default_headers,
            rate_limiter: RateLimiter::new(config.rate_limit().clone()),
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Returns the rate limit tracker shared by all calls of this client.
    #[must_use]
    pub const fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }

    /// Sends a request and decodes the response envelope.
    ///
    /// The call waits for the rate limit gate, retries HTTP 429 responses
    /// per the configured policy, records the quota headers of the final
    /// response and decodes its body as JSON. Server error bodies are
    /// returned as [`ApiResponse::Error`] unmodified.
    ///
    /// Encoding failures, network failures and bodies that are not a valid
    /// envelope yield a synthetic error envelope instead.
    pub async fn request<T: DeserializeOwned>(
        &self,
        request: impl Into<HttpRequestBuilder>,
    ) -> ApiResponse<T> {
        recover(self.try_request(request.into()).await)
    }

    async fn try_request<T: DeserializeOwned>(
        &self,
        request: HttpRequestBuilder,
    ) -> Result<ApiResponse<T>, HttpError> {
        let request = request.build()?;
        let url = format!("{}{}", self.base_url, request.path_and_query());
        tracing::debug!("Sending {} request to {}", request.http_method, url);

        let Attempt { mut response, body } = {
            let request = &request;
            let url = url.as_str();
            self.rate_limiter
                .execute(move || self.send_once(request, url))
                .await?
        };

        // The quota is already recorded, even if the body read fails.
        response.body = body.text().await?;
        tracing::debug!("Received status {} from {}", response.code, url);

        serde_json::from_str(&response.body).map_err(|source| HttpError::Decode {
            status: response.code,
            source,
        })
    }

    /// Performs a single attempt, stopping once the headers have arrived.
    async fn send_once(&self, request: &HttpRequest, url: &str) -> Result<Attempt, HttpError> {
        let mut builder = self
            .client
            .request(request.http_method.into(), url)
            .headers(self.default_headers.clone());

        if let Some(body) = &request.body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(body.to_string());
        }

        let res = builder.send().await?;
        let code = res.status().as_u16();
        let headers = HttpResponse::parse_headers(res.headers());

        Ok(Attempt {
            response: HttpResponse::new(code, headers, String::new()),
            body: res,
        })
    }
}

/// An attempt whose status and headers are known but whose body is unread.
struct Attempt {
    response: HttpResponse,
    body: reqwest::Response,
}

impl AsRef<HttpResponse> for Attempt {
    fn as_ref(&self) -> &HttpResponse {
        &self.response
    }
}

/// Converts a failed call into the synthetic error envelope.
fn recover<T>(result: Result<ApiResponse<T>, HttpError>) -> ApiResponse<T> {
    result.unwrap_or_else(|error| {
        tracing::warn!("Printful request failed: {}", error);
        ErrorResponse::synthetic(&error).into()
    })
}
