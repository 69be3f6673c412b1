//! # Printful API Rust SDK
//!
//! A Rust SDK for the Printful REST API, providing type-safe configuration,
//! rate limit aware request dispatch and typed endpoint groups.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`PrintfulConfig`] and [`PrintfulConfigBuilder`]
//! - Validated newtypes for the API key and base URL
//! - An async dispatcher that never fails: every call resolves to an
//!   [`ApiResponse`], either the success or the error envelope
//! - Rate limit tracking from `x-ratelimit-*` headers with an admission gate
//! - Automatic retries of HTTP 429 responses honoring `Retry-After`
//! - `get`, `list`, `create`, `update` and `del` endpoint primitives
//! - Endpoint groups for orders, webhooks, store information, countries
//!   and tax rates
//!
//! ## Quick Start
//!
//! ```rust
//! use printful_api::{ApiKey, PrintfulConfig};
//! use std::time::Duration;
//!
//! let config = PrintfulConfig::builder()
//!     .api_key(ApiKey::new("your-api-token").unwrap())
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,no_run
//! use printful_api::{ApiKey, ApiResponse, PrintfulClient, PrintfulConfig};
//! use printful_api::rest::resources::ListOrdersParams;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PrintfulConfig::builder()
//!     .api_key(ApiKey::new("your-api-token")?)
//!     .build()?;
//! let client = PrintfulClient::new(&config)?;
//!
//! let params = ListOrdersParams {
//!     offset: Some(10),
//!     limit: Some(20),
//!     ..Default::default()
//! };
//!
//! // GET /orders?offset=10&limit=20
//! match client.orders().list(params).await {
//!     ApiResponse::Success(orders) => {
//!         println!("{} orders in total", orders.paging.map_or(0, |p| p.total));
//!     }
//!     ApiResponse::Error(error) if error.is_synthetic() => {
//!         eprintln!("request failed locally: {}", error.result);
//!     }
//!     ApiResponse::Error(error) => {
//!         eprintln!("Printful returned {}: {}", error.code, error.result);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Rate limit state belongs to a client instance
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Single recovery boundary**: Failures are converted into envelopes in
//!   one place, [`HttpClient::request`]
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use client::PrintfulClient;
pub use config::{ApiKey, BaseUrl, PrintfulConfig, PrintfulConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiResponse, ErrorResponse, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, Paging, RateLimitOptions, RetryPolicy, SuccessResponse,
};
