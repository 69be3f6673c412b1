//! Configuration types for the Printful API SDK.
//!
//! This module provides the configuration types used to initialize the
//! client:
//!
//! - [`PrintfulConfig`]: The configuration struct holding all SDK settings
//! - [`PrintfulConfigBuilder`]: A builder for constructing [`PrintfulConfig`] instances
//! - [`ApiKey`]: A validated API token newtype with masked debug output
//! - [`BaseUrl`]: A validated base URL for API requests
//!
//! # Example
//!
//! ```rust
//! use printful_api::{PrintfulConfig, ApiKey};
//! use std::time::Duration;
//!
//! let config = PrintfulConfig::builder()
//!     .api_key(ApiKey::new("my-api-token").unwrap())
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.printful.com");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl};

use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue};

use crate::clients::RateLimitOptions;
use crate::error::ConfigError;

/// Configuration for the Printful API SDK.
///
/// # Thread Safety
///
/// `PrintfulConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use printful_api::{PrintfulConfig, ApiKey, BaseUrl};
///
/// let config = PrintfulConfig::builder()
///     .api_key(ApiKey::new("token").unwrap())
///     .base_url(BaseUrl::new("http://localhost:8080").unwrap())
///     .default_header("X-PF-Store-Id", "12345")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.default_headers().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct PrintfulConfig {
    api_key: ApiKey,
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    default_headers: Vec<(HeaderName, HeaderValue)>,
    rate_limit: RateLimitOptions,
}

impl PrintfulConfig {
    /// Creates a new builder for constructing a `PrintfulConfig`.
    #[must_use]
    pub fn builder() -> PrintfulConfigBuilder {
        PrintfulConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the base URL every endpoint path is appended to.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-attempt request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the extra headers sent with every request.
    #[must_use]
    pub fn default_headers(&self) -> &[(HeaderName, HeaderValue)] {
        &self.default_headers
    }

    /// Returns the rate limit tracking options.
    #[must_use]
    pub const fn rate_limit(&self) -> &RateLimitOptions {
        &self.rate_limit
    }
}

// Verify PrintfulConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PrintfulConfig>();
};

/// Builder for constructing [`PrintfulConfig`] instances.
///
/// `api_key` is required. All other fields have defaults.
///
/// # Defaults
///
/// - `base_url`: `https://api.printful.com`
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (no per-attempt timeout)
/// - `default_headers`: empty
/// - `rate_limit`: [`RateLimitOptions::default`]
#[derive(Debug, Default)]
pub struct PrintfulConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    default_headers: Vec<(String, String)>,
    rate_limit: Option<RateLimitOptions>,
}

impl PrintfulConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets a timeout applied to each individual attempt.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Adds a header sent with every request.
    ///
    /// The name and value are validated in [`build`](Self::build).
    #[must_use]
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Sets the rate limit tracking options.
    #[must_use]
    pub fn rate_limit(mut self, options: RateLimitOptions) -> Self {
        self.rate_limit = Some(options);
        self
    }

    /// Builds the [`PrintfulConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set,
    /// or [`ConfigError::InvalidHeader`] if a default header is malformed.
    pub fn build(self) -> Result<PrintfulConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let default_headers = self
            .default_headers
            .into_iter()
            .map(|(name, value)| {
                let header_name = HeaderName::from_bytes(name.as_bytes());
                let header_value = HeaderValue::from_str(&value);
                match (header_name, header_value) {
                    (Ok(n), Ok(v)) => Ok((n, v)),
                    _ => Err(ConfigError::InvalidHeader { name }),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PrintfulConfig {
            api_key,
            base_url: self.base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
            default_headers,
            rate_limit: self.rate_limit.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_api_key() {
        let result = PrintfulConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = PrintfulConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), BaseUrl::DEFAULT);
        assert!(config.user_agent_prefix().is_none());
        assert!(config.timeout().is_none());
        assert!(config.default_headers().is_empty());
        assert_eq!(config.rate_limit().header_remaining, "x-ratelimit-remaining");
        assert_eq!(config.rate_limit().retry_policy.retries, 5);
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = PrintfulConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .base_url(BaseUrl::new("http://localhost:3000").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .timeout(Duration::from_secs(10))
            .default_header("X-PF-Store-Id", "42")
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "http://localhost:3000");
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
        let (name, value) = &config.default_headers()[0];
        assert_eq!(name.as_str(), "x-pf-store-id");
        assert_eq!(value.to_str().unwrap(), "42");
    }

    #[test]
    fn test_builder_rejects_invalid_header_name() {
        let result = PrintfulConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .default_header("Bad Header", "value")
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidHeader { name }) if name == "Bad Header"
        ));
    }

    #[test]
    fn test_config_is_clone_and_debug() {
        let config = PrintfulConfig::builder()
            .api_key(ApiKey::new("secret-token").unwrap())
            .build()
            .unwrap();

        let cloned = config.clone();
        assert_eq!(cloned.api_key(), config.api_key());

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("PrintfulConfig"));
        assert!(!debug_str.contains("secret-token"));
    }
}
