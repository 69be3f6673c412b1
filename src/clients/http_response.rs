//! HTTP response types for the Printful API SDK.
//!
//! [`HttpResponse`] is the raw outcome of a single attempt: status code,
//! headers and the undecoded body. It is what the retry policy and the rate
//! limit tracker inspect before the dispatcher decodes the body.

use std::collections::HashMap;
use std::time::Duration;

/// A raw HTTP response from the Printful API.
///
/// Header names are stored lower-cased; a header may carry several values.
///
/// # Example
///
/// ```rust
/// use printful_api::clients::HttpResponse;
/// use std::collections::HashMap;
/// use std::time::Duration;
///
/// let mut headers = HashMap::new();
/// headers.insert("retry-after".to_string(), vec!["2".to_string()]);
///
/// let response = HttpResponse::new(429, headers, String::new());
/// assert!(response.is_too_many_requests());
/// assert_eq!(response.retry_after(), Some(Duration::from_secs(2)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers keyed by lower-cased name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    ///
    /// Header names are normalized to lower case.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, values)| (name.to_lowercase(), values))
            .collect();
        Self {
            code,
            headers,
            body,
        }
    }

    /// Converts a reqwest header map into the lower-cased multi-value form.
    #[must_use]
    pub fn parse_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Returns `true` for HTTP 429 (Too Many Requests).
    #[must_use]
    pub const fn is_too_many_requests(&self) -> bool {
        self.code == 429
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Retry-After` header as a delay.
    ///
    /// Only numeric, finite, non-negative values (seconds, possibly
    /// fractional) are accepted.
    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        self.header("retry-after")
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|seconds| seconds.is_finite() && *seconds >= 0.0)
            .and_then(|seconds| Duration::try_from_secs_f64(seconds).ok())
    }
}

impl AsRef<Self> for HttpResponse {
    fn as_ref(&self) -> &Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_header(code: u16, name: &str, value: &str) -> HttpResponse {
        let mut headers = HashMap::new();
        headers.insert(name.to_string(), vec![value.to_string()]);
        HttpResponse::new(code, headers, String::new())
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = with_header(200, "X-RateLimit-Remaining", "119");
        assert_eq!(response.header("x-ratelimit-remaining"), Some("119"));
        assert_eq!(response.header("X-RATELIMIT-REMAINING"), Some("119"));
        assert_eq!(response.header("x-ratelimit-limit"), None);
    }

    #[test]
    fn test_retry_after_parsing() {
        let response = with_header(429, "retry-after", "2.5");
        assert_eq!(response.retry_after(), Some(Duration::from_millis(2500)));

        let response = with_header(429, "retry-after", "0");
        assert_eq!(response.retry_after(), Some(Duration::ZERO));
    }

    #[test]
    fn test_retry_after_rejects_non_numeric_and_negative() {
        assert_eq!(with_header(429, "retry-after", "soon").retry_after(), None);
        assert_eq!(with_header(429, "retry-after", "-1").retry_after(), None);
        assert_eq!(with_header(429, "retry-after", "NaN").retry_after(), None);
        assert_eq!(with_header(429, "retry-after", "1e30").retry_after(), None);
        assert_eq!(
            HttpResponse::new(429, HashMap::new(), String::new()).retry_after(),
            None
        );
    }
}
