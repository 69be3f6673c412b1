//! Rate limit tracking.
//!
//! Printful reports the state of the caller's request quota in three
//! response headers. [`RateLimiter`] records the latest values and uses them
//! as an admission gate: when the quota is known to be exhausted, the next
//! call waits until the window resets.
//!
//! The tracker is best-effort. Concurrent calls may observe stale values and
//! the last response to be recorded wins.

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::clients::http_response::HttpResponse;
use crate::clients::retry::{retry, RetryPolicy};

/// Default name of the header carrying the request limit of the window.
pub const DEFAULT_LIMIT_HEADER: &str = "x-ratelimit-limit";

/// Default name of the header carrying the requests left in the window.
pub const DEFAULT_REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// Default name of the header carrying the window reset time.
pub const DEFAULT_RESET_HEADER: &str = "x-ratelimit-reset";

/// Default retry budget for HTTP 429 responses.
pub const DEFAULT_RATE_LIMIT_RETRIES: u32 = 5;

/// Options for [`RateLimiter`].
///
/// # Example
///
/// ```rust
/// use printful_api::clients::{RateLimitOptions, RetryPolicy};
///
/// let options = RateLimitOptions {
///     retry_policy: RetryPolicy::on_too_many_requests(2),
///     ..RateLimitOptions::default()
/// };
/// assert_eq!(options.header_reset, "x-ratelimit-reset");
/// ```
#[derive(Clone, Debug)]
pub struct RateLimitOptions {
    /// Header holding the maximum number of requests in the window.
    pub header_limit: String,
    /// Header holding the number of requests left in the window.
    pub header_remaining: String,
    /// Header holding the reset time, either seconds from now or a date.
    pub header_reset: String,
    /// Retry policy wrapped around every call.
    pub retry_policy: RetryPolicy,
}

impl Default for RateLimitOptions {
    fn default() -> Self {
        Self {
            header_limit: DEFAULT_LIMIT_HEADER.to_string(),
            header_remaining: DEFAULT_REMAINING_HEADER.to_string(),
            header_reset: DEFAULT_RESET_HEADER.to_string(),
            retry_policy: RetryPolicy::on_too_many_requests(DEFAULT_RATE_LIMIT_RETRIES),
        }
    }
}

/// The last known quota. Every field starts unset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RateLimitState {
    /// Maximum number of requests in the current window.
    pub limit: Option<i64>,
    /// Requests left in the current window.
    pub remaining: Option<i64>,
    /// When the current window resets.
    pub reset: Option<DateTime<Utc>>,
}

impl RateLimitState {
    /// Returns how long a call has to wait at `now` before it may be sent.
    ///
    /// A wait is only required when `remaining` is known to be zero (or
    /// below) and the reset time lies in the future.
    #[must_use]
    pub fn wait_time(&self, now: DateTime<Utc>) -> Option<Duration> {
        let wait = match (self.remaining, self.reset) {
            (Some(remaining), Some(reset)) if remaining <= 0 => (reset - now).to_std().ok(),
            _ => None,
        };
        wait.filter(|delay| !delay.is_zero())
    }
}

/// Tracks the request quota of one client.
///
/// Clones share the same state.
///
/// # Example
///
/// ```rust
/// use printful_api::clients::{HttpResponse, RateLimitOptions, RateLimiter};
/// use std::collections::HashMap;
///
/// let limiter = RateLimiter::new(RateLimitOptions::default());
///
/// let mut headers = HashMap::new();
/// headers.insert("x-ratelimit-limit".to_string(), vec!["120".to_string()]);
/// headers.insert("x-ratelimit-remaining".to_string(), vec!["119".to_string()]);
/// limiter.update(&HttpResponse::new(200, headers, String::new()));
///
/// assert_eq!(limiter.state().limit, Some(120));
/// assert_eq!(limiter.state().remaining, Some(119));
/// assert_eq!(limiter.state().reset, None);
/// ```
#[derive(Clone, Debug)]
pub struct RateLimiter {
    options: RateLimitOptions,
    state: Arc<Mutex<RateLimitState>>,
}

// Verify RateLimiter is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RateLimiter>();
};

impl RateLimiter {
    /// Creates a tracker with an empty state.
    #[must_use]
    pub fn new(options: RateLimitOptions) -> Self {
        Self {
            options,
            state: Arc::new(Mutex::new(RateLimitState::default())),
        }
    }

    /// Returns the options this tracker was created with.
    #[must_use]
    pub const fn options(&self) -> &RateLimitOptions {
        &self.options
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> RateLimitState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Waits until the window resets if the quota is known to be exhausted.
    ///
    /// Returns immediately when `remaining` is unknown or positive, when no
    /// reset time is known, or when the reset time has already passed.
    pub async fn wait_if_needed(&self) {
        let wait = self.state().wait_time(Utc::now());

        if let Some(delay) = wait {
            tracing::warn!("Rate limit exhausted, waiting {:?} for reset", delay);
            tokio::time::sleep(delay).await;
        }
    }

    /// Records the quota headers of `response`.
    ///
    /// Absent or unparseable headers leave the matching field untouched.
    pub fn update(&self, response: &HttpResponse) {
        let limit = response
            .header(&self.options.header_limit)
            .and_then(parse_integer);
        let remaining = response
            .header(&self.options.header_remaining)
            .and_then(parse_integer);
        let reset = response
            .header(&self.options.header_reset)
            .and_then(|value| parse_reset(value, Utc::now()));

        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if limit.is_some() {
            state.limit = limit;
        }
        if remaining.is_some() {
            state.remaining = remaining;
        }
        if reset.is_some() {
            state.reset = reset;
        }

        tracing::debug!(
            "Rate limit updated: limit={:?}, remaining={:?}, reset={:?}",
            state.limit,
            state.remaining,
            state.reset
        );
    }

    /// Runs `operation` behind the gate and the configured retry policy.
    ///
    /// The gate is consulted once, before the first attempt. The quota is
    /// recorded from the final response only.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing attempt. The state is left
    /// unchanged in that case.
    pub async fn execute<F, Fut, R, E>(&self, operation: F) -> Result<R, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<R, E>>,
        R: AsRef<HttpResponse>,
    {
        self.wait_if_needed().await;
        let response = retry(operation, &self.options.retry_policy).await?;
        self.update(response.as_ref());
        Ok(response)
    }
}

/// Parses a numeric header, truncating fractional values.
#[allow(clippy::cast_possible_truncation)]
fn parse_integer(value: &str) -> Option<i64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .map(|number| number.trunc() as i64)
}

/// Parses a reset header: seconds relative to `now`, or an absolute date.
fn parse_reset(value: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(seconds) = value.parse::<f64>() {
        if !seconds.is_finite() {
            return None;
        }
        let offset = Duration::try_from_secs_f64(seconds.abs()).ok()?;
        let offset = chrono::Duration::from_std(offset).ok()?;
        return if seconds < 0.0 {
            now.checked_sub_signed(offset)
        } else {
            now.checked_add_signed(offset)
        };
    }

    DateTime::parse_from_rfc2822(value)
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .ok()
        .map(|date| date.with_timezone(&Utc))
}
