//! Retry engine for HTTP attempts.
//!
//! [`retry`] runs an asynchronous operation once, then keeps re-running it
//! for as long as the [`RetryPolicy`] asks for it, up to the policy's retry
//! budget. The policy inspects each completed response and answers with a
//! [`RetryDecision`].

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::clients::http_response::HttpResponse;

/// What to do after inspecting a completed response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetryDecision {
    /// Return the response as-is.
    Stop,
    /// Run the operation again immediately.
    RetryNow,
    /// Wait for the given duration, then run the operation again.
    RetryAfter(Duration),
}

impl RetryDecision {
    /// Builds a decision from an optional delay.
    ///
    /// `None` stops, a zero delay retries immediately and any other delay
    /// waits before retrying.
    #[must_use]
    pub fn from_delay(delay: Option<Duration>) -> Self {
        match delay {
            None => Self::Stop,
            Some(d) if d.is_zero() => Self::RetryNow,
            Some(d) => Self::RetryAfter(d),
        }
    }
}

type ShouldRetry = dyn Fn(&HttpResponse) -> RetryDecision + Send + Sync;

/// Decides whether and when a request is attempted again.
///
/// A policy consists of a retry budget (`retries`, the number of attempts
/// allowed *after* the first one) and a predicate inspecting each response.
///
/// # Defaults
///
/// [`RetryPolicy::default`] allows one retry but never asks for it. The rate
/// limit tracker uses [`RetryPolicy::on_too_many_requests`] instead.
///
/// # Example
///
/// ```rust
/// use printful_api::clients::{RetryDecision, RetryPolicy};
/// use std::time::Duration;
///
/// // Retry server errors up to three times, one second apart.
/// let policy = RetryPolicy::new(3, |response| {
///     if response.code >= 500 {
///         RetryDecision::RetryAfter(Duration::from_secs(1))
///     } else {
///         RetryDecision::Stop
///     }
/// });
/// assert_eq!(policy.retries, 3);
/// ```
#[derive(Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts after the first one.
    pub retries: u32,
    should_retry: Arc<ShouldRetry>,
}

impl RetryPolicy {
    /// Creates a policy from a retry budget and a decision function.
    pub fn new<F>(retries: u32, should_retry: F) -> Self
    where
        F: Fn(&HttpResponse) -> RetryDecision + Send + Sync + 'static,
    {
        Self {
            retries,
            should_retry: Arc::new(should_retry),
        }
    }

    /// A policy that never retries.
    #[must_use]
    pub fn never() -> Self {
        Self::new(0, |_| RetryDecision::Stop)
    }

    /// Retries HTTP 429 responses after the delay given by `Retry-After`.
    ///
    /// Responses without a numeric `Retry-After` header are not retried.
    #[must_use]
    pub fn on_too_many_requests(retries: u32) -> Self {
        Self::new(retries, |response| {
            if response.is_too_many_requests() {
                RetryDecision::from_delay(response.retry_after())
            } else {
                RetryDecision::Stop
            }
        })
    }

    /// Returns a copy of this policy with a different retry budget.
    #[must_use]
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Asks the policy what to do with `response`.
    #[must_use]
    pub fn decide(&self, response: &HttpResponse) -> RetryDecision {
        (self.should_retry)(response)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(1, |_| RetryDecision::Stop)
    }
}

impl fmt::Debug for RetryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryPolicy")
            .field("retries", &self.retries)
            .finish_non_exhaustive()
    }
}

/// Runs `operation` and re-runs it while `policy` asks for it.
///
/// The operation is invoked once unconditionally and at most
/// `policy.retries` more times. Delays requested by the policy suspend the
/// current task for the full duration. The most recent response is
/// returned; an `Err` from any attempt is returned immediately.
///
/// An attempt may yield any value exposing an [`HttpResponse`], so callers
/// can defer work such as reading the body until retrying is over.
///
/// # Errors
///
/// Returns the error of the first failing attempt.
///
/// # Example
///
/// ```rust
/// use printful_api::clients::{retry, HttpResponse, RetryPolicy};
/// use std::collections::HashMap;
///
/// # tokio_test::block_on(async {
/// let response = retry(
///     || async { Ok::<_, std::io::Error>(HttpResponse::new(200, HashMap::new(), "{}".into())) },
///     &RetryPolicy::default(),
/// )
/// .await
/// .unwrap();
/// assert_eq!(response.code, 200);
/// # });
/// ```
pub async fn retry<F, Fut, R, E>(mut operation: F, policy: &RetryPolicy) -> Result<R, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<R, E>>,
    R: AsRef<HttpResponse>,
{
    let mut response = operation().await?;

    for attempt in 1..=policy.retries {
        let code = response.as_ref().code;
        match policy.decide(response.as_ref()) {
            RetryDecision::Stop => break,
            RetryDecision::RetryNow => {
                tracing::debug!(
                    "Retrying request immediately (status {}, retry {}/{})",
                    code,
                    attempt,
                    policy.retries
                );
            }
            RetryDecision::RetryAfter(delay) => {
                tracing::warn!(
                    "Retrying request in {:?} (status {}, retry {}/{})",
                    delay,
                    code,
                    attempt,
                    policy.retries
                );
                tokio::time::sleep(delay).await;
            }
        }
        response = operation().await?;
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn response(code: u16, retry_after: Option<&str>) -> HttpResponse {
        let mut headers = HashMap::new();
        if let Some(value) = retry_after {
            headers.insert("retry-after".to_string(), vec![value.to_string()]);
        }
        HttpResponse::new(code, headers, String::new())
    }

    /// Returns an operation yielding `codes` in order (repeating the last one)
    /// together with its invocation counter.
    fn scripted(
        codes: Vec<(u16, Option<&'static str>)>,
    ) -> (
        Arc<AtomicU32>,
        impl FnMut() -> std::future::Ready<Result<HttpResponse, std::io::Error>>,
    ) {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);
        let operation = move || {
            let n = counter.fetch_add(1, Ordering::SeqCst) as usize;
            let (code, retry_after) = codes[n.min(codes.len() - 1)];
            std::future::ready(Ok(response(code, retry_after)))
        };
        (calls, operation)
    }

    #[test]
    fn test_decision_from_delay() {
        assert_eq!(RetryDecision::from_delay(None), RetryDecision::Stop);
        assert_eq!(
            RetryDecision::from_delay(Some(Duration::ZERO)),
            RetryDecision::RetryNow
        );
        assert_eq!(
            RetryDecision::from_delay(Some(Duration::from_secs(3))),
            RetryDecision::RetryAfter(Duration::from_secs(3))
        );
    }

    #[test]
    fn test_default_policy_allows_one_retry_but_never_retries() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.retries, 1);
        assert_eq!(policy.decide(&response(429, Some("1"))), RetryDecision::Stop);
    }

    #[test]
    fn test_too_many_requests_policy_decisions() {
        let policy = RetryPolicy::on_too_many_requests(5);
        assert_eq!(
            policy.decide(&response(429, Some("2"))),
            RetryDecision::RetryAfter(Duration::from_secs(2))
        );
        assert_eq!(policy.decide(&response(429, Some("0"))), RetryDecision::RetryNow);
        assert_eq!(policy.decide(&response(429, Some("later"))), RetryDecision::Stop);
        assert_eq!(policy.decide(&response(429, None)), RetryDecision::Stop);
        assert_eq!(policy.decide(&response(500, Some("2"))), RetryDecision::Stop);
        assert_eq!(policy.decide(&response(200, None)), RetryDecision::Stop);
    }

    #[tokio::test]
    async fn test_stop_on_first_response_invokes_once() {
        let (calls, operation) = scripted(vec![(200, None)]);
        let result = retry(operation, &RetryPolicy::on_too_many_requests(5))
            .await
            .unwrap();

        assert_eq!(result.code, 200);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retries_are_bounded_by_budget() {
        let policy = RetryPolicy::new(3, |_| RetryDecision::RetryNow);
        let (calls, operation) = scripted(vec![(503, None)]);

        let result = retry(operation, &policy).await.unwrap();

        assert_eq!(result.code, 503);
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_zero_retries_invokes_once() {
        let policy = RetryPolicy::new(0, |_| RetryDecision::RetryNow);
        let (calls, operation) = scripted(vec![(429, Some("0"))]);

        retry(operation, &policy).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_after_suspends_before_next_attempt() {
        let (calls, operation) = scripted(vec![(429, Some("2")), (200, None)]);
        let start = tokio::time::Instant::now();

        let result = retry(operation, &RetryPolicy::on_too_many_requests(5))
            .await
            .unwrap();

        assert_eq!(result.code, 200);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(start.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhausted_retries_return_last_response() {
        let (calls, operation) = scripted(vec![(429, Some("1"))]);

        let result = retry(operation, &RetryPolicy::on_too_many_requests(2))
            .await
            .unwrap();

        assert_eq!(result.code, 429);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_with_retries_overrides_budget() {
        let (calls, operation) = scripted(vec![(429, Some("0"))]);
        let policy = RetryPolicy::on_too_many_requests(5).with_retries(1);

        let result = retry(operation, &policy).await.unwrap();

        assert_eq!(policy.retries, 1);
        assert_eq!(result.code, 429);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_error_is_returned_without_retrying() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);
        let policy = RetryPolicy::new(5, |_| RetryDecision::RetryNow);

        let result = retry(
            move || {
                counter.fetch_add(1, Ordering::SeqCst);
                std::future::ready(Err::<HttpResponse, _>(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "boom",
                )))
            },
            &policy,
        )
        .await;

        assert_eq!(result.unwrap_err().to_string(), "boom");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
