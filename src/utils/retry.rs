use std::future::Future;
use std::time::Duration;

/// Fixed-delay retry policy for outbound calls to external services.
///
/// `max_retries` counts additional attempts after the first one, so a
/// policy with `max_retries = 2` issues at most three calls. Only errors
/// accepted by the retryable predicate are retried; everything else
/// surfaces immediately.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_retries: u32,
    delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, delay: Duration) -> Self {
        RetryPolicy { max_retries, delay }
    }

    /// Policy that never retries.
    pub fn none() -> Self {
        RetryPolicy::new(0, Duration::ZERO)
    }

    pub async fn run<T, E, F, Fut, P>(&self, mut operation: F, retryable: P) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        P: Fn(&E) -> bool,
        E: std::fmt::Display,
    {
        let mut attempt = 0;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(err) if attempt < self.max_retries && retryable(&err) => {
                    attempt += 1;
                    log::warn!(
                        "Retrying after failure (attempt {} of {}): {}",
                        attempt,
                        self.max_retries,
                        err
                    );
                    tokio::time::sleep(self.delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn always(_: &String) -> bool {
        true
    }

    fn never(_: &String) -> bool {
        false
    }

    #[tokio::test]
    async fn returns_first_success_without_retrying() {
        let calls = Arc::new(AtomicUsize::new(0));
        let policy = RetryPolicy::new(2, Duration::ZERO);

        let result: Result<u32, String> = policy
            .run(
                || {
                    let calls = calls.clone();
                    async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        Ok(7)
                    }
                },
                always,
            )
            .await;

        assert_eq!(result, Ok(7));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn retries_transient_failures_then_succeeds() {
        let calls = Arc::new(AtomicUsize::new(0));
        let policy = RetryPolicy::new(2, Duration::from_millis(500));

        let started = tokio::time::Instant::now();
        let result: Result<u32, String> = policy
            .run(
                || {
                    let calls = calls.clone();
                    async move {
                        let attempt = calls.fetch_add(1, Ordering::SeqCst);
                        if attempt < 2 {
                            Err("boom".to_string())
                        } else {
                            Ok(42)
                        }
                    }
                },
                always,
            )
            .await;

        assert_eq!(result, Ok(42));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(started.elapsed(), Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn gives_up_after_exhausting_retries() {
        let calls = Arc::new(AtomicUsize::new(0));
        let policy = RetryPolicy::new(2, Duration::from_millis(500));

        let result: Result<u32, String> = policy
            .run(
                || {
                    let calls = calls.clone();
                    async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        Err("down".to_string())
                    }
                },
                always,
            )
            .await;

        assert_eq!(result, Err("down".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn does_not_retry_non_retryable_errors() {
        let calls = Arc::new(AtomicUsize::new(0));
        let policy = RetryPolicy::new(2, Duration::ZERO);

        let result: Result<u32, String> = policy
            .run(
                || {
                    let calls = calls.clone();
                    async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        Err("bad request".to_string())
                    }
                },
                never,
            )
            .await;

        assert_eq!(result, Err("bad request".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
