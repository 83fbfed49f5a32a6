use rand::{RngExt, rng};
use std::time::Duration;

/// Retry policy for transient dataset-fetch failures: exponential
/// backoff with full jitter, capped at `max_delay`.
#[derive(Clone, Debug)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    /// Run `op` until it succeeds or the retry budget is spent. The
    /// `transient` predicate decides which errors are worth retrying;
    /// everything else is returned to the caller immediately.
    pub async fn run<F, Fut, T, E, P>(&self, mut op: F, mut transient: P) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T, E>>,
        P: FnMut(&E) -> bool,
    {
        let mut attempt = 0u32;
        loop {
            match op().await {
                Ok(v) => return Ok(v),
                Err(e) => {
                    attempt += 1;
                    if attempt > self.max_retries || !transient(&e) {
                        return Err(e);
                    }
                    let ceiling = (self.base_delay * (1u32 << attempt)).min(self.max_delay);
                    let jitter = rng().random_range(0..=ceiling.as_millis() as u64);
                    tokio::time::sleep(Duration::from_millis(jitter)).await;
                }
            }
        }
    }
}
