//! Bounded retry with backoff for single fetch operations

use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::constants::policy;

/// Delay schedule between attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    /// `base * 2^attempt` after 0-indexed attempt `attempt`
    Exponential(Duration),
    /// Same delay after every attempt
    Fixed(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Backoff,
}

impl RetryPolicy {
    pub fn exponential(max_attempts: u32, base: Duration) -> Self {
        Self {
            max_attempts,
            backoff: Backoff::Exponential(base),
        }
    }

    pub fn fixed(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            backoff: Backoff::Fixed(delay),
        }
    }

    /// Delay to wait after the given 0-indexed attempt failed
    pub fn delay_after(&self, attempt: u32) -> Duration {
        match self.backoff {
            Backoff::Exponential(base) => {
                base.saturating_mul(2u32.saturating_pow(attempt))
            }
            Backoff::Fixed(delay) => delay,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::exponential(
            policy::RETRY_ATTEMPTS,
            Duration::from_millis(policy::RETRY_BASE_DELAY_MS),
        )
    }
}

/// Run `operation` until it succeeds or `policy.max_attempts` is spent.
///
/// No delay follows the final attempt. The last error is returned unchanged.
pub async fn retry<F, Fut, T, E>(policy: &RetryPolicy, what: &str, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                if attempt + 1 >= max_attempts {
                    warn!("{} failed after {} attempts: {}", what, max_attempts, error);
                    return Err(error);
                }

                let delay = policy.delay_after(attempt);
                debug!(
                    "{} attempt {} failed: {}. Retrying in {:?}",
                    what,
                    attempt + 1,
                    error,
                    delay
                );
                sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
