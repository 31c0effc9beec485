//! Bounded retry policy wrapped around a fallible operation.
//!
//! A [`RetryPolicy`] decides how many attempts an operation gets, how long to
//! wait between them, and which errors are worth another attempt. Call sites
//! only see [`RetryPolicy::run`], so the policy can be swapped without
//! touching them.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use wb_search::retry::RetryPolicy;
//!
//! let policy = RetryPolicy::fixed(3, Duration::ZERO);
//! let mut calls = 0;
//! let value = policy
//!     .run(|_attempt| {
//!         calls += 1;
//!         if calls < 2 {
//!             Err(wb_search::WbSearchError::InvalidArgument("flaky".into()))
//!         } else {
//!             Ok(42)
//!         }
//!     })
//!     .unwrap();
//! assert_eq!(value, 42);
//! ```

use std::fmt;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::config;
use crate::error::{Result, WbSearchError};

// ---------------------------------------------------------------------------
// Backoff
// ---------------------------------------------------------------------------

/// Delay schedule between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    /// Same delay before every retry.
    Fixed(Duration),
    /// `initial * factor^(n-1)` before retry `n`, capped at `max`.
    Exponential {
        initial: Duration,
        factor: u32,
        max: Duration,
    },
}

impl Backoff {
    /// Delay to wait after failed attempt number `attempt` (1-based).
    pub fn delay(&self, attempt: u32) -> Duration {
        match *self {
            Backoff::Fixed(d) => d,
            Backoff::Exponential {
                initial,
                factor,
                max,
            } => {
                let exp = attempt.saturating_sub(1);
                let mult = factor.checked_pow(exp).unwrap_or(u32::MAX);
                initial.checked_mul(mult).unwrap_or(max).min(max)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// RetryPolicy
// ---------------------------------------------------------------------------

type Predicate = Arc<dyn Fn(&WbSearchError) -> bool + Send + Sync>;

/// How many times to try, how long to wait, and what to retry.
#[derive(Clone)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff: Backoff,
    retryable: Predicate,
}

impl Default for RetryPolicy {
    /// Three attempts, one second apart, every error retried.
    fn default() -> Self {
        Self::fixed(config::DEFAULT_ATTEMPTS, config::DEFAULT_RETRY_DELAY)
    }
}

impl RetryPolicy {
    /// `max_attempts` total attempts with a fixed `delay` between them.
    ///
    /// `max_attempts` is clamped to at least 1.
    pub fn fixed(max_attempts: u32, delay: Duration) -> Self {
        Self::new(max_attempts, Backoff::Fixed(delay))
    }

    pub fn new(max_attempts: u32, backoff: Backoff) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
            retryable: Arc::new(|_| true),
        }
    }

    /// Single attempt, no retries.
    pub fn none() -> Self {
        Self::fixed(1, Duration::ZERO)
    }

    /// Only retry errors for which `pred` returns `true`; others are returned
    /// immediately.
    pub fn retry_if<F>(mut self, pred: F) -> Self
    where
        F: Fn(&WbSearchError) -> bool + Send + Sync + 'static,
    {
        self.retryable = Arc::new(pred);
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn backoff(&self) -> Backoff {
        self.backoff
    }

    /// Run `op` until it succeeds or the policy gives up.
    ///
    /// `op` receives the 1-based attempt number. On exhaustion the last error
    /// is wrapped in [`WbSearchError::RetriesExhausted`]; an error rejected by
    /// the predicate is returned unwrapped.
    pub fn run<T, F>(&self, mut op: F) -> Result<T>
    where
        F: FnMut(u32) -> Result<T>,
    {
        let mut attempt = 1;
        loop {
            match op(attempt) {
                Ok(value) => return Ok(value),
                Err(e) if !(self.retryable)(&e) => return Err(e),
                Err(e) if attempt >= self.max_attempts => {
                    return Err(WbSearchError::RetriesExhausted {
                        attempts: attempt,
                        source: Box::new(e),
                    });
                }
                Err(e) => {
                    let delay = self.backoff.delay(attempt);
                    tracing::warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        ?delay,
                        "attempt failed: {}",
                        e
                    );
                    if !delay.is_zero() {
                        thread::sleep(delay);
                    }
                    attempt += 1;
                }
            }
        }
    }
}

impl fmt::Debug for RetryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryPolicy")
            .field("max_attempts", &self.max_attempts)
            .field("backoff", &self.backoff)
            .finish_non_exhaustive()
    }
}
