//! Generic circuit breaker for async operations
//!
//! Wraps a single logical async operation and isolates its failures:
//! once a configured number of consecutive failures is reached the breaker
//! opens and further invocations fail fast without running the operation.
//! After a cooldown window the breaker closes again and the next invocation
//! retries the operation.
//!
//! # Features
//!
//! - **Fast-fail**: no work is attempted while the breaker is open
//! - **Timestamp-driven cooldown**: open/closed state is a pure function of
//!   invocation outcomes and elapsed time, no background timer
//! - **Generic**: wraps any `FnOnce() -> Future<Output = Result<T, E>>`
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use circuit_breaker::{CircuitBreaker, BreakerError};
//!
//! let breaker = CircuitBreaker::new();
//!
//! let result = breaker.call(|| async {
//!     poll_remote_state().await
//! }).await;
//!
//! match result {
//!     Ok(state) => apply(state),
//!     Err(BreakerError::Open) => { /* remote is degraded, skip this cycle */ }
//!     Err(BreakerError::Inner(e)) => { /* operation ran and failed */ }
//! }
//! ```

use std::sync::Mutex;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{info, warn};

/// Error returned by [`CircuitBreaker::call`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BreakerError<E> {
    /// The breaker is open; the operation was not attempted.
    #[error("circuit breaker is open")]
    Open,
    /// The operation ran and failed.
    #[error("{0}")]
    Inner(E),
}

impl<E> BreakerError<E> {
    /// Returns the inner operation error, if any.
    pub fn into_inner(self) -> Option<E> {
        match self {
            BreakerError::Open => None,
            BreakerError::Inner(e) => Some(e),
        }
    }
}

/// Configuration for a [`CircuitBreaker`]
#[derive(Debug, Clone)]
pub struct BreakerConfig {
    /// Consecutive failures required to open the breaker
    pub failure_threshold: u32,
    /// How long the breaker stays open before the next invocation is
    /// allowed to retry the operation
    pub cooldown: Duration,
}

impl Default for BreakerConfig {
    fn default() -> Self {
        Self {
            failure_threshold: 3,
            cooldown: Duration::from_secs(10),
        }
    }
}

#[derive(Debug)]
struct BreakerState {
    consecutive_failures: u32,
    opened_at: Option<Instant>,
}

/// Failure-isolating wrapper around one logical async operation
///
/// The breaker starts closed. Every failure increments a consecutive-failure
/// counter; reaching the configured threshold opens the breaker and records
/// the open timestamp. While open, [`call`](Self::call) returns
/// [`BreakerError::Open`] immediately. Once the cooldown has elapsed the
/// breaker closes and the next invocation runs the operation again; the
/// counter is not reset by the cooldown, so a failed probe re-opens the
/// breaker at once while a success fully resets it.
#[derive(Debug)]
pub struct CircuitBreaker {
    config: BreakerConfig,
    state: Mutex<BreakerState>,
}

impl CircuitBreaker {
    /// Create a breaker with the default configuration
    pub fn new() -> Self {
        Self::with_config(BreakerConfig::default())
    }

    /// Create a breaker with a custom configuration
    pub fn with_config(config: BreakerConfig) -> Self {
        Self {
            config,
            state: Mutex::new(BreakerState {
                consecutive_failures: 0,
                opened_at: None,
            }),
        }
    }

    /// Whether the breaker is currently open (fast-failing)
    ///
    /// Returns `false` once the cooldown has elapsed, since the next
    /// invocation will run the operation.
    pub fn is_open(&self) -> bool {
        let state = match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };
        match state.opened_at {
            Some(opened_at) => opened_at.elapsed() < self.config.cooldown,
            None => false,
        }
    }

    /// Number of consecutive failures recorded so far
    pub fn failure_count(&self) -> u32 {
        match self.state.lock() {
            Ok(state) => state.consecutive_failures,
            Err(poisoned) => poisoned.into_inner().consecutive_failures,
        }
    }

    /// Run `op` through the breaker
    ///
    /// While open and within the cooldown window this returns
    /// [`BreakerError::Open`] without invoking `op`. Otherwise `op` runs;
    /// success resets the failure counter and failure increments it,
    /// opening the breaker when the threshold is reached.
    pub async fn call<F, Fut, T, E>(&self, op: F) -> Result<T, BreakerError<E>>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<T, E>>,
    {
        // Resolve open/cooldown state before touching the operation. The
        // lock is released before any await point.
        {
            let mut state = match self.state.lock() {
                Ok(state) => state,
                Err(poisoned) => poisoned.into_inner(),
            };
            if let Some(opened_at) = state.opened_at {
                if opened_at.elapsed() < self.config.cooldown {
                    return Err(BreakerError::Open);
                }
                state.opened_at = None;
                info!("circuit breaker cooldown elapsed, retrying operation");
            }
        }

        match op().await {
            Ok(value) => {
                let mut state = match self.state.lock() {
                    Ok(state) => state,
                    Err(poisoned) => poisoned.into_inner(),
                };
                state.consecutive_failures = 0;
                Ok(value)
            }
            Err(err) => {
                let mut state = match self.state.lock() {
                    Ok(state) => state,
                    Err(poisoned) => poisoned.into_inner(),
                };
                state.consecutive_failures = state.consecutive_failures.saturating_add(1);
                if state.consecutive_failures >= self.config.failure_threshold {
                    state.opened_at = Some(Instant::now());
                    warn!(
                        failures = state.consecutive_failures,
                        cooldown_secs = self.config.cooldown.as_secs_f64(),
                        "circuit breaker opened"
                    );
                }
                Err(BreakerError::Inner(err))
            }
        }
    }
}

impl Default for CircuitBreaker {
    fn default() -> Self {
        Self::new()
    }
}
