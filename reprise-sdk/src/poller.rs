//! Background polling of the remote playback state
//!
//! The poller runs the breaker-wrapped combined state query on a fixed
//! interval and feeds successful snapshots into the mirror. Failures of any
//! kind are absorbed here: a degraded remote shows up as skipped cycles and
//! breaker fast-fails, never as user-facing errors.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use circuit_breaker::{BreakerError, CircuitBreaker};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use reprise_api::{ApiError, Command, PollSnapshot};

use crate::player::Player;

/// A running poll schedule
pub(crate) struct PollHandle {
    shutdown: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl Player {
    /// Start polling the remote playback state on the configured interval
    ///
    /// Idempotent with respect to prior runs: any existing schedule is
    /// stopped first, so duplicate concurrent timers cannot exist. The tick
    /// period is fixed; during outages the breaker's fast-fail keeps ticks
    /// cheap rather than the interval backing off.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_polling(&self) {
        self.stop_polling();

        let shutdown = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&shutdown);
        // The task holds a weak handle so a dropped player winds down its
        // schedule instead of keeping itself alive.
        let weak = Arc::downgrade(&self.inner);
        let interval = self.inner.settings.poll_interval;

        let task = tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                if flag.load(Ordering::Relaxed) {
                    break;
                }
                let Some(inner) = weak.upgrade() else { break };
                Player { inner }.poll_once().await;
            }
        });

        info!(interval_ms = interval.as_millis() as u64, "playback polling started");
        *self.inner.poll.lock() = Some(PollHandle { shutdown, task });
    }

    /// Stop the poll schedule
    ///
    /// Cancels future ticks only; a tick already in flight runs to
    /// completion.
    pub fn stop_polling(&self) {
        if let Some(handle) = self.inner.poll.lock().take() {
            handle.shutdown.store(true, Ordering::Relaxed);
            info!("playback polling stopped");
        }
    }

    /// Whether a poll schedule is currently active
    pub fn is_polling(&self) -> bool {
        self.inner
            .poll
            .lock()
            .as_ref()
            .map(|handle| !handle.task.is_finished())
            .unwrap_or(false)
    }

    /// Run a single poll cycle
    ///
    /// Fetches the combined snapshot through the circuit breaker, diffs it
    /// against the mirror and emits the resulting change events. Any failure
    /// (transport, breaker fast-fail, malformed payload) skips the cycle:
    /// the mirror is untouched and nothing is emitted.
    pub async fn poll_once(&self) {
        match self.fetch_snapshot().await {
            Ok(snapshot) => {
                let changes = self.inner.mirror.lock().apply_snapshot(&snapshot);
                for change in changes {
                    self.emit(change);
                }
            }
            Err(err) => {
                debug!(error = %err, "poll cycle skipped");
            }
        }
    }

    /// Fetch both playback sub-states as one breaker-wrapped operation
    async fn fetch_snapshot(&self) -> Result<PollSnapshot, BreakerError<ApiError>> {
        let breaker = self.poll_breaker();
        let client = self.inner.client.clone();
        breaker
            .call(|| async move {
                let playlist = client.send(Command::PlaylistState, None).await?;
                let soundboard = client.send(Command::SoundboardState, None).await?;
                Ok::<_, ApiError>(PollSnapshot::from_values(playlist, soundboard))
            })
            .await
    }

    /// The breaker guarding the polling path, created on first use
    fn poll_breaker(&self) -> Arc<CircuitBreaker> {
        let mut slot = self.inner.breaker.lock();
        slot.get_or_insert_with(|| {
            Arc::new(CircuitBreaker::with_config(
                self.inner.settings.breaker.clone(),
            ))
        })
        .clone()
    }
}
