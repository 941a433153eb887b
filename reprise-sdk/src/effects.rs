//! Volume steps and fade transitions built atop the facade

use std::time::Duration;

use tracing::warn;

use crate::error::Result;
use crate::player::Player;

/// Volume delta applied by [`Player::volume_up`] and [`Player::volume_down`]
pub const VOLUME_STEP: f64 = 0.05;

impl Player {
    /// Raise the volume by one step, clamped to `1.0`
    pub async fn volume_up(&self) -> Result<()> {
        self.set_volume(self.volume() + VOLUME_STEP).await
    }

    /// Lower the volume by one step, clamped to `0.0`
    pub async fn volume_down(&self) -> Result<()> {
        self.set_volume(self.volume() - VOLUME_STEP).await
    }

    /// Fade the volume to `target` over `duration` in fixed steps
    ///
    /// Runs in the background; starting a new fade cancels and replaces any
    /// fade already in flight. A command failure mid-fade abandons the rest
    /// of the transition, leaving the mirror at the last confirmed level.
    pub fn fade_volume(&self, target: f64, duration: Duration) {
        let target = target.clamp(0.0, 1.0);
        let player = self.clone();
        let handle = tokio::spawn(async move {
            player.run_fade(target, duration).await;
        });
        if let Some(previous) = self.inner.fade.lock().replace(handle) {
            previous.abort();
        }
    }

    async fn run_fade(&self, target: f64, duration: Duration) {
        let start = self.volume();
        let delta = target - start;
        let steps = ((delta.abs() / VOLUME_STEP).ceil() as u32).max(1);
        let step_delay = duration / steps;

        for step in 1..=steps {
            tokio::time::sleep(step_delay).await;
            let level = start + delta * f64::from(step) / f64::from(steps);
            if let Err(err) = self.set_volume(level).await {
                warn!(error = %err, "volume fade abandoned");
                return;
            }
        }
    }
}
