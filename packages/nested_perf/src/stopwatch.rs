//! Elapsed time measurement for a single entry.

use std::time::Duration;

use crate::pal::Platform;

/// Measures monotonic time from creation until it is stopped.
///
/// A stopwatch can be stopped once. After that, its elapsed time is frozen and further
/// calls to [`stop()`][Self::stop] have no effect.
#[derive(Debug)]
pub(crate) struct Stopwatch {
    started_at: Duration,
    stopped_at: Option<Duration>,
}

impl Stopwatch {
    /// Creates a stopwatch that is already running.
    pub(crate) fn start_new(platform: &impl Platform) -> Self {
        Self {
            started_at: platform.monotonic_time(),
            stopped_at: None,
        }
    }

    /// Stops the stopwatch if it is still running and returns the final elapsed time.
    pub(crate) fn stop(&mut self, platform: &impl Platform) -> Duration {
        if self.stopped_at.is_none() {
            self.stopped_at = Some(platform.monotonic_time());
        }

        self.elapsed(platform)
    }

    /// Time from start until now, or until the stopwatch was stopped.
    pub(crate) fn elapsed(&self, platform: &impl Platform) -> Duration {
        let end = self
            .stopped_at
            .unwrap_or_else(|| platform.monotonic_time());

        end.saturating_sub(self.started_at)
    }

    #[cfg(test)]
    pub(crate) fn is_running(&self) -> bool {
        self.stopped_at.is_none()
    }
}
