//! Fake platform implementation for testing.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

use crate::pal::abstractions::Platform;

#[derive(Debug)]
struct FakePlatformState {
    monotonic_time: Duration,
    wall_clock: DateTime<Utc>,
}

/// Fake implementation of the platform abstraction for testing.
///
/// Time only moves when a test calls [`advance()`][Self::advance]. Clones share the same
/// state, so a test can keep one clone and hand another to the code under test.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    state: Arc<Mutex<FakePlatformState>>,
}

impl FakePlatform {
    /// Creates a fake platform whose monotonic clock is at zero and whose wall clock
    /// reads 2025-03-14 13:15:09.265 UTC.
    pub(crate) fn new() -> Self {
        let wall_clock = DateTime::from_timestamp_millis(1_741_958_109_265)
            .expect("constant timestamp is within the supported range");

        Self {
            state: Arc::new(Mutex::new(FakePlatformState {
                monotonic_time: Duration::ZERO,
                wall_clock,
            })),
        }
    }

    /// Moves both clocks forward by `delta`.
    pub(crate) fn advance(&self, delta: Duration) {
        let mut state = self
            .state
            .lock()
            .expect("FakePlatform state lock should not be poisoned");

        state.monotonic_time = state
            .monotonic_time
            .checked_add(delta)
            .expect("fake monotonic clock overflow is not a realistic test scenario");

        state.wall_clock = state
            .wall_clock
            .checked_add_signed(
                TimeDelta::from_std(delta).expect("test deltas fit in a TimeDelta"),
            )
            .expect("fake wall clock overflow is not a realistic test scenario");
    }

    /// Moves only the wall clock, simulating an adjustment of the system clock.
    pub(crate) fn set_wall_clock(&self, wall_clock: DateTime<Utc>) {
        self.state
            .lock()
            .expect("FakePlatform state lock should not be poisoned")
            .wall_clock = wall_clock;
    }
}

impl Platform for FakePlatform {
    fn monotonic_time(&self) -> Duration {
        self.state
            .lock()
            .expect("FakePlatform state lock should not be poisoned")
            .monotonic_time
    }

    fn wall_clock(&self) -> DateTime<Utc> {
        self.state
            .lock()
            .expect("FakePlatform state lock should not be poisoned")
            .wall_clock
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn initializes_with_zero_monotonic_time() {
        let platform = FakePlatform::new();
        assert_eq!(platform.monotonic_time(), Duration::ZERO);
    }

    #[test]
    fn advance_moves_both_clocks() {
        let platform = FakePlatform::new();
        let wall_before = platform.wall_clock();

        platform.advance(Duration::from_millis(150));

        assert_eq!(platform.monotonic_time(), Duration::from_millis(150));
        assert_eq!(
            platform.wall_clock().signed_duration_since(wall_before),
            TimeDelta::milliseconds(150)
        );
    }

    #[test]
    fn set_wall_clock_leaves_monotonic_time_alone() {
        let platform = FakePlatform::new();
        platform.advance(Duration::from_millis(10));

        platform.set_wall_clock(DateTime::<Utc>::UNIX_EPOCH);

        assert_eq!(platform.wall_clock(), DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(platform.monotonic_time(), Duration::from_millis(10));
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();

        platform1.advance(Duration::from_millis(100));

        assert_eq!(platform2.monotonic_time(), Duration::from_millis(100));
    }
}
