//! Platform abstraction trait definitions.

use std::fmt::Debug;
use std::time::Duration;

use chrono::{DateTime, Utc};

/// Provides the clocks that measurements and log lines are based on.
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Time elapsed since an arbitrary fixed origin.
    ///
    /// Successive calls never return a smaller value, regardless of adjustments made to the
    /// system wall clock.
    fn monotonic_time(&self) -> Duration;

    /// The current wall-clock time, used for timestamps and unlabeled root keys.
    fn wall_clock(&self) -> DateTime<Utc>;
}
