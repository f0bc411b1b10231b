//! Real platform implementation backed by the operating system clocks.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::pal::abstractions::Platform;

#[derive(Clone, Debug)]
pub(crate) struct RealPlatform {
    origin: Instant,
}

impl RealPlatform {
    pub(crate) fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Platform for RealPlatform {
    fn monotonic_time(&self) -> Duration {
        self.origin.elapsed()
    }

    #[cfg_attr(test, mutants::skip)] // The real wall clock cannot be predicted by a test.
    fn wall_clock(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
