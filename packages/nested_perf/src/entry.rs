//! A single measurement on the nesting stack.

use std::fmt::Display;
use std::time::Duration;

use crate::pal::Platform;
use crate::stopwatch::Stopwatch;

/// One active or completed measurement.
///
/// The key and data are fixed at creation. Only the stopwatch changes, and only once.
#[derive(Debug)]
pub(crate) struct Entry {
    key: String,
    stopwatch: Stopwatch,
    data: Vec<String>,
}

impl Entry {
    /// Creates an entry with a running stopwatch, rendering each data item once.
    pub(crate) fn start<I>(key: String, data: I, platform: &impl Platform) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        Self {
            key,
            stopwatch: Stopwatch::start_new(platform),
            data: data.into_iter().map(|item| item.to_string()).collect(),
        }
    }

    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    pub(crate) fn data(&self) -> &[String] {
        &self.data
    }

    pub(crate) fn elapsed(&self, platform: &impl Platform) -> Duration {
        self.stopwatch.elapsed(platform)
    }

    pub(crate) fn stop(&mut self, platform: &impl Platform) -> Duration {
        self.stopwatch.stop(platform)
    }

    #[cfg(test)]
    pub(crate) fn is_running(&self) -> bool {
        self.stopwatch.is_running()
    }
}
