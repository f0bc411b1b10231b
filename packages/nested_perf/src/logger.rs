//! The nesting stack engine.

use std::fmt::Display;

use chrono::{DateTime, Utc};

use crate::entry::Entry;
use crate::format::{self, Action};
use crate::Config;
use crate::pal::{Platform, PlatformFacade};

/// Measures nested operations and renders one delimited text line per call.
///
/// Each [`start()`][Self::start] pushes a measurement onto a LIFO stack and each
/// [`stop()`][Self::stop] pops the most recent one. [`log()`][Self::log] reports on the most
/// recent measurement without ending it. Every call returns the line it produced; the logger
/// never writes anything itself, so the caller decides where lines go.
///
/// Keys of nested measurements are composed from the key of the enclosing measurement and the
/// fragment given to `start()`, separated by the namespace delimiter.
///
/// When the logger is dropped, measurements still on the stack are stopped without producing
/// any output. The same happens on an explicit [`dispose()`][Self::dispose].
///
/// # Examples
///
/// ```
/// use nested_perf::NestedPerfLogger;
///
/// let mut logger = NestedPerfLogger::new();
/// println!("{}", logger.log_headers());
///
/// println!("{}", logger.start("Product", "loading product"));
/// println!("{}", logger.start_with_data("Item", "loading item", ["Shoe", "42"]));
/// assert_eq!(logger.current_key(), Some("Product.Item"));
///
/// println!("{}", logger.stop("item loaded"));
/// println!("{}", logger.stop("product loaded"));
/// assert_eq!(logger.depth(), 0);
///
/// // Nothing to stop, so nothing to report.
/// assert_eq!(logger.stop("again"), "");
/// ```
///
/// # Thread safety
///
/// A logger belongs to one logical call chain. It can be moved to another thread but all
/// operations that change it take `&mut self`; give each concurrent flow its own logger.
#[derive(Debug)]
pub struct NestedPerfLogger {
    stack: Vec<Entry>,
    config: Config,
    platform: PlatformFacade,
}

impl NestedPerfLogger {
    /// Creates a logger with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a logger with the given configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self::with_platform(config, PlatformFacade::real())
    }

    pub(crate) fn with_platform(config: Config, platform: PlatformFacade) -> Self {
        Self {
            stack: Vec::new(),
            config,
            platform,
        }
    }

    /// Starts a new measurement without data and returns its `Start` line.
    ///
    /// See [`start_with_data()`][Self::start_with_data] for how the key is composed.
    pub fn start(&mut self, key: &str, message: &str) -> String {
        self.start_with_data(key, message, std::iter::empty::<&str>())
    }

    /// Starts a new measurement carrying `data` and returns its `Start` line.
    ///
    /// The key of the new measurement is:
    ///
    /// * `key` itself, if no measurement is active and `key` is not empty.
    /// * A value derived from the current time, if no measurement is active and `key` is empty.
    /// * The enclosing key, the namespace delimiter and `key`, if a measurement is active.
    /// * The enclosing key unchanged, if a measurement is active and `key` is empty.
    ///
    /// Each data item is rendered with [`Display`] once, here, and emitted in the data column of
    /// every line produced for this measurement.
    pub fn start_with_data<I>(&mut self, key: &str, message: &str, data: I) -> String
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let full_key = self.compose_key(key);

        tracing::trace!(key = %full_key, depth = self.stack.len().saturating_add(1), "start");

        self.stack.push(Entry::start(full_key, data, &self.platform));

        self.format_top(Action::Start, message)
    }

    /// Reports on the current measurement without ending it and returns its `Log` line.
    ///
    /// The elapsed time is measured up to now and the measurement keeps running.
    /// Returns an empty string if no measurement is active.
    pub fn log(&self, message: &str) -> String {
        if self.stack.is_empty() {
            tracing::debug!(log_message = message, "log called with no active measurement");
        }

        self.format_top(Action::Log, message)
    }

    /// Ends the current measurement and returns its `Stop` line.
    ///
    /// The elapsed time in the line is final. Returns an empty string if no measurement
    /// is active.
    pub fn stop(&mut self, message: &str) -> String {
        let Some(entry) = self.stack.last_mut() else {
            tracing::debug!(log_message = message, "stop called with no active measurement");
            return String::new();
        };

        entry.stop(&self.platform);
        let line = self.format_top(Action::Stop, message);

        if let Some(entry) = self.stack.pop() {
            tracing::trace!(key = entry.key(), depth = self.stack.len(), "stop");
        }

        line
    }

    /// The column names of produced lines, joined with the field delimiter.
    #[must_use]
    pub fn log_headers(&self) -> String {
        format::headers(&self.config)
    }

    /// Number of active measurements.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Whether no measurement is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Key of the most recently started measurement that is still active.
    #[must_use]
    pub fn current_key(&self) -> Option<&str> {
        self.stack.last().map(Entry::key)
    }

    /// The configuration that lines are currently rendered with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replaces the configuration. Affects lines produced from now on, including those of
    /// measurements that are already active.
    pub fn reconfigure(&mut self, config: Config) {
        self.config = config;
    }

    /// Stops every active measurement and clears the stack, without producing any lines.
    ///
    /// Returns the number of measurements that were stopped. The logger remains usable.
    pub fn dispose(&mut self) -> usize {
        let stopped = self.force_stop_all().len();

        if stopped > 0 {
            tracing::debug!(stopped, "disposed of active measurements");
        }

        stopped
    }

    fn force_stop_all(&mut self) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self.stack.drain(..).collect();

        for entry in &mut entries {
            entry.stop(&self.platform);
        }

        entries
    }

    fn compose_key(&self, fragment: &str) -> String {
        match self.stack.last() {
            Some(parent) if fragment.is_empty() => parent.key().to_owned(),
            Some(parent) => format!("{}{}{fragment}", parent.key(), self.config.ns_delimiter()),
            None if fragment.is_empty() => root_key(self.platform.wall_clock()),
            None => fragment.to_owned(),
        }
    }

    fn format_top(&self, action: Action, message: &str) -> String {
        let Some(entry) = self.stack.last() else {
            return String::new();
        };

        format::format_line(
            &self.config,
            &self.platform,
            self.stack.len(),
            entry,
            action,
            message,
        )
    }
}

impl Default for NestedPerfLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for NestedPerfLogger {
    #[cfg_attr(test, mutants::skip)] // Nothing remains to observe after drop; dispose() is tested.
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Key for a root measurement that was not given one: microseconds since the Unix epoch,
/// rendered as fractional milliseconds.
fn root_key(wall_clock: DateTime<Utc>) -> String {
    let micros = wall_clock.timestamp_micros();

    format!("{}.{:03}", micros.div_euclid(1000), micros.rem_euclid(1000))
}
