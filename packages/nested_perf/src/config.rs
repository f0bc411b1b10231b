//! Output configuration for produced log lines.

use std::fmt;

use thiserror::Error;

/// Controls which fields a [`NestedPerfLogger`][crate::NestedPerfLogger] emits and which
/// delimiters it uses.
///
/// A configuration is immutable once built. To change the output of a logger, build a new
/// configuration and pass it to [`NestedPerfLogger::reconfigure()`][crate::NestedPerfLogger::reconfigure].
///
/// The default configuration emits every field, separates fields with `,`, data items
/// with `|` and key fragments with `.`, and does not use fixed columns.
///
/// # Examples
///
/// ```
/// use nested_perf::Config;
///
/// let config = Config::builder()
///     .delimiter("\t")
///     .log_data(false)
///     .fixed_columns(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.delimiter(), "\t");
/// assert!(!config.log_data());
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    log_time: bool,
    log_level: bool,
    log_indicator: bool,
    log_action: bool,
    log_measure: bool,
    log_message: bool,
    log_data: bool,
    delimiter: String,
    data_delimiter: String,
    ns_delimiter: String,
    fixed_columns: bool,
}

impl Config {
    /// Starts building a configuration from the default values.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Whether the timestamp is requested.
    ///
    /// The timestamp column is currently emitted on every line regardless of this flag.
    #[must_use]
    pub fn log_time(&self) -> bool {
        self.log_time
    }

    /// Whether the numeric nesting level is requested.
    ///
    /// The level column is currently emitted on every line regardless of this flag.
    #[must_use]
    pub fn log_level(&self) -> bool {
        self.log_level
    }

    /// Whether the visual nesting indicator is requested.
    ///
    /// The indicator column is currently emitted on every line regardless of this flag.
    #[must_use]
    pub fn log_indicator(&self) -> bool {
        self.log_indicator
    }

    /// Whether the action label (`Start`, `Log`, `Stop`) is emitted.
    #[must_use]
    pub fn log_action(&self) -> bool {
        self.log_action
    }

    /// Whether the elapsed milliseconds are emitted.
    #[must_use]
    pub fn log_measure(&self) -> bool {
        self.log_measure
    }

    /// Whether the caller-supplied message is emitted.
    #[must_use]
    pub fn log_message(&self) -> bool {
        self.log_message
    }

    /// Whether the data captured at start time is emitted.
    #[must_use]
    pub fn log_data(&self) -> bool {
        self.log_data
    }

    /// Separator placed between fields of a line.
    #[must_use]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Separator placed between data items inside the quoted data field.
    #[must_use]
    pub fn data_delimiter(&self) -> &str {
        &self.data_delimiter
    }

    /// Separator placed between a parent key and a child key fragment.
    #[must_use]
    pub fn ns_delimiter(&self) -> &str {
        &self.ns_delimiter
    }

    /// Whether field contents are emitted without checking them for emptiness.
    #[must_use]
    pub fn fixed_columns(&self) -> bool {
        self.fixed_columns
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_time: true,
            log_level: true,
            log_indicator: true,
            log_action: true,
            log_measure: true,
            log_message: true,
            log_data: true,
            delimiter: ",".to_owned(),
            data_delimiter: "|".to_owned(),
            ns_delimiter: ".".to_owned(),
            fixed_columns: false,
        }
    }
}

/// Creates instances of [`Config`].
///
/// Every setting is optional and starts at its default value.
///
/// Use `Config::builder()` to create a new instance of this builder.
#[derive(Debug)]
#[must_use]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Requests the timestamp column. Currently has no effect on output.
    pub fn log_time(mut self, enabled: bool) -> Self {
        self.config.log_time = enabled;
        self
    }

    /// Requests the numeric level column. Currently has no effect on output.
    pub fn log_level(mut self, enabled: bool) -> Self {
        self.config.log_level = enabled;
        self
    }

    /// Requests the nesting indicator column. Currently has no effect on output.
    pub fn log_indicator(mut self, enabled: bool) -> Self {
        self.config.log_indicator = enabled;
        self
    }

    /// Enables or disables the action label column.
    pub fn log_action(mut self, enabled: bool) -> Self {
        self.config.log_action = enabled;
        self
    }

    /// Enables or disables the elapsed milliseconds column.
    pub fn log_measure(mut self, enabled: bool) -> Self {
        self.config.log_measure = enabled;
        self
    }

    /// Enables or disables the message column.
    pub fn log_message(mut self, enabled: bool) -> Self {
        self.config.log_message = enabled;
        self
    }

    /// Enables or disables the data column.
    pub fn log_data(mut self, enabled: bool) -> Self {
        self.config.log_data = enabled;
        self
    }

    /// Sets the field separator. Must not be empty.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.config.delimiter = delimiter.into();
        self
    }

    /// Sets the separator between data items. May be empty.
    pub fn data_delimiter(mut self, data_delimiter: impl Into<String>) -> Self {
        self.config.data_delimiter = data_delimiter.into();
        self
    }

    /// Sets the separator between key fragments. Must not be empty.
    pub fn ns_delimiter(mut self, ns_delimiter: impl Into<String>) -> Self {
        self.config.ns_delimiter = ns_delimiter.into();
        self
    }

    /// Keeps every field's content even when it is empty.
    pub fn fixed_columns(mut self, enabled: bool) -> Self {
        self.config.fixed_columns = enabled;
        self
    }

    /// Validates the settings and creates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyDelimiter`] if the field delimiter or the namespace
    /// delimiter is empty.
    pub fn build(self) -> Result<Config, ConfigError> {
        if self.config.delimiter.is_empty() {
            return Err(ConfigError::EmptyDelimiter {
                delimiter: DelimiterKind::Field,
            });
        }

        if self.config.ns_delimiter.is_empty() {
            return Err(ConfigError::EmptyDelimiter {
                delimiter: DelimiterKind::Namespace,
            });
        }

        Ok(self.config)
    }
}

/// Identifies one of the configurable delimiters.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum DelimiterKind {
    /// Separates the fields of a line.
    Field,

    /// Separates key fragments.
    Namespace,
}

impl fmt::Display for DelimiterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field => write!(f, "field"),
            Self::Namespace => write!(f, "namespace"),
        }
    }
}

/// Reasons why a [`Config`] cannot be built.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// A delimiter that output parsing depends on was set to the empty string.
    #[error("the {delimiter} delimiter must not be empty")]
    EmptyDelimiter {
        /// The delimiter that was empty.
        delimiter: DelimiterKind,
    },
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn default_emits_everything() {
        let config = Config::default();

        assert!(config.log_time());
        assert!(config.log_level());
        assert!(config.log_indicator());
        assert!(config.log_action());
        assert!(config.log_measure());
        assert!(config.log_message());
        assert!(config.log_data());
        assert!(!config.fixed_columns());
    }

    #[test]
    fn default_delimiters() {
        let config = Config::default();

        assert_eq!(config.delimiter(), ",");
        assert_eq!(config.data_delimiter(), "|");
        assert_eq!(config.ns_delimiter(), ".");
    }

    #[test]
    fn builder_without_changes_matches_default() {
        let config = Config::builder().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn builder_applies_every_setting() {
        let config = Config::builder()
            .log_time(false)
            .log_level(false)
            .log_indicator(false)
            .log_action(false)
            .log_measure(false)
            .log_message(false)
            .log_data(false)
            .delimiter(";")
            .data_delimiter("/")
            .ns_delimiter("::")
            .fixed_columns(true)
            .build()
            .unwrap();

        assert!(!config.log_time());
        assert!(!config.log_level());
        assert!(!config.log_indicator());
        assert!(!config.log_action());
        assert!(!config.log_measure());
        assert!(!config.log_message());
        assert!(!config.log_data());
        assert_eq!(config.delimiter(), ";");
        assert_eq!(config.data_delimiter(), "/");
        assert_eq!(config.ns_delimiter(), "::");
        assert!(config.fixed_columns());
    }

    #[test]
    fn empty_field_delimiter_is_rejected() {
        let result = Config::builder().delimiter("").build();

        assert_eq!(
            result,
            Err(ConfigError::EmptyDelimiter {
                delimiter: DelimiterKind::Field
            })
        );
    }

    #[test]
    fn empty_ns_delimiter_is_rejected() {
        let result = Config::builder().ns_delimiter("").build();

        assert_eq!(
            result,
            Err(ConfigError::EmptyDelimiter {
                delimiter: DelimiterKind::Namespace
            })
        );
    }

    #[test]
    fn empty_data_delimiter_is_accepted() {
        let config = Config::builder().data_delimiter("").build().unwrap();
        assert_eq!(config.data_delimiter(), "");
    }

    #[test]
    fn error_message_names_the_delimiter() {
        let error = ConfigError::EmptyDelimiter {
            delimiter: DelimiterKind::Namespace,
        };

        assert_eq!(error.to_string(), "the namespace delimiter must not be empty");
    }
}
