//! Rendering of stack entries into delimited text lines.
//!
//! Every line has the same eight columns as [`HEADERS`], in the same order. A column whose
//! content is switched off or empty is still present, just empty, so the column count never
//! changes between lines.

use std::fmt;

use chrono::{DateTime, Local, Utc};

use crate::Config;
use crate::entry::Entry;
use crate::pal::Platform;

/// Column names, in the order in which [`format_line()`] emits the matching fields.
pub(crate) const HEADERS: [&str; 8] = [
    "TimeStamp",
    "Level Indicator",
    "Level",
    "Key",
    "Action",
    "Elapsed Time",
    "Log Message",
    "Data",
];

const INDICATOR_MARKER: &str = "-";
const INDICATOR_TERMINATOR: &str = ">";
const DATA_QUOTE: char = '"';

/// What happened to the measurement that a line describes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Action {
    /// A measurement was pushed onto the stack.
    Start,

    /// An intermediate report on a measurement that keeps running.
    Log,

    /// A measurement was stopped and popped off the stack.
    Stop,
}

impl Action {
    /// The label written into the action column.
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Log => "Log",
            Self::Stop => "Stop",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub(crate) fn headers(config: &Config) -> String {
    HEADERS.join(config.delimiter())
}

/// Renders one line for `entry`, which is on top of a stack that is `depth` entries deep.
///
/// Returns an empty string if `depth` is zero.
pub(crate) fn format_line(
    config: &Config,
    platform: &impl Platform,
    depth: usize,
    entry: &Entry,
    action: Action,
    message: &str,
) -> String {
    if depth == 0 {
        return String::new();
    }

    // The time, indicator and level columns ignore their toggles and are always emitted.
    let timestamp = format_timestamp(platform.wall_clock());
    let indicator = format!(
        "{}{INDICATOR_TERMINATOR}",
        INDICATOR_MARKER.repeat(depth)
    );
    let level = format!("{depth:04}");

    let elapsed_ms = entry.elapsed(platform).as_millis().to_string();

    let has_data = !entry.data().is_empty();
    let data = if has_data {
        format!(
            "{DATA_QUOTE}{}{DATA_QUOTE}",
            entry.data().join(config.data_delimiter())
        )
    } else {
        String::new()
    };

    let fields = [
        field(config, &timestamp, true),
        field(config, &indicator, true),
        field(config, &level, true),
        field(config, entry.key(), true),
        field(config, action.label(), config.log_action()),
        field(config, &elapsed_ms, config.log_measure()),
        field(config, message, config.log_message()),
        field(config, &data, config.log_data() && has_data),
    ];

    fields.join(config.delimiter())
}

/// Local wall-clock time as `hh.mm.ss.fff` on a 12-hour clock.
pub(crate) fn format_timestamp(wall_clock: DateTime<Utc>) -> String {
    wall_clock
        .with_timezone(&Local)
        .format("%I.%M.%S%.3f")
        .to_string()
}

/// Returns the content of a field, or an empty string if the field is switched off or is
/// empty and the configuration does not ask for fixed columns.
fn field<'a>(config: &Config, content: &'a str, enabled: bool) -> &'a str {
    let keep = config.fixed_columns() || !content.is_empty();

    if keep && enabled { content } else { "" }
}
