#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Nested timing instrumentation that renders each measurement event as a delimited text line.
//!
//! Mark the start and stop of named operations, possibly nested, and get back one line per
//! call carrying a timestamp, the nesting depth, a hierarchical key, the elapsed time, a message
//! and optional free-form data. Lines are returned as strings; writing them to a console, file
//! or telemetry pipeline is up to the caller.
//!
//! The core functionality includes:
//! - [`NestedPerfLogger`] - Owns the stack of active measurements and produces lines
//! - [`Config`] - Selects which fields are emitted and which delimiters are used
//!
//! # Simple usage
//!
//! ```
//! use std::thread;
//! use std::time::Duration;
//!
//! use nested_perf::NestedPerfLogger;
//!
//! let mut logger = NestedPerfLogger::new();
//!
//! println!("{}", logger.log_headers());
//! println!("{}", logger.start("request", "handling request"));
//! thread::sleep(Duration::from_millis(5));
//! println!("{}", logger.log("parsed headers"));
//! println!("{}", logger.stop("request handled"));
//! ```
//!
//! # Line format
//!
//! Every line has eight fields, matching the row returned by
//! [`log_headers()`][NestedPerfLogger::log_headers]:
//!
//! ```text
//! TimeStamp,Level Indicator,Level,Key,Action,Elapsed Time,Log Message,Data
//! 01.15.09.265,-->,0002,Product.Item,Stop,150,done,"Shoe|42"
//! ```
//!
//! * `TimeStamp` - local wall-clock time as `hh.mm.ss.fff`.
//! * `Level Indicator` - one `-` per nesting level followed by `>`.
//! * `Level` - the nesting level, zero-padded to four digits.
//! * `Key` - the hierarchical key of the measurement.
//! * `Action` - `Start`, `Log` or `Stop`.
//! * `Elapsed Time` - whole milliseconds since the measurement started.
//! * `Log Message` - the message passed to the call.
//! * `Data` - the data captured at start, joined by the data delimiter and wrapped in quotes.
//!
//! Switched-off or empty fields are left empty but keep their slot, so the column count is
//! the same on every line.
//!
//! # Nesting
//!
//! ```
//! use nested_perf::NestedPerfLogger;
//!
//! let mut logger = NestedPerfLogger::new();
//!
//! logger.start("Product", "");
//! logger.start_with_data("Item", "", ["Steve Madden Men's Jagwar"]);
//! logger.start("", "");
//! assert_eq!(logger.current_key(), Some("Product.Item"));
//! assert_eq!(logger.depth(), 3);
//!
//! while !logger.is_empty() {
//!     println!("{}", logger.stop("done"));
//! }
//! ```
//!
//! # Threading
//!
//! A logger tracks one logical call chain. Give each thread or request its own logger.

mod config;
mod entry;
mod format;
mod logger;
mod pal;
mod stopwatch;

pub use config::{Config, ConfigBuilder, ConfigError, DelimiterKind};
pub use logger::NestedPerfLogger;
