#![warn(missing_docs, unsafe_code)]
//! A small thread-safe console logger.
//!
//! Each call writes exactly one record: a (optionally colored) text line
//!
//! ```text
//! [2024/1/5 9:3:7] INFO ░ [file<main.rs:12>@demo::main] listening {"port":8080}
//! ```
//!
//! or, in JSON mode, one JSON document per line. Records may carry a
//! timestamp, the call site and a one-shot set of [`Fields`].
//!
//! ```
//! use tintlog::{Fields, Logger};
//!
//! let log = Logger::new(std::io::stdout());
//! log.with_timestamp().info("OK I am blue.");
//! log.with_fields(Fields::new().with("name", "tauqeer"))
//!     .warnf(format_args!("ctx={}", "x"));
//! tintlog::success!(log, "{} jobs done", 3);
//! ```
//!
//! # Features
//! - `file-info` (default): resolve the calling function name for
//!   `file<..>@fn` annotations. Without it the function is reported as
//!   `unknown function`. The name is found by matching the call site's
//!   line against the stack, which needs line tables: builds without debug
//!   info (the default `release` profile) also report `unknown function`.
//!   Keep them with
//!   ```toml
//!   [profile.release]
//!   debug = "line-tables-only"
//!   ```
//! - `localtime` (default): timestamps in local time. Without it they are
//!   UTC. When the local offset cannot be read (some platforms refuse once
//!   the process is multithreaded) the record falls back to UTC.
//! - `log`: use a [`Logger`] as the backend of the `log` facade.

mod buffer;
mod caller;
mod color;
mod config;
#[cfg(feature = "log")]
mod facade;
mod fields;
mod logger;
mod severity;
mod stamp;

pub use config::{Config, ENV_COLOR, ENV_FILE_INFO, ENV_JSON, ENV_NO_COLOR, ENV_TIMESTAMP};
pub use fields::Fields;
pub use logger::Logger;
pub use severity::{ParseSeverityError, Prefix, Registry, Severity};

/// Emit a record with the given severity
#[macro_export]
macro_rules! __tintlog_log { ($lg:expr, $sev:expr, $($t:tt)+) => {{ $lg.logf($sev, format_args!($($t)+)) }} }
/// info
#[macro_export]
macro_rules! info    { ($lg:expr, $($t:tt)+) => { $crate::__tintlog_log!($lg, $crate::Severity::Info,    $($t)+) } }
/// warning
#[macro_export]
macro_rules! warn    { ($lg:expr, $($t:tt)+) => { $crate::__tintlog_log!($lg, $crate::Severity::Warn,    $($t)+) } }
/// error
#[macro_export]
macro_rules! error   { ($lg:expr, $($t:tt)+) => { $crate::__tintlog_log!($lg, $crate::Severity::Error,   $($t)+) } }
/// success
#[macro_export]
macro_rules! success { ($lg:expr, $($t:tt)+) => { $crate::__tintlog_log!($lg, $crate::Severity::Success, $($t)+) } }
/// fatal, exits the process with status 1 after the record is written
#[macro_export]
macro_rules! fatal   { ($lg:expr, $($t:tt)+) => { $lg.fatalf(format_args!($($t)+)) } }
