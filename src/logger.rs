use core::fmt::{self, Arguments};
use std::io::{self, Write};
use std::panic::Location;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::buffer::Buffer;
use crate::caller::{Caller, Site};
use crate::color;
use crate::severity::{Prefix, Registry, Severity};
use crate::stamp::Stamp;
use crate::{Config, Fields};

/// A console logger writing one record per call to a sink.
///
/// Configuration calls take `&self` and return `&Self`, so a logger can be
/// configured fluently and shared behind an `Arc` or a `&'static` (see
/// [`Logger::leak`]):
///
/// ```
/// use tintlog::Logger;
///
/// let log = Logger::new(std::io::sink());
/// log.without_color().with_file_info().info("ready");
/// ```
///
/// # Fields and concurrency
/// [`Logger::with_fields`] and the emitter that follows are two separate
/// calls. Another thread that logs in between consumes the fields. Callers
/// that share a logger across threads must either serialize the
/// `with_fields` + emit pair themselves, give each context its own logger,
/// or use [`Logger::log_with_fields`], which does both under one lock.
///
/// # Write errors
/// Records are written with a single `write_all` followed by `flush`.
/// Failures of either are ignored and never retried.
pub struct Logger {
    inner: Mutex<Inner>,
    registry: &'static Registry,
}

struct Inner {
    config: Config,
    buf: Buffer,
    // consumed by the next record
    fields: Option<Fields>,
    sink: Box<dyn Write + Send>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("Logger")
            .field("config", &inner.config)
            .field("pending_fields", &inner.fields)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Logger writing to `sink` with timestamps and color on, file info
    /// and JSON off.
    pub fn new(sink: impl Write + Send + 'static) -> Self {
        Self::with_config(sink, Config::default())
    }

    /// Logger writing to `sink` with the given flags.
    pub fn with_config(sink: impl Write + Send + 'static, config: Config) -> Self {
        Self {
            inner: Mutex::new(Inner {
                config,
                buf: Buffer::default(),
                fields: None,
                sink: Box::new(sink),
            }),
            registry: Registry::global(),
        }
    }

    /// Logger configured from the environment, see [`Config::from_env`].
    pub fn from_env(sink: impl Write + Send + 'static) -> Self {
        Self::with_config(sink, Config::from_env())
    }

    /// Logger writing to stdout
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Logger writing to stderr
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Leak the logger, for process-lifetime use from any thread.
    #[must_use]
    pub fn leak(self) -> &'static Self {
        Box::leak(Box::new(self))
    }

    /// Current flags
    #[must_use]
    pub fn config(&self) -> Config {
        self.lock().config
    }

    // A panic while holding the lock can only come from the sink; the
    // state it guards stays consistent.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Flush the sink.
    pub fn flush(&self) {
        let _ = self.lock().sink.flush();
    }

    #[inline]
    fn set(&self, f: impl FnOnce(&mut Config)) -> &Self {
        f(&mut self.lock().config);
        self
    }

    // configuration
    /// Color severity prefixes, timestamps and file info
    pub fn with_color(&self) -> &Self {
        self.set(|c| c.color = true)
    }
    /// Plain text records
    pub fn without_color(&self) -> &Self {
        self.set(|c| c.color = false)
    }
    /// Prefix records with the current time
    pub fn with_timestamp(&self) -> &Self {
        self.set(|c| c.timestamp = true)
    }
    /// No timestamps
    pub fn without_timestamp(&self) -> &Self {
        self.set(|c| c.timestamp = false)
    }
    /// Annotate records with `file<name:line>@function`
    pub fn with_file_info(&self) -> &Self {
        self.set(|c| c.file_info = true)
    }
    /// No call-site info
    pub fn without_file_info(&self) -> &Self {
        self.set(|c| c.file_info = false)
    }
    /// Emit one JSON document per record. Colors are never applied to
    /// JSON records.
    pub fn with_pretty_json(&self) -> &Self {
        self.set(|c| c.pretty_json = true)
    }
    /// Back to text records
    pub fn without_pretty_json(&self) -> &Self {
        self.set(|c| c.pretty_json = false)
    }

    /// Attach `fields` to the next record only. Replaces fields that were
    /// attached but not yet consumed.
    ///
    /// See the type-level docs for the race with other threads.
    pub fn with_fields(&self, fields: impl Into<Fields>) -> &Self {
        self.lock().fields = Some(fields.into());
        self
    }

    /// Write one record.
    #[track_caller]
    pub fn log(&self, severity: Severity, message: &str) {
        self.emit(severity, message, None, Site::Tracked(Location::caller()));
    }

    /// Write one record from format arguments.
    #[track_caller]
    pub fn logf(&self, severity: Severity, args: Arguments<'_>) {
        match args.as_str() {
            Some(s) => self.log(severity, s),
            None => self.log(severity, &args.to_string()),
        }
    }

    /// Write one record carrying `fields`, without the window between
    /// [`Logger::with_fields`] and the emitter. Fields attached earlier
    /// through `with_fields` are discarded.
    #[track_caller]
    pub fn log_with_fields(&self, severity: Severity, message: &str, fields: impl Into<Fields>) {
        self.emit(
            severity,
            message,
            Some(fields.into()),
            Site::Tracked(Location::caller()),
        );
    }

    /// Info
    #[track_caller]
    pub fn info(&self, text: &str) {
        self.log(Severity::Info, text);
    }
    /// Info, formatted
    #[track_caller]
    pub fn infof(&self, args: Arguments<'_>) {
        self.logf(Severity::Info, args);
    }
    /// Warning
    #[track_caller]
    pub fn warn(&self, text: &str) {
        self.log(Severity::Warn, text);
    }
    /// Warning, formatted
    #[track_caller]
    pub fn warnf(&self, args: Arguments<'_>) {
        self.logf(Severity::Warn, args);
    }
    /// Error
    #[track_caller]
    pub fn error(&self, text: &str) {
        self.log(Severity::Error, text);
    }
    /// Error, formatted
    #[track_caller]
    pub fn errorf(&self, args: Arguments<'_>) {
        self.logf(Severity::Error, args);
    }
    /// Success
    #[track_caller]
    pub fn success(&self, text: &str) {
        self.log(Severity::Success, text);
    }
    /// Success, formatted
    #[track_caller]
    pub fn successf(&self, args: Arguments<'_>) {
        self.logf(Severity::Success, args);
    }
    /// Write a fatal record, then exit the process with status 1.
    ///
    /// The lock is released before exiting.
    #[track_caller]
    pub fn fatal(&self, text: &str) -> ! {
        self.log(Severity::Fatal, text);
        std::process::exit(1)
    }
    /// [`Logger::fatal`], formatted
    #[track_caller]
    pub fn fatalf(&self, args: Arguments<'_>) -> ! {
        self.logf(Severity::Fatal, args);
        std::process::exit(1)
    }

    /// Format and write one record. Holds the lock from buffer reset to
    /// sink flush.
    pub(crate) fn emit(
        &self,
        severity: Severity,
        message: &str,
        fields: Option<Fields>,
        site: Site<'_>,
    ) {
        let mut guard = self.lock();
        let inner = &mut *guard;

        // one-shot: whatever was attached is gone after this record
        let pending = inner.fields.take();
        let fields = fields.or(pending);

        inner.buf.reset();
        let cfg = inner.config;
        let stamp = cfg.timestamp.then(Stamp::now);
        let caller = cfg.file_info.then(|| Caller::locate(site));
        let data = fields.as_ref().and_then(Fields::renderable);

        if cfg.pretty_json {
            write_json(&mut inner.buf, severity, message, stamp, caller.as_ref(), data);
        } else {
            write_text(
                &mut inner.buf,
                self.registry.prefix(severity),
                cfg.color,
                message,
                stamp,
                caller.as_ref(),
                data,
            );
        }

        let _ = inner.sink.write_all(inner.buf.as_bytes());
        let _ = inner.sink.flush();
    }
}

fn strip_newline(message: &str) -> &str {
    message
        .strip_suffix('\n')
        .map_or(message, |m| m.strip_suffix('\r').unwrap_or(m))
}

/// `[ts] PREFIX [file<..>@fn] message {fields}\n`
fn write_text(
    buf: &mut Buffer,
    prefix: &Prefix,
    use_color: bool,
    message: &str,
    stamp: Option<Stamp>,
    caller: Option<&Caller<'_>>,
    data: Option<&Map<String, Value>>,
) {
    if let Some(stamp) = stamp {
        if use_color {
            buf.append(color::GRAY);
        }
        stamp.write_plain(&mut *buf);
        if use_color {
            buf.append(color::RESET);
        }
        buf.append_byte(b' ');
    }

    buf.append(prefix.select(use_color));

    if let Some(caller) = caller {
        buf.append_byte(b'[');
        if use_color {
            buf.append(color::RESET);
            buf.append(color::UNDERLINE);
        }
        let _ = write!(buf, "{caller}");
        if use_color {
            buf.append(color::RESET);
        }
        buf.append(b"] ");
    }

    match data.and_then(|m| serde_json::to_vec(m).ok()) {
        Some(json) => {
            // keep the fields on the same line as the message
            buf.append(strip_newline(message).as_bytes());
            buf.append_byte(b' ');
            buf.append(&json);
            buf.append_byte(b'\n');
        }
        None => {
            buf.append(message.as_bytes());
            if !buf.ends_with_newline() {
                buf.append_byte(b'\n');
            }
        }
    }
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<String>,
    #[serde(rename = "fileInfo", skip_serializing_if = "Option::is_none")]
    file_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a Map<String, Value>>,
}

/// `{"type":..,"message":..,"time":..,"fileInfo":..,"data":{..}}\n`
fn write_json(
    buf: &mut Buffer,
    severity: Severity,
    message: &str,
    stamp: Option<Stamp>,
    caller: Option<&Caller<'_>>,
    data: Option<&Map<String, Value>>,
) {
    let record = JsonRecord {
        kind: severity.as_str(),
        message: strip_newline(message),
        time: stamp.map(|s| s.rfc3339()),
        file_info: caller.map(ToString::to_string),
        data,
    };
    if serde_json::to_writer(&mut *buf, &record).is_err() {
        // drop the fields, keep the record
        buf.reset();
        let _ = serde_json::to_writer(&mut *buf, &JsonRecord { data: None, ..record });
    }
    buf.append_byte(b'\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(
        color: bool,
        message: &str,
        caller: Option<&Caller<'_>>,
        data: Option<&Map<String, Value>>,
    ) -> String {
        let mut buf = Buffer::default();
        let prefix = Registry::global().prefix(Severity::Info);
        write_text(&mut buf, prefix, color, message, None, caller, data);
        String::from_utf8(buf.as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn newline_is_never_doubled() {
        assert_eq!(text(false, "a", None, None), "INFO \u{2591} a\n");
        assert_eq!(text(false, "a\n", None, None), "INFO \u{2591} a\n");
        assert_eq!(text(false, "", None, None), "INFO \u{2591} \n");
    }

    #[test]
    fn fields_stay_on_the_message_line() {
        let fields = Fields::new().with("k", "v");
        let out = text(false, "done\n", None, fields.renderable());
        assert_eq!(out, "INFO \u{2591} done {\"k\":\"v\"}\n");
    }

    #[test]
    fn caller_block_is_underlined_with_color() {
        let caller = Caller {
            file: "main.rs",
            line: 3,
            function: "demo::main".into(),
        };
        let plain = text(false, "x", Some(&caller), None);
        assert_eq!(plain, "INFO \u{2591} [file<main.rs:3>@demo::main] x\n");

        let colored = text(true, "x", Some(&caller), None);
        assert!(colored.contains("[\x1b[0m\x1b[4mfile<main.rs:3>@demo::main\x1b[0m] x\n"));
    }

    #[test]
    fn json_record_omits_disabled_keys() {
        let mut buf = Buffer::default();
        write_json(&mut buf, Severity::Warn, "", None, None, None);
        assert_eq!(buf.as_bytes(), b"{\"type\":\"warn\"}\n");

        buf.reset();
        let stamp = Stamp::from_unix_utc(0);
        write_json(&mut buf, Severity::Error, "boom\n", Some(stamp), None, None);
        assert_eq!(
            buf.as_bytes(),
            &b"{\"type\":\"error\",\"message\":\"boom\",\"time\":\"1970-01-01T00:00:00Z\"}\n"[..]
        );
    }
}
