use crate::caller::Site;
use crate::{Logger, Severity};

impl log::Log for Logger {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        let severity = match record.level() {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warn,
            log::Level::Info | log::Level::Debug | log::Level::Trace => Severity::Info,
        };
        let site = Site::Explicit {
            file: record.file(),
            line: record.line(),
            module: record.module_path(),
        };
        match record.args().as_str() {
            Some(s) => self.emit(severity, s, None, site),
            None => self.emit(severity, &record.args().to_string(), None, site),
        }
    }

    fn flush(&self) {
        Self::flush(self);
    }
}

impl Logger {
    /// Register as the global `log` backend. Every level is forwarded;
    /// `debug` and `trace` are written as info records.
    ///
    /// # Errors
    /// Fails if a global logger was already set.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(log::LevelFilter::Trace);
        Ok(())
    }
}
