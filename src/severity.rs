use core::fmt;
use std::sync::OnceLock;

use crate::color;

/// Severity of a record
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum Severity {
    /// Info
    Info = 0,
    /// Warn
    Warn,
    /// Error
    Error,
    /// Fatal, the process exits after the record is written
    Fatal,
    /// Success
    Success,
}

impl Severity {
    /// Every severity, in registry order.
    pub const ALL: [Self; 5] = [
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
        Self::Success,
    ];

    /// Lowercase label, used as the `type` of JSON records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
            Self::Success => "success",
        }
    }

    const fn plain_prefix(self) -> &'static str {
        match self {
            Self::Info => "INFO \u{2591} ",
            Self::Warn => "WARN \u{2591} ",
            Self::Error => "ERRO \u{2591} ",
            Self::Fatal => "FATA \u{2591} ",
            Self::Success => "SUCC \u{2591} ",
        }
    }

    const fn color(self) -> &'static [u8] {
        match self {
            Self::Info => color::CYAN,
            Self::Warn => color::YELLOW,
            Self::Error | Self::Fatal => color::RED,
            Self::Success => color::GREEN,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known severity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity `{0}` (expected info, warn, error, fatal or success)")]
pub struct ParseSeverityError(String);

impl core::str::FromStr for Severity {
    type Err = ParseSeverityError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            "success" => Ok(Self::Success),
            _ => Err(ParseSeverityError(s.to_owned())),
        }
    }
}

/// Plain and colorized prefix of one severity
#[derive(Debug)]
pub struct Prefix {
    /// e.g. `INFO ░ `
    pub plain: Box<[u8]>,
    /// The plain prefix wrapped in the severity color and a reset
    pub colored: Box<[u8]>,
}

impl Prefix {
    fn of(severity: Severity) -> Self {
        let plain = severity.plain_prefix().as_bytes();
        Self {
            plain: plain.into(),
            colored: color::colorize(plain, severity.color()).into_boxed_slice(),
        }
    }

    /// Picks the colored or plain variant.
    #[inline]
    #[must_use]
    pub fn select(&self, colored: bool) -> &[u8] {
        if colored {
            &self.colored
        } else {
            &self.plain
        }
    }
}

/// Immutable severity to prefix table.
#[derive(Debug)]
pub struct Registry {
    prefixes: [Prefix; 5],
}

impl Registry {
    fn build() -> Self {
        Self {
            prefixes: Severity::ALL.map(Prefix::of),
        }
    }

    /// The process-wide table, built on first use and never mutated.
    pub fn global() -> &'static Self {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(Self::build)
    }

    /// Prefix for the given severity
    #[inline]
    #[must_use]
    pub fn prefix(&self, severity: Severity) -> &Prefix {
        &self.prefixes[severity as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colored_prefix_wraps_plain_prefix() {
        let reg = Registry::global();
        for s in Severity::ALL {
            let p = reg.prefix(s);
            assert!(p.colored.starts_with(b"\x1b["));
            assert!(p.colored.ends_with(color::RESET));
            let inner = &p.colored[s.color().len()..p.colored.len() - color::RESET.len()];
            assert_eq!(inner, &*p.plain);
        }
        assert_eq!(&*reg.prefix(Severity::Error).plain, "ERRO \u{2591} ".as_bytes());
        assert_eq!(&*reg.prefix(Severity::Success).plain, "SUCC \u{2591} ".as_bytes());
    }

    #[test]
    fn registry_is_shared() {
        assert!(std::ptr::eq(Registry::global(), Registry::global()));
    }

    #[test]
    fn parse_severity() {
        assert_eq!("INFO".parse::<Severity>(), Ok(Severity::Info));
        assert_eq!("warning".parse::<Severity>(), Ok(Severity::Warn));
        assert_eq!("Success".parse::<Severity>(), Ok(Severity::Success));
        let err = "verbose".parse::<Severity>().unwrap_err();
        assert!(err.to_string().contains("verbose"));
    }
}
