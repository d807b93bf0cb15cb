/// Enables color (`1`/`true`/`yes`/`on` or `0`/`false`/`no`/`off`)
pub const ENV_COLOR: &str = "TINTLOG_COLOR";
/// Enables timestamps
pub const ENV_TIMESTAMP: &str = "TINTLOG_TIMESTAMP";
/// Enables `file<..>@fn` call-site info
pub const ENV_FILE_INFO: &str = "TINTLOG_FILE_INFO";
/// Enables JSON records
pub const ENV_JSON: &str = "TINTLOG_JSON";
/// <https://no-color.org>: any non-empty value turns color off by default
pub const ENV_NO_COLOR: &str = "NO_COLOR";

/// Snapshot of a logger's output flags.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Config {
    /// ANSI colors in text records
    pub color: bool,
    /// Leading timestamp (`time` in JSON records)
    pub timestamp: bool,
    /// Call-site info (`fileInfo` in JSON records)
    pub file_info: bool,
    /// JSON records instead of text
    pub pretty_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            timestamp: true,
            file_info: false,
            pretty_json: false,
        }
    }
}

impl Config {
    /// Defaults overridden by the `TINTLOG_*` and `NO_COLOR` environment
    /// variables. Unparseable values are ignored.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with a custom variable source.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        let read = |key: &str, default: bool| {
            lookup(key)
                .as_deref()
                .and_then(parse_bool)
                .unwrap_or(default)
        };
        let no_color = lookup(ENV_NO_COLOR).is_some_and(|v| !v.is_empty());
        Self {
            color: read(ENV_COLOR, d.color && !no_color),
            timestamp: read(ENV_TIMESTAMP, d.timestamp),
            file_info: read(ENV_FILE_INFO, d.file_info),
            pretty_json: read(ENV_JSON, d.pretty_json),
        }
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    let s = s.trim();
    if s == "1" || ["true", "yes", "on"].iter().any(|t| s.eq_ignore_ascii_case(t)) {
        Some(true)
    } else if s == "0" || ["false", "no", "off"].iter().any(|t| s.eq_ignore_ascii_case(t)) {
        Some(false)
    } else {
        None
    }
}
