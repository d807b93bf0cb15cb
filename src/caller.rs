use core::fmt;
use std::borrow::Cow;
use std::panic::Location;
use std::path::Path;

pub const UNKNOWN_FILE: &str = "unknown file";
pub const UNKNOWN_FUNCTION: &str = "unknown function";

/// Where a record was emitted from, before resolution.
#[derive(Clone, Copy, Debug)]
pub enum Site<'a> {
    /// Threaded through `#[track_caller]` from the public emitter that the
    /// application called.
    Tracked(&'static Location<'static>),
    /// Supplied with the record, e.g. by the `log` facade.
    #[allow(dead_code)]
    Explicit {
        file: Option<&'a str>,
        line: Option<u32>,
        module: Option<&'a str>,
    },
}

/// Resolved call site: `file<main.rs:12>@demo::main`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Caller<'a> {
    pub file: &'a str,
    pub line: u32,
    pub function: Cow<'a, str>,
}

impl<'a> Caller<'a> {
    /// Resolve a call site. Never fails: anything that cannot be found is
    /// reported with the `unknown ...` sentinels.
    ///
    /// Walks the stack for tracked sites, so only call this when the
    /// record actually shows file info.
    pub fn locate(site: Site<'a>) -> Self {
        match site {
            Site::Tracked(loc) => Self {
                file: base_name(loc.file()),
                line: loc.line(),
                function: function_at(loc)
                    .map_or(Cow::Borrowed(UNKNOWN_FUNCTION), Cow::Owned),
            },
            Site::Explicit { file, line, module } => Self {
                file: file.map_or(UNKNOWN_FILE, base_name),
                line: line.unwrap_or(0),
                function: Cow::Borrowed(module.map_or(UNKNOWN_FUNCTION, short_path)),
            },
        }
    }
}

impl fmt::Display for Caller<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file<{}:{}>@{}", self.file, self.line, self.function)
    }
}

fn base_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
}

/// Keep the last two `::` segments, `crate::a::b::run` -> `b::run`.
fn short_path(path: &str) -> &str {
    path.rmatch_indices("::")
        .nth(1)
        .map_or(path, |(i, _)| &path[i + 2..])
}

/// Name of the function containing `loc`, found by matching the source
/// position of each (possibly inlined) frame against it.
#[cfg(feature = "file-info")]
fn function_at(loc: &Location<'_>) -> Option<String> {
    let mut found: Option<String> = None;
    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            if found.is_some() || symbol.lineno() != Some(loc.line()) {
                return;
            }
            if symbol.filename().is_some_and(|f| f.ends_with(loc.file())) {
                found = symbol.name().map(|name| format!("{name:#}"));
            }
        });
        found.is_none()
    });
    found.map(|name| short_path(&name).to_owned())
}

#[cfg(not(feature = "file-info"))]
const fn function_at(_: &Location<'_>) -> Option<String> {
    None
}
