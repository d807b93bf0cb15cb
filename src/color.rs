//! ANSI escape sequences used by the text renderer.

pub const RESET: &[u8] = b"\x1b[0m";
pub const RED: &[u8] = b"\x1b[31m";
pub const GREEN: &[u8] = b"\x1b[32m";
pub const YELLOW: &[u8] = b"\x1b[33m";
pub const CYAN: &[u8] = b"\x1b[36m";
pub const GRAY: &[u8] = b"\x1b[37m";
pub const UNDERLINE: &[u8] = b"\x1b[4m";

/// `color + data + reset`
pub fn colorize(data: &[u8], color: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(color.len() + data.len() + RESET.len());
    out.extend_from_slice(color);
    out.extend_from_slice(data);
    out.extend_from_slice(RESET);
    out
}
