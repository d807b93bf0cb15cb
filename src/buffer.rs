use std::io::{self, Write};

/// Append-only byte accumulator reused across records.
///
/// Only the owning [`Logger`](crate::Logger) touches it, and only while
/// holding its lock.
#[derive(Default, Debug)]
pub struct Buffer(Vec<u8>);

impl Buffer {
    /// Truncate to zero length, keeping the allocation.
    #[inline]
    pub fn reset(&mut self) {
        self.0.clear();
    }

    #[inline]
    pub fn append(&mut self, bytes: &[u8]) {
        self.0.extend_from_slice(bytes);
    }

    #[inline]
    pub fn append_byte(&mut self, byte: u8) {
        self.0.push(byte);
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn ends_with_newline(&self) -> bool {
        self.0.last() == Some(&b'\n')
    }
}

impl Write for Buffer {
    #[inline]
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.append(bytes);
        Ok(bytes.len())
    }

    #[inline]
    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.append(bytes);
        Ok(())
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_keeps_capacity_and_drops_content() {
        let mut buf = Buffer::default();
        buf.append(b"first record\n");
        let cap = buf.0.capacity();
        buf.reset();
        assert!(buf.as_bytes().is_empty());
        assert_eq!(buf.0.capacity(), cap);

        buf.append_byte(b'x');
        assert_eq!(buf.as_bytes(), b"x");
    }

    #[test]
    fn write_macro_appends() {
        let mut buf = Buffer::default();
        let _ = write!(buf, "{}<{}:{}>", "file", "main.rs", 7);
        buf.append_byte(b'\n');
        assert_eq!(buf.as_bytes(), b"file<main.rs:7>\n");
        assert!(buf.ends_with_newline());
    }
}
