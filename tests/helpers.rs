#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tintlog::Logger;

#[derive(Clone, Default)]
pub struct Mem(Arc<Mutex<Vec<u8>>>);
impl Write for Mem {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(bytes);
        Ok(bytes.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
impl Mem {
    /// Everything written so far
    pub fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.text()
            .lines()
            .map(std::string::ToString::to_string)
            .collect()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

/// Logger on a memory sink with deterministic output (no time, no color).
pub fn plain_logger() -> (Logger, Mem) {
    let mem = Mem::default();
    let lg = Logger::new(mem.clone());
    lg.without_timestamp().without_color();
    (lg, mem)
}

pub fn has_ansi(s: &str) -> bool {
    s.contains("\u{1b}[")
}
