mod helpers;
use helpers::*;
use std::sync::Arc;
use tintlog::{Config, Logger};

#[test]
fn defaults() {
    let lg = Logger::new(std::io::sink());
    assert_eq!(
        lg.config(),
        Config {
            color: true,
            timestamp: true,
            file_info: false,
            pretty_json: false,
        }
    );
}

#[test]
fn last_write_wins() {
    let lg = Logger::new(std::io::sink());
    lg.without_color()
        .with_color()
        .without_color()
        .with_file_info()
        .without_timestamp()
        .with_timestamp()
        .with_pretty_json()
        .without_pretty_json()
        .with_pretty_json();
    assert_eq!(
        lg.config(),
        Config {
            color: false,
            timestamp: true,
            file_info: true,
            pretty_json: true,
        }
    );
}

#[test]
fn chaining_returns_the_same_logger() {
    let lg = Logger::new(std::io::sink());
    assert!(std::ptr::eq(lg.with_color(), &lg));
    assert!(std::ptr::eq(lg.with_fields([("a", 1)]), &lg));
}

#[test]
fn with_config_and_shared_handles() {
    let mem = Mem::default();
    let lg = Arc::new(Logger::with_config(
        mem.clone(),
        Config {
            color: false,
            timestamp: false,
            file_info: false,
            pretty_json: false,
        },
    ));
    let other = Arc::clone(&lg);
    std::thread::spawn(move || other.info("from thread"))
        .join()
        .unwrap();
    lg.warn("from main");
    assert_eq!(
        mem.lines(),
        ["INFO \u{2591} from thread", "WARN \u{2591} from main"]
    );
}

#[test]
fn leaked_logger_is_static() {
    let mem = Mem::default();
    let lg: &'static Logger = Logger::new(mem.clone()).leak();
    lg.without_color().without_timestamp().success("leaked");
    assert_eq!(mem.text(), "SUCC \u{2591} leaked\n");
}

#[test]
fn debug_shows_config() {
    let (lg, _mem) = plain_logger();
    let dbg = format!("{lg:?}");
    assert!(dbg.contains("color: false"), "{dbg}");
}
