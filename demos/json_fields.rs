use std::sync::Arc;

use tintlog::{Fields, Logger, Severity};

fn main() {
    let log = Arc::new(Logger::stdout());

    log.with_fields(Fields::new().with("name", "tauqeer").with("attempt", 1))
        .warnf(format_args!("ctx={}", "x"));

    log.with_pretty_json().with_file_info();
    log.with_fields([("name", "tauqeer")])
        .warnf(format_args!("ctx={}", "x"));

    // fields and message in one call, safe to use from many threads
    let handles: Vec<_> = (0..3)
        .map(|worker| {
            let log = Arc::clone(&log);
            std::thread::spawn(move || {
                log.log_with_fields(Severity::Success, "worker done", [("worker", worker)]);
            })
        })
        .collect();
    for h in handles {
        let _ = h.join();
    }
}
