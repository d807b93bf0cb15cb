mod helpers;
use helpers::*;
use tintlog::{Config, Logger, ENV_COLOR, ENV_FILE_INFO, ENV_JSON, ENV_NO_COLOR, ENV_TIMESTAMP};

// Only test in this binary touching the environment.
#[test]
fn logger_from_env() {
    std::env::remove_var(ENV_NO_COLOR);
    std::env::set_var(ENV_COLOR, "false");
    std::env::set_var(ENV_TIMESTAMP, "off");
    std::env::set_var(ENV_FILE_INFO, "no");
    std::env::set_var(ENV_JSON, "1");

    let mem = Mem::default();
    let lg = Logger::from_env(mem.clone());
    assert_eq!(
        lg.config(),
        Config {
            color: false,
            timestamp: false,
            file_info: false,
            pretty_json: true,
        }
    );
    lg.error("from env");
    assert_eq!(mem.text(), "{\"type\":\"error\",\"message\":\"from env\"}\n");

    std::env::remove_var(ENV_COLOR);
    std::env::remove_var(ENV_JSON);
    std::env::set_var(ENV_NO_COLOR, "1");
    let c = Config::from_env();
    assert!(!c.color);
    assert!(!c.pretty_json);
    std::env::remove_var(ENV_NO_COLOR);
}
