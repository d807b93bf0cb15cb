use tintlog::Logger;

fn main() {
    // Flags can also come from the environment:
    //   TINTLOG_COLOR=0 TINTLOG_FILE_INFO=1 TINTLOG_JSON=1
    let log = Logger::from_env(std::io::stdout());
    log.with_timestamp();

    log.info("I am an information.");
    log.infof(format_args!("I am an information ({}={})", "key", "value"));
    log.warn("I am a warning");
    log.warnf(format_args!("I am an warning ({}={})", "key", "value"));
    log.error("I am an error.");
    log.errorf(format_args!("I am an error ({}={})", "key", "value"));
    tintlog::success!(log, "{} examples printed", 6);

    log.with_file_info().info("with call-site info");
    log.without_file_info().without_color().info("without color");
}
