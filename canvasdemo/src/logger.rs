/// set up env_logger, `RUST_LOG` takes precedence over `level`
///
/// Calling this more than once keeps the first logger.
pub fn init(level: log::LevelFilter) {
    let res = env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .try_init();

    if res.is_err() {
        log::debug!("logger already initialized");
    }
}
