/// Initialize env_logger. `RUST_LOG` is applied on top of these defaults.
pub fn init_logger() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        // winit logs every event source at debug level
        .filter_module("winit", log::LevelFilter::Warn)
        .filter_module("calloop", log::LevelFilter::Warn)
        .format_timestamp_millis()
        .parse_default_env()
        .init();
}
