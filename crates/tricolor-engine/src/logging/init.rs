use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "tricolor_engine=debug"). On the web target only the most verbose level
/// named in the filter is honored, since `console_log` has no per-module
/// filtering.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    #[cfg(not(target_arch = "wasm32"))]
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            #[cfg(not(target_arch = "wasm32"))]
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main` (or the wasm start hook).
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        install(config);
        log::debug!("logging initialized");
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn install(config: LoggingConfig) {
    let mut builder = env_logger::Builder::new();

    if let Some(filter) = config.env_filter {
        builder.parse_filters(&filter);
    } else if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }

    builder.write_style(config.write_style);

    // Another logger may already be installed by an embedding host or a test harness.
    if let Err(e) = builder.try_init() {
        eprintln!("logger already installed: {e}");
    }
}

#[cfg(target_arch = "wasm32")]
fn install(config: LoggingConfig) {
    let filter = config
        .env_filter
        .as_deref()
        .map(console_level)
        .unwrap_or(log::LevelFilter::Info);

    // `off` installs nothing; log macros are no-ops without a logger.
    let Some(level) = filter.to_level() else { return };

    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"logger already installed".into());
    }
}

/// Picks the most verbose level mentioned in an `env_logger`-style filter.
#[cfg(any(test, target_arch = "wasm32"))]
fn console_level(filter: &str) -> log::LevelFilter {
    filter
        .split(',')
        .filter_map(|directive| {
            let level = directive.rsplit('=').next()?.trim();
            level.parse::<log::LevelFilter>().ok()
        })
        .max()
        .unwrap_or(log::LevelFilter::Info)
}
