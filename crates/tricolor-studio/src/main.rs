#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use tricolor_engine::device::DeviceInit;
    use tricolor_engine::logging::{init_logging, LoggingConfig};
    use tricolor_engine::window::{Runtime, RuntimeConfig};

    init_logging(LoggingConfig::default());

    if let Err(e) = Runtime::run(RuntimeConfig::default(), DeviceInit::default()) {
        log::error!("{e:#}");
        std::process::exit(-1);
    }
}

// The browser build starts from `tricolor_studio::start` instead.
#[cfg(target_arch = "wasm32")]
fn main() {}
