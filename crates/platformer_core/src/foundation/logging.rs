//! Logging utilities and structured logging support
//!
//! Library code only talks to the `log` facade. Binaries pick the backend by
//! calling one of the initializers below once at startup.

pub use log::{debug, info, warn, error, trace, LevelFilter};

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system with a default level
///
/// `RUST_LOG` still overrides the default when it is set.
pub fn init_with_level(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
