use std::sync::Once;

use log::LevelFilter;

/// Crates whose `info`/`debug` output drowns the demo's own lines.
const QUIET_CRATES: &[&str] = &["winit", "glutin", "glutin_winit", "calloop", "sctk"];

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "prism_engine=debug,winit=warn"). When it is `None`, `RUST_LOG` is
/// consulted, then `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. Call early in `main`, before the runtime
/// starts creating windows.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        let filter = config
            .env_filter
            .or_else(|| std::env::var("RUST_LOG").ok());

        match filter {
            Some(filter) => {
                // Windowing crates stay at warn unless the filter asks for them.
                for name in QUIET_CRATES.iter().filter(|n| !filter.contains(*n)) {
                    builder.filter_module(name, LevelFilter::Warn);
                }
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(config.default_level);
                for name in QUIET_CRATES {
                    builder.filter_module(name, LevelFilter::Warn);
                }
            }
        }

        builder.write_style(config.write_style);
        builder.init();

        log::debug!("logging initialized");
    });
}
