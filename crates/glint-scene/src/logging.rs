use std::sync::Once;

/// Logger configuration for demo binaries.
///
/// `filter` follows `env_logger` syntax, e.g. `"info"` or
/// `"glint_scene=debug,glint_math=info"`. When unset, `RUST_LOG` applies,
/// falling back to info level.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    pub filter: Option<String>,
}

static INIT: Once = Once::new();

/// Installs the global logger.
///
/// Idempotent; only the first call takes effect. Intended early in `main`.
pub fn init(config: LogConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.init();
        log::debug!("logger installed");
    });
}
