use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "chroma_puzzle=debug,wgpu_core=warn"). When absent, `RUST_LOG` is consulted,
/// then `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Resolves the filter string that will be handed to `env_logger`.
    ///
    /// Returns `None` when neither the config nor the environment names one,
    /// in which case `default_level` applies.
    pub fn resolve_filter(&self, rust_log: Option<String>) -> Option<String> {
        self.env_filter
            .clone()
            .or(rust_log)
            .filter(|f| !f.trim().is_empty())
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Idempotent; later calls are ignored. Call early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.resolve_filter(std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(config.default_level);
                // wgpu is chatty at info; keep it quiet unless asked for.
                builder.filter_module("wgpu_core", log::LevelFilter::Warn);
                builder.filter_module("wgpu_hal", log::LevelFilter::Warn);
                builder.filter_module("naga", log::LevelFilter::Warn);
            }
        }

        builder.write_style(config.write_style);

        // try_init: a test harness may have installed a logger already.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins_over_environment() {
        let cfg = LoggingConfig {
            env_filter: Some("chroma_puzzle=trace".into()),
            ..Default::default()
        };
        assert_eq!(
            cfg.resolve_filter(Some("warn".into())).as_deref(),
            Some("chroma_puzzle=trace")
        );
    }

    #[test]
    fn environment_used_when_config_is_empty() {
        let cfg = LoggingConfig::default();
        assert_eq!(cfg.resolve_filter(Some("debug".into())).as_deref(), Some("debug"));
    }

    #[test]
    fn blank_filter_falls_back_to_default_level() {
        let cfg = LoggingConfig::default();
        assert_eq!(cfg.resolve_filter(Some("   ".into())), None);
        assert_eq!(cfg.resolve_filter(None), None);
    }
}
