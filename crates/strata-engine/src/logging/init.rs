use std::sync::Once;

use log::LevelFilter;

/// Level used when neither an explicit filter nor `RUST_LOG` is set.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Logger configuration.
///
/// `env_filter` uses `env_logger` directives, e.g. `"strata_scene=debug,winit=warn"`
/// to see node registration without the event-loop chatter.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { env_filter: Some(filter.into()), ..Self::default() }
    }

    /// Directives to parse: the explicit filter, else `env` (the `RUST_LOG` value).
    /// Blank values count as unset. `None` means [`DEFAULT_LEVEL`].
    fn directives(&self, env: Option<String>) -> Option<String> {
        let set = |d: &String| !d.trim().is_empty();
        self.env_filter.clone().filter(set).or_else(|| env.filter(set))
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the `log` backend. Only the first call has an effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.directives(std::env::var("RUST_LOG").ok()) {
            Some(directives) => {
                builder.parse_filters(&directives);
            }
            None => {
                builder.filter_level(DEFAULT_LEVEL);
            }
        }

        builder.write_style(config.write_style);
        builder.init();

        log::debug!("logging initialized");
    });
}
