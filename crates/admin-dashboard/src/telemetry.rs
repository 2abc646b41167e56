use crate::config::TelemetryConfig;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Why the log subscriber could not be installed.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("APP_LOG_LEVEL {directives:?} is not a valid log filter")]
    InvalidFilter {
        directives: String,
        #[source]
        source: ParseError,
    },
    #[error("log subscriber already installed")]
    AlreadyInstalled(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// `RUST_LOG` when it parses, the configured level otherwise.
fn filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::InvalidFilter {
            directives: config.log_level.clone(),
            source,
        })
    })
}

/// Install the process-wide subscriber. Logs go to stderr; stdout belongs to
/// whatever renders the screens.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter(config)?)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(TelemetryError::AlreadyInstalled)
}
