use std::env;
use std::fmt;
use std::time::Duration;

use reqwest::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_BANNER_MS: u64 = 3000;

/// Distinguishes runtime behavior for different stages of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the dashboard.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub backend: BackendConfig,
    pub banner: BannerConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let base_url = env::var("DASHBOARD_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let backend = BackendConfig::new(base_url)?;

        let request_timeout = match env::var("DASHBOARD_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => Some(parse_timeout(&raw)?),
            Err(_) => None,
        };

        let dismiss_after = env::var("DASHBOARD_BANNER_MS")
            .unwrap_or_else(|_| DEFAULT_BANNER_MS.to_string())
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::InvalidBannerDelay)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            backend: BackendConfig {
                request_timeout,
                ..backend
            },
            banner: BannerConfig { dismiss_after },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout),
    }
}

/// Location of the REST backend and per-request limits.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub request_timeout: Option<Duration>,
}

impl BackendConfig {
    /// Validates `base_url` as an absolute http(s) URL and strips any trailing slash.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = base_url.into();
        let parsed = Url::parse(raw.trim()).map_err(|_| ConfigError::InvalidBaseUrl {
            value: raw.clone(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl { value: raw });
        }

        Ok(Self {
            base_url: raw.trim().trim_end_matches('/').to_string(),
            request_timeout: None,
        })
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            request_timeout: None,
        }
    }
}

/// How long transient banners stay on screen.
#[derive(Debug, Clone, Copy)]
pub struct BannerConfig {
    pub dismiss_after: Duration,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            dismiss_after: Duration::from_millis(DEFAULT_BANNER_MS),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidBaseUrl { value: String },
    InvalidTimeout,
    InvalidBannerDelay,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBaseUrl { value } => write!(
                f,
                "DASHBOARD_API_URL must be an absolute http(s) URL, got '{}'",
                value
            ),
            ConfigError::InvalidTimeout => {
                write!(f, "DASHBOARD_REQUEST_TIMEOUT_SECS must be a positive integer")
            }
            ConfigError::InvalidBannerDelay => {
                write!(f, "DASHBOARD_BANNER_MS must be a valid number of milliseconds")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
