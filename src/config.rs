//! Runtime configuration read from the environment.
//!
//! | Variable               | Default                               |
//! |------------------------|---------------------------------------|
//! | `PRODUCTDESK_BASE_URL` | `http://localhost:8080`               |
//! | `PRODUCTDESK_LOG_DIR`  | `<XDG data dir>/productdesk/logs`     |
//! | `RUST_LOG`             | `productdesk=info`                    |

use std::path::PathBuf;

/// Service root used when `PRODUCTDESK_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "productdesk=info";

/// Errors while building a [`Config`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The base URL does not parse or is not http(s).
    #[error("invalid PRODUCTDESK_BASE_URL {0:?}: expected an http(s) URL")]
    InvalidBaseUrl(String),

    /// No log directory was given and the platform has no data directory.
    #[error("could not determine XDG data directory; set PRODUCTDESK_LOG_DIR")]
    NoDataDir,
}

/// Settings for one console session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Service root without a trailing slash.
    pub base_url: String,
    /// Directory holding `productdesk.log`.
    pub log_dir: PathBuf,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Config {
    /// Reads the process environment.
    #[mutants::skip]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = get("PRODUCTDESK_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = validate_base_url(&base_url)?;

        let log_dir = match get("PRODUCTDESK_LOG_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::data_dir()
                .ok_or(ConfigError::NoDataDir)?
                .join("productdesk")
                .join("logs"),
        };

        let log_filter = get("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            base_url,
            log_dir,
            log_filter,
        })
    }
}

/// Checks that `raw` is an http(s) URL and strips trailing slashes.
fn validate_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    match reqwest::Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {
            Ok(trimmed.to_string())
        }
        _ => Err(ConfigError::InvalidBaseUrl(raw.to_string())),
    }
}
