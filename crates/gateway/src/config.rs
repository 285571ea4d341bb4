//! Gateway configuration
//!
//! Read from environment variables (a `.env` file is loaded by the
//! binaries through `dotenvy` before this runs).
//!
//! ## Variables
//!
//! - `ADMIN_DATA_FILE`: when set and non-empty, use the local JSON file
//!   instead of the REST backend
//! - `BACKEND_URL` (default: `http://localhost:5000`)
//! - `BACKEND_TIMEOUT_SECS` (default: `30`)

use std::path::PathBuf;
use std::time::Duration;

use parts_admin_core::{AdminError, AdminResult};

use crate::media::is_absolute_url;

/// Backend origin used when `BACKEND_URL` is unset
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Request timeout used when `BACKEND_TIMEOUT_SECS` is unset
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_BACKEND_URL: &str = "BACKEND_URL";
pub const ENV_DATA_FILE: &str = "ADMIN_DATA_FILE";
pub const ENV_TIMEOUT: &str = "BACKEND_TIMEOUT_SECS";

/// Where records are read from and written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayMode {
    /// REST backend at this origin, without trailing slash
    Http { origin: String },
    /// Single JSON document on disk
    Local { path: PathBuf },
}

/// Resolved gateway settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub mode: GatewayMode,
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            mode: GatewayMode::Http {
                origin: DEFAULT_BACKEND_URL.to_string(),
            },
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> AdminResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AdminResult<Self> {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let timeout = match non_empty(ENV_TIMEOUT) {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                AdminError::InvalidConfig(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    ENV_TIMEOUT, raw
                ))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let mode = match non_empty(ENV_DATA_FILE) {
            Some(path) => GatewayMode::Local {
                path: PathBuf::from(path),
            },
            None => {
                let url = non_empty(ENV_BACKEND_URL)
                    .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
                GatewayMode::Http {
                    origin: normalize_origin(&url, ENV_BACKEND_URL)?,
                }
            }
        };

        Ok(Self {
            mode,
            timeout: Duration::from_secs(timeout),
        })
    }

    /// REST backend configuration
    pub fn http(origin: &str) -> AdminResult<Self> {
        Ok(Self {
            mode: GatewayMode::Http {
                origin: normalize_origin(origin, "backend url")?,
            },
            ..Self::default()
        })
    }

    /// Local-file configuration
    pub fn local(path: impl Into<PathBuf>) -> Self {
        Self {
            mode: GatewayMode::Local { path: path.into() },
            ..Self::default()
        }
    }

    /// Builder method to set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// One-line description for logs and the status bar
    pub fn describe(&self) -> String {
        match &self.mode {
            GatewayMode::Http { origin } => format!("backend {}", origin),
            GatewayMode::Local { path } => format!("local file {}", path.display()),
        }
    }
}

/// Check that `url` is an absolute http(s) URL and trim trailing slashes
pub fn normalize_origin(url: &str, source: &str) -> AdminResult<String> {
    let url = url.trim();
    if !is_absolute_url(url) {
        return Err(AdminError::InvalidConfig(format!(
            "{} must be an absolute http(s) URL, got '{}'",
            source, url
        )));
    }
    Ok(url.trim_end_matches('/').to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AdminResult<GatewayConfig> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GatewayConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg, GatewayConfig::default());
        assert_eq!(
            cfg.mode,
            GatewayMode::Http {
                origin: "http://localhost:5000".to_string()
            }
        );
        assert_eq!(cfg.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_empty_backend_url_uses_default() {
        let cfg = config(&[("BACKEND_URL", "  ")]).unwrap();
        assert_eq!(cfg.describe(), "backend http://localhost:5000");
    }

    #[test]
    fn test_trailing_slashes_trimmed() {
        let cfg = config(&[("BACKEND_URL", "https://parts.example.com//")]).unwrap();
        assert_eq!(
            cfg.mode,
            GatewayMode::Http {
                origin: "https://parts.example.com".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_backend_url() {
        let err = config(&[("BACKEND_URL", "localhost:5000")]).unwrap_err();
        assert!(matches!(err, AdminError::InvalidConfig(_)));
        assert!(err.to_string().contains("BACKEND_URL"));
    }

    #[test]
    fn test_data_file_selects_local_mode() {
        let cfg = config(&[
            ("ADMIN_DATA_FILE", "/tmp/app-data.json"),
            ("BACKEND_URL", "not a url"),
        ])
        .unwrap();
        assert_eq!(
            cfg.mode,
            GatewayMode::Local {
                path: PathBuf::from("/tmp/app-data.json")
            }
        );
    }

    #[test]
    fn test_timeout() {
        let cfg = config(&[("BACKEND_TIMEOUT_SECS", "5")]).unwrap();
        assert_eq!(cfg.timeout, Duration::from_secs(5));
        assert!(config(&[("BACKEND_TIMEOUT_SECS", "soon")]).is_err());
    }
}
