//! Application configuration for the server binary.
//!
//! The library itself reads no environment variables; only `main` calls
//! [`AppConfig::from_env`].

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::irishrail::{CertificatePolicy, RailConfig};

/// Default address to listen on.
const DEFAULT_LISTEN_ADDR: SocketAddr = SocketAddr::V4(std::net::SocketAddrV4::new(
    std::net::Ipv4Addr::LOCALHOST,
    3000,
));

/// Default location of the persistent cache file.
const DEFAULT_CACHE_FILE: &str = "dart_cache.json";

const ENV_LISTEN_ADDR: &str = "DART_LISTEN_ADDR";
const ENV_CACHE_FILE: &str = "DART_CACHE_FILE";
const ENV_ACCEPT_INVALID_CERTS: &str = "DART_ACCEPT_INVALID_CERTS";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: {value:?} is not a socket address")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var}: {value:?} is not a boolean")]
    InvalidBool { var: &'static str, value: String },
}

/// Configuration for the server binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub listen_addr: SocketAddr,
    /// Path of the persistent cache file
    pub cache_file: PathBuf,
    /// Certificate policy for the Irish Rail client
    pub certificate_policy: CertificatePolicy,
}

impl AppConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR,
            cache_file: PathBuf::from(DEFAULT_CACHE_FILE),
            certificate_policy: CertificatePolicy::Verify,
        }
    }

    /// Read configuration from the process environment.
    ///
    /// - `DART_LISTEN_ADDR`: socket address (default `127.0.0.1:3000`)
    /// - `DART_CACHE_FILE`: cache file path (default `dart_cache.json`)
    /// - `DART_ACCEPT_INVALID_CERTS`: `true`/`false` (default `false`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through a variable lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::new();

        if let Some(value) = lookup(ENV_LISTEN_ADDR) {
            let addr: SocketAddr = value.trim().parse().map_err(|_| ConfigError::InvalidAddr {
                var: ENV_LISTEN_ADDR,
                value: value.clone(),
            })?;
            config = config.with_listen_addr(addr);
        }

        if let Some(value) = lookup(ENV_CACHE_FILE).filter(|v| !v.trim().is_empty()) {
            config = config.with_cache_file(value);
        }

        if let Some(value) = lookup(ENV_ACCEPT_INVALID_CERTS)
            && parse_bool(ENV_ACCEPT_INVALID_CERTS, &value)?
        {
            config = config.with_certificate_policy(CertificatePolicy::AcceptInvalid);
        }

        Ok(config)
    }

    pub fn with_listen_addr(mut self, addr: SocketAddr) -> Self {
        self.listen_addr = addr;
        self
    }

    pub fn with_cache_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_file = path.into();
        self
    }

    pub fn with_certificate_policy(mut self, policy: CertificatePolicy) -> Self {
        self.certificate_policy = policy;
        self
    }

    /// Client configuration derived from this config.
    pub fn rail_config(&self) -> RailConfig {
        RailConfig::new().with_certificate_policy(self.certificate_policy)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}
