//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `TWIST_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::constants::DEFAULT_PORT;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `TWIST_*` overrides on top of defaults. Scoring policy and
/// the sentence encoder are configured separately through
/// [`ScoringConfig`](crate::scoring::ScoringConfig) and
/// [`SentenceConfig`](crate::embedding::SentenceConfig).
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8001`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "TWIST_PORT";
    const ENV_BIND_ADDR: &'static str = "TWIST_BIND_ADDR";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;

        Ok(Self { port, bind_addr })
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        match self.bind_addr {
            IpAddr::V4(addr) => format!("{}:{}", addr, self.port),
            IpAddr::V6(addr) => format!("[{}]:{}", addr, self.port),
        }
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }
}

pub(crate) fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
    env::var(var_name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

pub(crate) fn parse_bool_from_env(
    var_name: &'static str,
    default: bool,
) -> Result<bool, ConfigError> {
    let Ok(value) = env::var(var_name) else {
        return Ok(default);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "" => Ok(default),
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name: var_name,
            value,
        }),
    }
}

pub(crate) fn parse_f64_from_env(
    var_name: &'static str,
    default: f64,
) -> Result<f64, ConfigError> {
    match env::var(var_name) {
        Ok(value) if value.trim().is_empty() => Ok(default),
        Ok(value) => value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or(ConfigError::InvalidValue {
                name: var_name,
                value,
            }),
        Err(_) => Ok(default),
    }
}

pub(crate) fn parse_usize_from_env(
    var_name: &'static str,
    default: usize,
) -> Result<usize, ConfigError> {
    match env::var(var_name) {
        Ok(value) if value.trim().is_empty() => Ok(default),
        Ok(value) => value
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidValue {
                name: var_name,
                value,
            }),
        Err(_) => Ok(default),
    }
}
