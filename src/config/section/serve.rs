//! `[serve]` section configuration.
//!
//! Contains HTTP server settings.
//!
//! # Example
//!
//! ```toml
//! [serve]
//! interface = "0.0.0.0"     # Network interface
//! port = 3000               # HTTP port number (PORT env var overrides)
//! workers = 4               # Request handler threads
//! body_limit = 10485760     # Max JSON body size in bytes
//! ```

use std::net::{IpAddr, Ipv4Addr};

use serde::{Deserialize, Serialize};

/// Default request body cap: 10 MiB, enough for embedded HTML.
pub const DEFAULT_BODY_LIMIT: usize = 10 * 1024 * 1024;

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Network interface to bind.
    pub interface: IpAddr,

    /// HTTP port number.
    pub port: u16,

    /// Size of the request handler pool.
    pub workers: usize,

    /// Maximum accepted request body, in bytes.
    pub body_limit: usize,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            interface: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: 3000,
            workers: 4,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr};

    use super::DEFAULT_BODY_LIMIT;
    use crate::config::test_parse_config;

    #[test]
    fn test_serve_config() {
        let config = test_parse_config(
            "[serve]\ninterface = \"127.0.0.1\"\nport = 8080\nworkers = 2\nbody_limit = 1024",
        );

        assert_eq!(
            config.serve.interface,
            IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))
        );
        assert_eq!(config.serve.port, 8080);
        assert_eq!(config.serve.workers, 2);
        assert_eq!(config.serve.body_limit, 1024);
    }

    #[test]
    fn test_serve_config_defaults() {
        let config = test_parse_config("");

        assert_eq!(config.serve.interface, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.serve.port, 3000);
        assert_eq!(config.serve.workers, 4);
        assert_eq!(config.serve.body_limit, DEFAULT_BODY_LIMIT);
    }

    #[test]
    fn test_serve_config_partial_override() {
        let config = test_parse_config("[serve]\nport = 4000");

        assert_eq!(config.serve.port, 4000);
        assert_eq!(config.serve.workers, 4);
    }
}
