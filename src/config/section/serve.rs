//! `[serve]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [serve]
//! interface = "127.0.0.1"             # Network interface (127.0.0.1 = localhost only)
//! port = 8080                         # HTTP port number
//! api_prefix = "/api"                 # Path prefix forwarded to the API process
//! api_upstream = "http://localhost:9090"
//! ```
//!
//! Use `interface = "0.0.0.0"` to make the server accessible from LAN.
//! Leave `api_upstream` unset to disable the proxy (requests under the
//! prefix then fall through to route resolution).

use std::net::{IpAddr, Ipv4Addr};

use serde::{Deserialize, Serialize};

/// Development server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Network interface to bind.
    /// - `127.0.0.1` (default): localhost only
    /// - `0.0.0.0`: all interfaces (LAN accessible)
    pub interface: IpAddr,

    /// HTTP port number.
    pub port: u16,

    /// Path prefix of requests forwarded to the API process.
    pub api_prefix: String,

    /// Base URL of the separately-run API process.
    pub api_upstream: Option<String>,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            interface: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            port: 8080,
            api_prefix: "/api".into(),
            api_upstream: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

    use crate::config::test_parse_config;

    #[test]
    fn test_serve_config() {
        let config = test_parse_config(
            "[serve]\ninterface = \"0.0.0.0\"\nport = 3000\napi_upstream = \"http://localhost:9090\"",
        );

        assert_eq!(
            config.serve.interface,
            IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0))
        );
        assert_eq!(config.serve.port, 3000);
        assert_eq!(
            config.serve.api_upstream.as_deref(),
            Some("http://localhost:9090")
        );
    }

    #[test]
    fn test_serve_config_defaults() {
        let config = test_parse_config("");

        assert_eq!(
            config.serve.interface,
            IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))
        );
        assert_eq!(config.serve.port, 8080);
        assert_eq!(config.serve.api_prefix, "/api");
        assert!(config.serve.api_upstream.is_none());
    }

    #[test]
    fn test_serve_config_interface_variants() {
        let config = test_parse_config("[serve]\ninterface = \"::1\"");
        assert_eq!(
            config.serve.interface,
            IpAddr::V6(Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 1))
        );
    }

    #[test]
    fn test_serve_config_partial_override() {
        let config = test_parse_config("[serve]\nport = 3000");

        assert_eq!(config.serve.port, 3000);
        // the rest uses defaults
        assert_eq!(
            config.serve.interface,
            IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))
        );
        assert_eq!(config.serve.api_prefix, "/api");
    }
}
