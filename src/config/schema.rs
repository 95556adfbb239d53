//! Configuration schema definitions.
//!
//! All types derive Serde traits and carry defaults so the server can
//! start with no arguments at all.

use serde::{Deserialize, Serialize};

/// Default HTTP listen port when no override is supplied.
pub const DEFAULT_PORT: u16 = 80;

/// Root configuration for the mock server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind host, port).
    pub listener: ListenerConfig,
}

impl ServerConfig {
    /// Build a config from an optional port override.
    pub fn with_port(port: Option<u16>) -> Self {
        let mut config = Self::default();
        if let Some(port) = port {
            config.listener.port = port;
        }
        config
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Host to bind (all interfaces by default).
    pub host: String,

    /// TCP port to listen on.
    pub port: u16,
}

impl ListenerConfig {
    /// Full bind address, e.g. `0.0.0.0:80`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_port_is_80() {
        let config = ServerConfig::default();
        assert_eq!(config.listener.port, 80);
        assert_eq!(config.listener.bind_address(), "0.0.0.0:80");
    }

    #[test]
    fn port_override_applies() {
        let config = ServerConfig::with_port(Some(9000));
        assert_eq!(config.listener.port, 9000);

        let config = ServerConfig::with_port(None);
        assert_eq!(config.listener.port, DEFAULT_PORT);
    }
}
