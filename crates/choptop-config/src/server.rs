use std::env;

use tracing::warn;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub metrics_port: u16,
    /// Seed the Admin role's default global scopes at start-up
    pub seed_default_scopes: bool,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: read_port("PORT", defaults.port),
            metrics_port: read_port("METRICS_PORT", defaults.metrics_port),
            seed_default_scopes: env::var("SEED_DEFAULT_SCOPES")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.seed_default_scopes),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn metrics_bind_address(&self) -> String {
        format!("{}:{}", self.host, self.metrics_port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            metrics_port: 9090,
            seed_default_scopes: true,
        }
    }
}

fn read_port(key: &str, default: u16) -> u16 {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, default, "Invalid port, using default");
            default
        }),
        Err(_) => default,
    }
}
