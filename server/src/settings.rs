use std::net::IpAddr;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

impl Server {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Address to listen on, preferring the ip/port handed over by the
    /// dioxus CLI.
    pub fn bind_address(&self, cli_ip: Option<IpAddr>, cli_port: Option<u16>) -> String {
        match (cli_ip, cli_port) {
            (Some(ip), Some(port)) => std::net::SocketAddr::new(ip, port).to_string(),
            (None, Some(port)) => format!("{}:{}", self.host, port),
            (_, None) => self.address(),
        }
    }
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Log {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `info,tower_http=debug`.
    pub filter: String,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            filter: "info".into(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct Settings {
    pub server: Server,
    pub log: Log,
}

impl Settings {
    /// Defaults, then `config.toml` if present, then `SERVER_PORT`-style
    /// environment variables.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(Environment::default().separator("_"))
    }

    pub(crate) fn load(environment: Environment) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("log.filter", "info")?
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(environment.try_parsing(true))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::set_var;

    #[test]
    fn test_default_settings() {
        let settings =
            Settings::load(Environment::with_prefix("PAYROPOS_UNSET").separator("_")).unwrap();
        assert_eq!(settings.server.address(), "127.0.0.1:8080");
        assert_eq!(settings.log.filter, "info");
    }

    #[test]
    fn test_environment_overrides() {
        set_var("PAYROPOS_TEST_SERVER_HOST", "0.0.0.0");
        set_var("PAYROPOS_TEST_SERVER_PORT", "3000");
        set_var("PAYROPOS_TEST_LOG_FILTER", "debug");
        let settings =
            Settings::load(Environment::with_prefix("PAYROPOS_TEST").separator("_")).unwrap();
        assert_eq!(settings.server.address(), "0.0.0.0:3000");
        assert_eq!(settings.log.filter, "debug");
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        set_var("PAYROPOS_BADPORT_SERVER_PORT", "abc");
        let result = Settings::load(Environment::with_prefix("PAYROPOS_BADPORT").separator("_"));
        assert!(result.is_err(), "expected error, got {:?}", result);
    }

    #[test]
    fn test_bind_address_prefers_cli() {
        let server = Server::default();
        assert_eq!(server.bind_address(None, None), "127.0.0.1:8080");
        assert_eq!(server.bind_address(None, Some(9000)), "127.0.0.1:9000");
        assert_eq!(
            server.bind_address(Some("0.0.0.0".parse().unwrap()), Some(9000)),
            "0.0.0.0:9000"
        );
        // A lone ip without a port is ignored.
        assert_eq!(
            server.bind_address(Some("10.0.0.1".parse().unwrap()), None),
            "127.0.0.1:8080"
        );
    }
}
