//! HTTP server configuration loaded via OrthoConfig.

use std::ffi::OsString;
use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Listener settings, read from the command line, `PHONEBOOK_*` environment
/// variables or a configuration file.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PHONEBOOK")]
pub struct ServerSettings {
    /// Interface address to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
}

impl ServerSettings {
    /// Load settings from the process arguments and environment.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when a source cannot be parsed.
    pub fn load_from_args<I>(args: I) -> std::io::Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        Self::load_from_iter(args).map_err(|err| std::io::Error::other(err.to_string()))
    }

    /// Return the configured host, falling back to the default.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to the default.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Resolve the socket address to bind.
    ///
    /// # Errors
    /// Returns [`std::io::ErrorKind::InvalidInput`] when the host is not an IP
    /// address.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let host = self.host();
        let ip: IpAddr = host.parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid PHONEBOOK_HOST {host:?}: {err}"),
            )
        })?;
        Ok(SocketAddr::new(ip, self.port()))
    }
}

/// Resolved configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Construct a server configuration bound to `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self { bind_addr }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

impl TryFrom<&ServerSettings> for ServerConfig {
    type Error = std::io::Error;

    fn try_from(settings: &ServerSettings) -> Result<Self, Self::Error> {
        Ok(Self::new(settings.bind_addr()?))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server configuration parsing.

    use super::*;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_args([OsString::from("phonebook")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("PHONEBOOK_HOST", None::<String>),
            ("PHONEBOOK_PORT", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port(), DEFAULT_PORT);
        let config = ServerConfig::try_from(&settings).expect("valid address");
        assert_eq!(config.bind_addr(), SocketAddr::from(([0, 0, 0, 0], 8080)));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("PHONEBOOK_HOST", Some("127.0.0.1".to_owned())),
            ("PHONEBOOK_PORT", Some("9090".to_owned())),
        ]);

        let settings = load_from_empty_args();
        let config = ServerConfig::try_from(&settings).expect("valid address");
        assert_eq!(config.bind_addr(), SocketAddr::from(([127, 0, 0, 1], 9090)));
    }

    #[rstest]
    fn non_ip_host_is_rejected() {
        let settings = ServerSettings {
            host: Some("not an address".to_owned()),
            port: None,
        };
        let err = settings.bind_addr().expect_err("invalid host");
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
