//! Listener configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// Build listener config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] for a value that does not parse.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::parse(std::env::var("PORT").ok().as_deref(), std::env::var("BIND_ADDR").ok().as_deref())
    }

    /// Parse raw values; blank values fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] naming the offending variable.
    pub fn parse(port: Option<&str>, bind_addr: Option<&str>) -> Result<Self, ServerError> {
        let port = match non_blank(port) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| ServerError::Config(format!("invalid PORT {raw:?}: {e}")))?,
            None => DEFAULT_PORT,
        };
        let bind_addr = match non_blank(bind_addr) {
            Some(raw) => raw
                .parse::<IpAddr>()
                .map_err(|e| ServerError::Config(format!("invalid BIND_ADDR {raw:?}: {e}")))?,
            None => DEFAULT_BIND_ADDR,
        };
        Ok(Self { bind_addr, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
