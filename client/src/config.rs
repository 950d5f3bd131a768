//! Client configuration fixed at build time.
//!
//! Values come from `ELDERCARE_API_BASE_URL` and `ELDERCARE_AUTH_MODE` in the
//! environment of the build that produced the WASM bundle.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Where login and resource calls are answered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    /// Built-in demo accounts and seeded records; no network.
    #[default]
    Mock,
    /// The REST API at `api_base_url`.
    Remote,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown ELDERCARE_AUTH_MODE: {0} (expected 'mock' or 'remote')")]
    UnknownAuthMode(String),
    #[error("invalid ELDERCARE_API_BASE_URL: {0}")]
    InvalidBaseUrl(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub auth_mode: AuthMode,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned(), auth_mode: AuthMode::default() }
    }
}

impl ClientConfig {
    /// Parse raw settings; absent values take their defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an unrecognized auth mode or a base URL
    /// that is neither absolute HTTP(S) nor root-relative.
    pub fn parse(base_url: Option<&str>, auth_mode: Option<&str>) -> Result<Self, ConfigError> {
        let auth_mode = parse_auth_mode(auth_mode)?;
        let api_base_url = parse_base_url(base_url)?;
        Ok(Self { api_base_url, auth_mode })
    }

    /// Config baked in by the build, falling back to defaults if it is bad.
    pub fn from_build_env() -> Self {
        match Self::parse(option_env!("ELDERCARE_API_BASE_URL"), option_env!("ELDERCARE_AUTH_MODE")) {
            Ok(config) => config,
            Err(e) => {
                leptos::logging::warn!("{e}; using default client config");
                Self::default()
            }
        }
    }

    /// Join a collection path such as `/patients` onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

fn parse_auth_mode(raw: Option<&str>) -> Result<AuthMode, ConfigError> {
    match raw.map(str::trim).unwrap_or("mock") {
        "" | "mock" => Ok(AuthMode::Mock),
        "remote" => Ok(AuthMode::Remote),
        other => Err(ConfigError::UnknownAuthMode(other.to_owned())),
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(DEFAULT_API_BASE_URL);
    let valid = raw.starts_with("http://") || raw.starts_with("https://") || raw.starts_with('/');
    if !valid {
        return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
    }
    let trimmed = raw.trim_end_matches('/');
    Ok(if trimmed.is_empty() { String::new() } else { trimmed.to_owned() })
}
