//! Server configuration.
//!
//! Read from an optional `~/.config/dayboard/config.toml`, then overridden
//! by environment variables (`GOOGLE_CLIENT_ID`, `GOOGLE_CLIENT_SECRET`,
//! `GOOGLE_REDIRECT_URI`, `HOST`, `PORT`, `TOKEN_PATH`, `TIME_ZONE`,
//! `CALENDAR_ID`).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::Deserialize;

const DEFAULT_PORT: u16 = 4000;

/// Environment variables read as overrides; everything else is ignored.
const ENV_KEYS: [&str; 8] = [
    "GOOGLE_CLIENT_ID",
    "GOOGLE_CLIENT_SECRET",
    "GOOGLE_REDIRECT_URI",
    "HOST",
    "PORT",
    "TOKEN_PATH",
    "TIME_ZONE",
    "CALENDAR_ID",
];

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

fn default_redirect_uri() -> String {
    format!("http://localhost:{}/api/google/callback", DEFAULT_PORT)
}

/// Google's alias for the user's main calendar
fn default_calendar_id() -> String {
    "primary".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub google_client_id: String,
    #[serde(default)]
    pub google_client_secret: String,
    #[serde(default = "default_redirect_uri")]
    pub google_redirect_uri: String,

    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,

    /// Where the OAuth token record lives; defaults next to the config file
    #[serde(default)]
    pub token_path: Option<PathBuf>,
    /// IANA zone used to decide what "today" is; system local time if unset
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default = "default_calendar_id")]
    pub calendar_id: String,
}

fn env_overrides(vars: impl IntoIterator<Item = (String, String)>) -> config::Map<String, String> {
    vars.into_iter()
        .filter(|(key, _)| ENV_KEYS.contains(&key.as_str()))
        .collect()
}

fn config_dir() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .context("Could not determine config directory")?
        .join("dayboard"))
}

impl ServerConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Config file (if present) layered under the environment.
    pub fn load() -> Result<Self> {
        Self::build(&Self::config_path()?, Some(env_overrides(std::env::vars())))
    }

    /// Config file only, no environment overrides.
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::build(path, None)
    }

    fn build(path: &Path, env: Option<config::Map<String, String>>) -> Result<Self> {
        let mut builder =
            config::Config::builder().add_source(config::File::from(path).required(false));

        if let Some(vars) = env {
            builder = builder.add_source(
                config::Environment::default()
                    .try_parsing(true)
                    .source(Some(vars)),
            );
        }

        builder
            .build()
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?
            .try_deserialize()
            .context("Invalid configuration (HOST must be an IP address and PORT a port number)")
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn token_path(&self) -> Result<PathBuf> {
        match &self.token_path {
            Some(path) => Ok(path.clone()),
            None => Ok(config_dir()?.join("tokens.json")),
        }
    }

    pub fn time_zone(&self) -> Result<Option<Tz>> {
        self.time_zone
            .as_deref()
            .map(|name| {
                name.parse::<Tz>()
                    .map_err(|e| anyhow::anyhow!("Invalid time zone '{}': {}", name, e))
            })
            .transpose()
    }

    pub fn has_google_credentials(&self) -> bool {
        !self.google_client_id.is_empty() && !self.google_client_secret.is_empty()
    }
}
