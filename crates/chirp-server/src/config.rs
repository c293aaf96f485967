use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chirp_service::CredentialScheme;

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub addr: SocketAddr,
    pub password_scheme: CredentialScheme,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests need not touch the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let db_path = lookup("CHIRP_DB_PATH").unwrap_or_else(|| "chirp.db".into());
        let host = lookup("CHIRP_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = lookup("CHIRP_PORT")
            .unwrap_or_else(|| "8080".into())
            .parse()
            .context("CHIRP_PORT must be a port number")?;
        let password_scheme = match lookup("CHIRP_PASSWORD_SCHEME") {
            Some(value) => value.parse()?,
            None => CredentialScheme::default(),
        };

        let addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", host, port))?;

        Ok(Self {
            db_path: db_path.into(),
            addr,
            password_scheme,
        })
    }
}
