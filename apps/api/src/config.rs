use anyhow::{anyhow, Context, Result};

use crate::login::Theme;

/// Application configuration loaded from environment variables.
/// Every variable has a default; startup fails only on values that don't parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub login_theme: Theme,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            login_theme: parse_theme(std::env::var("LOGIN_THEME").ok().as_deref())?,
        })
    }
}

fn parse_theme(raw: Option<&str>) -> Result<Theme> {
    match raw {
        None => Ok(Theme::default()),
        Some(value) => value
            .parse::<Theme>()
            .map_err(|e| anyhow!(e))
            .context("LOGIN_THEME must be light, dark or system"),
    }
}
