use std::env;

use anyhow::{Context, Result};

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// Base URL of the showcase service notified about catalog changes
    pub showcase_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let port = match env::var("PORT") {
            Ok(p) => p
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got '{}'", p))?,
            Err(_) => 8080,
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            showcase_url: env::var("SHOWCASE_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8081".to_string()),
            port,
        })
    }
}
