use anyhow::{Context, Result};
use chrono::Duration;
use dotenvy::dotenv;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the HR backend
    pub api_url: String,
    pub server_addr: String,
    pub log_dir: String,
    pub notification_ttl_secs: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            api_url: env::var("API_URL").context("API_URL must be set")?,
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
            notification_ttl_secs: env::var("NOTIFICATION_TTL_SECS")
                .unwrap_or_else(|_| "5".to_string()) // toast lifetime
                .parse()
                .context("NOTIFICATION_TTL_SECS must be a whole number of seconds")?,
        })
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::seconds(self.notification_ttl_secs)
    }
}
