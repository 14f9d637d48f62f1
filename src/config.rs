use config::{Config as ConfigLoader, Environment};
use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_API_URL: &str = "https://ismp.crpt.ru/api/v3/lk/documents/create";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    // General
    pub log_level: String,

    // API
    pub api_url: String,
    pub auth_token: String,

    // Rate limiting
    pub request_limit: usize,
    pub interval_ms: u64,
}

impl Config {
    /// Loads configuration from `CRPT_`-prefixed environment variables
    /// (e.g. CRPT_AUTH_TOKEN, CRPT_REQUEST_LIMIT), with a .env file
    /// honored if present. Only the auth token has no default.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let loader = ConfigLoader::builder()
            .set_default("log_level", "info")?
            .set_default("api_url", DEFAULT_API_URL)?
            .set_default("request_limit", 5_i64)?
            .set_default("interval_ms", 1000_i64)?
            .add_source(Environment::with_prefix("CRPT"))
            .build()?;

        Ok(loader.try_deserialize()?)
    }
}
