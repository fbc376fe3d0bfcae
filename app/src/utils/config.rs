use anyhow::Result;
use std::env;
use std::path::PathBuf;

use crate::constants::{DEFAULT_SERVER_PORT, DEFAULT_SESSION_FILE};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Absent key means AI features run on local fallbacks.
    pub gemini_api_key: Option<String>,
    pub session_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .unwrap_or(DEFAULT_SERVER_PORT),
            gemini_api_key: env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
            session_file: env::var("SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE)),
        })
    }
}
