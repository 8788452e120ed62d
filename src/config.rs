use std::env;

use anyhow::{anyhow, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub tmdb_api_key: String,
    pub database_path: String,
    pub app_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        let tmdb_api_key =
            env::var("TMDB_API_KEY").map_err(|_| anyhow!("TMDB_API_KEY must be set"))?;
        let database_path = env::var("DATABASE_PATH").unwrap_or_else(|_| "cinema.db".to_string());
        let app_url = env::var("APP_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| anyhow!("PORT must be a number"))?,
            Err(_) => 4000,
        };

        Ok(Config {
            tmdb_api_key,
            database_path,
            app_url,
            port,
        })
    }
}
