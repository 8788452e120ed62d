use serde_json::Value;

use crate::error::AppError;

const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Thin proxy to the TMDB catalog. Responses are relayed as raw JSON;
/// any transport failure or non-success status becomes `Upstream`.
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl CatalogClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, TMDB_BASE_URL.to_string())
    }

    /// Base URL override, for pointing tests at a local stub.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    pub async fn list_now_playing(&self) -> Result<Value, AppError> {
        let response = self
            .http
            .get(format!("{}/movie/now_playing", self.base_url))
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", "en-US"),
                ("page", "1"),
            ])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    pub async fn get_details(&self, movie_id: i64) -> Result<Value, AppError> {
        let response = self
            .http
            .get(format!("{}/movie/{}", self.base_url, movie_id))
            .query(&[("api_key", self.api_key.as_str()), ("language", "en-US")])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}
