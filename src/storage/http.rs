use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::DataSource;
use crate::error::AppError;

/// Fetches data files from an HTTP origin with a plain GET.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSource {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Appends a `v=<millis>` cache-buster so intermediate caches never
    /// answer for the origin.
    #[must_use]
    pub fn request_url(&self, path: &str, now_millis: i64) -> String {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        if url.contains('?') {
            format!("{url}&v={now_millis}")
        } else {
            format!("{url}?v={now_millis}")
        }
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn get_json(&self, path: &str) -> Result<Value, AppError> {
        let url = self.request_url(path, chrono::Utc::now().timestamp_millis());
        debug!(%url, "fetching data file");
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::Network(format!("Failed to load {path}: {status}")));
        }
        Ok(resp.json::<Value>().await?)
    }

    fn describe(&self) -> String {
        format!("origin {}", self.base_url)
    }
}
