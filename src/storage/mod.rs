use async_trait::async_trait;
use serde_json::Value;

use crate::error::AppError;

pub mod file;
pub mod http;

pub use file::FileSource;
pub use http::HttpSource;

/// Where the site's JSON data files come from.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// GET one data file, parsed as JSON. `path` is relative to the data root.
    async fn get_json(&self, path: &str) -> Result<Value, AppError>;

    fn describe(&self) -> String;
}

/// Drops any query string a call site appended to a data path.
#[must_use]
pub fn strip_query(path: &str) -> &str {
    path.split_once('?').map_or(path, |(p, _)| p)
}
