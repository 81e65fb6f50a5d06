use async_trait::async_trait;
use serde_json::Value;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use super::{DataSource, strip_query};
use crate::error::AppError;

/// Reads data files from a local directory.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, AppError> {
        let relative = Path::new(strip_query(path).trim_start_matches('/'));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(AppError::NotFound(format!("invalid data path '{path}'")));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl DataSource for FileSource {
    async fn get_json(&self, path: &str) -> Result<Value, AppError> {
        let full_path = self.resolve(path)?;
        debug!(path = %full_path.display(), "reading data file");
        let text = tokio::fs::read_to_string(&full_path).await?;
        Ok(serde_json::from_str(&text)?)
    }

    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }
}
