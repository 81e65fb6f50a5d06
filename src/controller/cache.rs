use ahash::RandomState;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

use crate::error::AppError;
use crate::storage::DataSource;

/// What a cached fetch stores: when it was fetched (epoch millis) and the
/// raw JSON as fetched.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CacheEntry {
    pub ts: i64,
    pub data: Value,
}

impl CacheEntry {
    #[must_use]
    pub fn is_fresh(&self, now_millis: i64, ttl: Duration) -> bool {
        now_millis - self.ts < ttl.num_milliseconds()
    }
}

pub type CacheMap = Arc<RwLock<HashMap<String, CacheEntry, RandomState>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    pub cache: bool,
    pub ttl: Duration,
}

impl FetchOptions {
    #[must_use]
    pub const fn cached(ttl_seconds: i64) -> Self {
        Self {
            cache: true,
            ttl: Duration::seconds(ttl_seconds),
        }
    }

    #[must_use]
    pub const fn uncached() -> Self {
        Self {
            cache: false,
            ttl: Duration::zero(),
        }
    }
}

#[must_use]
pub fn cache_key(url: &str) -> String {
    format!("data_cache_{url}")
}

/// Second cache tier: one JSON file per key in a directory, surviving restarts.
#[derive(Debug, Clone)]
pub struct PersistedCache {
    dir: PathBuf,
}

impl PersistedCache {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{file_name}.json"))
    }

    /// # Errors
    ///
    /// Will return `Err` if the entry exists but cannot be read or parsed.
    pub async fn read(&self, key: &str) -> Result<Option<CacheEntry>, AppError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(text) => Ok(Some(serde_json::from_str(&text)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if the directory or file cannot be written.
    pub async fn write(&self, key: &str, entry: &CacheEntry) -> Result<(), AppError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let bytes = serde_json::to_vec(entry)?;
        tokio::fs::write(self.path_for(key), bytes).await?;
        Ok(())
    }
}

/// Read-through cache in front of a [`DataSource`]: memory first, then the
/// persisted tier, then the source itself.
#[derive(Clone)]
pub struct CachedLoader {
    source: Arc<dyn DataSource>,
    memory: CacheMap,
    persisted: Option<PersistedCache>,
    enabled: bool,
}

impl CachedLoader {
    #[must_use]
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self {
            source,
            memory: Arc::new(RwLock::new(HashMap::default())),
            persisted: None,
            enabled: true,
        }
    }

    #[must_use]
    pub fn with_persisted(mut self, persisted: PersistedCache) -> Self {
        self.persisted = Some(persisted);
        self
    }

    /// A disabled loader treats every call as uncached.
    #[must_use]
    pub fn with_cache_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// # Errors
    ///
    /// Will return `Err` if nothing fresh is cached and the source fetch fails.
    pub async fn fetch_json(&self, url: &str, opts: FetchOptions) -> Result<Value, AppError> {
        let use_cache = opts.cache && self.enabled;
        let key = cache_key(url);
        let now = Utc::now().timestamp_millis();

        if use_cache {
            if let Some(entry) = self.memory.read().await.get(&key) {
                if entry.is_fresh(now, opts.ttl) {
                    debug!(%key, "memory cache hit");
                    return Ok(entry.data.clone());
                }
            }

            if let Some(persisted) = &self.persisted {
                match persisted.read(&key).await {
                    Ok(Some(entry)) if entry.is_fresh(now, opts.ttl) => {
                        debug!(%key, "persisted cache hit");
                        let data = entry.data.clone();
                        self.memory.write().await.insert(key, entry);
                        return Ok(data);
                    }
                    Ok(_) => {}
                    Err(e) => warn!(%key, error = %e, "persisted cache read failed"),
                }
            }
        }

        let data = match self.source.get_json(url).await {
            Ok(data) => data,
            Err(e) => {
                error!(%url, error = %e, "error fetching data file");
                return Err(e);
            }
        };

        if use_cache {
            let entry = CacheEntry {
                ts: now,
                data: data.clone(),
            };
            if let Some(persisted) = &self.persisted {
                if let Err(e) = persisted.write(&key, &entry).await {
                    warn!(%key, error = %e, "persisted cache write failed");
                }
            }
            self.memory.write().await.insert(key, entry);
        }

        Ok(data)
    }
}
