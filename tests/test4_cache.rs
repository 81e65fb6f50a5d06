mod common;

use chrono::{Duration, Utc};
use serde_json::json;
use std::sync::Arc;

use ssc_site::controller::cache::{CacheEntry, cache_key};
use ssc_site::storage::{DataSource, FileSource, HttpSource};
use ssc_site::{AppError, CachedLoader, FetchOptions, PersistedCache};

use crate::common::{CountingSource, calls};

#[tokio::test]
async fn test4_cached_fetch_hits_source_once() -> Result<(), Box<dyn std::error::Error>> {
    let (source, counter) = CountingSource::new(json!({"hello": "world"}));
    let loader = CachedLoader::new(Arc::new(source));

    let first = loader.fetch_json("officers.json", FetchOptions::cached(300)).await?;
    let second = loader.fetch_json("officers.json", FetchOptions::cached(300)).await?;
    assert_eq!(first, second);
    assert_eq!(calls(&counter), 1);

    // a different url is a different key
    loader.fetch_json("events.json", FetchOptions::cached(300)).await?;
    assert_eq!(calls(&counter), 2);
    Ok(())
}

#[tokio::test]
async fn test4_expired_entries_refetch() -> Result<(), Box<dyn std::error::Error>> {
    let (source, counter) = CountingSource::new(json!([1, 2, 3]));
    let loader = CachedLoader::new(Arc::new(source));

    loader.fetch_json("events.json", FetchOptions::cached(0)).await?;
    loader.fetch_json("events.json", FetchOptions::cached(0)).await?;
    assert_eq!(calls(&counter), 2);
    Ok(())
}

#[tokio::test]
async fn test4_uncached_and_disabled_always_fetch() -> Result<(), Box<dyn std::error::Error>> {
    let (source, counter) = CountingSource::new(json!({}));
    let loader = CachedLoader::new(Arc::new(source));
    loader.fetch_json("events.json", FetchOptions::uncached()).await?;
    loader.fetch_json("events.json", FetchOptions::uncached()).await?;
    assert_eq!(calls(&counter), 2);

    let (source, counter) = CountingSource::new(json!({}));
    let loader = CachedLoader::new(Arc::new(source)).with_cache_enabled(false);
    loader.fetch_json("officers.json", FetchOptions::cached(3600)).await?;
    loader.fetch_json("officers.json", FetchOptions::cached(3600)).await?;
    assert_eq!(calls(&counter), 2);
    Ok(())
}

#[tokio::test]
async fn test4_persisted_tier_survives_a_new_loader() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;

    let (source, counter) = CountingSource::new(json!({"final_tally": {"SHS": 1}}));
    let loader = CachedLoader::new(Arc::new(source)).with_persisted(PersistedCache::new(dir.path()));
    loader.fetch_json("intramurals.json", FetchOptions::cached(3600)).await?;
    assert_eq!(calls(&counter), 1);

    let persisted = PersistedCache::new(dir.path());
    let key = cache_key("intramurals.json");
    assert!(persisted.path_for(&key).is_file());

    // a restarted server reads the persisted entry instead of the source
    let (source, counter) = CountingSource::new(json!(null));
    let loader = CachedLoader::new(Arc::new(source)).with_persisted(PersistedCache::new(dir.path()));
    let data = loader.fetch_json("intramurals.json", FetchOptions::cached(3600)).await?;
    assert_eq!(data, json!({"final_tally": {"SHS": 1}}));
    assert_eq!(calls(&counter), 0);

    // and promotes it into memory
    loader.fetch_json("intramurals.json", FetchOptions::cached(3600)).await?;
    assert_eq!(calls(&counter), 0);
    Ok(())
}

#[tokio::test]
async fn test4_stale_persisted_entry_is_refetched() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let persisted = PersistedCache::new(dir.path());
    let stale = CacheEntry {
        ts: Utc::now().timestamp_millis() - Duration::hours(2).num_milliseconds(),
        data: json!("old"),
    };
    persisted.write(&cache_key("intramurals.json"), &stale).await?;

    let (source, counter) = CountingSource::new(json!("new"));
    let loader = CachedLoader::new(Arc::new(source)).with_persisted(persisted.clone());
    let data = loader.fetch_json("intramurals.json", FetchOptions::cached(3600)).await?;
    assert_eq!(data, json!("new"));
    assert_eq!(calls(&counter), 1);

    let rewritten = persisted.read(&cache_key("intramurals.json")).await?;
    assert_eq!(rewritten.map(|e| e.data), Some(json!("new")));
    Ok(())
}

#[tokio::test]
async fn test4_failures_are_not_cached() -> Result<(), Box<dyn std::error::Error>> {
    let (source, counter) = CountingSource::failing();
    let loader = CachedLoader::new(Arc::new(source));
    let first = loader.fetch_json("announcements.json", FetchOptions::cached(300)).await;
    assert!(matches!(first, Err(AppError::Network(_))));
    let second = loader.fetch_json("announcements.json", FetchOptions::cached(300)).await;
    assert!(second.is_err());
    assert_eq!(calls(&counter), 2);
    Ok(())
}

#[test]
fn test4_freshness_window() {
    let entry = CacheEntry {
        ts: 1_000,
        data: json!(null),
    };
    assert!(entry.is_fresh(1_000 + 299_999, Duration::seconds(300)));
    assert!(!entry.is_fresh(1_000 + 300_000, Duration::seconds(300)));
}

#[test]
fn test4_http_requests_carry_a_cache_buster() {
    let source = HttpSource::new("https://example.org/data/");
    assert_eq!(
        source.request_url("events.json", 42),
        "https://example.org/data/events.json?v=42"
    );
    assert_eq!(
        source.request_url("/events.json?x=1", 42),
        "https://example.org/data/events.json?x=1&v=42"
    );
}

#[tokio::test]
async fn test4_file_source_rejects_paths_outside_root() -> Result<(), Box<dyn std::error::Error>> {
    let dir = common::data_dir_with(&[("events.json", "[]")])?;
    let source = FileSource::new(dir.path());
    assert_eq!(source.get_json("events.json?v=1").await?, json!([]));
    assert!(matches!(
        source.get_json("../secret.json").await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        source.get_json("missing.json").await,
        Err(AppError::NotFound(_))
    ));
    Ok(())
}
