#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

use ssc_site::AppError;
use ssc_site::storage::DataSource;

pub const ANNOUNCEMENTS: &str = include_str!("../../data/announcements.json");
pub const EVENTS: &str = include_str!("../../data/events.json");
pub const OFFICERS: &str = include_str!("../../data/officers.json");
pub const INTRAMURALS: &str = include_str!("../../data/intramurals.json");
pub const OFFICERS_LAYOUT: &str = include_str!("../../data/officers-layout.json");

/// A scratch data directory holding only `files`.
pub fn data_dir_with(files: &[(&str, &str)]) -> Result<TempDir, std::io::Error> {
    let dir = tempfile::tempdir()?;
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents)?;
    }
    Ok(dir)
}

/// A scratch data directory with all four sample data files.
pub fn sample_data_dir() -> Result<TempDir, std::io::Error> {
    data_dir_with(&[
        ("announcements.json", ANNOUNCEMENTS),
        ("events.json", EVENTS),
        ("officers.json", OFFICERS),
        ("intramurals.json", INTRAMURALS),
    ])
}

pub fn write_file(dir: &Path, name: &str, contents: &str) -> Result<(), std::io::Error> {
    fs::write(dir.join(name), contents)
}

pub fn json(text: &str) -> Value {
    serde_json::from_str(text).expect("fixture json should parse")
}

/// Serves one fixed document per path and counts every fetch.
pub struct CountingSource {
    pub data: Value,
    pub calls: Arc<AtomicUsize>,
    pub fail: bool,
}

impl CountingSource {
    pub fn new(data: Value) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                data,
                calls: calls.clone(),
                fail: false,
            },
            calls,
        )
    }

    pub fn failing() -> (Self, Arc<AtomicUsize>) {
        let (mut source, calls) = Self::new(Value::Null);
        source.fail = true;
        (source, calls)
    }
}

#[async_trait]
impl DataSource for CountingSource {
    async fn get_json(&self, path: &str) -> Result<Value, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(AppError::Network(format!("Failed to load {path}: 503 Service Unavailable")))
        } else {
            Ok(self.data.clone())
        }
    }

    fn describe(&self) -> String {
        "counting test source".to_string()
    }
}

pub fn calls(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}
