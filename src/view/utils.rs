use maud::{Markup, html};
use serde::Serialize;

use crate::error::AppError;

/// A page section built from one data source. A failed load only blanks its
/// own section.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum Section<T> {
    Ready(T),
    Failed(String),
}

impl<T> Section<T> {
    #[must_use]
    pub fn from_result<D>(loaded: Option<&Result<D, AppError>>, build: impl FnOnce(&D) -> T) -> Self {
        match loaded {
            Some(Ok(data)) => Section::Ready(build(data)),
            Some(Err(e)) => Section::Failed(e.to_string()),
            None => Section::Failed("not loaded".to_string()),
        }
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Section::Ready(v) => Some(v),
            Section::Failed(_) => None,
        }
    }
}

#[must_use]
pub fn render_failed(section: &str) -> Markup {
    html! {
        p class="load-error" { "Failed to load " (section) ". Please refresh the page." }
    }
}

/// Paints a ready section with `render`, or the failure placeholder.
#[must_use]
pub fn render_section<T>(section: &Section<T>, name: &str, render: impl FnOnce(&T) -> Markup) -> Markup {
    match section {
        Section::Ready(v) => render(v),
        Section::Failed(_) => render_failed(name),
    }
}

/// Encodes a value for use inside an `hx-get` query string.
#[must_use]
pub fn query_value(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char);
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

/// Data files name assets relative to the site root; remote URLs pass through.
#[must_use]
pub fn asset_url(path: &str) -> String {
    if path.starts_with('/') || path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
