use chrono::{NaiveDateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::OnceLock;

use super::utils::{first_str, get_str, get_string_list, get_string_or, parse_date};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MediaItem {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
}

fn video_extension() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\.(mp4|webm|ogg|mov|avi|mkv)$").expect("video extension pattern")
    })
}

#[must_use]
pub fn detect_media_kind(url: &str) -> MediaKind {
    if video_extension().is_match(url) {
        MediaKind::Video
    } else {
        MediaKind::Image
    }
}

fn usable_url(url: &str) -> bool {
    url.chars().count() > 2 && url != "#"
}

fn media_from_entry(entry: &Value, fallback: Option<MediaKind>) -> Option<MediaItem> {
    match entry {
        Value::String(url) => Some(MediaItem {
            kind: fallback.unwrap_or_else(|| detect_media_kind(url)),
            url: url.clone(),
        }),
        Value::Object(_) => {
            let url = get_str(entry, "url")?.to_string();
            let kind = match get_str(entry, "type") {
                Some("video") => MediaKind::Video,
                Some(_) => MediaKind::Image,
                None => detect_media_kind(&url),
            };
            Some(MediaItem { kind, url })
        }
        _ => None,
    }
}

/// The first populated of `media`, `gallery`, `images`, `videos`, `image`,
/// `video` wins; placeholder URLs are dropped.
#[must_use]
pub fn resolve_media(post: &Value) -> Vec<MediaItem> {
    let lists: [(&str, Option<MediaKind>); 4] = [
        ("media", None),
        ("gallery", None),
        ("images", Some(MediaKind::Image)),
        ("videos", Some(MediaKind::Video)),
    ];
    let mut items: Vec<MediaItem> = Vec::new();
    let mut found = false;
    for (field, kind) in lists {
        if let Some(list) = post.get(field).and_then(Value::as_array) {
            items = list
                .iter()
                .filter_map(|entry| media_from_entry(entry, kind))
                .collect();
            found = true;
            break;
        }
    }
    if !found {
        if let Some(url) = get_str(post, "image").filter(|u| *u != "#") {
            items.push(MediaItem {
                kind: MediaKind::Image,
                url: url.to_string(),
            });
        } else if let Some(url) = get_str(post, "video").filter(|u| *u != "#") {
            items.push(MediaItem {
                kind: MediaKind::Video,
                url: url.to_string(),
            });
        }
    }
    items.retain(|item| usable_url(&item.url));
    items
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub content: String,
    pub date: String,
    pub display_date: Option<String>,
    pub category: String,
    pub author: String,
    pub semester: String,
    pub show_on_index: bool,
    pub hashtags: Vec<String>,
    pub media: Vec<MediaItem>,
}

impl Announcement {
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self {
            id: first_str(value, &["id"]).unwrap_or_default(),
            title: get_string_or(value, "title", "Untitled"),
            content: get_string_or(value, "content", ""),
            date: first_str(value, &["createdAt", "date"])
                .unwrap_or_else(|| Utc::now().to_rfc3339()),
            display_date: first_str(value, &["displayDate"]),
            category: get_string_or(value, "category", "General"),
            author: get_string_or(value, "author", "SSC"),
            semester: get_string_or(value, "semester", ""),
            show_on_index: value
                .get("showOnIndex")
                .and_then(Value::as_bool)
                .unwrap_or(true),
            hashtags: get_string_list(value, "hashtags"),
            media: resolve_media(value),
        }
    }

    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        parse_date(&self.date)
    }
}

/// Shapes `announcements.json`, newest first. Undated posts sort last.
#[must_use]
pub fn normalize_announcements(raw: &Value) -> Vec<Announcement> {
    let Some(list) = raw.as_array() else {
        return Vec::new();
    };
    let mut announcements: Vec<Announcement> = list.iter().map(Announcement::from_value).collect();
    announcements.sort_by(|a, b| b.parsed_date().cmp(&a.parsed_date()));
    announcements
}
