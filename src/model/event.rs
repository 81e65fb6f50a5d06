use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::utils::{first_str, get_str, get_string_list, get_string_or, parse_date};

pub const DEFAULT_EVENT_IMAGE: &str = "assets/images/ssc-logo.jpg";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub location: String,
    pub category: String,
    pub image: Option<String>,
    pub images: Vec<String>,
    pub organizer: String,
    pub semester: String,
    pub links: BTreeMap<String, String>,
}

/// First 8 characters of base64(`title + start_date`).
#[must_use]
pub fn derive_event_id(title: &str, start_date: &str) -> String {
    STANDARD
        .encode(format!("{title}{start_date}"))
        .chars()
        .take(8)
        .collect()
}

impl Event {
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let title = get_string_or(value, "title", "Untitled Event");
        let start_date = first_str(value, &["startDate", "date"])
            .unwrap_or_else(|| Utc::now().to_rfc3339());
        let links = value
            .get("links")
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .filter_map(|(label, url)| Some((label.clone(), url.as_str()?.to_string())))
                    .collect()
            })
            .unwrap_or_default();
        Self {
            id: get_str(value, "id")
                .map_or_else(|| derive_event_id(&title, &start_date), str::to_string),
            summary: first_str(value, &["summary", "description", "content"]).unwrap_or_default(),
            end_date: first_str(value, &["endDate"]),
            location: get_string_or(value, "location", "TBA"),
            category: get_string_or(value, "category", "Event"),
            image: first_str(value, &["image"]),
            images: get_string_list(value, "images"),
            organizer: first_str(value, &["organizer", "author"]).unwrap_or_else(|| "SSC".into()),
            semester: get_string_or(value, "semester", ""),
            links,
            title,
            start_date,
        }
    }

    #[must_use]
    pub fn parsed_start(&self) -> Option<NaiveDateTime> {
        parse_date(&self.start_date)
    }

    /// Gallery images, falling back to the single image field.
    #[must_use]
    pub fn all_images(&self) -> Vec<String> {
        if !self.images.is_empty() {
            self.images.clone()
        } else {
            self.image.iter().cloned().collect()
        }
    }

    #[must_use]
    pub fn cover_image(&self) -> String {
        self.all_images()
            .into_iter()
            .next()
            .unwrap_or_else(|| DEFAULT_EVENT_IMAGE.to_string())
    }
}

/// Shapes `events.json`, preserving file order.
#[must_use]
pub fn normalize_events(raw: &Value) -> Vec<Event> {
    raw.as_array()
        .map(|list| list.iter().map(Event::from_value).collect())
        .unwrap_or_default()
}
