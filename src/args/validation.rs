use serde_json::Value;
use std::{fs, path::PathBuf};

use crate::args::types::OfficersLayout;
use crate::model::LayoutItem;

/// # Errors
///
/// Will return `Err` if the value is not an http or https url
pub fn check_http_url(url: &str) -> Result<String, String> {
    let url = url.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.trim_end_matches('/').to_string())
    } else {
        Err(format!("The data url '{url}' must start with http:// or https://."))
    }
}

/// # Errors
///
/// Will return `Err` if the file is not readable or is not a valid layout
pub fn check_readable_layout_json(file: &str) -> Result<OfficersLayout, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    let contents =
        fs::read_to_string(&path).map_err(|e| format!("The json file '{file}': {e}"))?;
    let json: Value =
        serde_json::from_str(&contents).map_err(|e| format!("The json file '{file}': {e}"))?;
    validate_layout_format(&json).map(OfficersLayout)
}

/// Validate the layout format
/// format we expect is this:
/// [{"type": "divider", "label": "Adviser"}, {"type": "row", "names": ["Firstname Lastname", ...]}, ...]
///
/// # Errors
///
/// Will return `Err` if the json is not in the correct format
pub fn validate_layout_format(json: &Value) -> Result<Vec<LayoutItem>, String> {
    let Some(items) = json.as_array() else {
        return Err("The layout file is not in the correct format. Expected a list.".to_string());
    };
    for (idx, item) in items.iter().enumerate() {
        match item.get("type").and_then(Value::as_str) {
            Some("divider") => {
                if !item["label"].is_string() {
                    return Err(format!(
                        "Layout entry {idx} is a divider without a string label."
                    ));
                }
            }
            Some("row") => {
                let names_ok = item["names"]
                    .as_array()
                    .is_some_and(|names| names.iter().all(Value::is_string));
                if !names_ok {
                    return Err(format!(
                        "Layout entry {idx} is a row without a list of names."
                    ));
                }
            }
            _ => {
                return Err(format!(
                    "Layout entry {idx} must have type \"divider\" or \"row\"."
                ));
            }
        }
    }
    serde_json::from_value(json.clone()).map_err(|e| e.to_string())
}
