use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::utils::{get_int, get_str, get_string_or};

pub const DEFAULT_ORDER: i64 = 99;
pub const DEFAULT_AVATAR: &str = "assets/images/default-avatar.svg";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Officer {
    pub name: String,
    pub position: String,
    pub department: String,
    pub image: String,
    pub order: i64,
    pub email: Option<String>,
}

impl Officer {
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self {
            name: get_string_or(value, "name", "Unknown"),
            position: get_string_or(value, "position", ""),
            department: get_string_or(value, "department", ""),
            image: get_string_or(value, "image", ""),
            order: get_int(value, "order").unwrap_or(DEFAULT_ORDER),
            email: get_str(value, "email").map(str::to_string),
        }
    }

    #[must_use]
    pub fn image_src(&self) -> String {
        if self.image.is_empty() {
            DEFAULT_AVATAR.to_string()
        } else {
            format!("assets/images/officers/{}", self.image)
        }
    }

    /// Advisers and the SAO representative are staff, not student officers.
    #[must_use]
    pub fn is_student_officer(&self) -> bool {
        self.position != "Adviser" && self.position != "SAO Representative"
    }
}

#[must_use]
pub fn normalize_officers(raw: &Value) -> Vec<Officer> {
    raw.as_array()
        .map(|list| list.iter().map(Officer::from_value).collect())
        .unwrap_or_default()
}

/// One entry of the officers page layout.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayoutItem {
    Divider { label: String },
    Row { names: Vec<String> },
}

/// Name used in a layout row to reserve a slot that has no officer yet.
pub const UPCOMING_SLOT: &str = "Upcoming";
