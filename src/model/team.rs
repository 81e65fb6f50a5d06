use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::utils::{get_str, get_string_or};

/// The three competing teams. Declaration order is the tie-break order.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TeamCode {
    #[serde(rename = "Team A")]
    A,
    #[serde(rename = "Team B")]
    B,
    #[serde(rename = "Team C")]
    C,
}

impl TeamCode {
    pub const ALL: [TeamCode; 3] = [TeamCode::A, TeamCode::B, TeamCode::C];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            TeamCode::A => 0,
            TeamCode::B => 1,
            TeamCode::C => 2,
        }
    }

    /// Key used by `final_tally` and by per-event score maps.
    #[must_use]
    pub fn tally_key(self) -> &'static str {
        match self {
            TeamCode::A => "SHS",
            TeamCode::B => "THM",
            TeamCode::C => "ICT",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            TeamCode::A => "Dragon Vanguard",
            TeamCode::B => "Pegasus Fury",
            TeamCode::C => "Phoenix Invictus",
        }
    }

    #[must_use]
    pub fn logo_path(self) -> &'static str {
        match self {
            TeamCode::A => "assets/images/team-logo/Dragon-Vanguard.jpg",
            TeamCode::B => "assets/images/team-logo/Pegasus-Fury.jpg",
            TeamCode::C => "assets/images/team-logo/Pheonix-Invictus.png",
        }
    }

    #[must_use]
    pub fn from_tally_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.tally_key() == key)
    }

    #[must_use]
    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.display_name() == name)
    }

    /// Accepts `"Team A"`, `"A"`, `"a"` or a tally key.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let short = s.strip_prefix("Team ").unwrap_or(s);
        match short.to_ascii_uppercase().as_str() {
            "A" => Some(TeamCode::A),
            "B" => Some(TeamCode::B),
            "C" => Some(TeamCode::C),
            other => Self::from_tally_key(other),
        }
    }

    #[must_use]
    pub fn short(self) -> &'static str {
        match self {
            TeamCode::A => "A",
            TeamCode::B => "B",
            TeamCode::C => "C",
        }
    }
}

impl fmt::Display for TeamCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Team {}", self.short())
    }
}

pub const DEFAULT_TEAM_COLOR: &str = "#6c757d";

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Team {
    pub code: TeamCode,
    pub name: String,
    pub department: String,
    pub theme_color: String,
    pub roster: RosterTree,
}

impl Team {
    /// Returns `None` when the record does not name one of the three teams.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let code = get_str(value, "code").and_then(TeamCode::parse)?;
        Some(Self {
            code,
            name: get_string_or(value, "name", code.display_name()),
            department: get_string_or(value, "department", ""),
            theme_color: get_string_or(value, "theme_color", DEFAULT_TEAM_COLOR),
            roster: value
                .get("participants")
                .map(RosterTree::from_value)
                .unwrap_or_default(),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RosterTree {
    pub categories: Vec<RosterCategory>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RosterCategory {
    pub title: String,
    pub groups: Vec<RosterGroup>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RosterGroup {
    pub label: String,
    pub members: Vec<String>,
}

const ROSTER_SECTIONS: [(&str, &str); 3] = [
    ("major_activities", "Major Activities Team Members"),
    ("minor_activities", "Minor Activities Team Members"),
    ("larong_pinoy", "Larong Pinoy Team Members"),
];

fn roster_label(key: &str) -> String {
    key.replace('_', " ").to_uppercase()
}

fn member_names(value: &Value) -> Option<Vec<String>> {
    let names: Vec<String> = value
        .as_array()?
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect();
    Some(names)
}

impl RosterTree {
    /// Builds the roster from a team's `participants` object. Keys map to a
    /// list of names or to one more level of named lists; empty lists and
    /// empty sections are dropped.
    #[must_use]
    pub fn from_value(participants: &Value) -> Self {
        let mut categories = Vec::new();
        for (field, title) in ROSTER_SECTIONS {
            let Some(section) = participants.get(field).and_then(Value::as_object) else {
                continue;
            };
            let mut groups = Vec::new();
            for (key, val) in section {
                let label = roster_label(key);
                if let Some(members) = member_names(val) {
                    if !members.is_empty() {
                        groups.push(RosterGroup { label, members });
                    }
                } else if let Some(sub) = val.as_object() {
                    for (sub_key, sub_val) in sub {
                        if let Some(members) = member_names(sub_val).filter(|m| !m.is_empty()) {
                            groups.push(RosterGroup {
                                label: format!("{label} {}", roster_label(sub_key)),
                                members,
                            });
                        }
                    }
                }
            }
            if !groups.is_empty() {
                categories.push(RosterCategory {
                    title: title.to_string(),
                    groups,
                });
            }
        }
        Self { categories }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
