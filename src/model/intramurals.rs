use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::ops::Index;
use tracing::warn;

use super::team::{Team, TeamCode};
use super::utils::{get_array, get_int, get_str, get_string_or, value_as_int};

/// Per-team point totals. Keyed by the closed team set, so a standings value
/// can never carry a team outside it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Standings {
    totals: [i64; 3],
}

impl Standings {
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, team: TeamCode) -> i64 {
        self.totals[team.index()]
    }

    pub fn set(&mut self, team: TeamCode, points: i64) {
        self.totals[team.index()] = points;
    }

    /// Teams in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (TeamCode, i64)> + '_ {
        TeamCode::ALL.into_iter().map(|t| (t, self.get(t)))
    }

    #[must_use]
    pub fn from_pairs(pairs: &[(TeamCode, i64)]) -> Self {
        let mut standings = Self::zero();
        for &(team, points) in pairs {
            standings.set(team, points);
        }
        standings
    }

    #[must_use]
    pub fn max(&self) -> i64 {
        self.totals.iter().copied().max().unwrap_or(0)
    }
}

impl Index<TeamCode> for Standings {
    type Output = i64;

    fn index(&self, team: TeamCode) -> &i64 {
        &self.totals[team.index()]
    }
}

impl Serialize for Standings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Competition day a standings view is requested for.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Day {
    #[default]
    #[serde(rename = "Day 1")]
    Day1,
    #[serde(rename = "Day 2")]
    Day2,
    #[serde(rename = "Final")]
    Final,
}

impl Day {
    pub const ALL: [Day; 3] = [Day::Day1, Day::Day2, Day::Final];

    /// `"Day 3"` and `"Final"` both name the final tally.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Day 1" => Some(Day::Day1),
            "Day 2" => Some(Day::Day2),
            "Day 3" | "Final" => Some(Day::Final),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Day::Day1 => "Day 1",
            Day::Day2 => "Day 2",
            Day::Final => "Day 3",
        }
    }

    /// Day 2 has no recorded data; its standings are interpolated.
    #[must_use]
    pub fn is_estimate(self) -> bool {
        matches!(self, Day::Day2)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DayStanding {
    pub day: Day,
    pub totals: Standings,
    pub estimated: bool,
}

/// Authoritative end-of-competition totals.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct FinalTally {
    pub totals: Standings,
}

impl FinalTally {
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let mut totals = Standings::zero();
        if let Some(map) = value.as_object() {
            for (key, points) in map {
                match TeamCode::from_tally_key(key) {
                    Some(team) => totals.set(team, value_as_int(points).unwrap_or(0)),
                    None => warn!(key = %key, "ignoring unknown team in final_tally"),
                }
            }
        }
        Self { totals }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct OverallStanding {
    pub team_name: String,
    pub total_points: i64,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct Day1Results {
    pub overall_standings: Vec<OverallStanding>,
}

impl Day1Results {
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let overall_standings = get_array(value, "overall_standings")
            .iter()
            .filter_map(|entry| {
                Some(OverallStanding {
                    team_name: get_str(entry, "team_name")?.to_string(),
                    total_points: get_int(entry, "total_points").unwrap_or(0),
                })
            })
            .collect();
        Self { overall_standings }
    }
}

/// One scored event. `None` means no score was recorded, which is not zero.
/// Scores keep the key order of the data file; ties are placed in that order.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ScoreEntry {
    pub event_name: String,
    pub category: String,
    pub scores: Vec<(TeamCode, Option<i64>)>,
}

impl ScoreEntry {
    #[must_use]
    pub fn from_value(value: &Value, category: &str) -> Self {
        let event_name = get_string_or(value, "event_name", "Untitled Event");
        let mut scores: Vec<(TeamCode, Option<i64>)> = Vec::new();
        if let Some(map) = value.get("scores").and_then(Value::as_object) {
            for (key, score) in map {
                let Some(team) = TeamCode::from_tally_key(key) else {
                    warn!(event = %event_name, key = %key, "ignoring unknown team in event scores");
                    continue;
                };
                scores.push((team, value_as_int(score)));
            }
        }
        Self {
            event_name,
            category: category.to_string(),
            scores,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Category {
    pub name: String,
    pub events: Vec<ScoreEntry>,
}

impl Category {
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let name = get_string_or(value, "name", "");
        let events = get_array(value, "events")
            .iter()
            .map(|evt| ScoreEntry::from_value(evt, &name))
            .collect();
        Self { name, events }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Activity {
    pub time: String,
    pub activity: String,
    pub venue: String,
    pub details: Option<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ScheduleDay {
    pub day: String,
    pub activities: Vec<Activity>,
}

impl ScheduleDay {
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let activities = get_array(value, "activities")
            .iter()
            .map(|act| Activity {
                time: get_string_or(act, "time", ""),
                activity: get_string_or(act, "activity", ""),
                venue: get_string_or(act, "venue", "TBA"),
                details: get_str(act, "details").map(str::to_string),
            })
            .collect();
        Self {
            day: get_string_or(value, "day", ""),
            activities,
        }
    }
}

#[derive(Serialize, Clone, Debug, Default)]
pub struct IntramuralsData {
    pub teams: Vec<Team>,
    pub schedule: Vec<ScheduleDay>,
    pub final_tally: FinalTally,
    pub categories: Vec<Category>,
    pub day1_results: Day1Results,
}

impl IntramuralsData {
    #[must_use]
    pub fn team(&self, code: TeamCode) -> Option<&Team> {
        self.teams.iter().find(|t| t.code == code)
    }

    #[must_use]
    pub fn team_name(&self, code: TeamCode) -> String {
        self.team(code)
            .map_or_else(|| code.display_name().to_string(), |t| t.name.clone())
    }

    #[must_use]
    pub fn schedule_day(&self, day: &str) -> Option<&ScheduleDay> {
        self.schedule.iter().find(|s| s.day == day)
    }
}

/// Shapes `intramurals.json`. Anything that is not an object yields empty data.
#[must_use]
pub fn normalize_intramurals(raw: &Value) -> IntramuralsData {
    if !raw.is_object() {
        return IntramuralsData::default();
    }
    IntramuralsData {
        teams: get_array(raw, "teams")
            .iter()
            .filter_map(Team::from_value)
            .collect(),
        schedule: get_array(raw, "schedule")
            .iter()
            .map(ScheduleDay::from_value)
            .collect(),
        final_tally: raw
            .get("final_tally")
            .map(FinalTally::from_value)
            .unwrap_or_default(),
        categories: get_array(raw, "categories")
            .iter()
            .map(Category::from_value)
            .collect(),
        day1_results: raw
            .get("day1_results")
            .map(Day1Results::from_value)
            .unwrap_or_default(),
    }
}
