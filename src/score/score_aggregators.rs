use serde::Serialize;
use std::cmp::Ordering;

use crate::model::{Category, TeamCode};

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub enum ResultLabel {
    Winner,
    Placed(usize),
    NoScore,
}

impl ResultLabel {
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            ResultLabel::Winner => "Winner".to_string(),
            ResultLabel::Placed(position) => position.to_string(),
            ResultLabel::NoScore => "No Score".to_string(),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TeamResult {
    pub team: TeamCode,
    pub team_name: String,
    pub score: Option<i64>,
    pub position: Option<usize>,
    pub label: ResultLabel,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EventResult {
    pub category: String,
    pub event: String,
    pub results: Vec<TeamResult>,
}

impl EventResult {
    #[must_use]
    pub fn winner(&self) -> Option<&TeamResult> {
        self.results.iter().find(|r| r.label == ResultLabel::Winner)
    }
}

/// Recorded scores first, highest first; unrecorded scores after all of them.
fn compare_scores(a: Option<i64>, b: Option<i64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Flattens categories into one result card per event, teams placed by score.
#[must_use]
pub fn aggregate_event_results(categories: &[Category]) -> Vec<EventResult> {
    let mut all_events = Vec::new();
    for category in categories {
        for entry in &category.events {
            // stable: tied teams stay in file order
            let mut entries = entry.scores.clone();
            entries.sort_by(|a, b| compare_scores(a.1, b.1));

            let results = entries
                .into_iter()
                .enumerate()
                .map(|(i, (team, score))| {
                    let position = score.map(|_| i + 1);
                    let label = match position {
                        None => ResultLabel::NoScore,
                        Some(1) => ResultLabel::Winner,
                        Some(p) => ResultLabel::Placed(p),
                    };
                    TeamResult {
                        team,
                        team_name: team.display_name().to_string(),
                        score,
                        position,
                        label,
                    }
                })
                .collect();

            all_events.push(EventResult {
                category: category.name.clone(),
                event: entry.event_name.clone(),
                results,
            });
        }
    }
    all_events
}

/// Category filter for the results board.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Default)]
pub enum ResultsFilter {
    #[default]
    All,
    Major,
    Minor,
    Musical,
    Esports,
    MindGames,
    Other(String),
}

impl ResultsFilter {
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let filter = s.trim().to_lowercase();
        match filter.as_str() {
            "" | "all" => ResultsFilter::All,
            "major" => ResultsFilter::Major,
            "minor" => ResultsFilter::Minor,
            "musical" => ResultsFilter::Musical,
            "e-sports" | "esports" => ResultsFilter::Esports,
            "mind games" | "mind" => ResultsFilter::MindGames,
            _ => ResultsFilter::Other(filter),
        }
    }

    #[must_use]
    pub fn as_param(&self) -> &str {
        match self {
            ResultsFilter::All => "all",
            ResultsFilter::Major => "major",
            ResultsFilter::Minor => "minor",
            ResultsFilter::Musical => "musical",
            ResultsFilter::Esports => "e-sports",
            ResultsFilter::MindGames => "mind games",
            ResultsFilter::Other(s) => s,
        }
    }

    /// Substring match on the lower-cased category name.
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        let name = category.to_lowercase();
        let any = |keys: &[&str]| keys.iter().any(|k| name.contains(k));
        match self {
            ResultsFilter::All => true,
            ResultsFilter::Major => any(&["major"]),
            ResultsFilter::Minor => any(&["minor", "larong", "traditional"]),
            ResultsFilter::Musical => any(&["musical"]),
            ResultsFilter::Esports => any(&["esports", "e-sports"]),
            ResultsFilter::MindGames => any(&["mind"]),
            ResultsFilter::Other(filter) => name.contains(filter.as_str()),
        }
    }
}

#[must_use]
pub fn filter_event_results(events: Vec<EventResult>, filter: &ResultsFilter) -> Vec<EventResult> {
    events
        .into_iter()
        .filter(|evt| filter.matches(&evt.category))
        .collect()
}
