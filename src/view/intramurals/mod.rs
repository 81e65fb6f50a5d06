pub mod podium;
pub mod roster;
pub mod scoreboard;
pub mod stats;
pub mod timeline;

pub use podium::*;
pub use roster::*;
pub use scoreboard::*;
pub use stats::*;
pub use timeline::*;

use maud::{Markup, html};
use serde::Serialize;
use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::model::{Day, IntramuralsData};
use crate::score::ResultsFilter;
use crate::view::utils::{Section, render_section};

/// Which day, schedule tab and results filter the dashboard shows.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct IntramuralsQuery {
    pub day: Day,
    pub schedule_day: String,
    pub filter: ResultsFilter,
}

impl Default for IntramuralsQuery {
    fn default() -> Self {
        Self {
            day: Day::Day1,
            schedule_day: DEFAULT_SCHEDULE_DAY.to_string(),
            filter: ResultsFilter::All,
        }
    }
}

impl IntramuralsQuery {
    /// Unknown values fall back to the defaults.
    #[must_use]
    pub fn from_query<S: BuildHasher>(query: &HashMap<String, String, S>) -> Self {
        let defaults = Self::default();
        Self {
            day: query
                .get("day")
                .and_then(|d| Day::parse(d))
                .unwrap_or(defaults.day),
            schedule_day: query
                .get("schedule")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.schedule_day),
            filter: query
                .get("filter")
                .map_or(defaults.filter, |f| ResultsFilter::parse(f)),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DashboardView {
    pub podium: PodiumView,
    pub stats: Vec<StatRow>,
    pub teams: Vec<TeamCard>,
    pub timeline: TimelineView,
    pub scoreboard: ScoreboardView,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct IntramuralsView {
    pub query: IntramuralsQuery,
    pub dashboard: Section<DashboardView>,
}

#[must_use]
pub fn build_dashboard(data: &IntramuralsData, query: &IntramuralsQuery) -> DashboardView {
    let teams = final_rankings(data);
    DashboardView {
        podium: build_podium(data, query.day),
        stats: build_stats(&teams),
        teams,
        timeline: build_timeline(data, &query.schedule_day),
        scoreboard: build_scoreboard(data, &query.filter),
    }
}

#[must_use]
pub fn render_intramurals(view: &IntramuralsView) -> Markup {
    html! {
        h1 { "Intramurals" }
        (render_section(&view.dashboard, "the intramurals dashboard", |d| html! {
            (render_podium(&d.podium))
            h2 { "Overall Standings" }
            (render_stats(&d.stats))
            h2 { "Teams" }
            (render_team_cards(&d.teams))
            h2 { "Schedule" }
            (render_timeline(&d.timeline))
            h2 { "Results" }
            (render_scoreboard(&d.scoreboard))
            div id="roster-modal" class="roster-modal" {}
        }))
    }
}
