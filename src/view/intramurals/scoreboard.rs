use maud::{Markup, html};
use serde::Serialize;

use crate::model::IntramuralsData;
use crate::score::{EventResult, ResultLabel, ResultsFilter, aggregate_event_results, filter_event_results};
use crate::view::utils::query_value;

pub const FILTER_TABS: [(&str, &str); 6] = [
    ("all", "All"),
    ("major", "Major"),
    ("minor", "Minor"),
    ("musical", "Musical"),
    ("e-sports", "E-Sports"),
    ("mind games", "Mind Games"),
];

const NO_WINNER_COLOR: &str = "var(--text-muted)";

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ScoreCard {
    pub result: EventResult,
    pub winner_color: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ScoreboardView {
    pub filter: ResultsFilter,
    pub cards: Vec<ScoreCard>,
}

#[must_use]
pub fn build_scoreboard(data: &IntramuralsData, filter: &ResultsFilter) -> ScoreboardView {
    let events = filter_event_results(aggregate_event_results(&data.categories), filter);
    let cards = events
        .into_iter()
        .map(|result| {
            let winner_color = result
                .winner()
                .and_then(|w| data.team(w.team))
                .map_or_else(|| NO_WINNER_COLOR.to_string(), |t| t.theme_color.clone());
            ScoreCard {
                result,
                winner_color,
            }
        })
        .collect();
    ScoreboardView {
        filter: filter.clone(),
        cards,
    }
}

fn rank_class(position: Option<usize>) -> &'static str {
    match position {
        Some(1) => "score-row rank-1",
        Some(2) => "score-row rank-2",
        Some(3) => "score-row rank-3",
        _ => "score-row",
    }
}

#[must_use]
pub fn render_scoreboard(view: &ScoreboardView) -> Markup {
    html! {
        section id="results" {
            div id="category-filters" class="tabs" {
                @for (value, label) in FILTER_TABS {
                    button class=(if view.filter.as_param() == value { "tab-btn active" } else { "tab-btn" })
                        data-filter=(value)
                        hx-get=(format!("/intramurals/results?filter={}", query_value(value)))
                        hx-target="#results" hx-swap="outerHTML" {
                        (label)
                    }
                }
            }
            div id="results-container" {
                @if view.cards.is_empty() {
                    div class="results-empty" { "No events found for this category" }
                }
                @for card in &view.cards {
                    div class="score-card" style=(format!("--winner-color: {}", card.winner_color)) {
                        div class="score-header" {
                            div class="score-event" { (card.result.event) }
                            div class="score-cat-badge" { (card.result.category) }
                        }
                        div class="score-body" {
                            @for r in &card.result.results {
                                div class=(rank_class(r.position)) {
                                    div class="rank-badge" {
                                        @match r.position {
                                            Some(p) => { (p) }
                                            None => { "-" }
                                        }
                                    }
                                    div class=(if r.label == ResultLabel::Winner { "score-team winner" } else { "score-team" }) {
                                        (r.team_name)
                                    }
                                    @match r.score {
                                        Some(score) => {
                                            div class="team-points" { "+" (score) }
                                        }
                                        None => {
                                            div class="team-points no-score" { (r.label.text()) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
