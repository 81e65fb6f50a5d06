use maud::{Markup, html};
use serde::Serialize;

use crate::model::{DEFAULT_TEAM_COLOR, Day, IntramuralsData, TeamCode};
use crate::score::{RankedTeam, compute_standings, rank_teams};
use crate::view::utils::asset_url;

/// A ranked team with its display metadata, by final tally.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TeamCard {
    pub team: TeamCode,
    pub name: String,
    pub department: String,
    pub color: String,
    pub logo: String,
    pub score: i64,
    pub rank: usize,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct StatRow {
    pub team: TeamCode,
    pub department: String,
    pub color: String,
    pub score: i64,
    /// Bar length relative to the leader, one decimal.
    pub percent: String,
}

#[must_use]
pub fn team_card(data: &IntramuralsData, ranked: &RankedTeam) -> TeamCard {
    let team = data.team(ranked.team);
    TeamCard {
        team: ranked.team,
        name: data.team_name(ranked.team),
        department: team.map(|t| t.department.clone()).unwrap_or_default(),
        color: team.map_or_else(|| DEFAULT_TEAM_COLOR.to_string(), |t| t.theme_color.clone()),
        logo: ranked.team.logo_path().to_string(),
        score: ranked.score,
        rank: ranked.rank,
    }
}

/// Teams ranked by the final tally.
#[must_use]
pub fn final_rankings(data: &IntramuralsData) -> Vec<TeamCard> {
    rank_teams(&compute_standings(Day::Final, Some(data)))
        .iter()
        .map(|r| team_card(data, r))
        .collect()
}

#[must_use]
pub fn bar_percent(score: i64, max: i64) -> String {
    if max <= 0 {
        return "0.0".to_string();
    }
    format!("{:.1}", score as f64 / max as f64 * 100.0)
}

#[must_use]
pub fn build_stats(cards: &[TeamCard]) -> Vec<StatRow> {
    let max = cards.iter().map(|c| c.score).max().unwrap_or(0);
    cards
        .iter()
        .map(|c| StatRow {
            team: c.team,
            department: c.department.clone(),
            color: c.color.clone(),
            score: c.score,
            percent: bar_percent(c.score, max),
        })
        .collect()
}

#[must_use]
pub fn render_stats(rows: &[StatRow]) -> Markup {
    html! {
        div id="stat-bars" {
            @for row in rows {
                div class="stat-row" {
                    div class="stat-team" style=(format!("color: {}", row.color)) { (row.department) }
                    div class="stat-track" {
                        div class="stat-fill"
                            style=(format!("background: {}; width: {}%", row.color, row.percent))
                            data-percent=(row.percent) {}
                    }
                    div class="stat-score" { (row.score) }
                }
            }
        }
    }
}

#[must_use]
pub fn render_team_cards(cards: &[TeamCard]) -> Markup {
    html! {
        div id="teams-grid" {
            @for card in cards {
                div class="team-card" style=(format!("--team-color: {}", card.color)) data-team=(card.team.short()) {
                    div class="team-logo" style=(format!("border-color: {}", card.color)) {
                        img src=(asset_url(&card.logo)) alt=(card.name) loading="lazy";
                    }
                    h3 class="team-title" { (card.name) }
                    div class="team-tag" { (card.department) }
                    button class="roster-btn"
                        hx-get=(format!("/intramurals/roster/{}", card.team.short()))
                        hx-target="#roster-modal" hx-swap="innerHTML" {
                        "View Team"
                    }
                }
            }
        }
    }
}
