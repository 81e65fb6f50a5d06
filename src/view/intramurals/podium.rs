use maud::{Markup, html};
use serde::Serialize;

use crate::model::{DEFAULT_TEAM_COLOR, Day, IntramuralsData, TeamCode};
use crate::score::{compute_standings, rank_teams};
use crate::view::utils::{asset_url, query_value};

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];
const BAR_COLORS: [&str; 3] = ["var(--gold)", "var(--silver)", "var(--bronze)"];
const BAR_HEIGHTS: [u32; 3] = [150, 100, 70];

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PodiumBlock {
    pub team: TeamCode,
    pub name: String,
    pub department: String,
    pub color: String,
    pub logo: String,
    pub score: i64,
    pub rank: usize,
    pub medal: String,
    pub bar_color: String,
    pub bar_height: u32,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PodiumView {
    pub day: Day,
    pub estimated: bool,
    /// Second, first, third: the order the blocks stand on the podium.
    pub blocks: Vec<PodiumBlock>,
}

#[must_use]
pub fn build_podium(data: &IntramuralsData, day: Day) -> PodiumView {
    let ranked = rank_teams(&compute_standings(day, Some(data)));
    let blocks: Vec<PodiumBlock> = ranked
        .iter()
        .map(|r| {
            let team = data.team(r.team);
            let slot = r.rank - 1;
            PodiumBlock {
                team: r.team,
                name: data.team_name(r.team),
                department: team.map(|t| t.department.clone()).unwrap_or_default(),
                color: team.map_or_else(|| DEFAULT_TEAM_COLOR.to_string(), |t| t.theme_color.clone()),
                logo: r.team.logo_path().to_string(),
                score: r.score,
                rank: r.rank,
                medal: MEDALS[slot].to_string(),
                bar_color: BAR_COLORS[slot].to_string(),
                bar_height: BAR_HEIGHTS[slot],
            }
        })
        .collect();

    let display_order = [1, 0, 2];
    PodiumView {
        day,
        estimated: day.is_estimate(),
        blocks: display_order
            .iter()
            .filter_map(|&i| blocks.get(i).cloned())
            .collect(),
    }
}

#[must_use]
pub fn render_podium(view: &PodiumView) -> Markup {
    html! {
        section id="tri-podium" class="podium-section" {
            div class="podium-tabs" {
                @for day in Day::ALL {
                    button class=(if day == view.day { "podium-btn active" } else { "podium-btn" })
                        hx-get=(format!("/intramurals/podium?day={}", query_value(day.label())))
                        hx-target="#tri-podium" hx-swap="outerHTML" {
                        (day.label())
                    }
                }
            }
            @if view.estimated {
                p class="podium-note" { "Estimated standings between Day 1 and the final tally." }
            }
            div class="podium" {
                @for block in &view.blocks {
                    div class=(format!("podium-block position-{}", block.rank))
                        style=(format!("--bar-color: {}", block.bar_color))
                        data-team=(block.team.short())
                        hx-get=(format!("/intramurals/roster/{}", block.team.short()))
                        hx-target="#roster-modal" hx-swap="innerHTML" {
                        div class="medal-icon" { (block.medal) }
                        div class="team-circle" style=(format!("border-color: {}", block.color)) {
                            img src=(asset_url(&block.logo)) alt=(block.name) loading="lazy";
                        }
                        div class="block-platform" {
                            h3 class="team-name" { (block.name) }
                            p class="team-dept" { (block.department) }
                            div class="points-display" style=(format!("color: {}", block.color)) {
                                span class="count-up" { (block.score) }
                            }
                            div class="points-label" { "Points" }
                        }
                        div class="height-bar" style=(format!("height: {}px", block.bar_height)) {}
                    }
                }
            }
        }
    }
}
