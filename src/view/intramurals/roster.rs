use maud::{Markup, html};
use serde::Serialize;

use crate::model::{IntramuralsData, RosterTree, TeamCode};
use crate::view::intramurals::stats::{TeamCard, final_rankings};
use crate::view::utils::asset_url;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RosterView {
    pub card: TeamCard,
    pub roster: RosterTree,
}

#[must_use]
pub fn build_roster(data: &IntramuralsData, team: TeamCode) -> Option<RosterView> {
    let card = final_rankings(data).into_iter().find(|c| c.team == team)?;
    let roster = data.team(team).map(|t| t.roster.clone()).unwrap_or_default();
    Some(RosterView { card, roster })
}

#[must_use]
pub fn render_roster(view: &RosterView) -> Markup {
    let card = &view.card;
    html! {
        div class="modal-box" {
            div class="modal-team-header" {
                img src=(asset_url(&card.logo)) class="modal-team-logo"
                    style=(format!("border-color: {}", card.color)) loading="lazy";
                div {
                    h2 class="modal-team-name" style=(format!("color: {}", card.color)) { (card.name) }
                    p { (card.department) " • " (card.score) " Points" }
                }
            }
            @if view.roster.is_empty() {
                p class="roster-empty" { "No roster published yet." }
            }
            @for category in &view.roster.categories {
                div class="roster-category" {
                    h3 class="category-title" { (category.title) }
                    div class="roster-grid" {
                        @for group in &category.groups {
                            div class="roster-box" {
                                strong { (group.label) }
                                @for (i, member) in group.members.iter().enumerate() {
                                    @if i > 0 { br; }
                                    (member)
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
