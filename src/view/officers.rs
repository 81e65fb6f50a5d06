use maud::{Markup, html};
use serde::Serialize;

use crate::model::{DEFAULT_AVATAR, LayoutItem, Officer, UPCOMING_SLOT};
use crate::view::utils::{Section, asset_url, render_section};

const DEFAULT_DIVIDER: &str = "Officers";
const PLACEHOLDER_ROLE: &str = "SAO Representative";
const HIGHLIGHTED_POSITION: &str = "Adviser";

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct OfficerCard {
    pub name: String,
    pub position: String,
    pub department: String,
    pub image: String,
    pub email: Option<String>,
    pub highlighted: bool,
    /// A reserved slot with no officer behind it yet.
    pub placeholder: bool,
}

impl OfficerCard {
    #[must_use]
    pub fn from_officer(officer: &Officer) -> Self {
        Self {
            name: officer.name.clone(),
            position: officer.position.clone(),
            department: officer.department.clone(),
            image: officer.image_src(),
            email: officer.email.clone(),
            highlighted: officer.position == HIGHLIGHTED_POSITION,
            placeholder: false,
        }
    }

    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            name: "-".to_string(),
            position: PLACEHOLDER_ROLE.to_string(),
            department: String::new(),
            image: DEFAULT_AVATAR.to_string(),
            email: None,
            highlighted: false,
            placeholder: true,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OfficerBlock {
    Divider { label: String },
    Row { cards: Vec<OfficerCard> },
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct OfficersView {
    pub blocks: Section<Vec<OfficerBlock>>,
}

/// Exact case-insensitive name match first, then the first officer whose
/// name contains `name`.
#[must_use]
pub fn find_officer<'a>(officers: &'a [Officer], name: &str) -> Option<&'a Officer> {
    let wanted = name.trim().to_lowercase();
    officers
        .iter()
        .find(|o| o.name.trim().to_lowercase() == wanted)
        .or_else(|| {
            officers
                .iter()
                .find(|o| o.name.trim().to_lowercase().contains(&wanted))
        })
}

/// Lays officers out by `layout`. Unmatched names are skipped, except the
/// upcoming slot which gets a placeholder card.
#[must_use]
pub fn build_officers_with_layout(officers: &[Officer], layout: &[LayoutItem]) -> Vec<OfficerBlock> {
    layout
        .iter()
        .map(|item| match item {
            LayoutItem::Divider { label } => OfficerBlock::Divider {
                label: label.clone(),
            },
            LayoutItem::Row { names } => OfficerBlock::Row {
                cards: names
                    .iter()
                    .filter_map(|name| match find_officer(officers, name) {
                        Some(officer) => Some(OfficerCard::from_officer(officer)),
                        None if name == UPCOMING_SLOT => Some(OfficerCard::placeholder()),
                        None => None,
                    })
                    .collect(),
            },
        })
        .collect()
}

/// One row per distinct `order`, ascending, under a single divider.
#[must_use]
pub fn build_officers_by_order(officers: &[Officer]) -> Vec<OfficerBlock> {
    if officers.is_empty() {
        return Vec::new();
    }
    let mut sorted: Vec<&Officer> = officers.iter().collect();
    sorted.sort_by_key(|o| o.order);
    let mut blocks = vec![OfficerBlock::Divider {
        label: DEFAULT_DIVIDER.to_string(),
    }];
    for chunk in sorted.chunk_by(|a, b| a.order == b.order) {
        blocks.push(OfficerBlock::Row {
            cards: chunk.iter().map(|o| OfficerCard::from_officer(o)).collect(),
        });
    }
    blocks
}

#[must_use]
pub fn build_officers(officers: &[Officer], layout: Option<&[LayoutItem]>) -> Vec<OfficerBlock> {
    match layout {
        Some(layout) => build_officers_with_layout(officers, layout),
        None => build_officers_by_order(officers),
    }
}

fn render_card(card: &OfficerCard) -> Markup {
    let class = if card.highlighted {
        "officer-card premium-card"
    } else if card.placeholder {
        "officer-card placeholder-card"
    } else {
        "officer-card"
    };
    html! {
        div class=(class) {
            div class="officer-image-container" {
                img src=(asset_url(&card.image)) alt=(card.name) class="officer-image" loading="lazy";
                @if let Some(email) = &card.email {
                    div class="officer-socials" {
                        a href=(format!("mailto:{email}")) aria-label="Email" { "✉" }
                    }
                }
            }
            div class="officer-info" {
                h3 { (card.name) }
                p class="officer-role" { (card.position) }
                @if !card.department.is_empty() {
                    p class="officer-dept" { (card.department) }
                }
            }
        }
    }
}

#[must_use]
pub fn render_officer_blocks(blocks: &[OfficerBlock]) -> Markup {
    html! {
        div id="officers-list" class="officers-wrapper" {
            @for block in blocks {
                @match block {
                    OfficerBlock::Divider { label } => {
                        div class="section-divider" { h2 { (label) } }
                    }
                    OfficerBlock::Row { cards } => {
                        div class="officers-row" {
                            @for card in cards {
                                (render_card(card))
                            }
                        }
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_officers(view: &OfficersView) -> Markup {
    html! {
        h1 { "Officers" }
        (render_section(&view.blocks, "officers", |blocks| render_officer_blocks(blocks)))
    }
}
