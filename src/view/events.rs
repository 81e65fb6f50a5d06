use chrono::Datelike;
use maud::{Markup, html};
use serde::Serialize;
use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::model::{Event, format_short_date, parse_date};
use crate::view::announcements::SortOrder;
use crate::view::utils::{Section, asset_url, render_section};

const DEFAULT_ORGANIZER_AVATAR: &str = "assets/images/ssc-logo-removebg.png";
const ORGANIZER_AVATARS: [(&str, &str); 3] = [
    (
        "Cherry Jane Villasencio - PIO",
        "assets/images/officers/cherry-jane-villasencio.png",
    ),
    (
        "Cherry Jane Villasencio",
        "assets/images/officers/cherry-jane-villasencio.png",
    ),
    ("SSC Events Committee", DEFAULT_ORGANIZER_AVATAR),
];

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SemesterFilter {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "1st")]
    First,
    #[serde(rename = "2nd")]
    Second,
}

impl SemesterFilter {
    pub const ALL: [SemesterFilter; 3] = [
        SemesterFilter::All,
        SemesterFilter::First,
        SemesterFilter::Second,
    ];

    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "1st" => SemesterFilter::First,
            "2nd" => SemesterFilter::Second,
            _ => SemesterFilter::All,
        }
    }

    #[must_use]
    pub fn as_param(self) -> &'static str {
        match self {
            SemesterFilter::All => "all",
            SemesterFilter::First => "1st",
            SemesterFilter::Second => "2nd",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SemesterFilter::All => "All Events",
            SemesterFilter::First => "1st Semester",
            SemesterFilter::Second => "2nd Semester",
        }
    }

    #[must_use]
    pub fn matches(self, event: &Event) -> bool {
        self == SemesterFilter::All || event.semester == self.as_param()
    }

    #[must_use]
    pub fn empty_message(self) -> &'static str {
        match self {
            SemesterFilter::All => "There are no events matching your criteria.",
            SemesterFilter::First => "There are no events in 1st semester.",
            SemesterFilter::Second => "There are no events in 2nd semester.",
        }
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct EventQuery {
    pub semester: SemesterFilter,
    pub sort: SortOrder,
}

fn sort_param(sort: SortOrder) -> &'static str {
    match sort {
        SortOrder::Desc => "newest",
        SortOrder::Asc => "oldest",
    }
}

impl EventQuery {
    #[must_use]
    pub fn from_query<S: BuildHasher>(query: &HashMap<String, String, S>) -> Self {
        Self {
            semester: query
                .get("semester")
                .map_or(SemesterFilter::All, |s| SemesterFilter::parse(s)),
            sort: query
                .get("sort")
                .map_or(SortOrder::Desc, |s| SortOrder::parse(s)),
        }
    }

    #[must_use]
    pub fn href(semester: SemesterFilter, sort: SortOrder) -> String {
        format!(
            "/events?semester={}&sort={}",
            semester.as_param(),
            sort_param(sort)
        )
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SemesterCount {
    pub filter: SemesterFilter,
    pub label: String,
    pub count: usize,
    pub active: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EventCard {
    pub id: String,
    pub title: String,
    pub category: String,
    pub location: String,
    pub cover_image: String,
    pub image_count: usize,
    pub day: Option<u32>,
    pub month: Option<String>,
    pub organizer: String,
    pub organizer_avatar: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EventsGrid {
    pub counts: Vec<SemesterCount>,
    pub cards: Vec<EventCard>,
    pub empty_message: Option<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EventsView {
    pub query: EventQuery,
    pub grid: Section<EventsGrid>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EventDetailView {
    pub id: String,
    pub title: String,
    pub hero_image: String,
    pub date_range: String,
    pub location: String,
    pub organizer: String,
    pub summary: String,
    pub links: Vec<(String, String)>,
    /// Only filled when there is more than one image.
    pub gallery: Vec<String>,
}

#[must_use]
pub fn organizer_avatar(organizer: &str) -> &'static str {
    ORGANIZER_AVATARS
        .iter()
        .find(|(name, _)| *name == organizer)
        .map_or(DEFAULT_ORGANIZER_AVATAR, |(_, path)| path)
}

#[must_use]
pub fn semester_counts(events: &[Event], active: SemesterFilter) -> Vec<SemesterCount> {
    SemesterFilter::ALL
        .iter()
        .map(|&filter| SemesterCount {
            filter,
            label: filter.label().to_string(),
            count: events.iter().filter(|e| filter.matches(e)).count(),
            active: filter == active,
        })
        .collect()
}

#[must_use]
pub fn event_card(event: &Event) -> EventCard {
    let start = event.parsed_start();
    EventCard {
        id: event.id.clone(),
        title: event.title.clone(),
        category: event.category.clone(),
        location: event.location.clone(),
        cover_image: event.cover_image(),
        image_count: event.all_images().len(),
        day: start.map(|d| d.day()),
        month: start.map(|d| d.format("%b").to_string()),
        organizer: event.organizer.clone(),
        organizer_avatar: organizer_avatar(&event.organizer).to_string(),
    }
}

/// Semester filter, then a stable sort on the start date. Undated events stay last.
#[must_use]
pub fn filter_and_sort_events<'a>(events: &'a [Event], query: &EventQuery) -> Vec<&'a Event> {
    let mut filtered: Vec<&Event> = events.iter().filter(|e| query.semester.matches(e)).collect();
    filtered.sort_by(|a, b| match (a.parsed_start(), b.parsed_start()) {
        (Some(da), Some(db)) => match query.sort {
            SortOrder::Desc => db.cmp(&da),
            SortOrder::Asc => da.cmp(&db),
        },
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    filtered
}

#[must_use]
pub fn build_events(events: &[Event], query: &EventQuery) -> EventsGrid {
    let cards: Vec<EventCard> = filter_and_sort_events(events, query)
        .into_iter()
        .map(event_card)
        .collect();
    EventsGrid {
        counts: semester_counts(events, query.semester),
        empty_message: cards
            .is_empty()
            .then(|| query.semester.empty_message().to_string()),
        cards,
    }
}

/// A single date when the event has no distinct end.
#[must_use]
pub fn date_range(event: &Event) -> String {
    let start = format_short_date(&event.start_date);
    match &event.end_date {
        Some(end) if parse_date(end) != event.parsed_start() => {
            format!("{start} - {}", format_short_date(end))
        }
        _ => start,
    }
}

#[must_use]
pub fn build_event_detail(events: &[Event], id: &str) -> Option<EventDetailView> {
    let event = events.iter().find(|e| e.id == id)?;
    let images = event.all_images();
    Some(EventDetailView {
        id: event.id.clone(),
        title: event.title.clone(),
        hero_image: event.cover_image(),
        date_range: date_range(event),
        location: event.location.clone(),
        organizer: event.organizer.clone(),
        summary: event.summary.clone(),
        links: event
            .links
            .iter()
            .map(|(label, url)| (label.clone(), url.clone()))
            .collect(),
        gallery: if images.len() > 1 { images } else { Vec::new() },
    })
}

fn render_card(card: &EventCard) -> Markup {
    html! {
        article class="event-card" data-event-id=(card.id) {
            div class="card-image" {
                img src=(asset_url(&card.cover_image)) alt=(card.title) loading="lazy";
                @if let (Some(day), Some(month)) = (card.day, &card.month) {
                    div class="image-overlay" {
                        div class="event-date" {
                            span class="day" { (day) }
                            span class="month" { (month) }
                        }
                    }
                }
                @if card.image_count > 1 {
                    div class="image-count-badge" { (card.image_count) " photos" }
                }
            }
            div class="card-content" {
                div class="event-category" { (card.category) }
                h2 class="event-title" { (card.title) }
                div class="event-location" { (card.location) }
            }
            div class="card-footer" {
                div class="event-organizer" {
                    img src=(asset_url(&card.organizer_avatar)) class="organizer-avatar" alt="";
                    span class="organizer-name" { (card.organizer) }
                }
                button class="view-details-btn"
                    hx-get=(format!("/events/{}", card.id))
                    hx-target="#event-modal" hx-swap="innerHTML" {
                    "View Details"
                }
            }
        }
    }
}

fn render_grid(query: &EventQuery, grid: &EventsGrid) -> Markup {
    html! {
        div class="events-toolbar" {
            div class="filter-group" {
                @for c in &grid.counts {
                    a class=(if c.active { "filter-btn active" } else { "filter-btn" })
                        data-filter=(c.filter.as_param())
                        href=(EventQuery::href(c.filter, query.sort))
                        hx-get=(EventQuery::href(c.filter, query.sort))
                        hx-target="#events-page" hx-select="#events-page" hx-swap="outerHTML" {
                        (c.label) " "
                        span class="count" id=(format!("count-{}", c.filter.as_param())) { (c.count) }
                    }
                }
            }
            a id="btn-sort-trigger" class="sort-btn"
                href=(EventQuery::href(query.semester, query.sort.toggled()))
                hx-get=(EventQuery::href(query.semester, query.sort.toggled()))
                hx-target="#events-page" hx-select="#events-page" hx-swap="outerHTML" {
                "Sort: " span id="sort-label" { (query.sort.label()) }
            }
        }
        @if let Some(message) = &grid.empty_message {
            div id="empty-state" class="empty-state" {
                h3 { "No events found" }
                p { (message) }
            }
        }
        div id="events-grid" class="events-grid" {
            @for card in &grid.cards {
                (render_card(card))
            }
        }
        div id="event-modal" class="event-modal" {}
    }
}

#[must_use]
pub fn render_events(view: &EventsView) -> Markup {
    html! {
        div id="events-page" {
            h1 { "Events" }
            (render_section(&view.grid, "events", |grid| render_grid(&view.query, grid)))
        }
    }
}

#[must_use]
pub fn render_event_detail(view: &EventDetailView) -> Markup {
    html! {
        div class="modal-content" data-event-id=(view.id) {
            img src=(asset_url(&view.hero_image)) class="modal-hero-image" alt=(view.title);
            h1 class="modal-title" { (view.title) }
            div class="modal-meta-row" {
                span { "📅 " (view.date_range) }
                span { "📍 " (view.location) }
                span { "👤 " (view.organizer) }
            }
            div class="modal-summary" { (view.summary) }
            @if !view.links.is_empty() {
                div class="modal-links" {
                    h3 { "Related Links" }
                    div class="links-grid" {
                        @for (label, url) in &view.links {
                            a href=(url) target="_blank" rel="noopener noreferrer" class="link-btn" { (label) }
                        }
                    }
                }
            }
            @if !view.gallery.is_empty() {
                div class="modal-gallery" {
                    h3 { "Gallery (" (view.gallery.len()) " photos)" }
                    div class="gallery-grid" {
                        @for (idx, image) in view.gallery.iter().enumerate() {
                            div class="gallery-item" {
                                img src=(asset_url(image)) alt=(format!("Gallery {}", idx + 1)) loading="lazy";
                            }
                        }
                    }
                }
            }
        }
    }
}
