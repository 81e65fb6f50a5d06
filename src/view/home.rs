use chrono::Datelike;
use maud::{Markup, html};
use serde::Serialize;

use crate::model::{Announcement, Event, Officer, format_short_date, truncate_chars};
use crate::view::officers::OfficerCard;
use crate::view::utils::{Section, asset_url, render_section};

pub const LATEST_COUNT: usize = 3;
pub const HOME_EXCERPT_LEN: usize = 120;
/// Shown when the officers file lists no student officers.
pub const FALLBACK_OFFICER_COUNT: usize = 20;
const TOTAL_STUDENTS: &str = "800+";
const DEPARTMENTS: &str = "3";

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct StatCard {
    pub label: String,
    pub value: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct HomeAnnouncement {
    pub category: String,
    pub date: String,
    pub title: String,
    pub excerpt: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct HomeEvent {
    pub id: String,
    pub title: String,
    pub image: String,
    pub month: Option<String>,
    pub day: Option<u32>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct HomeView {
    pub stats: Section<Vec<StatCard>>,
    pub announcements: Section<Vec<HomeAnnouncement>>,
    pub events: Section<Vec<HomeEvent>>,
    pub officers: Section<Vec<OfficerCard>>,
}

#[must_use]
pub fn student_officer_count(officers: &[Officer]) -> usize {
    match officers.iter().filter(|o| o.is_student_officer()).count() {
        0 => FALLBACK_OFFICER_COUNT,
        n => n,
    }
}

#[must_use]
pub fn build_stats(officers: &[Officer], events: &[Event]) -> Vec<StatCard> {
    let stat = |label: &str, value: String| StatCard {
        label: label.to_string(),
        value,
    };
    vec![
        stat("Total Students", TOTAL_STUDENTS.to_string()),
        stat("SSC Officers", student_officer_count(officers).to_string()),
        stat("Events This Year", events.len().to_string()),
        stat("Departments", DEPARTMENTS.to_string()),
    ]
}

/// The newest announcements, expected already sorted newest first.
#[must_use]
pub fn latest_announcements(posts: &[Announcement]) -> Vec<HomeAnnouncement> {
    posts
        .iter()
        .take(LATEST_COUNT)
        .map(|p| HomeAnnouncement {
            category: p.category.clone(),
            date: format_short_date(&p.date),
            title: p.title.clone(),
            excerpt: format!("{}...", truncate_chars(&p.content, HOME_EXCERPT_LEN)),
        })
        .collect()
}

/// The first events in file order.
#[must_use]
pub fn latest_events(events: &[Event]) -> Vec<HomeEvent> {
    events
        .iter()
        .take(LATEST_COUNT)
        .map(|e| {
            let start = e.parsed_start();
            HomeEvent {
                id: e.id.clone(),
                title: e.title.clone(),
                image: e.cover_image(),
                month: start.map(|d| d.format("%b").to_string()),
                day: start.map(|d| d.day()),
            }
        })
        .collect()
}

/// Student officers by `order`.
#[must_use]
pub fn featured_officers(officers: &[Officer]) -> Vec<OfficerCard> {
    let mut students: Vec<&Officer> = officers.iter().filter(|o| o.is_student_officer()).collect();
    students.sort_by_key(|o| o.order);
    students.into_iter().map(OfficerCard::from_officer).collect()
}

#[must_use]
pub fn render_home(view: &HomeView) -> Markup {
    html! {
        section class="hero" {
            h1 { "Supreme Student Council" }
            p class="hero-tagline" { "Serving the student body, one initiative at a time." }
        }
        section class="homepage-stats-grid" {
            (render_section(&view.stats, "stats", |stats| html! {
                @for stat in stats {
                    div class="stat-card" {
                        h3 { (stat.value) }
                        p { (stat.label) }
                    }
                }
            }))
        }
        section class="home-section" {
            h2 { "Latest Announcements" }
            div id="announcements-grid" {
                (render_section(&view.announcements, "announcements", |items| html! {
                    @for item in items {
                        article class="card announcement-card" {
                            div class="card-content" {
                                div class="card-meta" {
                                    span class="card-category" { (item.category) }
                                    span class="card-dot" { "•" }
                                    span class="card-date" { (item.date) }
                                }
                                h3 class="card-title" { (item.title) }
                                p class="card-excerpt" { (item.excerpt) }
                                div class="card-footer" {
                                    a href="/announcements" class="btn-read-more" { "Read More →" }
                                }
                            }
                        }
                    }
                }))
            }
        }
        section class="home-section" {
            h2 { "Upcoming Events" }
            div id="events-grid" {
                (render_section(&view.events, "events", |items| html! {
                    @for item in items {
                        a href="/events" class="event-poster-card" title=(format!("{} - Click to view details", item.title)) {
                            img src=(asset_url(&item.image)) alt=(item.title) class="poster-image" loading="lazy";
                            @if let (Some(month), Some(day)) = (&item.month, item.day) {
                                div class="poster-date-badge" {
                                    span class="poster-date-month" { (month) }
                                    span class="poster-date-day" { (day) }
                                }
                            }
                        }
                    }
                }))
            }
        }
        section class="home-section" {
            h2 { "Meet the Officers" }
            div id="officers-grid" {
                (render_section(&view.officers, "officers", |cards| html! {
                    @for card in cards {
                        div class="officer-card" {
                            div class="officer-image-container" {
                                img src=(asset_url(&card.image)) alt=(card.name) class="officer-image" loading="lazy";
                            }
                            div class="officer-info" {
                                h3 { (card.name) }
                                p class="officer-role" { (card.position) }
                                p class="officer-dept" { (card.department) }
                            }
                        }
                    }
                }))
            }
        }
    }
}
