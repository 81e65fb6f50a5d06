use maud::{Markup, html};
use serde::Serialize;

use crate::model::{Activity, IntramuralsData};
use crate::view::utils::query_value;

pub const DEFAULT_SCHEDULE_DAY: &str = "Day 1";

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TimelineView {
    pub day: String,
    pub days: Vec<String>,
    pub activities: Vec<Activity>,
}

/// Activities of `day`; an unknown day gives an empty timeline.
#[must_use]
pub fn build_timeline(data: &IntramuralsData, day: &str) -> TimelineView {
    TimelineView {
        day: day.to_string(),
        days: data.schedule.iter().map(|s| s.day.clone()).collect(),
        activities: data
            .schedule_day(day)
            .map(|s| s.activities.clone())
            .unwrap_or_default(),
    }
}

#[must_use]
pub fn render_timeline(view: &TimelineView) -> Markup {
    html! {
        section id="schedule" {
            div id="schedule-tabs" class="tabs" {
                @for day in &view.days {
                    button class=(if *day == view.day { "tab-btn active" } else { "tab-btn" })
                        data-day=(day)
                        hx-get=(format!("/intramurals/schedule?day={}", query_value(day)))
                        hx-target="#schedule" hx-swap="outerHTML" {
                        (day)
                    }
                }
            }
            div id="schedule-container" {
                @for act in &view.activities {
                    div class="timeline-item" {
                        div class="timeline-dot" {}
                        div class="timeline-content" {
                            span class="t-time" { (act.time) }
                            h3 class="t-activity" { (act.activity) }
                            div class="t-venue" { span { "📍" } " " (act.venue) }
                            @if let Some(details) = &act.details {
                                p class="t-details" { (details) }
                            }
                        }
                    }
                }
            }
        }
    }
}
