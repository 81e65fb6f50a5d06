use chrono::Datelike;
use maud::{Markup, html};
use serde::Serialize;
use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::model::{
    Announcement, MediaItem, MediaKind, format_long_date, split_at_chars, truncate_chars,
};
use crate::view::utils::{Section, query_value, render_section};

pub const PINNED_ANNOUNCEMENT_ID: &str = "ANN-2026-002";
pub const ALL_CATEGORIES_LABEL: &str = "All Updates";
pub const SEE_MORE_LIMIT: usize = 250;
pub const LARGE_TEXT_LIMIT: usize = 80;
pub const PINNED_EXCERPT_LEN: usize = 80;
pub const MAX_VISIBLE_MEDIA: usize = 5;
pub const FILTER_YEARS: [i32; 2] = [2026, 2025];
const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const AUTHOR_AVATAR: &str = "/assets/images/homepage/ssc-logo-opt.webp";

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Desc,
    Asc,
}

impl SortOrder {
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "asc" | "oldest" => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }

    #[must_use]
    pub fn as_param(self) -> &'static str {
        match self {
            SortOrder::Desc => "desc",
            SortOrder::Asc => "asc",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Desc => "Newest",
            SortOrder::Asc => "Oldest",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Desc => SortOrder::Asc,
            SortOrder::Asc => SortOrder::Desc,
        }
    }
}

/// Feed filters for the announcements page.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AnnouncementQuery {
    pub category: String,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub sort: SortOrder,
}

impl Default for AnnouncementQuery {
    fn default() -> Self {
        Self {
            category: "all".to_string(),
            year: None,
            month: None,
            day: None,
            sort: SortOrder::Desc,
        }
    }
}

fn parse_param<T: std::str::FromStr, S: BuildHasher>(
    query: &HashMap<String, String, S>,
    key: &str,
) -> Option<T> {
    query.get(key).and_then(|v| v.trim().parse().ok())
}

impl AnnouncementQuery {
    #[must_use]
    pub fn from_query<S: BuildHasher>(query: &HashMap<String, String, S>) -> Self {
        Self {
            category: query
                .get("category")
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| "all".to_string()),
            year: parse_param(query, "year"),
            month: parse_param::<u32, S>(query, "month").filter(|m| (1..=12).contains(m)),
            day: parse_param::<u32, S>(query, "day").filter(|d| (1..=31).contains(d)),
            sort: query
                .get("sort")
                .map_or(SortOrder::Desc, |s| SortOrder::parse(s)),
        }
    }

    #[must_use]
    pub fn has_date_filter(&self) -> bool {
        self.year.is_some() || self.month.is_some() || self.day.is_some()
    }

    /// Category and date filters. With any date part set, undated posts drop out.
    #[must_use]
    pub fn matches(&self, post: &Announcement) -> bool {
        if self.category != "all" && post.category != self.category {
            return false;
        }
        if !self.has_date_filter() {
            return true;
        }
        let Some(date) = post.parsed_date() else {
            return false;
        };
        self.year.is_none_or(|y| date.year() == y)
            && self.month.is_none_or(|m| date.month() == m)
            && self.day.is_none_or(|d| date.day() == d)
    }

    /// Query string for a link that changes one part of the current filters.
    #[must_use]
    pub fn href(&self, category: &str, sort: SortOrder) -> String {
        let mut href = format!(
            "/announcements?category={}&sort={}",
            query_value(category),
            sort.as_param()
        );
        if let Some(y) = self.year {
            href.push_str(&format!("&year={y}"));
        }
        if let Some(m) = self.month {
            href.push_str(&format!("&month={m}"));
        }
        if let Some(d) = self.day {
            href.push_str(&format!("&day={d}"));
        }
        href
    }

    /// "5 March 2026" style label for the date filter button.
    #[must_use]
    pub fn date_label(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(d) = self.day {
            parts.push(d.to_string());
        }
        if let Some(name) = self.month.and_then(|m| MONTHS.get(m.checked_sub(1)? as usize)) {
            parts.push((*name).to_string());
        }
        if let Some(y) = self.year {
            parts.push(y.to_string());
        }
        if parts.is_empty() {
            "Select Date".to_string()
        } else {
            parts.join(" ")
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CategoryCount {
    pub label: String,
    pub value: String,
    /// `None` for the "All Updates" entry, which shows no badge.
    pub count: Option<usize>,
    pub active: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PinnedPost {
    pub id: String,
    pub title: String,
    pub date: String,
    pub excerpt: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CardBody {
    Empty,
    Large { text: String },
    Full { text: String },
    Split { visible: String, hidden: String },
}

impl CardBody {
    #[must_use]
    pub fn build(content: &str, has_media: bool) -> Self {
        let len = content.chars().count();
        if content.is_empty() {
            CardBody::Empty
        } else if !has_media && len < LARGE_TEXT_LIMIT {
            CardBody::Large {
                text: content.to_string(),
            }
        } else if len > SEE_MORE_LIMIT {
            let (visible, hidden) = split_at_chars(content, SEE_MORE_LIMIT);
            CardBody::Split {
                visible: visible.to_string(),
                hidden: hidden.to_string(),
            }
        } else {
            CardBody::Full {
                text: content.to_string(),
            }
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MediaGrid {
    pub grid_class: String,
    pub items: Vec<MediaItem>,
    /// Media beyond the visible slots, shown as "+N" on the last one.
    pub hidden_count: usize,
}

impl MediaGrid {
    #[must_use]
    pub fn build(media: &[MediaItem]) -> Option<Self> {
        let count = media.len();
        let grid_class = match count {
            0 => return None,
            1..=4 => format!("grid-{count}"),
            _ => "grid-5-plus".to_string(),
        };
        Some(Self {
            grid_class,
            items: media.iter().take(MAX_VISIBLE_MEDIA).cloned().collect(),
            hidden_count: count.saturating_sub(MAX_VISIBLE_MEDIA),
        })
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AnnouncementCard {
    pub id: String,
    pub title: String,
    pub author: String,
    pub date: String,
    pub body: CardBody,
    pub hashtags: Vec<String>,
    pub media: Option<MediaGrid>,
}

impl AnnouncementCard {
    #[must_use]
    pub fn from_post(post: &Announcement) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            author: post.author.clone(),
            date: display_date(post),
            body: CardBody::build(&post.content, !post.media.is_empty()),
            hashtags: post.hashtags.clone(),
            media: MediaGrid::build(&post.media),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AnnouncementsFeed {
    pub categories: Vec<CategoryCount>,
    pub pinned: Option<PinnedPost>,
    pub cards: Vec<AnnouncementCard>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AnnouncementsView {
    pub query: AnnouncementQuery,
    pub feed: Section<AnnouncementsFeed>,
}

#[must_use]
pub fn display_date(post: &Announcement) -> String {
    post.display_date
        .clone()
        .unwrap_or_else(|| format_long_date(&post.date))
}

/// "All Updates" first, then each category in order of first appearance.
#[must_use]
pub fn category_counts(posts: &[Announcement], active: &str) -> Vec<CategoryCount> {
    let mut seen: Vec<&str> = Vec::new();
    for post in posts {
        if !seen.contains(&post.category.as_str()) {
            seen.push(&post.category);
        }
    }
    let mut counts = vec![CategoryCount {
        label: ALL_CATEGORIES_LABEL.to_string(),
        value: "all".to_string(),
        count: None,
        active: active == "all",
    }];
    counts.extend(seen.into_iter().map(|cat| CategoryCount {
        label: cat.to_string(),
        value: cat.to_string(),
        count: Some(posts.iter().filter(|p| p.category == cat).count()),
        active: active == cat,
    }));
    counts
}

/// The fixed pinned post, else the newest one.
#[must_use]
pub fn pinned_post(posts: &[Announcement]) -> Option<PinnedPost> {
    let post = posts
        .iter()
        .find(|p| p.id == PINNED_ANNOUNCEMENT_ID)
        .or_else(|| posts.first())?;
    Some(PinnedPost {
        id: post.id.clone(),
        title: post.title.clone(),
        date: display_date(post),
        excerpt: format!("{}...", truncate_chars(&post.content, PINNED_EXCERPT_LEN)),
    })
}

/// Filtered feed in the requested order. Undated posts stay at the end.
#[must_use]
pub fn filter_and_sort<'a>(posts: &'a [Announcement], query: &AnnouncementQuery) -> Vec<&'a Announcement> {
    let mut filtered: Vec<&Announcement> = posts.iter().filter(|p| query.matches(p)).collect();
    filtered.sort_by(|a, b| match (a.parsed_date(), b.parsed_date()) {
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
pub fn build_announcements(posts: &[Announcement], query: &AnnouncementQuery) -> AnnouncementsFeed {
    AnnouncementsFeed {
        categories: category_counts(posts, &query.category),
        pinned: pinned_post(posts),
        cards: filter_and_sort(posts, query)
            .into_iter()
            .map(AnnouncementCard::from_post)
            .collect(),
    }
}

/// Escaped text with line breaks kept.
#[must_use]
pub fn render_multiline(text: &str) -> Markup {
    html! {
        @for (i, line) in text.split('\n').enumerate() {
            @if i > 0 { br; }
            (line)
        }
    }
}

fn render_media_grid(grid: &MediaGrid) -> Markup {
    html! {
        div class=(format!("image-grid {}", grid.grid_class)) {
            @for (idx, item) in grid.items.iter().enumerate() {
                div class=(if item.kind == MediaKind::Video { "img-item video-item" } else { "img-item" })
                    data-media-index=(idx) {
                    @if grid.hidden_count > 0 && idx == MAX_VISIBLE_MEDIA - 1 {
                        div class="more-overlay" { "+" (grid.hidden_count) }
                    }
                    @match item.kind {
                        MediaKind::Video => {
                            video preload="metadata" playsinline controls class="media-video" {
                                source src=(item.url);
                            }
                        }
                        MediaKind::Image => {
                            img src=(item.url) alt=(format!("Announcement media {}", idx + 1)) loading="lazy";
                        }
                    }
                }
            }
        }
    }
}

fn render_card(card: &AnnouncementCard) -> Markup {
    html! {
        article class="announcement-card" data-announcement-id=(card.id) id=(format!("post-{}", card.id)) {
            div class="card-header" {
                img src=(AUTHOR_AVATAR) alt=(card.author) class="card-author-avatar";
                div class="card-meta" {
                    span class="card-author" { (card.author) }
                    span class="card-time" { (card.date) }
                }
            }
            div class="card-body" {
                h3 class="card-title" { (card.title) }
                @match &card.body {
                    CardBody::Empty => {}
                    CardBody::Large { text } => {
                        p class="card-excerpt large-text" { (render_multiline(text)) }
                    }
                    CardBody::Full { text } => {
                        p class="card-excerpt" { (render_multiline(text)) }
                    }
                    CardBody::Split { visible, hidden } => {
                        details class="card-excerpt" {
                            summary {
                                span { (render_multiline(visible)) }
                                span class="dots" { "..." }
                                " "
                                span class="see-more-btn" { "See more" }
                            }
                            span class="more-text" { (render_multiline(hidden)) }
                        }
                    }
                }
                @if !card.hashtags.is_empty() {
                    div class="card-tags" {
                        @for tag in &card.hashtags {
                            span class="tag" { (tag) }
                        }
                    }
                }
            }
            @if let Some(grid) = &card.media {
                (render_media_grid(grid))
            }
        }
    }
}

fn render_date_filter(query: &AnnouncementQuery) -> Markup {
    html! {
        form id="date-filter" class="date-filter" hx-get="/announcements"
            hx-target="#announcements-page" hx-select="#announcements-page" hx-swap="outerHTML" {
            span id="date-filter-label" { (query.date_label()) }
            input type="hidden" name="category" value=(query.category);
            input type="hidden" name="sort" value=(query.sort.as_param());
            select id="year-select" name="year" {
                option value="" { "Year" }
                @for y in FILTER_YEARS {
                    option value=(y) selected[query.year == Some(y)] { (y) }
                }
            }
            select id="month-select" name="month" {
                option value="" { "Month" }
                @for (i, name) in MONTHS.iter().enumerate() {
                    @let m = i as u32 + 1;
                    option value=(m) selected[query.month == Some(m)] { (name) }
                }
            }
            select id="day-select" name="day" {
                option value="" { "Day" }
                @for d in 1..=31u32 {
                    option value=(d) selected[query.day == Some(d)] { (d) }
                }
            }
            button type="submit" id="apply-date-btn" class="btn" { "Apply" }
            a id="clear-date-btn" class="btn-text"
                href=(format!("/announcements?category={}&sort={}", query_value(&query.category), query.sort.as_param())) { "Clear" }
        }
    }
}

fn render_feed(query: &AnnouncementQuery, feed: &AnnouncementsFeed) -> Markup {
    html! {
        aside class="announcement-sidebar" {
            ul id="category-list" {
                @for cat in &feed.categories {
                    li {
                        a class=(if cat.active { "category-btn active" } else { "category-btn" })
                            data-category=(cat.value)
                            href=(query.href(&cat.value, query.sort))
                            hx-get=(query.href(&cat.value, query.sort))
                            hx-target="#announcements-page" hx-select="#announcements-page" hx-swap="outerHTML" {
                            (cat.label)
                            @if let Some(count) = cat.count {
                                " "
                                span class="count" { (count) }
                            }
                        }
                    }
                }
            }
        }
        section class="announcement-pinned" id="pinned-container" {
            @match &feed.pinned {
                Some(pinned) => {
                    article class="pinned-card" {
                        h3 class="pinned-title" { (pinned.title) }
                        p class="pinned-date" { (pinned.date) }
                        p class="pinned-excerpt" { (pinned.excerpt) }
                        a href=(format!("#post-{}", pinned.id)) class="btn-text view-post-btn" { "View Post →" }
                    }
                }
                None => {
                    p class="text-muted" { "No pinned announcements." }
                }
            }
        }
        div class="feed-controls" {
            (render_date_filter(query))
            a id="sort-select-btn" class="sort-btn"
                href=(query.href(&query.category, query.sort.toggled()))
                hx-get=(query.href(&query.category, query.sort.toggled()))
                hx-target="#announcements-page" hx-select="#announcements-page" hx-swap="outerHTML" {
                "Sort: " span id="sort-label" { (query.sort.label()) }
            }
        }
        section id="announcements-feed" {
            @if feed.cards.is_empty() {
                div class="empty-state" {
                    h3 { "No announcements found" }
                    p { "Try changing your filters." }
                }
            }
            @for card in &feed.cards {
                (render_card(card))
            }
        }
    }
}

#[must_use]
pub fn render_announcements(view: &AnnouncementsView) -> Markup {
    html! {
        div id="announcements-page" class="announcements-layout" {
            h1 { "Announcements" }
            (render_section(&view.feed, "announcements", |feed| render_feed(&view.query, feed)))
        }
    }
}
