use serde_json::Value;
use tracing::{debug, warn};

use crate::controller::cache::{CachedLoader, FetchOptions};
use crate::error::AppError;
use crate::model::{
    Announcement, Day, Event, IntramuralsData, LayoutItem, Officer, TeamCode,
    normalize_announcements, normalize_events, normalize_intramurals, normalize_officers,
};
use crate::score::ResultsFilter;
use crate::view::PageView;
use crate::view::announcements::{AnnouncementQuery, AnnouncementsView, build_announcements};
use crate::view::events::{EventQuery, EventsView, build_event_detail, build_events};
use crate::view::home::{HomeView, build_stats, featured_officers, latest_announcements, latest_events};
use crate::view::intramurals::{
    IntramuralsQuery, IntramuralsView, build_dashboard, build_podium, build_roster,
    build_scoreboard, build_timeline,
};
use crate::view::officers::{OfficersView, build_officers};
use crate::view::utils::Section;

/// One JSON data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Announcements,
    Events,
    Officers,
    Intramurals,
}

impl Source {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Source::Announcements => "announcements.json",
            Source::Events => "events.json",
            Source::Officers => "officers.json",
            Source::Intramurals => "intramurals.json",
        }
    }
}

/// What was requested, with its decoded view state.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Home,
    Announcements(AnnouncementQuery),
    Events(EventQuery),
    EventDetail(String),
    Officers,
    Intramurals(IntramuralsQuery),
    Podium(Day),
    Results(ResultsFilter),
    Schedule(String),
    Roster(TeamCode),
}

impl Page {
    /// Data files the page is built from.
    #[must_use]
    pub fn sources(&self) -> &'static [Source] {
        match self {
            Page::Home => &[Source::Officers, Source::Events, Source::Announcements],
            Page::Announcements(_) => &[Source::Announcements],
            Page::Events(_) | Page::EventDetail(_) => &[Source::Events],
            Page::Officers => &[Source::Officers],
            Page::Intramurals(_)
            | Page::Podium(_)
            | Page::Results(_)
            | Page::Schedule(_)
            | Page::Roster(_) => &[Source::Intramurals],
        }
    }

    /// Cache policy per call site. The events page always reads fresh data.
    #[must_use]
    pub fn fetch_options(&self, source: Source) -> FetchOptions {
        match (self, source) {
            (Page::Home, Source::Officers | Source::Events) => FetchOptions::cached(3600),
            (_, Source::Announcements | Source::Officers) => FetchOptions::cached(300),
            (_, Source::Events) => FetchOptions::uncached(),
            (_, Source::Intramurals) => FetchOptions::cached(3600),
        }
    }
}

/// Normalized data, one slot per source. `None` until its load settles.
#[derive(Debug, Clone, Default)]
pub struct Loaded {
    pub announcements: Option<Result<Vec<Announcement>, AppError>>,
    pub events: Option<Result<Vec<Event>, AppError>>,
    pub officers: Option<Result<Vec<Officer>, AppError>>,
    pub intramurals: Option<Result<IntramuralsData, AppError>>,
}

#[derive(Debug, Clone)]
pub struct PageModel {
    pub page: Page,
    pub loaded: Loaded,
    pub pending: usize,
    pub view: Option<PageView>,
    pub error: Option<AppError>,
}

impl PageModel {
    #[must_use]
    pub fn new(page: Page) -> Self {
        Self {
            page,
            loaded: Loaded::default(),
            pending: 0,
            view: None,
            error: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    PageLoad,
    AnnouncementsLoaded(Result<Vec<Announcement>, AppError>),
    EventsLoaded(Result<Vec<Event>, AppError>),
    OfficersLoaded(Result<Vec<Officer>, AppError>),
    IntramuralsLoaded(Box<Result<IntramuralsData, AppError>>),
    Built(Box<PageView>),
    Failed(AppError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Load(Source),
    BuildView,
}

#[derive(Clone, Copy)]
pub struct Deps<'a> {
    pub loader: &'a CachedLoader,
    pub officers_layout: Option<&'a [LayoutItem]>,
}

fn settle(model: &mut PageModel) -> Vec<Effect> {
    model.pending = model.pending.saturating_sub(1);
    if model.pending == 0 {
        vec![Effect::BuildView]
    } else {
        vec![]
    }
}

pub fn update(model: &mut PageModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::PageLoad => {
            let sources = model.page.sources();
            model.pending = sources.len();
            if sources.is_empty() {
                vec![Effect::BuildView]
            } else {
                sources.iter().map(|&s| Effect::Load(s)).collect()
            }
        }
        Msg::AnnouncementsLoaded(r) => {
            model.loaded.announcements = Some(r);
            settle(model)
        }
        Msg::EventsLoaded(r) => {
            model.loaded.events = Some(r);
            settle(model)
        }
        Msg::OfficersLoaded(r) => {
            model.loaded.officers = Some(r);
            settle(model)
        }
        Msg::IntramuralsLoaded(r) => {
            model.loaded.intramurals = Some(*r);
            settle(model)
        }
        Msg::Built(view) => {
            model.view = Some(*view);
            vec![]
        }
        Msg::Failed(e) => {
            model.error = Some(e);
            vec![]
        }
    }
}

async fn fetch(deps: Deps<'_>, page: &Page, source: Source) -> Result<Value, AppError> {
    deps.loader
        .fetch_json(source.path(), page.fetch_options(source))
        .await
}

pub async fn run_effect(effect: Effect, model: &PageModel, deps: Deps<'_>) -> Msg {
    match effect {
        Effect::Load(source) => {
            let raw = fetch(deps, &model.page, source).await;
            if let Err(e) = &raw {
                warn!(source = source.path(), error = %e, "data source failed");
            }
            match source {
                Source::Announcements => {
                    Msg::AnnouncementsLoaded(raw.map(|v| normalize_announcements(&v)))
                }
                Source::Events => Msg::EventsLoaded(raw.map(|v| normalize_events(&v))),
                Source::Officers => Msg::OfficersLoaded(raw.map(|v| normalize_officers(&v))),
                Source::Intramurals => {
                    Msg::IntramuralsLoaded(Box::new(raw.map(|v| normalize_intramurals(&v))))
                }
            }
        }
        Effect::BuildView => match build_view(&model.page, &model.loaded, deps.officers_layout) {
            Ok(view) => Msg::Built(Box::new(view)),
            Err(e) => Msg::Failed(e),
        },
    }
}

fn required<T>(slot: Option<&Result<T, AppError>>) -> Result<&T, AppError> {
    match slot {
        Some(Ok(data)) => Ok(data),
        Some(Err(e)) => Err(e.clone()),
        None => Err(AppError::Other("data not loaded".into())),
    }
}

/// Builds the render-model once every source has settled. A failed source
/// only fails its own section on full pages. Event detail and roster
/// fragments need their data and answer `NotFound` for an unknown id.
///
/// # Errors
///
/// Returns the load error for single-record fragments, or `AppError::NotFound`.
pub fn build_view(
    page: &Page,
    loaded: &Loaded,
    officers_layout: Option<&[LayoutItem]>,
) -> Result<PageView, AppError> {
    let intramurals = loaded.intramurals.as_ref();
    let view = match page {
        Page::Home => {
            let stats = match (loaded.officers.as_ref(), loaded.events.as_ref()) {
                (Some(Ok(officers)), Some(Ok(events))) => Section::Ready(build_stats(officers, events)),
                (Some(Err(e)), _) | (_, Some(Err(e))) => Section::Failed(e.to_string()),
                _ => Section::Failed("not loaded".into()),
            };
            PageView::Home(HomeView {
                stats,
                announcements: Section::from_result(loaded.announcements.as_ref(), |p| {
                    latest_announcements(p)
                }),
                events: Section::from_result(loaded.events.as_ref(), |e| latest_events(e)),
                officers: Section::from_result(loaded.officers.as_ref(), |o| featured_officers(o)),
            })
        }
        Page::Announcements(query) => PageView::Announcements(AnnouncementsView {
            query: query.clone(),
            feed: Section::from_result(loaded.announcements.as_ref(), |p| {
                build_announcements(p, query)
            }),
        }),
        Page::Events(query) => PageView::Events(EventsView {
            query: *query,
            grid: Section::from_result(loaded.events.as_ref(), |e| build_events(e, query)),
        }),
        Page::EventDetail(id) => {
            let events = required(loaded.events.as_ref())?;
            let detail = build_event_detail(events, id)
                .ok_or_else(|| AppError::NotFound(format!("event {id}")))?;
            PageView::EventDetail(detail)
        }
        Page::Officers => PageView::Officers(OfficersView {
            blocks: Section::from_result(loaded.officers.as_ref(), |o| {
                build_officers(o, officers_layout)
            }),
        }),
        Page::Intramurals(query) => PageView::Intramurals(IntramuralsView {
            query: query.clone(),
            dashboard: Section::from_result(intramurals, |d| build_dashboard(d, query)),
        }),
        Page::Podium(day) => PageView::Podium(Section::from_result(intramurals, |d| build_podium(d, *day))),
        Page::Results(filter) => {
            PageView::Results(Section::from_result(intramurals, |d| build_scoreboard(d, filter)))
        }
        Page::Schedule(day) => {
            PageView::Schedule(Section::from_result(intramurals, |d| build_timeline(d, day)))
        }
        Page::Roster(team) => {
            let data = required(intramurals)?;
            let roster = build_roster(data, *team)
                .ok_or_else(|| AppError::NotFound(format!("team {team}")))?;
            PageView::Roster(roster)
        }
    };
    debug!(?page, fragment = view.is_fragment(), "view built");
    Ok(view)
}
