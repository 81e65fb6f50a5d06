pub mod announcements;
pub mod events;
pub mod home;
pub mod index;
pub mod intramurals;
pub mod officers;
pub mod utils;

use maud::Markup;
use serde::Serialize;

use crate::view::announcements::{AnnouncementsView, render_announcements};
use crate::view::events::{EventDetailView, EventsView, render_event_detail, render_events};
use crate::view::home::{HomeView, render_home};
use crate::view::index::{NavItem, render_layout};
use crate::view::intramurals::{
    IntramuralsView, PodiumView, RosterView, ScoreboardView, TimelineView, render_intramurals,
    render_podium, render_roster, render_scoreboard, render_timeline,
};
use crate::view::officers::{OfficersView, render_officers};
use crate::view::utils::{Section, render_section};

/// Everything a response is painted from. Full pages get the site layout;
/// the rest are htmx fragments.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "page", content = "view", rename_all = "snake_case")]
pub enum PageView {
    Home(HomeView),
    Announcements(AnnouncementsView),
    Events(EventsView),
    EventDetail(EventDetailView),
    Officers(OfficersView),
    Intramurals(IntramuralsView),
    Podium(Section<PodiumView>),
    Results(Section<ScoreboardView>),
    Schedule(Section<TimelineView>),
    Roster(RosterView),
}

impl PageView {
    #[must_use]
    pub fn is_fragment(&self) -> bool {
        !matches!(
            self,
            PageView::Home(_)
                | PageView::Announcements(_)
                | PageView::Events(_)
                | PageView::Officers(_)
                | PageView::Intramurals(_)
        )
    }

    #[must_use]
    pub fn nav(&self) -> NavItem {
        match self {
            PageView::Home(_) => NavItem::Home,
            PageView::Announcements(_) => NavItem::Announcements,
            PageView::Events(_) | PageView::EventDetail(_) => NavItem::Events,
            PageView::Officers(_) => NavItem::Officers,
            PageView::Intramurals(_)
            | PageView::Podium(_)
            | PageView::Results(_)
            | PageView::Schedule(_)
            | PageView::Roster(_) => NavItem::Intramurals,
        }
    }
}

/// Paints the view alone, without the site layout.
#[must_use]
pub fn render_body(view: &PageView) -> Markup {
    match view {
        PageView::Home(v) => render_home(v),
        PageView::Announcements(v) => render_announcements(v),
        PageView::Events(v) => render_events(v),
        PageView::EventDetail(v) => render_event_detail(v),
        PageView::Officers(v) => render_officers(v),
        PageView::Intramurals(v) => render_intramurals(v),
        PageView::Podium(s) => render_section(s, "standings", render_podium),
        PageView::Results(s) => render_section(s, "results", render_scoreboard),
        PageView::Schedule(s) => render_section(s, "schedule", render_timeline),
        PageView::Roster(v) => render_roster(v),
    }
}

/// Full pages come wrapped in the layout; fragments only when `standalone`
/// is set, for a fragment URL opened directly in the browser.
#[must_use]
pub fn render_page_view(view: &PageView, standalone: bool) -> Markup {
    let body = render_body(view);
    if view.is_fragment() && !standalone {
        return body;
    }
    let nav = view.nav();
    let title = match view {
        PageView::EventDetail(v) => v.title.clone(),
        _ => nav.label().to_string(),
    };
    render_layout(&title, nav, &body)
}
