use maud::{Markup, html};
use serde::Serialize;

use crate::HTMX_PATH;

pub const SITE_TITLE: &str = "Supreme Student Council";

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Announcements,
    Events,
    Officers,
    Intramurals,
}

impl NavItem {
    pub const ALL: [NavItem; 5] = [
        NavItem::Home,
        NavItem::Announcements,
        NavItem::Events,
        NavItem::Officers,
        NavItem::Intramurals,
    ];

    #[must_use]
    pub fn href(self) -> &'static str {
        match self {
            NavItem::Home => "/",
            NavItem::Announcements => "/announcements",
            NavItem::Events => "/events",
            NavItem::Officers => "/officers",
            NavItem::Intramurals => "/intramurals",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            NavItem::Home => "Home",
            NavItem::Announcements => "Announcements",
            NavItem::Events => "Events",
            NavItem::Officers => "Officers",
            NavItem::Intramurals => "Intramurals",
        }
    }
}

#[must_use]
pub fn render_layout(page_title: &str, active: NavItem, body: &Markup) -> Markup {
    let title = if active == NavItem::Home {
        SITE_TITLE.to_string()
    } else {
        format!("{page_title} | {SITE_TITLE}")
    };
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                link rel="stylesheet" href="/assets/styles.css";
                title { (title) }
                script src=(HTMX_PATH) defer {}
            }
            body {
                header class="site-header" {
                    a class="brand" href="/" { (SITE_TITLE) }
                    nav {
                        ul class="nav-links" {
                            @for item in NavItem::ALL {
                                li {
                                    a href=(item.href()) class=(if item == active { "active" } else { "" }) { (item.label()) }
                                }
                            }
                        }
                    }
                }
                main id="content" {
                    (body)
                }
            }
        }
    }
}
