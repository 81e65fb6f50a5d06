use actix_web::web::{self, Data};
use actix_web::{HttpRequest, HttpResponse};
use serde_json::json;
use std::collections::HashMap;
use tracing::{error, info};

use crate::controller::site::SiteState;
use crate::error::AppError;
use crate::model::{Day, TeamCode};
use crate::mvu::{Deps, Msg, Page, PageModel, run_page};
use crate::score::ResultsFilter;
use crate::view::announcements::AnnouncementQuery;
use crate::view::events::EventQuery;
use crate::view::intramurals::{DEFAULT_SCHEDULE_DAY, IntramuralsQuery};
use crate::view::render_page_view;

type Query = web::Query<HashMap<String, String>>;

fn get_param_str<'a>(query: &'a HashMap<String, String>, key: &str) -> &'a str {
    query.get(key).map_or("", String::as_str)
}

fn wants_json(query: &HashMap<String, String>) -> bool {
    match get_param_str(query, "json") {
        "1" => true,
        "0" | "" => false,
        other => other.parse().unwrap_or(false),
    }
}

/// htmx sends `HX-Request` on fragment swaps; anything else is a browser
/// navigation and gets the full layout.
fn is_htmx(req: &HttpRequest) -> bool {
    req.headers().contains_key("HX-Request")
}

/// Runs the page and answers with its HTML, or its render-model as JSON.
pub async fn respond(state: &SiteState, page: Page, want_json: bool, standalone: bool) -> HttpResponse {
    let deps = Deps {
        loader: &state.loader,
        officers_layout: state.officers_layout.as_deref(),
    };
    let mut model = PageModel::new(page);
    match run_page(&mut model, Msg::PageLoad, deps).await {
        Ok(()) => match model.view {
            Some(view) if want_json => HttpResponse::Ok().json(view),
            Some(view) => HttpResponse::Ok()
                .content_type("text/html")
                .body(render_page_view(&view, standalone).into_string()),
            None => HttpResponse::InternalServerError().json(json!({"error": "page was not rendered"})),
        },
        Err(AppError::NotFound(what)) => {
            info!(page = ?model.page, %what, "not found");
            HttpResponse::NotFound().json(json!({"error": format!("{what} not found")}))
        }
        Err(e) => {
            error!(page = ?model.page, error = %e, "page failed");
            HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
        }
    }
}

pub async fn index(query: Query, state: Data<SiteState>) -> HttpResponse {
    respond(&state, Page::Home, wants_json(&query), true).await
}

pub async fn announcements(query: Query, state: Data<SiteState>) -> HttpResponse {
    let page = Page::Announcements(AnnouncementQuery::from_query(&query));
    respond(&state, page, wants_json(&query), true).await
}

pub async fn events(query: Query, state: Data<SiteState>) -> HttpResponse {
    let page = Page::Events(EventQuery::from_query(&query));
    respond(&state, page, wants_json(&query), true).await
}

pub async fn event_detail(
    req: HttpRequest,
    path: web::Path<String>,
    query: Query,
    state: Data<SiteState>,
) -> HttpResponse {
    let page = Page::EventDetail(path.into_inner());
    respond(&state, page, wants_json(&query), !is_htmx(&req)).await
}

pub async fn officers(query: Query, state: Data<SiteState>) -> HttpResponse {
    respond(&state, Page::Officers, wants_json(&query), true).await
}

pub async fn intramurals(query: Query, state: Data<SiteState>) -> HttpResponse {
    let page = Page::Intramurals(IntramuralsQuery::from_query(&query));
    respond(&state, page, wants_json(&query), true).await
}

pub async fn podium(req: HttpRequest, query: Query, state: Data<SiteState>) -> HttpResponse {
    let day = match get_param_str(&query, "day") {
        "" => Day::default(),
        s => match Day::parse(s) {
            Some(day) => day,
            None => {
                return HttpResponse::BadRequest()
                    .json(json!({"error": "day must be one of Day 1, Day 2, Day 3"}));
            }
        },
    };
    respond(&state, Page::Podium(day), wants_json(&query), !is_htmx(&req)).await
}

pub async fn results(req: HttpRequest, query: Query, state: Data<SiteState>) -> HttpResponse {
    let filter = ResultsFilter::parse(get_param_str(&query, "filter"));
    respond(&state, Page::Results(filter), wants_json(&query), !is_htmx(&req)).await
}

pub async fn schedule(req: HttpRequest, query: Query, state: Data<SiteState>) -> HttpResponse {
    let day = match get_param_str(&query, "day").trim() {
        "" => DEFAULT_SCHEDULE_DAY.to_string(),
        s => s.to_string(),
    };
    respond(&state, Page::Schedule(day), wants_json(&query), !is_htmx(&req)).await
}

pub async fn roster(
    req: HttpRequest,
    path: web::Path<String>,
    query: Query,
    state: Data<SiteState>,
) -> HttpResponse {
    let Some(team) = TeamCode::parse(&path) else {
        return HttpResponse::NotFound().json(json!({"error": format!("team {path} not found")}));
    };
    respond(&state, Page::Roster(team), wants_json(&query), !is_htmx(&req)).await
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({"status": "ok"}))
}

/// Registers every site route. Static assets are mounted by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health))
        .route("/announcements", web::get().to(announcements))
        .route("/events", web::get().to(events))
        .route("/events/{id}", web::get().to(event_detail))
        .route("/officers", web::get().to(officers))
        .route("/intramurals", web::get().to(intramurals))
        .route("/intramurals/podium", web::get().to(podium))
        .route("/intramurals/results", web::get().to(results))
        .route("/intramurals/schedule", web::get().to(schedule))
        .route("/intramurals/roster/{team}", web::get().to(roster));
}
