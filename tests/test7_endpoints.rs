mod common;

use actix_web::web::Data;
use actix_web::{App, http::StatusCode, test};
use scraper::{Html, Selector};
use serde_json::Value;

use ssc_site::SiteState;
use ssc_site::args::CleanArgs;
use ssc_site::controller::http_handlers;

fn state_for(dir: &std::path::Path) -> SiteState {
    SiteState::from_args(&CleanArgs::for_data_dir(dir))
}

macro_rules! site {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(Data::new($state))
                .configure(http_handlers::configure),
        )
        .await
    };
}

fn count(html: &str, selector: &str) -> usize {
    let doc = Html::parse_document(html);
    let sel = Selector::parse(selector).unwrap();
    doc.select(&sel).count()
}

#[actix_web::test]
async fn test7_full_pages_render_with_layout() -> Result<(), Box<dyn std::error::Error>> {
    let dir = common::sample_data_dir()?;
    let app = site!(state_for(dir.path()));

    for uri in ["/", "/announcements", "/events", "/officers", "/intramurals"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        let body = String::from_utf8(test::read_body(resp).await.to_vec())?;
        assert_eq!(count(&body, "header.site-header"), 1, "{uri}");
        assert_eq!(count(&body, "nav a.active"), 1, "{uri}");
        assert!(!body.contains("Failed to load"), "{uri}");
    }

    let req = test::TestRequest::get().uri("/health").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    Ok(())
}

#[actix_web::test]
async fn test7_json_returns_the_render_model() -> Result<(), Box<dyn std::error::Error>> {
    let dir = common::sample_data_dir()?;
    let app = site!(state_for(dir.path()));

    let req = test::TestRequest::get().uri("/intramurals/podium?day=Day%203&json=1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["page"], "podium");
    assert_eq!(body["view"]["status"], "ready");
    let blocks = body["view"]["data"]["blocks"].as_array().ok_or("blocks")?;
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[1]["rank"], 1);

    let req = test::TestRequest::get().uri("/?json=1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["page"], "home");
    assert_eq!(body["view"]["stats"]["status"], "ready");
    Ok(())
}

#[actix_web::test]
async fn test7_fragments_skip_the_layout_for_htmx() -> Result<(), Box<dyn std::error::Error>> {
    let dir = common::sample_data_dir()?;
    let app = site!(state_for(dir.path()));

    let req = test::TestRequest::get()
        .uri("/intramurals/results?filter=major")
        .insert_header(("HX-Request", "true"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(resp).await.to_vec())?;
    assert!(!body.contains("<html"));
    assert!(!body.contains("site-header"));

    // the same fragment opened directly gets the layout
    let req = test::TestRequest::get().uri("/intramurals/results?filter=major").to_request();
    let body = String::from_utf8(test::read_body(test::call_service(&app, req).await).await.to_vec())?;
    assert!(body.contains("site-header"));
    Ok(())
}

#[actix_web::test]
async fn test7_unknown_records_are_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let dir = common::sample_data_dir()?;
    let app = site!(state_for(dir.path()));

    let req = test::TestRequest::get().uri("/events/EVT-INTRAMS-2026").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/events/no-such-event").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/intramurals/roster/A").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/intramurals/roster/Z").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/intramurals/podium?day=Day%209").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[actix_web::test]
async fn test7_missing_file_fails_only_its_section() -> Result<(), Box<dyn std::error::Error>> {
    let dir = common::data_dir_with(&[
        ("announcements.json", common::ANNOUNCEMENTS),
        ("officers.json", common::OFFICERS),
    ])?;
    let app = site!(state_for(dir.path()));

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(resp).await.to_vec())?;
    assert!(body.contains("Failed to load events. Please refresh the page."));
    assert!(!body.contains("Failed to load announcements"));
    assert!(!body.contains("Failed to load officers"));

    let req = test::TestRequest::get().uri("/intramurals?json=1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["view"]["dashboard"]["status"], "failed");
    Ok(())
}

#[actix_web::test]
async fn test7_officers_layout_is_applied() -> Result<(), Box<dyn std::error::Error>> {
    let dir = common::sample_data_dir()?;
    let mut args = CleanArgs::for_data_dir(dir.path());
    let layout = ssc_site::args::validation::validate_layout_format(&common::json(common::OFFICERS_LAYOUT))?;
    args.officers_layout = Some(layout);
    let app = site!(SiteState::from_args(&args));

    let req = test::TestRequest::get().uri("/officers").to_request();
    let body = String::from_utf8(test::read_body(test::call_service(&app, req).await).await.to_vec())?;
    assert!(count(&body, ".section-divider") > 1);
    assert_eq!(count(&body, ".placeholder-card"), 1);
    Ok(())
}
