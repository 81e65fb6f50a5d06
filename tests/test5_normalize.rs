use serde_json::json;

use ssc_site::model::{
    DEFAULT_AVATAR, DEFAULT_EVENT_IMAGE, DEFAULT_ORDER, MediaKind, TeamCode, derive_event_id,
    detect_media_kind, normalize_announcements, normalize_events, normalize_intramurals,
    normalize_officers, resolve_media,
};

#[test]
fn test5_announcement_defaults() {
    let posts = normalize_announcements(&json!([{"createdAt": "2025-01-01T10:00:00Z"}]));
    assert_eq!(posts.len(), 1);
    let post = &posts[0];
    assert_eq!(post.title, "Untitled");
    assert_eq!(post.content, "");
    assert_eq!(post.category, "General");
    assert_eq!(post.author, "SSC");
    assert!(post.show_on_index);
    assert!(post.media.is_empty());
    assert!(post.hashtags.is_empty());
}

#[test]
fn test5_announcements_sort_newest_first() {
    let posts = normalize_announcements(&json!([
        {"title": "old", "date": "2024-06-01"},
        {"title": "new", "createdAt": "2025-03-01T08:00:00Z"},
        {"title": "mid", "date": "2024-12-25"}
    ]));
    let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["new", "mid", "old"]);
}

#[test]
fn test5_non_arrays_normalize_to_empty() {
    assert!(normalize_announcements(&json!({"title": "x"})).is_empty());
    assert!(normalize_events(&json!(null)).is_empty());
    assert!(normalize_officers(&json!("officers")).is_empty());
    assert!(normalize_intramurals(&json!([])).teams.is_empty());
}

#[test]
fn test5_media_resolution_order() {
    let post = json!({
        "gallery": ["a.jpg", {"url": "b.mp4"}, {"url": "c.png", "type": "video"}, "#", "x"],
        "images": ["ignored.jpg"],
        "image": "ignored-too.jpg"
    });
    let media = resolve_media(&post);
    assert_eq!(media.len(), 3);
    assert_eq!(media[0].kind, MediaKind::Image);
    assert_eq!(media[1].kind, MediaKind::Video);
    assert_eq!(media[2].kind, MediaKind::Video);

    let videos = resolve_media(&json!({"videos": ["clip.jpg"]}));
    assert_eq!(videos[0].kind, MediaKind::Video);

    let single = resolve_media(&json!({"image": "#", "video": "talk.webm"}));
    assert_eq!(single.len(), 1);
    assert_eq!(single[0].kind, MediaKind::Video);

    assert!(resolve_media(&json!({"image": "#"})).is_empty());
}

#[test]
fn test5_video_detection_is_case_insensitive() {
    assert_eq!(detect_media_kind("CLIP.MOV"), MediaKind::Video);
    assert_eq!(detect_media_kind("clip.mkv"), MediaKind::Video);
    assert_eq!(detect_media_kind("photo.jpeg"), MediaKind::Image);
    assert_eq!(detect_media_kind("mp4.png"), MediaKind::Image);
}

#[test]
fn test5_event_defaults_and_derived_id() {
    let events = normalize_events(&json!([
        {"title": "Fair", "startDate": "2025-02-14"},
        {"id": "given", "date": "2025-03-01", "description": "desc", "author": "Club"}
    ]));
    let fair = &events[0];
    assert_eq!(fair.id, derive_event_id("Fair", "2025-02-14"));
    assert_eq!(fair.id.chars().count(), 8);
    assert_eq!(fair.location, "TBA");
    assert_eq!(fair.category, "Event");
    assert_eq!(fair.organizer, "SSC");
    assert_eq!(fair.cover_image(), DEFAULT_EVENT_IMAGE);

    let given = &events[1];
    assert_eq!(given.id, "given");
    assert_eq!(given.title, "Untitled Event");
    assert_eq!(given.start_date, "2025-03-01");
    assert_eq!(given.summary, "desc");
    assert_eq!(given.organizer, "Club");
}

#[test]
fn test5_event_id_is_stable() {
    assert_eq!(derive_event_id("Fair", "2025-02-14"), derive_event_id("Fair", "2025-02-14"));
    assert_ne!(derive_event_id("Fair", "2025-02-14"), derive_event_id("Fair", "2025-02-15"));
}

#[test]
fn test5_officer_defaults() {
    let officers = normalize_officers(&json!([
        {"position": "President", "image": "pres.jpg", "order": 1},
        {"name": "Ms. Cruz", "position": "Adviser"}
    ]));
    assert_eq!(officers[0].name, "Unknown");
    assert_eq!(officers[0].image_src(), "assets/images/officers/pres.jpg");
    assert!(officers[0].is_student_officer());
    assert_eq!(officers[1].order, DEFAULT_ORDER);
    assert_eq!(officers[1].image_src(), DEFAULT_AVATAR);
    assert!(!officers[1].is_student_officer());
}

#[test]
fn test5_teams_and_rosters() {
    let data = normalize_intramurals(&json!({
        "teams": [
            {"code": "Team A", "department": "SHS", "participants": {
                "major_activities": {"basketball": ["Ana", "Ben"], "volleyball": []},
                "larong_pinoy": {"tug_of_war": {"men": ["Carl"]}}
            }},
            {"code": "Team Z", "name": "Nobody"},
            {"code": "C", "name": "Phoenix", "theme_color": "#ff0000"}
        ]
    }));
    assert_eq!(data.teams.len(), 2);

    let a = data.team(TeamCode::A).expect("team A");
    assert_eq!(a.name, "Dragon Vanguard");
    assert_eq!(a.theme_color, "#6c757d");
    assert_eq!(a.roster.categories.len(), 2);
    assert_eq!(a.roster.categories[0].title, "Major Activities Team Members");
    assert_eq!(a.roster.categories[0].groups.len(), 1);
    assert_eq!(a.roster.categories[0].groups[0].label, "BASKETBALL");
    assert_eq!(a.roster.categories[1].groups[0].label, "TUG OF WAR MEN");

    assert_eq!(data.team_name(TeamCode::C), "Phoenix");
    assert_eq!(data.team_name(TeamCode::B), "Pegasus Fury");
    assert!(data.team(TeamCode::C).is_some_and(|t| t.roster.is_empty()));
}

#[test]
fn test5_sample_data_normalizes() {
    let raw: serde_json::Value = serde_json::from_str(include_str!("../data/intramurals.json"))
        .expect("sample intramurals");
    let data = normalize_intramurals(&raw);
    assert_eq!(data.teams.len(), 3);
    assert!(!data.schedule.is_empty());
    assert!(!data.categories.is_empty());
}
