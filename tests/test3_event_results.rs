use serde_json::json;

use ssc_site::model::{TeamCode, normalize_intramurals};
use ssc_site::score::{ResultLabel, ResultsFilter, aggregate_event_results, filter_event_results};

fn categories() -> serde_json::Value {
    json!({
        "categories": [
            {"name": "Major Sports", "events": [
                {"event_name": "Basketball", "scores": {"SHS": 20, "THM": null, "ICT": 35}},
                {"event_name": "Volleyball", "scores": {"SHS": null, "THM": null, "ICT": null}}
            ]},
            {"name": "Larong Pinoy", "events": [
                {"event_name": "Patintero", "scores": {"SHS": 5, "THM": 10, "ICT": 5}}
            ]},
            {"name": "E-Sports", "events": [
                {"event_name": "Mobile Legends", "scores": {"SHS": "15", "THM": 8}}
            ]},
            {"name": "Mind Games", "events": [
                {"event_name": "Chess", "scores": {"THM": 12}}
            ]}
        ]
    })
}

#[test]
fn test3_recorded_scores_first_and_nulls_last() {
    let data = normalize_intramurals(&categories());
    let events = aggregate_event_results(&data.categories);
    assert_eq!(events.len(), 5);

    let basketball = &events[0];
    assert_eq!(basketball.category, "Major Sports");
    assert_eq!(basketball.event, "Basketball");
    let order: Vec<TeamCode> = basketball.results.iter().map(|r| r.team).collect();
    assert_eq!(order, vec![TeamCode::C, TeamCode::A, TeamCode::B]);

    let labels: Vec<&ResultLabel> = basketball.results.iter().map(|r| &r.label).collect();
    assert_eq!(
        labels,
        vec![&ResultLabel::Winner, &ResultLabel::Placed(2), &ResultLabel::NoScore]
    );
    assert_eq!(basketball.results[2].score, None);
    assert_eq!(basketball.results[2].position, None);
    assert_eq!(basketball.results[2].label.text(), "No Score");
    assert_eq!(basketball.winner().map(|w| w.team), Some(TeamCode::C));
    assert_eq!(basketball.results[0].team_name, "Phoenix Invictus");
}

#[test]
fn test3_all_null_event_has_no_winner() {
    let data = normalize_intramurals(&categories());
    let events = aggregate_event_results(&data.categories);
    let volleyball = &events[1];
    assert!(volleyball.winner().is_none());
    assert!(volleyball.results.iter().all(|r| r.label == ResultLabel::NoScore));
}

#[test]
fn test3_placed_positions_follow_scores() {
    let data = normalize_intramurals(&categories());
    let events = aggregate_event_results(&data.categories);
    let patintero = &events[2];
    let order: Vec<TeamCode> = patintero.results.iter().map(|r| r.team).collect();
    assert_eq!(order, vec![TeamCode::B, TeamCode::A, TeamCode::C]);
    assert_eq!(patintero.results[2].label, ResultLabel::Placed(3));
}

#[test]
fn test3_numeric_strings_count_as_scores() {
    let data = normalize_intramurals(&categories());
    let events = aggregate_event_results(&data.categories);
    let ml = &events[3];
    assert_eq!(ml.results.len(), 2);
    assert_eq!(ml.results[0].team, TeamCode::A);
    assert_eq!(ml.results[0].score, Some(15));
}

#[test]
fn test3_filter_keywords() {
    assert_eq!(ResultsFilter::parse(""), ResultsFilter::All);
    assert_eq!(ResultsFilter::parse("E-Sports"), ResultsFilter::Esports);
    assert_eq!(ResultsFilter::parse("mind games"), ResultsFilter::MindGames);

    assert!(ResultsFilter::Minor.matches("Larong Pinoy"));
    assert!(ResultsFilter::Minor.matches("Traditional Games"));
    assert!(ResultsFilter::Major.matches("MAJOR SPORTS"));
    assert!(!ResultsFilter::Major.matches("Minor Sports"));
    assert!(ResultsFilter::Esports.matches("Esports"));
    assert!(ResultsFilter::Other("sport".into()).matches("Major Sports"));

    let data = normalize_intramurals(&categories());
    let events = aggregate_event_results(&data.categories);

    let minor = filter_event_results(events.clone(), &ResultsFilter::Minor);
    assert_eq!(minor.len(), 1);
    assert_eq!(minor[0].event, "Patintero");

    let mind = filter_event_results(events.clone(), &ResultsFilter::parse("mind"));
    assert_eq!(mind.len(), 1);
    assert_eq!(mind[0].event, "Chess");

    assert_eq!(filter_event_results(events, &ResultsFilter::All).len(), 5);
}

#[test]
fn test3_empty_categories_give_no_cards() {
    let data = normalize_intramurals(&json!({"categories": []}));
    assert!(aggregate_event_results(&data.categories).is_empty());
}

#[test]
fn test3_tied_scores_keep_file_order() {
    let data = normalize_intramurals(&json!({
        "categories": [{"name": "Musical", "events": [
            {"event_name": "Dance Off", "scores": {"THM": 5, "SHS": 5, "ICT": null}}
        ]}]
    }));
    let events = aggregate_event_results(&data.categories);
    let dance = &events[0];
    let order: Vec<TeamCode> = dance.results.iter().map(|r| r.team).collect();
    assert_eq!(order, vec![TeamCode::B, TeamCode::A, TeamCode::C]);
    assert_eq!(dance.winner().map(|w| w.team_name.as_str()), Some("Pegasus Fury"));
    assert_eq!(dance.results[1].label, ResultLabel::Placed(2));
}
