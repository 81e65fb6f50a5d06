use serde_json::json;

use ssc_site::model::{Day, Standings, TeamCode, normalize_intramurals};
use ssc_site::score::rank_teams;
use ssc_site::view::intramurals::{bar_percent, build_podium, build_stats, final_rankings};

#[test]
fn test2_ties_keep_declaration_order_with_distinct_ranks() {
    let standings = Standings::from_pairs(&[(TeamCode::A, 10), (TeamCode::B, 10), (TeamCode::C, 5)]);
    let ranked = rank_teams(&standings);
    assert_eq!(ranked[0].team, TeamCode::A);
    assert_eq!(ranked[0].rank, 1);
    assert_eq!(ranked[1].team, TeamCode::B);
    assert_eq!(ranked[1].rank, 2);
    assert_eq!(ranked[2].team, TeamCode::C);
    assert_eq!(ranked[2].rank, 3);
}

#[test]
fn test2_all_zero_ranks_in_declaration_order() {
    let ranked = rank_teams(&Standings::zero());
    let teams: Vec<TeamCode> = ranked.iter().map(|r| r.team).collect();
    assert_eq!(teams, TeamCode::ALL.to_vec());
    assert!(ranked.iter().all(|r| r.score == 0));
}

#[test]
fn test2_later_team_can_lead() {
    let standings = Standings::from_pairs(&[(TeamCode::A, 1), (TeamCode::B, 2), (TeamCode::C, 3)]);
    let teams: Vec<TeamCode> = rank_teams(&standings).iter().map(|r| r.team).collect();
    assert_eq!(teams, vec![TeamCode::C, TeamCode::B, TeamCode::A]);
}

#[test]
fn test2_podium_stands_second_first_third() {
    let data = normalize_intramurals(&json!({"final_tally": {"SHS": 10, "THM": 20, "ICT": 15}}));
    let podium = build_podium(&data, Day::Final);

    let ranks: Vec<usize> = podium.blocks.iter().map(|b| b.rank).collect();
    assert_eq!(ranks, vec![2, 1, 3]);
    let medals: Vec<&str> = podium.blocks.iter().map(|b| b.medal.as_str()).collect();
    assert_eq!(medals, vec!["🥈", "🥇", "🥉"]);
    let heights: Vec<u32> = podium.blocks.iter().map(|b| b.bar_height).collect();
    assert_eq!(heights, vec![100, 150, 70]);
    assert_eq!(podium.blocks[1].team, TeamCode::B);
    assert!(!podium.estimated);

    assert!(build_podium(&data, Day::Day2).estimated);
}

#[test]
fn test2_stat_bars_are_relative_to_the_leader() {
    let data = normalize_intramurals(&json!({"final_tally": {"SHS": 50, "THM": 200, "ICT": 150}}));
    let rows = build_stats(&final_rankings(&data));
    let percents: Vec<&str> = rows.iter().map(|r| r.percent.as_str()).collect();
    assert_eq!(percents, vec!["100.0", "75.0", "25.0"]);

    assert_eq!(bar_percent(0, 0), "0.0");
    assert_eq!(bar_percent(1, 3), "33.3");
}

#[test]
fn test2_ranks_are_a_permutation_for_every_tie_pattern() {
    let values = [0_i64, 5, 5, 10];
    for &a in &values {
        for &b in &values {
            for &c in &values {
                let standings = Standings::from_pairs(&[(TeamCode::A, a), (TeamCode::B, b), (TeamCode::C, c)]);
                let ranked = rank_teams(&standings);
                assert_eq!(ranked.len(), 3);
                let ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
                assert_eq!(ranks, vec![1, 2, 3]);
                assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
            }
        }
    }
}
