use serde::Serialize;

use crate::model::{Standings, TeamCode};

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankedTeam {
    pub team: TeamCode,
    pub score: i64,
    pub rank: usize,
}

/// Orders teams by score, highest first. Ties keep declaration order and the
/// rank is the position in that order, so tied teams still get distinct ranks.
#[must_use]
pub fn rank_teams(scores: &Standings) -> Vec<RankedTeam> {
    let mut sorted: Vec<(TeamCode, i64)> = scores.iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));

    sorted
        .into_iter()
        .enumerate()
        .map(|(i, (team, score))| RankedTeam {
            team,
            score,
            rank: i + 1,
        })
        .collect()
}
