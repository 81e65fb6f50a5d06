use crate::model::{Day, DayStanding, IntramuralsData, Standings, TeamCode};

/// Per-team totals for `day`.
///
/// Day 1 reads `day1_results.overall_standings` by display name, the final
/// day reads `final_tally`, and Day 2 is the per-team floor average of the
/// two since no Day 2 data is recorded. Missing data counts as zero.
#[must_use]
pub fn compute_standings(day: Day, data: Option<&IntramuralsData>) -> Standings {
    let Some(data) = data else {
        return Standings::zero();
    };
    match day {
        Day::Day1 => {
            let mut standings = Standings::zero();
            for entry in &data.day1_results.overall_standings {
                if let Some(team) = TeamCode::from_display_name(&entry.team_name) {
                    standings.set(team, entry.total_points);
                }
            }
            standings
        }
        Day::Final => data.final_tally.totals,
        Day::Day2 => {
            let first = compute_standings(Day::Day1, Some(data));
            let last = compute_standings(Day::Final, Some(data));
            let mut standings = Standings::zero();
            for team in TeamCode::ALL {
                let sum = i128::from(first[team]) + i128::from(last[team]);
                // half of two i64 values always fits back into i64
                standings.set(team, sum.div_euclid(2) as i64);
            }
            standings
        }
    }
}

#[must_use]
pub fn day_standing(day: Day, data: Option<&IntramuralsData>) -> DayStanding {
    DayStanding {
        day,
        totals: compute_standings(day, data),
        estimated: day.is_estimate(),
    }
}
