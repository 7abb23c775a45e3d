use std::collections::HashSet;

use crate::error::{LeagueError, LeagueResult};
use crate::model::{Match, MatchId, Schedule, Team};

/// Builds a double round-robin: `2 * (n - 1)` weeks of `n / 2` matches.
///
/// The first team stays fixed while the rest rotate one slot per week. The
/// second half replays the same rotation with home and away swapped, so every
/// ordered pair of teams meets exactly once. Match IDs start at 1 and follow
/// generation order.
pub fn generate_fixtures(teams: &[Team]) -> LeagueResult<Schedule> {
    validate_teams(teams)?;

    let n = teams.len();
    let rounds = n - 1;
    let mut weeks = Vec::with_capacity(rounds * 2);
    let mut next_id: MatchId = 1;

    for reversed in [false, true] {
        let mut order = teams.to_vec();
        for round in 0..rounds {
            let week = if reversed { rounds + round + 1 } else { round + 1 };
            let mut week_matches = Vec::with_capacity(n / 2);
            for i in 0..n / 2 {
                let (home, away) = if reversed {
                    (&order[n - 1 - i], &order[i])
                } else {
                    (&order[i], &order[n - 1 - i])
                };
                week_matches.push(Match::new(next_id, home.clone(), away.clone(), week));
                next_id += 1;
            }
            weeks.push(week_matches);
            rotate(&mut order);
        }
    }

    Ok(Schedule { weeks })
}

/// `[a, b, c, d]` -> `[a, d, b, c]`
fn rotate(order: &mut [Team]) {
    if order.len() > 2 {
        order[1..].rotate_right(1);
    }
}

fn validate_teams(teams: &[Team]) -> LeagueResult<()> {
    if teams.len() < 2 {
        return Err(LeagueError::InvalidInput(format!(
            "need at least 2 teams, got {}",
            teams.len()
        )));
    }
    if teams.len() % 2 != 0 {
        return Err(LeagueError::InvalidInput(format!(
            "team count must be even, got {}",
            teams.len()
        )));
    }
    let mut seen = HashSet::new();
    for team in teams {
        if !seen.insert(team.id) {
            return Err(LeagueError::InvalidInput(format!(
                "duplicate team id {}",
                team.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams(n: u32) -> Vec<Team> {
        (1..=n).map(|id| Team::new(id, format!("T{id}"), 5)).collect()
    }

    #[test]
    fn rotate_keeps_first_slot_fixed() {
        let mut order = teams(4);
        rotate(&mut order);
        let ids: Vec<u32> = order.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 4, 2, 3]);
    }

    #[test]
    fn first_week_pairs_outer_positions() {
        let schedule = generate_fixtures(&teams(4)).unwrap();
        let week1: Vec<(u32, u32)> = schedule.weeks[0]
            .iter()
            .map(|m| (m.home.id, m.away.id))
            .collect();
        assert_eq!(week1, vec![(1, 4), (2, 3)]);

        // Week 4 mirrors week 1.
        let week4: Vec<(u32, u32)> = schedule.weeks[3]
            .iter()
            .map(|m| (m.home.id, m.away.id))
            .collect();
        assert_eq!(week4, vec![(4, 1), (3, 2)]);
    }

    #[test]
    fn ids_are_sequential_and_weeks_one_based() {
        let schedule = generate_fixtures(&teams(4)).unwrap();
        let ids: Vec<u32> = schedule.matches().map(|m| m.id).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
        for (idx, week) in schedule.weeks.iter().enumerate() {
            assert!(week.iter().all(|m| m.week == idx + 1));
        }
    }

    #[test]
    fn rejects_odd_and_tiny_team_lists() {
        assert!(matches!(
            generate_fixtures(&teams(3)),
            Err(LeagueError::InvalidInput(_))
        ));
        assert!(matches!(
            generate_fixtures(&teams(0)),
            Err(LeagueError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut list = teams(4);
        list[3].id = 1;
        assert!(matches!(
            generate_fixtures(&list),
            Err(LeagueError::InvalidInput(_))
        ));
    }
}
