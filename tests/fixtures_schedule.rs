use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use league_sim::fixtures::generate_fixtures;
use league_sim::model::Team;

fn teams(n: u32) -> Vec<Team> {
    (1..=n)
        .map(|id| Team::new(id, format!("Team {id}"), (id % 9 + 1) as u8))
        .collect()
}

#[test]
fn four_teams_give_six_weeks_of_two() {
    let schedule = generate_fixtures(&teams(4)).expect("even team count");
    assert_eq!(schedule.total_weeks(), 6);
    assert!(schedule.weeks.iter().all(|w| w.len() == 2));
    assert_eq!(schedule.matches().count(), 12);
    assert!(schedule.matches().all(|m| !m.played && m.home_goals == 0));
}

#[test]
fn two_teams_meet_home_and_away() {
    let schedule = generate_fixtures(&teams(2)).expect("two teams");
    let pairs: Vec<(u32, u32)> = schedule
        .matches()
        .map(|m| (m.home.id, m.away.id))
        .collect();
    assert_eq!(pairs, vec![(1, 2), (2, 1)]);
}

proptest! {
    #[test]
    fn double_round_robin_invariants(half in 1u32..=10) {
        let n = half * 2;
        let schedule = generate_fixtures(&teams(n)).expect("even team count");

        prop_assert_eq!(schedule.total_weeks(), 2 * (n as usize - 1));

        for week in &schedule.weeks {
            prop_assert_eq!(week.len(), n as usize / 2);
            let mut seen = HashSet::new();
            for m in week {
                prop_assert!(m.home.id != m.away.id);
                prop_assert!(seen.insert(m.home.id));
                prop_assert!(seen.insert(m.away.id));
            }
            prop_assert_eq!(seen.len(), n as usize);
        }

        let mut meetings: HashMap<(u32, u32), usize> = HashMap::new();
        for m in schedule.matches() {
            *meetings.entry((m.home.id, m.away.id)).or_insert(0) += 1;
        }
        prop_assert_eq!(meetings.len(), (n * (n - 1)) as usize);
        prop_assert!(meetings.values().all(|&count| count == 1));

        let ids: Vec<u32> = schedule.matches().map(|m| m.id).collect();
        let expected: Vec<u32> = (1..=ids.len() as u32).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn odd_team_counts_are_rejected(half in 1u32..=10) {
        prop_assert!(generate_fixtures(&teams(half * 2 + 1)).is_err());
    }
}
