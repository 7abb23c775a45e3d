use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::warn;

use crate::model::{Match, Outcome, Schedule, Standing, Team, TeamId};

/// One `Standing` per team, keyed by team ID.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StandingsTable {
    entries: BTreeMap<TeamId, Standing>,
}

impl StandingsTable {
    pub fn new(teams: &[Team]) -> Self {
        let entries = teams
            .iter()
            .map(|t| (t.id, Standing::new(t.clone())))
            .collect();
        Self { entries }
    }

    pub fn get(&self, team_id: TeamId) -> Option<&Standing> {
        self.entries.get(&team_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Standing> {
        self.entries.values()
    }

    /// Highest `played` count across all teams.
    pub fn max_played(&self) -> u32 {
        self.entries.values().map(|s| s.played).max().unwrap_or(0)
    }

    pub fn apply(&mut self, m: &Match) {
        self.adjust(m, Direction::Apply);
    }

    /// Exact inverse of [`StandingsTable::apply`].
    ///
    /// Only call this for a result that was applied earlier; the counters
    /// underflow otherwise.
    pub fn reverse(&mut self, m: &Match) {
        self.adjust(m, Direction::Reverse);
    }

    /// Records an outcome without a scoreline; goal columns are left as they are.
    pub fn record_outcome(&mut self, home_id: TeamId, away_id: TeamId, outcome: Outcome) {
        for (team_id, side) in [(home_id, Side::Home), (away_id, Side::Away)] {
            let Some(s) = self.row_mut(team_id) else {
                continue;
            };
            s.played += 1;
            match (outcome, side) {
                (Outcome::Draw, _) => s.drawn += 1,
                (Outcome::Home, Side::Home) | (Outcome::Away, Side::Away) => s.won += 1,
                _ => s.lost += 1,
            }
            s.refresh_derived();
        }
    }

    pub fn reset(&mut self) {
        for standing in self.entries.values_mut() {
            standing.clear();
        }
    }

    /// Zeroes the table and replays every played match in schedule order.
    pub fn recalculate_all(&mut self, schedule: &Schedule) {
        self.reset();
        for m in schedule.matches().filter(|m| m.played) {
            self.apply(m);
        }
    }

    /// Points, then goal difference, then goals scored, all descending.
    pub fn sorted(&self) -> Vec<Standing> {
        let mut rows: Vec<Standing> = self.entries.values().cloned().collect();
        rows.sort_by(compare_standings);
        rows
    }

    fn adjust(&mut self, m: &Match, direction: Direction) {
        let outcome = m.outcome();
        if let Some(home) = self.row_mut(m.home.id) {
            direction.record(home, m.home_goals, m.away_goals, outcome, Side::Home);
        }
        if let Some(away) = self.row_mut(m.away.id) {
            direction.record(away, m.away_goals, m.home_goals, outcome, Side::Away);
        }
    }

    /// Row for `team_id`. A miss means the match and the table disagree on
    /// the team list, so it is logged and trips debug builds.
    fn row_mut(&mut self, team_id: TeamId) -> Option<&mut Standing> {
        let row = self.entries.get_mut(&team_id);
        if row.is_none() {
            warn!(team_id, "team missing from standings table; update dropped");
        }
        debug_assert!(row.is_some(), "team {team_id} is not in the standings table");
        row
    }
}

pub fn compare_standings(a: &Standing, b: &Standing) -> Ordering {
    b.points
        .cmp(&a.points)
        .then(b.goal_diff.cmp(&a.goal_diff))
        .then(b.goals_for.cmp(&a.goals_for))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Home,
    Away,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Apply,
    Reverse,
}

impl Direction {
    fn record(self, s: &mut Standing, scored: u8, conceded: u8, outcome: Outcome, side: Side) {
        let step = |field: &mut u32, by: u32| match self {
            Direction::Apply => *field += by,
            Direction::Reverse => *field -= by,
        };

        step(&mut s.played, 1);
        step(&mut s.goals_for, scored as u32);
        step(&mut s.goals_against, conceded as u32);
        match (outcome, side) {
            (Outcome::Draw, _) => step(&mut s.drawn, 1),
            (Outcome::Home, Side::Home) | (Outcome::Away, Side::Away) => step(&mut s.won, 1),
            _ => step(&mut s.lost, 1),
        }
        s.refresh_derived();
    }
}
