use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::{LeagueError, LeagueResult};
use crate::fixtures::generate_fixtures;
use crate::match_sim::MatchSimulator;
use crate::model::{Match, MatchId, Schedule, Standing, Team};
use crate::standings::StandingsTable;

/// Result of one `simulate_week` tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekOutcome {
    /// At least one match in `week` was simulated.
    Played { week: usize },
    /// Every match in `week` already had a result; the cursor still moved on.
    AlreadyPlayed { week: usize },
    /// The cursor is past the last week. Nothing changed.
    Exhausted,
}

impl WeekOutcome {
    pub fn is_exhausted(self) -> bool {
        matches!(self, WeekOutcome::Exhausted)
    }
}

/// Owns the schedule, the standings and the week cursor for one season.
#[derive(Debug, Clone)]
pub struct LeagueSimulator<R = ChaCha8Rng> {
    teams: Vec<Team>,
    schedule: Schedule,
    table: StandingsTable,
    current_week: usize,
    sim: MatchSimulator<R>,
}

impl LeagueSimulator<ChaCha8Rng> {
    pub fn with_seed(teams: Vec<Team>, seed: u64) -> LeagueResult<Self> {
        Self::new(teams, MatchSimulator::from_seed(seed))
    }
}

impl<R: Rng> LeagueSimulator<R> {
    pub fn new(teams: Vec<Team>, sim: MatchSimulator<R>) -> LeagueResult<Self> {
        let schedule = generate_fixtures(&teams)?;
        let table = StandingsTable::new(&teams);
        Ok(Self {
            teams,
            schedule,
            table,
            current_week: 0,
            sim,
        })
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Number of weeks already consumed; equals `total_weeks` once exhausted.
    pub fn current_week(&self) -> usize {
        self.current_week
    }

    pub fn total_weeks(&self) -> usize {
        self.schedule.total_weeks()
    }

    pub fn is_exhausted(&self) -> bool {
        self.current_week >= self.total_weeks()
    }

    pub fn simulate_week(&mut self) -> WeekOutcome {
        if self.is_exhausted() {
            return WeekOutcome::Exhausted;
        }

        let index = self.current_week;
        let mut simulated = 0usize;
        for m in self.schedule.weeks[index].iter_mut() {
            if m.played {
                continue;
            }
            let (home_goals, away_goals) = self.sim.simulate(m.home.strength, m.away.strength);
            m.home_goals = home_goals;
            m.away_goals = away_goals;
            m.played = true;
            self.table.apply(m);
            simulated += 1;
        }

        self.current_week += 1;
        let week = index + 1;
        debug!(week, simulated, "week simulated");
        if simulated == 0 {
            WeekOutcome::AlreadyPlayed { week }
        } else {
            WeekOutcome::Played { week }
        }
    }

    /// Runs to exhaustion. Returns the number of weeks in which a match was simulated.
    pub fn simulate_all(&mut self) -> usize {
        let mut played_weeks = 0;
        for _ in 0..=self.total_weeks() {
            match self.simulate_week() {
                WeekOutcome::Played { .. } => played_weeks += 1,
                WeekOutcome::AlreadyPlayed { .. } => {}
                WeekOutcome::Exhausted => break,
            }
        }
        played_weeks
    }

    /// Overwrites a result. A previously played match has its old contribution
    /// reversed first. The cursor is left alone.
    pub fn edit_match_result(
        &mut self,
        match_id: MatchId,
        home_goals: u8,
        away_goals: u8,
    ) -> LeagueResult<()> {
        let m = self
            .schedule
            .find_mut(match_id)
            .ok_or(LeagueError::NotFound { match_id })?;

        if m.played {
            self.table.reverse(m);
        }
        m.home_goals = home_goals;
        m.away_goals = away_goals;
        m.played = true;
        self.table.apply(m);
        Ok(())
    }

    pub fn recalculate_standings(&mut self) {
        self.table.recalculate_all(&self.schedule);
    }

    /// Clears every result and rewinds the cursor; fixtures are kept.
    pub fn reset(&mut self) {
        for m in self.schedule.matches_mut() {
            m.clear_result();
        }
        self.table.reset();
        self.current_week = 0;
    }

    pub fn standings(&self) -> Vec<Standing> {
        self.table.sorted()
    }

    /// Detached copy of the table for read-only projections.
    pub fn standings_copy(&self) -> StandingsTable {
        self.table.clone()
    }

    pub fn standings_table(&self) -> &StandingsTable {
        &self.table
    }

    pub fn match_by_id(&self, match_id: MatchId) -> LeagueResult<&Match> {
        self.schedule
            .find(match_id)
            .ok_or(LeagueError::NotFound { match_id })
    }
}
