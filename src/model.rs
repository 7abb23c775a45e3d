use serde::{Deserialize, Serialize};

pub type TeamId = u32;
pub type MatchId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Relative skill; higher scores more goals on average.
    pub strength: u8,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>, strength: u8) -> Self {
        Self {
            id,
            name: name.into(),
            strength,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Home,
    Draw,
    Away,
}

pub fn classify_outcome(home_goals: u8, away_goals: u8) -> Outcome {
    if home_goals > away_goals {
        Outcome::Home
    } else if home_goals < away_goals {
        Outcome::Away
    } else {
        Outcome::Draw
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub home: Team,
    pub away: Team,
    pub home_goals: u8,
    pub away_goals: u8,
    pub played: bool,
    /// 1-based.
    pub week: usize,
}

impl Match {
    pub fn new(id: MatchId, home: Team, away: Team, week: usize) -> Self {
        Self {
            id,
            home,
            away,
            home_goals: 0,
            away_goals: 0,
            played: false,
            week,
        }
    }

    pub fn outcome(&self) -> Outcome {
        classify_outcome(self.home_goals, self.away_goals)
    }

    pub fn clear_result(&mut self) {
        self.home_goals = 0;
        self.away_goals = 0;
        self.played = false;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub team: Team,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_diff: i32,
    pub points: u32,
}

impl Standing {
    pub fn new(team: Team) -> Self {
        Self {
            team,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_diff: 0,
            points: 0,
        }
    }

    pub fn clear(&mut self) {
        let team = self.team.clone();
        *self = Self::new(team);
    }

    /// Re-derives goal difference and points from the raw counters.
    pub fn refresh_derived(&mut self) {
        self.goal_diff = self.goals_for as i32 - self.goals_against as i32;
        self.points = self.won * 3 + self.drawn;
    }

    pub fn points_per_game(&self) -> f64 {
        if self.played == 0 {
            return 0.0;
        }
        self.points as f64 / self.played as f64
    }
}

/// Weeks of fixtures; `weeks[0]` is week 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Schedule {
    pub weeks: Vec<Vec<Match>>,
}

impl Schedule {
    pub fn total_weeks(&self) -> usize {
        self.weeks.len()
    }

    pub fn matches(&self) -> impl Iterator<Item = &Match> {
        self.weeks.iter().flatten()
    }

    pub fn matches_mut(&mut self) -> impl Iterator<Item = &mut Match> {
        self.weeks.iter_mut().flatten()
    }

    pub fn find(&self, match_id: MatchId) -> Option<&Match> {
        self.matches().find(|m| m.id == match_id)
    }

    pub fn find_mut(&mut self, match_id: MatchId) -> Option<&mut Match> {
        self.matches_mut().find(|m| m.id == match_id)
    }

    pub fn played_count(&self) -> usize {
        self.matches().filter(|m| m.played).count()
    }

    pub fn unplayed(&self) -> impl Iterator<Item = &Match> {
        self.matches().filter(|m| !m.played)
    }
}
