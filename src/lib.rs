//! Round-robin league simulation: fixtures, seeded match simulation,
//! standings, heuristic title odds, and a small HTTP surface over them.

pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod fixtures;
pub mod league;
pub mod match_sim;
pub mod model;
pub mod predict;
pub mod standings;
pub mod state;

pub use error::{LeagueError, LeagueResult};
pub use league::{LeagueSimulator, WeekOutcome};
pub use match_sim::MatchSimulator;
pub use model::{Match, MatchId, Schedule, Standing, Team, TeamId};
pub use standings::StandingsTable;
