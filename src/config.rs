use std::env;
use std::net::SocketAddr;

use anyhow::{Context, Result, anyhow, bail};

use crate::model::Team;

const DEFAULT_LOG_LIMIT: usize = 200;
const MIN_LOG_LIMIT: usize = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// `None` seeds the match simulator from OS entropy.
    pub seed: Option<u64>,
    pub teams: Vec<Team>,
    pub log_limit: usize,
}

impl Config {
    /// Reads `.env.local` / `.env` if present, then the process environment.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::from_filename(".env.local");
        let _ = dotenvy::from_filename(".env");

        let bind_addr = env::var("LEAGUE_BIND_ADDR")
            .ok()
            .and_then(|val| val.parse::<SocketAddr>().ok())
            .unwrap_or_else(default_bind_addr);
        let seed = env::var("LEAGUE_SEED")
            .ok()
            .and_then(|val| val.trim().parse::<u64>().ok());
        let log_limit = env::var("LEAGUE_LOG_LIMIT")
            .ok()
            .and_then(|val| val.parse::<usize>().ok())
            .unwrap_or(DEFAULT_LOG_LIMIT)
            .max(MIN_LOG_LIMIT);
        let teams = match env::var("LEAGUE_TEAMS") {
            Ok(raw) if !raw.trim().is_empty() => parse_teams(&raw).context("LEAGUE_TEAMS")?,
            _ => default_teams(),
        };

        Ok(Self {
            bind_addr,
            seed,
            teams,
            log_limit,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            seed: None,
            teams: default_teams(),
            log_limit: DEFAULT_LOG_LIMIT,
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

pub fn default_teams() -> Vec<Team> {
    vec![
        Team::new(1, "Manchester United", 5),
        Team::new(2, "Manchester City", 7),
        Team::new(3, "Chelsea", 6),
        Team::new(4, "Liverpool", 8),
    ]
}

/// Parses `Name:strength,Name:strength`. IDs are assigned from 1 in order.
pub fn parse_teams(raw: &str) -> Result<Vec<Team>> {
    let mut teams = Vec::new();
    for (idx, entry) in raw.split(',').map(str::trim).filter(|e| !e.is_empty()).enumerate() {
        let (name, strength) = entry
            .rsplit_once(':')
            .ok_or_else(|| anyhow!("team entry {entry:?} is missing ':strength'"))?;
        let name = name.trim();
        if name.is_empty() {
            bail!("team entry {entry:?} has an empty name");
        }
        let strength = strength
            .trim()
            .parse::<u8>()
            .with_context(|| format!("invalid strength in {entry:?}"))?;
        if strength == 0 {
            bail!("team {name:?} needs a positive strength");
        }
        teams.push(Team::new(idx as u32 + 1, name, strength));
    }
    if teams.len() < 2 || teams.len() % 2 != 0 {
        bail!("need an even number of teams (at least 2), got {}", teams.len());
    }
    Ok(teams)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_team_list() {
        let teams = parse_teams("Arsenal:7, Spurs:6,Everton:4 ,Fulham:5").unwrap();
        assert_eq!(teams.len(), 4);
        assert_eq!(teams[1], Team::new(2, "Spurs", 6));
        assert_eq!(teams[3].id, 4);
    }

    #[test]
    fn rejects_bad_team_lists() {
        assert!(parse_teams("Arsenal:7,Spurs").is_err());
        assert!(parse_teams("Arsenal:7,Spurs:x").is_err());
        assert!(parse_teams("Arsenal:7,Spurs:6,Everton:4").is_err());
        assert!(parse_teams("Arsenal:0,Spurs:6").is_err());
    }

    #[test]
    fn default_config_matches_default_teams() {
        let cfg = Config::default();
        assert_eq!(cfg.teams, default_teams());
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:8080");
    }
}
