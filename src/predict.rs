use serde::Serialize;

use crate::error::{LeagueError, LeagueResult};
use crate::model::{Outcome, Schedule};
use crate::standings::StandingsTable;

/// A team must have played this many matches before title odds are offered.
pub const MIN_MATCHES_FOR_PREDICTION: u32 = 4;

const FORM_MARGIN: f64 = 0.5;
const BASE_DRAW_PCT: f64 = 15.0;
const DECISIVE_PCT: f64 = 100.0 - BASE_DRAW_PCT;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChampionshipOdds {
    pub team_name: String,
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchPrediction {
    pub match_id: u32,
    pub home_team: String,
    pub away_team: String,
    pub week: usize,
    pub home_win_percentage: f64,
    pub away_win_percentage: f64,
    pub draw_percentage: f64,
    pub home_current_points: u32,
    pub away_current_points: u32,
    pub home_played: u32,
    pub away_played: u32,
}

pub fn ensure_predictable(table: &StandingsTable) -> LeagueResult<()> {
    let played = table.max_played();
    if played < MIN_MATCHES_FOR_PREDICTION {
        return Err(LeagueError::PreconditionNotMet {
            required: MIN_MATCHES_FOR_PREDICTION,
            played,
        });
    }
    Ok(())
}

/// Resolves every unplayed match on form alone and returns the resulting table.
///
/// Matches are resolved in schedule order and each projected result feeds the
/// points-per-game used for the next one. The input table is not touched.
pub fn project_final_table(schedule: &Schedule, table: &StandingsTable) -> StandingsTable {
    let mut projected = table.clone();
    for m in schedule.unplayed() {
        let home_ppg = projected.get(m.home.id).map_or(0.0, |s| s.points_per_game());
        let away_ppg = projected.get(m.away.id).map_or(0.0, |s| s.points_per_game());
        projected.record_outcome(m.home.id, m.away.id, form_outcome(home_ppg, away_ppg));
    }
    projected
}

fn form_outcome(home_ppg: f64, away_ppg: f64) -> Outcome {
    let diff = home_ppg - away_ppg;
    if diff > FORM_MARGIN {
        Outcome::Home
    } else if diff < -FORM_MARGIN {
        Outcome::Away
    } else {
        Outcome::Draw
    }
}

/// Bucketed title chances from the projected table, normalized to 100.
///
/// Rows come back in projected table order.
pub fn championship_probabilities(
    schedule: &Schedule,
    table: &StandingsTable,
) -> Vec<ChampionshipOdds> {
    let week = table.max_played();
    let projected = project_final_table(schedule, table).sorted();
    let max_points = projected.iter().map(|s| s.points).max().unwrap_or(0);

    let raw: Vec<f64> = projected
        .iter()
        .map(|s| band_score(week, max_points - s.points))
        .collect();
    let total: f64 = raw.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }

    // Each row is rounded on its own, so the column may miss 100.0 by a few tenths.
    projected
        .iter()
        .zip(&raw)
        .map(|(s, score)| ChampionshipOdds {
            team_name: s.team.name.clone(),
            probability: round1(score / total * 100.0),
        })
        .collect()
}

/// Raw score for a team `points_diff` behind the projected leader.
pub fn band_score(week: u32, points_diff: u32) -> f64 {
    match (week, points_diff) {
        (6.., 0) => 100.0,
        (6.., _) => 0.0,
        (_, 0) => 50.0,
        (_, 1..=3) => 30.0,
        (5, _) => 0.0,
        (_, 4..=6) => 15.0,
        (4, _) => 0.0,
        (_, 7..=9) => 4.0,
        _ => 1.0,
    }
}

/// Win/draw/win percentages for every unplayed match from current form.
pub fn match_predictions(schedule: &Schedule, table: &StandingsTable) -> Vec<MatchPrediction> {
    schedule
        .unplayed()
        .filter_map(|m| {
            let home = table.get(m.home.id)?;
            let away = table.get(m.away.id)?;
            let (home_pct, draw_pct, away_pct) =
                outcome_percentages(home.points_per_game(), away.points_per_game());
            Some(MatchPrediction {
                match_id: m.id,
                home_team: m.home.name.clone(),
                away_team: m.away.name.clone(),
                week: m.week,
                home_win_percentage: round1(home_pct),
                away_win_percentage: round1(away_pct),
                draw_percentage: round1(draw_pct),
                home_current_points: home.points,
                away_current_points: away.points,
                home_played: home.played,
                away_played: away.played,
            })
        })
        .collect()
}

/// Returns `(home, draw, away)` in percent. The draw keeps a fixed share and
/// the rest is split in proportion to points per game.
pub fn outcome_percentages(home_ppg: f64, away_ppg: f64) -> (f64, f64, f64) {
    let total = home_ppg + away_ppg;
    let (home, away) = if total > 0.0 {
        (home_ppg / total * DECISIVE_PCT, away_ppg / total * DECISIVE_PCT)
    } else {
        (DECISIVE_PCT / 2.0, DECISIVE_PCT / 2.0)
    };
    let sum = home + away + BASE_DRAW_PCT;
    (
        home * 100.0 / sum,
        BASE_DRAW_PCT * 100.0 / sum,
        away * 100.0 / sum,
    )
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_follow_the_week() {
        assert_eq!(band_score(6, 0), 100.0);
        assert_eq!(band_score(7, 1), 0.0);
        assert_eq!(band_score(5, 3), 30.0);
        assert_eq!(band_score(5, 4), 0.0);
        assert_eq!(band_score(4, 6), 15.0);
        assert_eq!(band_score(4, 7), 0.0);
        assert_eq!(band_score(3, 9), 4.0);
        assert_eq!(band_score(3, 10), 1.0);
        assert_eq!(band_score(0, 0), 50.0);
    }

    #[test]
    fn form_margin_is_strict() {
        assert_eq!(form_outcome(1.5, 1.0), Outcome::Draw);
        assert_eq!(form_outcome(1.51, 1.0), Outcome::Home);
        assert_eq!(form_outcome(0.0, 0.6), Outcome::Away);
    }

    #[test]
    fn no_form_splits_evenly() {
        let (h, d, a) = outcome_percentages(0.0, 0.0);
        assert_eq!((round1(h), round1(d), round1(a)), (42.5, 15.0, 42.5));
    }

    #[test]
    fn outcome_percentages_follow_ppg_ratio() {
        let (h, d, a) = outcome_percentages(3.0, 1.0);
        assert!((h - 63.75).abs() < 1e-9);
        assert!((a - 21.25).abs() < 1e-9);
        assert!((d - 15.0).abs() < 1e-9);
    }

    #[test]
    fn round1_keeps_one_decimal() {
        assert_eq!(round1(33.333), 33.3);
        assert_eq!(round1(66.66), 66.7);
    }
}
