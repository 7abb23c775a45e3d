use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::model::{Schedule, Standing};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportReport {
    pub standings_rows: usize,
    pub match_rows: usize,
}

/// Writes a `Standings` sheet and a `Results` sheet.
pub fn export_season_xlsx(
    path: &Path,
    standings: &[Standing],
    schedule: &Schedule,
) -> Result<ExportReport> {
    let standings_rows = standings_rows(standings);
    let match_rows = match_rows(schedule);

    let mut workbook = Workbook::new();
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Standings")?;
        write_rows(sheet, &standings_rows)?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Results")?;
        write_rows(sheet, &match_rows)?;
    }

    workbook
        .save(path)
        .with_context(|| format!("failed writing workbook to {}", path.display()))?;

    Ok(ExportReport {
        standings_rows: standings_rows.len().saturating_sub(1),
        match_rows: match_rows.len().saturating_sub(1),
    })
}

pub fn standings_rows(standings: &[Standing]) -> Vec<Vec<String>> {
    let mut rows = vec![header(&[
        "Pos", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts",
    ])];
    for (idx, s) in standings.iter().enumerate() {
        rows.push(vec![
            (idx + 1).to_string(),
            s.team.name.clone(),
            s.played.to_string(),
            s.won.to_string(),
            s.drawn.to_string(),
            s.lost.to_string(),
            s.goals_for.to_string(),
            s.goals_against.to_string(),
            s.goal_diff.to_string(),
            s.points.to_string(),
        ]);
    }
    rows
}

pub fn match_rows(schedule: &Schedule) -> Vec<Vec<String>> {
    let mut rows = vec![header(&["Week", "MatchId", "Home", "Away", "Score"])];
    for m in schedule.matches() {
        let score = if m.played {
            format!("{}-{}", m.home_goals, m.away_goals)
        } else {
            String::new()
        };
        rows.push(vec![
            m.week.to_string(),
            m.id.to_string(),
            m.home.name.clone(),
            m.away.name.clone(),
            score,
        ]);
    }
    rows
}

fn header(cols: &[&str]) -> Vec<String> {
    cols.iter().map(|c| c.to_string()).collect()
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<()> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32, col_idx as u16, value)
                .with_context(|| format!("write cell ({row_idx},{col_idx})"))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_teams;
    use crate::league::LeagueSimulator;

    #[test]
    fn rows_have_headers_and_one_line_per_entry() {
        let mut league = LeagueSimulator::with_seed(default_teams(), 3).unwrap();
        league.simulate_week();

        let table = standings_rows(&league.standings());
        assert_eq!(table.len(), 5);
        assert_eq!(table[0][1], "Team");
        assert_eq!(table[1][0], "1");

        let results = match_rows(league.schedule());
        assert_eq!(results.len(), 13);
        assert!(!results[1][4].is_empty());
        assert!(results[12][4].is_empty());
    }

    #[test]
    fn writes_workbook_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("season.xlsx");
        let mut league = LeagueSimulator::with_seed(default_teams(), 3).unwrap();
        league.simulate_all();

        let report = export_season_xlsx(&path, &league.standings(), league.schedule()).unwrap();
        assert_eq!(report.standings_rows, 4);
        assert_eq!(report.match_rows, 12);
        assert!(path.exists());
    }
}
