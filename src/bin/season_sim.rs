use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rayon::prelude::*;

use league_sim::config::Config;
use league_sim::export::export_season_xlsx;
use league_sim::league::LeagueSimulator;
use league_sim::model::{Standing, Team};

// Usage: season_sim [seed] [runs] [xlsx_path]
fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .map(|s| s.parse::<u64>())
        .transpose()
        .context("seed must be an unsigned integer")?
        .unwrap_or(1);
    let runs = args
        .next()
        .map(|s| s.parse::<u64>())
        .transpose()
        .context("runs must be an unsigned integer")?
        .unwrap_or(1)
        .max(1);
    let xlsx = args.next().map(PathBuf::from);

    let cfg = Config::from_env()?;

    // The first run is kept for printing and export.
    let mut league = LeagueSimulator::with_seed(cfg.teams.clone(), seed)?;
    league.simulate_all();
    print_table(&league.standings());

    if runs > 1 {
        let champions = champion_counts(&cfg.teams, seed, runs)?;
        println!();
        println!("Champions over {runs} seasons (seeds {seed}..{}):", seed + runs);
        let mut rows: Vec<(String, usize)> = champions.into_iter().collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        for (name, count) in rows {
            let pct = count as f64 / runs as f64 * 100.0;
            println!("{name:<24} {count:>6} {pct:>6.1}%");
        }
    }

    if let Some(path) = xlsx {
        let report = export_season_xlsx(&path, &league.standings(), league.schedule())?;
        println!();
        println!(
            "Exported {} standings rows and {} results to {}",
            report.standings_rows,
            report.match_rows,
            path.display()
        );
    }

    Ok(())
}

fn champion_counts(teams: &[Team], seed: u64, runs: u64) -> Result<HashMap<String, usize>> {
    let champions = (seed..seed + runs)
        .into_par_iter()
        .map(|s| -> Result<String> {
            let mut league = LeagueSimulator::with_seed(teams.to_vec(), s)?;
            league.simulate_all();
            Ok(league
                .standings()
                .first()
                .map(|row| row.team.name.clone())
                .unwrap_or_default())
        })
        .collect::<Result<Vec<String>>>()?;

    let mut counts = HashMap::new();
    for name in champions {
        *counts.entry(name).or_insert(0usize) += 1;
    }
    Ok(counts)
}

fn print_table(rows: &[Standing]) {
    println!(
        "{:>3} {:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}",
        "Pos", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
    );
    for (idx, s) in rows.iter().enumerate() {
        println!(
            "{:>3} {:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}",
            idx + 1,
            s.team.name,
            s.played,
            s.won,
            s.drawn,
            s.lost,
            s.goals_for,
            s.goals_against,
            s.goal_diff,
            s.points
        );
    }
}
