use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use league_sim::fixtures::generate_fixtures;
use league_sim::league::LeagueSimulator;
use league_sim::model::Team;
use league_sim::predict::{championship_probabilities, match_predictions};

fn sample_teams(n: u32) -> Vec<Team> {
    (1..=n)
        .map(|id| Team::new(id, format!("Club {id}"), (id % 9 + 1) as u8))
        .collect()
}

fn bench_fixture_generation(c: &mut Criterion) {
    let teams = sample_teams(20);
    c.bench_function("fixtures_20_teams", |b| {
        b.iter(|| {
            let schedule = generate_fixtures(black_box(&teams)).unwrap();
            black_box(schedule.total_weeks());
        })
    });
}

fn bench_full_season(c: &mut Criterion) {
    let teams = sample_teams(20);
    let mut seed = 0u64;
    c.bench_function("season_20_teams", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let mut league = LeagueSimulator::with_seed(teams.clone(), seed).unwrap();
            league.simulate_all();
            black_box(league.standings().len());
        })
    });
}

fn bench_predictions(c: &mut Criterion) {
    let mut league = LeagueSimulator::with_seed(sample_teams(20), 42).unwrap();
    for _ in 0..19 {
        league.simulate_week();
    }

    c.bench_function("championship_probabilities", |b| {
        b.iter(|| {
            let odds = championship_probabilities(
                black_box(league.schedule()),
                black_box(league.standings_table()),
            );
            black_box(odds.len());
        })
    });

    c.bench_function("match_predictions", |b| {
        b.iter(|| {
            let rows = match_predictions(
                black_box(league.schedule()),
                black_box(league.standings_table()),
            );
            black_box(rows.len());
        })
    });
}

criterion_group!(
    benches,
    bench_fixture_generation,
    bench_full_season,
    bench_predictions
);
criterion_main!(benches);
