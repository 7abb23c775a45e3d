use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use league_sim::api::build_router;
use league_sim::config::Config;
use league_sim::league::LeagueSimulator;
use league_sim::match_sim::MatchSimulator;
use league_sim::state::{AppState, SharedState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = Config::from_env()?;
    let sim = match cfg.seed {
        Some(seed) => MatchSimulator::from_seed(seed),
        None => MatchSimulator::from_entropy(),
    };
    let league = LeagueSimulator::new(cfg.teams.clone(), sim).context("build league")?;
    info!(
        teams = league.teams().len(),
        weeks = league.total_weeks(),
        seed = ?cfg.seed,
        "league ready"
    );

    let mut app = AppState::new(league, cfg.log_limit);
    app.push_log("[INFO] League created");
    let router = build_router(SharedState::new(app));

    let listener = tokio::net::TcpListener::bind(cfg.bind_addr)
        .await
        .with_context(|| format!("bind {}", cfg.bind_addr))?;
    info!("Server running at http://{}", cfg.bind_addr);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutting down");
}
