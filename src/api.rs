use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::error::LeagueError;
use crate::league::WeekOutcome;
use crate::model::{Match, MatchId, Schedule, Standing};
use crate::predict::{self, ChampionshipOdds, MatchPrediction};
use crate::state::SharedState;

pub const LANDING_TEXT: &str = "Football League Simulator API";

pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(landing_page))
        .route("/simulate/week", post(simulate_week))
        .route("/simulate/all", post(simulate_all))
        .route("/standings", get(standings))
        .route("/predict", get(predict_championship))
        .route("/predict/table", get(predict_table))
        .route("/predict/matches", get(predict_matches))
        .route("/matches", get(matches))
        .route("/match/edit", post(edit_match))
        .route("/match/:id", get(match_by_id))
        .route("/reset", post(reset))
        .route("/log", get(activity_log))
        .with_state(state)
}

#[derive(Debug)]
pub struct ApiError(LeagueError);

impl From<LeagueError> for ApiError {
    fn from(err: LeagueError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            LeagueError::InvalidInput(_) | LeagueError::PreconditionNotMet { .. } => {
                StatusCode::BAD_REQUEST
            }
            LeagueError::Exhausted => StatusCode::GONE,
            // Unknown IDs on edit have always surfaced as a server error.
            LeagueError::NotFound { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week: Option<usize>,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            week: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChampionshipResponse {
    pub championship_probabilities: Vec<ChampionshipOdds>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct EditMatchRequest {
    pub match_id: MatchId,
    pub home_goals: u8,
    pub away_goals: u8,
}

async fn landing_page() -> &'static str {
    LANDING_TEXT
}

async fn simulate_week(State(state): State<SharedState>) -> Result<Json<MessageResponse>, ApiError> {
    let mut guard = state.lock();
    match guard.league.simulate_week() {
        WeekOutcome::Played { week } => {
            info!(week, "week simulated");
            guard.push_log(format!("[INFO] Week {week} simulated"));
            Ok(Json(MessageResponse {
                message: "One week simulated".to_string(),
                week: Some(week),
            }))
        }
        WeekOutcome::AlreadyPlayed { week } => {
            guard.push_log(format!("[INFO] Week {week} had no unplayed matches"));
            Ok(Json(MessageResponse {
                message: format!("Week {week} was already played"),
                week: Some(week),
            }))
        }
        WeekOutcome::Exhausted => Err(LeagueError::Exhausted.into()),
    }
}

async fn simulate_all(State(state): State<SharedState>) -> Json<MessageResponse> {
    let mut guard = state.lock();
    let weeks = guard.league.simulate_all();
    info!(weeks, "remaining weeks simulated");
    guard.push_log(format!("[INFO] Simulated {weeks} remaining weeks"));
    Json(MessageResponse::new("All remaining matches simulated"))
}

async fn standings(State(state): State<SharedState>) -> Json<Vec<Standing>> {
    Json(state.lock().league.standings())
}

async fn predict_championship(
    State(state): State<SharedState>,
) -> Result<Json<ChampionshipResponse>, ApiError> {
    let guard = state.lock();
    let table = guard.league.standings_copy();
    predict::ensure_predictable(&table)?;
    let odds = predict::championship_probabilities(guard.league.schedule(), &table);
    Ok(Json(ChampionshipResponse {
        championship_probabilities: odds,
        message: "Championship winning probabilities based on current form".to_string(),
    }))
}

async fn predict_table(State(state): State<SharedState>) -> Result<Json<Vec<Standing>>, ApiError> {
    let guard = state.lock();
    let table = guard.league.standings_copy();
    predict::ensure_predictable(&table)?;
    let projected = predict::project_final_table(guard.league.schedule(), &table);
    Ok(Json(projected.sorted()))
}

async fn predict_matches(State(state): State<SharedState>) -> Json<Vec<MatchPrediction>> {
    let guard = state.lock();
    Json(predict::match_predictions(
        guard.league.schedule(),
        guard.league.standings_table(),
    ))
}

async fn matches(State(state): State<SharedState>) -> Json<Schedule> {
    Json(state.lock().league.schedule().clone())
}

async fn match_by_id(
    State(state): State<SharedState>,
    Path(match_id): Path<MatchId>,
) -> Result<Json<Match>, ApiError> {
    let guard = state.lock();
    let m = guard.league.match_by_id(match_id)?;
    Ok(Json(m.clone()))
}

async fn edit_match(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    let req: EditMatchRequest = serde_json::from_slice(&body).map_err(|err| {
        warn!(%err, "rejected match edit body");
        LeagueError::InvalidInput(format!("invalid request body: {err}"))
    })?;

    let mut guard = state.lock();
    if let Err(err) = guard
        .league
        .edit_match_result(req.match_id, req.home_goals, req.away_goals)
    {
        guard.push_log(format!("[WARN] Edit failed: {err}"));
        return Err(err.into());
    }
    guard.league.recalculate_standings();
    info!(
        match_id = req.match_id,
        home_goals = req.home_goals,
        away_goals = req.away_goals,
        "match result edited"
    );
    guard.push_log(format!(
        "[INFO] Match {} set to {}-{}",
        req.match_id, req.home_goals, req.away_goals
    ));
    Ok(Json(MessageResponse::new("Match result updated")))
}

async fn reset(State(state): State<SharedState>) -> Json<MessageResponse> {
    let mut guard = state.lock();
    guard.league.reset();
    info!("league reset");
    guard.push_log("[INFO] League reset");
    Json(MessageResponse::new("League has been reset"))
}

async fn activity_log(State(state): State<SharedState>) -> Json<Vec<String>> {
    Json(state.lock().logs.iter().cloned().collect())
}
