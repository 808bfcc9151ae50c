use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, info, instrument};

use super::types::{
    CreateSessionRequest, Frame, FrameRequest, RoundReport, SessionResponse, SessionSnapshot,
};
use crate::{
    gesture::HandPose,
    shared::{AppError, AppState},
};

/// Build the HTTP router for session endpoints
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "Hand rock-paper-scissors" }))
        .route("/sessions", post(create_session))
        .route("/sessions/:id", get(get_session).delete(end_session))
        .route("/sessions/:id/rounds", post(play_round))
        .route("/sessions/:id/frames", post(submit_frame))
        .with_state(state)
}

/// HTTP handler for creating a new session
///
/// POST /sessions
///
/// An empty body takes the server defaults; anything else must be a valid
/// request object.
#[instrument(name = "create_session", skip(state, body))]
pub async fn create_session(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SessionResponse>, AppError> {
    let request = if body.iter().all(u8::is_ascii_whitespace) {
        CreateSessionRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| AppError::Unprocessable(format!("Invalid session request: {}", e)))?
    };
    let handle = state.sessions.create_session(request).await;

    Ok(Json(SessionResponse {
        session_id: handle.id.clone(),
        difficulty: handle.difficulty,
        strategy: handle.strategy_name().await.to_string(),
    }))
}

/// GET /sessions/:id
#[instrument(name = "get_session", skip(state))]
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let handle = state.find_session(&session_id).await?;
    Ok(Json(handle.snapshot().await))
}

/// DELETE /sessions/:id
#[instrument(name = "end_session", skip(state))]
pub async fn end_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.sessions.end_session(&session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Play one round synchronously
///
/// POST /sessions/:id/rounds
#[instrument(name = "play_round", skip(state, payload))]
pub async fn play_round(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    payload: Result<Json<HandPose>, JsonRejection>,
) -> Result<Json<RoundReport>, AppError> {
    let Json(pose) = payload?;
    let handle = state.find_session(&session_id).await?;
    let report = handle.play(Frame::Hand(pose)).await?;

    info!(session_id = %session_id, report = ?report, "Round handled");
    Ok(Json(report))
}

/// Hand a tracker frame to the session runner; the outcome is published
/// as a round event
///
/// POST /sessions/:id/frames
#[instrument(name = "submit_frame", skip(state, payload))]
pub async fn submit_frame(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    payload: Result<Json<FrameRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(request) = payload?;
    let handle = state.find_session(&session_id).await?;
    debug!(session_id = %session_id, hands = request.hands.len(), "Frame received");
    handle
        .submit(Frame::from(request))
        .map_err(|e| AppError::NotFound(format!("Session {} is closing: {}", session_id, e)))?;

    Ok(StatusCode::ACCEPTED)
}
