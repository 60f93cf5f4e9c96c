use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use encore_core::errors::{CoreError, ErrorKind};
use encore_core::storage::Store;
use encore_core::submit::ScoreSubmission;
use encore_core::{aggregate, auth, event, gate, submit};
use serde::Deserialize;
use serde_json::{json, Value};

pub fn router(store: Store) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/event-status", get(event_status))
        .route("/change-event", post(change_event))
        .route("/scores", post(submit_scores))
        .route("/final-scores", get(final_scores))
        .route("/judge/login", post(judge_login))
        .route("/performers", get(performers))
        .route("/performers-and-judges", get(performers_and_judges))
        .route("/set-current-performer", post(set_current_performer))
        .route("/current-performer", get(current_performer))
        .route("/canVote/:judge_id", get(can_vote))
        .route("/current-scores", get(current_scores))
        .with_state(store)
}

pub(crate) fn status_for(err: &CoreError) -> StatusCode {
    match err.kind() {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::BAD_REQUEST,
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Storage => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Storage failures are logged here and surfaced as the per-operation generic
/// message; every other error reports its own reason verbatim.
fn failure(err: CoreError, storage_msg: &str) -> (StatusCode, Json<Value>) {
    let status = status_for(&err);
    let message = if err.kind() == ErrorKind::Storage {
        tracing::error!(event = "storage_failure", error = %err);
        storage_msg.to_string()
    } else {
        err.to_string()
    };
    (status, Json(json!({ "error": message })))
}

async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Never fails observably: a phase-read failure must not block the UI, so it
/// degrades to "not ongoing".
async fn event_status(State(store): State<Store>) -> Json<Value> {
    let is_ongoing = match event::event_phase(&store) {
        Ok(phase) => phase,
        Err(err) => {
            tracing::error!(event = "event_status_read_failed", error = %err);
            false
        }
    };
    Json(json!({ "is_ongoing": is_ongoing }))
}

async fn change_event(State(store): State<Store>) -> (StatusCode, Json<Value>) {
    match event::toggle_event_phase(&store) {
        Ok(new_status) => (StatusCode::OK, Json(json!({ "new_status": new_status }))),
        Err(err) => failure(err, "Failed to change event status"),
    }
}

async fn submit_scores(
    State(store): State<Store>,
    Json(payload): Json<ScoreSubmission>,
) -> (StatusCode, Json<Value>) {
    match submit::submit_scores(&store, &payload) {
        Ok(_) => (
            StatusCode::CREATED,
            Json(json!({ "message": "Scores submitted successfully" })),
        ),
        Err(err) => failure(err, "Failed to submit scores"),
    }
}

async fn final_scores(State(store): State<Store>) -> (StatusCode, Json<Value>) {
    match aggregate::compute_final_scores(&store) {
        Ok(scores) => (StatusCode::OK, Json(json!({ "scores": scores }))),
        Err(err) => failure(err, "Failed to retrieve final scores"),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

async fn judge_login(
    State(store): State<Store>,
    Json(req): Json<LoginRequest>,
) -> (StatusCode, Json<Value>) {
    let email = req.email.unwrap_or_default();
    let password = req.password.unwrap_or_default();
    match auth::authenticate_judge(&store, &email, &password) {
        Ok(judge) => (StatusCode::OK, Json(json!({ "judge": judge }))),
        Err(err) => failure(err, "Failed to authenticate"),
    }
}

async fn performers(State(store): State<Store>) -> (StatusCode, Json<Value>) {
    match store.performers() {
        Ok(list) => (StatusCode::OK, Json(json!({ "performers": list }))),
        Err(err) => failure(err, "Failed to retrieve performers"),
    }
}

async fn performers_and_judges(State(store): State<Store>) -> (StatusCode, Json<Value>) {
    let listing = store
        .performers()
        .and_then(|performers| Ok((performers, store.judge_summaries()?)));
    match listing {
        Ok((performers, judges)) => (
            StatusCode::OK,
            Json(json!({ "performers": performers, "judges": judges })),
        ),
        Err(err) => failure(err, "Failed to retrieve performers and judges"),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SetPerformerRequest {
    #[serde(default)]
    pub performer_id: Option<Value>,
}

async fn set_current_performer(
    State(store): State<Store>,
    Json(req): Json<SetPerformerRequest>,
) -> (StatusCode, Json<Value>) {
    let outcome = submit::coerce_id(req.performer_id.as_ref(), "performer_id")
        .and_then(|performer_id| event::set_current_performer(&store, performer_id));
    match outcome {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Current performer updated successfully" })),
        ),
        Err(err) => failure(err, "Failed to update current performer"),
    }
}

async fn current_performer(State(store): State<Store>) -> (StatusCode, Json<Value>) {
    match event::current_performer(&store) {
        Ok(performer) => (StatusCode::OK, Json(json!({ "performer": performer }))),
        Err(err) => failure(err, "Failed to retrieve current performer"),
    }
}

async fn can_vote(
    State(store): State<Store>,
    Path(judge_id): Path<i64>,
) -> (StatusCode, Json<Value>) {
    match gate::can_vote(&store, judge_id) {
        Ok(allowed) => (StatusCode::OK, Json(json!({ "canVote": allowed }))),
        Err(err) => failure(err, "Failed to determine voting eligibility"),
    }
}

async fn current_scores(State(store): State<Store>) -> (StatusCode, Json<Value>) {
    match aggregate::current_scores(&store) {
        Ok(rows) => (StatusCode::OK, Json(json!({ "scores": rows }))),
        Err(err) => failure(err, "Failed to retrieve current scores"),
    }
}
