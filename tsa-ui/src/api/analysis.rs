//! Analysis run lifecycle endpoints
//!
//! One run at a time: starting a new run tears down any previous one,
//! and cancel tears down the live run so neither its ticks nor its
//! deferred stage advance fire afterward.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use tracing::info;
use tsa_common::progress::{sub_stage_states, SubStageStatus, SUB_STAGES};
use tsa_common::Error;
use uuid::Uuid;

use super::ApiError;
use crate::analysis::AnalysisRun;
use crate::models::ParseStatusResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartAnalysisResponse {
    pub run_id: Uuid,
    pub state: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SubStageView {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub status: SubStageStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisStatusResponse {
    pub run_id: Uuid,
    pub percent: u8,
    pub state: &'static str,
    pub sub_stages: Vec<SubStageView>,
}

#[derive(Debug, Serialize)]
pub struct CancelAnalysisResponse {
    pub cancelled: bool,
}

/// POST /api/analysis/start
///
/// Starts a fresh run; a still-live previous run is cancelled first so
/// only one timer ever owns the counter.
pub async fn start_analysis(State(state): State<AppState>) -> Json<StartAnalysisResponse> {
    let mut slot = state.analysis.lock().await;
    if let Some(previous) = slot.take() {
        info!(run_id = %previous.run_id, "Replacing previous analysis run");
        previous.cancel();
    }

    let run = AnalysisRun::spawn(state.events.clone());
    let run_id = run.run_id;
    *slot = Some(run);

    Json(StartAnalysisResponse {
        run_id,
        state: "running",
    })
}

/// GET /api/analysis/status
///
/// Percent counter and derived sub-stage classification, computed
/// fresh from the counter value.
pub async fn get_analysis_status(
    State(state): State<AppState>,
) -> Result<Json<AnalysisStatusResponse>, ApiError> {
    let slot = state.analysis.lock().await;
    let run = slot
        .as_ref()
        .ok_or_else(|| Error::NotFound("no analysis run".to_string()))?;

    let percent = run.percent();
    let states = sub_stage_states(percent);
    let sub_stages = SUB_STAGES
        .iter()
        .zip(states.iter())
        .map(|(def, status)| SubStageView {
            id: def.id,
            title: def.title,
            description: def.description,
            status: *status,
        })
        .collect();

    Ok(Json(AnalysisStatusResponse {
        run_id: run.run_id,
        percent,
        state: if run.is_complete() {
            "completed"
        } else {
            "running"
        },
        sub_stages,
    }))
}

/// POST /api/analysis/cancel
///
/// Tears down the live run. Reports whether anything was cancelled.
pub async fn cancel_analysis(State(state): State<AppState>) -> Json<CancelAnalysisResponse> {
    let mut slot = state.analysis.lock().await;
    match slot.take() {
        Some(run) => {
            info!(run_id = %run.run_id, "Analysis run cancelled by client");
            run.cancel();
            Json(CancelAnalysisResponse { cancelled: true })
        }
        None => Json(CancelAnalysisResponse { cancelled: false }),
    }
}

/// GET /api/parsing-status/:upload_id
///
/// Parse result for a completed upload, from the backend when one is
/// configured and from the canned dataset otherwise.
pub async fn get_parsing_status(
    State(state): State<AppState>,
    Path(upload_id): Path<String>,
) -> Json<ParseStatusResponse> {
    Json(state.service.parse_status(&upload_id).await)
}

/// GET /api/parsed-data/:upload_id
///
/// Same shape as parsing-status; the parsed transactions themselves
/// live behind the dashboard endpoints.
pub async fn get_parsed_data(
    State(state): State<AppState>,
    Path(upload_id): Path<String>,
) -> Json<ParseStatusResponse> {
    Json(state.service.parsed_data(&upload_id).await)
}
