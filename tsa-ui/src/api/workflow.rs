//! Step router endpoint
//!
//! Resolves a navigation path to the workflow position driving the step
//! indicator. Total function: unrecognized paths resolve to the first
//! stage, so there is no error response here. Position is derived fresh
//! on every request, never cached.

use axum::extract::Query;
use axum::Json;
use serde::{Deserialize, Serialize};
use tsa_common::workflow::{resolve_position, stage_status, StageId, StageStatus, STAGES};

#[derive(Debug, Deserialize)]
pub struct PositionQuery {
    /// Navigation path, e.g. `/parsing`; defaults to the root path
    #[serde(default)]
    pub path: String,
}

/// One stage of the indicator, classified relative to the position
#[derive(Debug, Serialize)]
pub struct StageView {
    pub id: StageId,
    pub title: &'static str,
    pub description: &'static str,
    pub status: StageStatus,
}

#[derive(Debug, Serialize)]
pub struct PositionResponse {
    pub current: StageId,
    pub completed: Vec<StageId>,
    pub stages: Vec<StageView>,
}

/// GET /api/workflow/position?path=/parsing
pub async fn get_position(Query(query): Query<PositionQuery>) -> Json<PositionResponse> {
    let position = resolve_position(&query.path);
    let current_index = position.current.index();

    let stages = STAGES
        .iter()
        .enumerate()
        .map(|(i, def)| StageView {
            id: def.id,
            title: def.title,
            description: def.description,
            status: stage_status(i, current_index),
        })
        .collect();

    Json(PositionResponse {
        current: position.current,
        completed: position.completed,
        stages,
    })
}
