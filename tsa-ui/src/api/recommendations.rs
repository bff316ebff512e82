//! Recommendation and product endpoints

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::fixtures;
use crate::models::{ApproveRequest, Product, RecommendationsResponse};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ApproveResponse {
    pub approved: usize,
}

/// GET /api/recommendations/:client_id
pub async fn get_recommendations(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Json<RecommendationsResponse> {
    Json(state.service.recommendations(&client_id).await)
}

/// POST /api/recommendations/approve
///
/// Acknowledges the approval; nothing is persisted in the demo.
pub async fn approve_recommendations(
    Json(request): Json<ApproveRequest>,
) -> Json<ApproveResponse> {
    info!(
        count = request.recommendation_ids.len(),
        ids = ?request.recommendation_ids,
        "Recommendations approved"
    );
    Json(ApproveResponse {
        approved: request.recommendation_ids.len(),
    })
}

/// GET /api/products
pub async fn get_products() -> Json<Vec<Product>> {
    Json(fixtures::products())
}
