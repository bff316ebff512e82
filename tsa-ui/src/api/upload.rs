//! Statement upload and bank connection endpoints
//!
//! Nothing is stored or parsed; uploads are acknowledged with the
//! canned response that moves the demo along to the parsing stage.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use tracing::info;
use tsa_common::Error;

use super::ApiError;
use crate::fixtures;
use crate::models::{BankConnection, ConnectBankRequest, UploadRequest, UploadResponse};
use crate::AppState;

/// POST /api/upload
pub async fn upload_statement(
    State(_state): State<AppState>,
    Json(request): Json<UploadRequest>,
) -> Json<UploadResponse> {
    info!(
        file_name = %request.file_name,
        client_id = request.client_id.as_deref().unwrap_or(fixtures::CLIENT_ID),
        "Statement upload received"
    );
    Json(fixtures::upload_response())
}

/// POST /api/connect-bank
pub async fn connect_bank(
    State(_state): State<AppState>,
    Json(request): Json<ConnectBankRequest>,
) -> Json<UploadResponse> {
    info!(
        bank_name = %request.bank_name,
        institution_id = %request.institution_id,
        "Bank connection requested"
    );
    Json(fixtures::bank_connection_response())
}

/// GET /api/bank-connections/:client_id
pub async fn get_bank_connections(
    Path(_client_id): Path<String>,
) -> Json<Vec<BankConnection>> {
    Json(fixtures::bank_connections())
}

#[derive(Debug, Serialize)]
pub struct DisconnectBankResponse {
    pub disconnected: bool,
}

#[derive(Debug, Serialize)]
pub struct SyncBankResponse {
    pub id: String,
    pub status: &'static str,
}

fn known_connection(connection_id: &str) -> bool {
    fixtures::bank_connections()
        .iter()
        .any(|c| c.id == connection_id)
}

/// DELETE /api/bank-connections/:id
///
/// Acknowledges the disconnect; nothing is persisted in the demo.
pub async fn disconnect_bank(
    Path(connection_id): Path<String>,
) -> Result<Json<DisconnectBankResponse>, ApiError> {
    if !known_connection(&connection_id) {
        return Err(Error::NotFound(format!("bank connection {}", connection_id)).into());
    }
    info!(connection_id = %connection_id, "Bank connection disconnected");
    Ok(Json(DisconnectBankResponse { disconnected: true }))
}

/// POST /api/bank-connections/:id/sync
pub async fn sync_bank_data(
    Path(connection_id): Path<String>,
) -> Result<Json<SyncBankResponse>, ApiError> {
    if !known_connection(&connection_id) {
        return Err(Error::NotFound(format!("bank connection {}", connection_id)).into());
    }
    info!(connection_id = %connection_id, "Bank data sync requested");
    Ok(Json(SyncBankResponse {
        id: connection_id,
        status: "syncing",
    }))
}
