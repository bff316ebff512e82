//! Report generation and export endpoints

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::info;
use tsa_common::Error;

use super::ApiError;
use crate::fixtures;
use crate::models::{ReportConfig, ReportData, ShareReportRequest};
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportResponse {
    pub report_id: String,
}

/// POST /api/reports/generate
pub async fn generate_report(
    Json(config): Json<ReportConfig>,
) -> Json<GenerateReportResponse> {
    info!(
        client_id = %config.client_id,
        format = ?config.format,
        include_transactions = config.include_transactions,
        include_recommendations = config.include_recommendations,
        include_charts = config.include_charts,
        "Report generation requested"
    );
    Json(GenerateReportResponse {
        report_id: fixtures::REPORT_ID.to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct ShareReportResponse {
    pub shared: usize,
}

/// POST /api/reports/share
///
/// Acknowledges the share request; no mail leaves the demo.
pub async fn share_report(
    Json(request): Json<ShareReportRequest>,
) -> Result<Json<ShareReportResponse>, ApiError> {
    if request.report_id != fixtures::REPORT_ID {
        return Err(Error::NotFound(format!("report {}", request.report_id)).into());
    }
    info!(
        report_id = %request.report_id,
        recipients = request.email_addresses.len(),
        "Report share requested"
    );
    Ok(Json(ShareReportResponse {
        shared: request.email_addresses.len(),
    }))
}

/// GET /api/reports/:report_id/data
pub async fn get_report_data(
    State(state): State<AppState>,
    Path(report_id): Path<String>,
) -> Result<Json<ReportData>, ApiError> {
    if report_id != fixtures::REPORT_ID {
        return Err(Error::NotFound(format!("report {}", report_id)).into());
    }
    Ok(Json(state.service.report_data(&report_id).await))
}

/// GET /api/reports/:report_id
///
/// Mock PDF download; the body is a stub, not a real document.
pub async fn download_report(
    State(state): State<AppState>,
    Path(report_id): Path<String>,
) -> Result<Response, ApiError> {
    if report_id != fixtures::REPORT_ID {
        return Err(Error::NotFound(format!("report {}", report_id)).into());
    }

    let data = state.service.report_data(&report_id).await;
    let body = format!("%PDF-1.4 Treasury Solutions Report for {}", data.client.name);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}.pdf\"", report_id),
            ),
        ],
        body,
    )
        .into_response())
}
