//! Treasury data service
//!
//! Thin request/response boundary mirroring the frontend service layer:
//! when a backend base URL is configured, data is fetched from it; any
//! failure (or no backend at all) falls back to the fixture dataset.
//! The boundary is opaque: one request, one response, no retry policy.

use crate::fixtures;
use crate::models::{
    DashboardResponse, ParseStatusResponse, RecommendationsResponse, ReportData,
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use tsa_common::{Error, Result};

#[derive(Clone)]
pub struct TreasuryService {
    backend: Option<BackendClient>,
}

#[derive(Clone)]
struct BackendClient {
    base_url: String,
    http: reqwest::Client,
}

impl TreasuryService {
    pub fn new(backend_url: Option<String>) -> Self {
        let backend = backend_url.map(|base_url| BackendClient {
            base_url,
            http: reqwest::Client::new(),
        });
        Self { backend }
    }

    /// True when responses come from a configured backend rather than
    /// the built-in fixtures
    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    pub async fn parse_status(&self, upload_id: &str) -> ParseStatusResponse {
        match self
            .try_backend(&format!("/api/parsing-status/{}", upload_id))
            .await
        {
            Some(response) => response,
            None => fixtures::parse_status_response(),
        }
    }

    pub async fn parsed_data(&self, upload_id: &str) -> ParseStatusResponse {
        match self
            .try_backend(&format!("/api/parsed-data/{}", upload_id))
            .await
        {
            Some(response) => response,
            None => fixtures::parse_status_response(),
        }
    }

    pub async fn dashboard(&self, client_id: &str) -> DashboardResponse {
        match self
            .try_backend(&format!("/api/dashboard/{}", client_id))
            .await
        {
            Some(response) => response,
            None => fixtures::dashboard_response(),
        }
    }

    pub async fn recommendations(&self, client_id: &str) -> RecommendationsResponse {
        match self
            .try_backend(&format!("/api/recommendations/{}", client_id))
            .await
        {
            Some(response) => response,
            None => fixtures::recommendations_response(),
        }
    }

    pub async fn report_data(&self, report_id: &str) -> ReportData {
        match self
            .try_backend(&format!("/api/reports/{}/data", report_id))
            .await
        {
            Some(response) => response,
            None => fixtures::report_data(),
        }
    }

    /// Single backend round trip; None means "serve fixtures instead"
    async fn try_backend<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        let backend = self.backend.as_ref()?;
        match backend.get_json(path).await {
            Ok(response) => {
                debug!("Backend served {}", path);
                Some(response)
            }
            Err(e) => {
                warn!("Backend request {} failed, serving fixtures: {}", path, e);
                None
            }
        }
    }
}

impl BackendClient {
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Backend(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::Backend(e.to_string()))?;
        response.json().await.map_err(|e| Error::Backend(e.to_string()))
    }
}
