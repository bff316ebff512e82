//! Dashboard and transaction endpoints

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::models::{DashboardResponse, Transaction};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionQuery {
    /// Inclusive lower date bound, `YYYY-MM-DD`
    pub start_date: Option<String>,
    /// Inclusive upper date bound, `YYYY-MM-DD`
    pub end_date: Option<String>,
    /// Comma-separated category names
    pub categories: Option<String>,
    /// Comma-separated transaction types (`inflow`, `outflow`)
    pub types: Option<String>,
}

/// GET /api/dashboard/:client_id
pub async fn get_dashboard(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Json<DashboardResponse> {
    Json(state.service.dashboard(&client_id).await)
}

/// GET /api/transactions/:client_id
///
/// Transactions filtered by optional category, type, and date range.
pub async fn get_transactions(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
    Query(query): Query<TransactionQuery>,
) -> Json<Vec<Transaction>> {
    let transactions = state.service.dashboard(&client_id).await.transactions;
    Json(filter_transactions(transactions, &query))
}

fn filter_transactions(
    transactions: Vec<Transaction>,
    query: &TransactionQuery,
) -> Vec<Transaction> {
    let categories = split_list(query.categories.as_deref());
    let types = split_list(query.types.as_deref());

    transactions
        .into_iter()
        .filter(|txn| {
            if let Some(categories) = &categories {
                if !categories.iter().any(|c| c == &txn.category) {
                    return false;
                }
            }
            if let Some(types) = &types {
                let type_name = match txn.transaction_type {
                    crate::models::TransactionType::Inflow => "inflow",
                    crate::models::TransactionType::Outflow => "outflow",
                };
                if !types.iter().any(|t| t == type_name) {
                    return false;
                }
            }
            // ISO dates compare correctly as strings
            if let Some(start) = &query.start_date {
                if txn.date.as_str() < start.as_str() {
                    return false;
                }
            }
            if let Some(end) = &query.end_date {
                if txn.date.as_str() > end.as_str() {
                    return false;
                }
            }
            true
        })
        .collect()
}

fn split_list(value: Option<&str>) -> Option<Vec<String>> {
    let value = value?;
    if value.is_empty() {
        return None;
    }
    Some(value.split(',').map(|s| s.trim().to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn no_filters_returns_everything() {
        let all = filter_transactions(fixtures::transactions(), &TransactionQuery::default());
        assert_eq!(all.len(), 8);
    }

    #[test]
    fn category_filter_matches_exactly() {
        let query = TransactionQuery {
            categories: Some("Payroll".to_string()),
            ..Default::default()
        };
        let filtered = filter_transactions(fixtures::transactions(), &query);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "txn-002");
    }

    #[test]
    fn type_filter_splits_inflows_from_outflows() {
        let query = TransactionQuery {
            types: Some("inflow".to_string()),
            ..Default::default()
        };
        let inflows = filter_transactions(fixtures::transactions(), &query);
        assert_eq!(inflows.len(), 4);
        assert!(inflows.iter().all(|t| t.amount > 0.0));
    }

    #[test]
    fn date_range_is_inclusive() {
        let query = TransactionQuery {
            start_date: Some("2024-10-15".to_string()),
            end_date: Some("2024-10-18".to_string()),
            ..Default::default()
        };
        let filtered = filter_transactions(fixtures::transactions(), &query);
        let ids: Vec<_> = filtered.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["txn-003", "txn-004", "txn-005", "txn-006"]);
    }

    #[test]
    fn combined_filters_intersect() {
        let query = TransactionQuery {
            categories: Some("Revenue,Utilities".to_string()),
            types: Some("outflow".to_string()),
            ..Default::default()
        };
        let filtered = filter_transactions(fixtures::transactions(), &query);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].category, "Utilities");
    }
}
