//! Transactions API endpoints - JSON API and HTMX partial responses
//!
//! Endpoints:
//! - api_transactions: Sorted transactions list (JSON)
//! - api_transaction_detail: Single transaction (JSON)
//! - htmx_transactions_table: Sortable table (HTML fragment)

use crate::{ApiError, AppState};
use axum::extract::{Path, Query, State};
use axum::response::Html;
use axum::Json;
use serde::Deserialize;
use walletledger_core::SortController;

use super::page::{render_transactions_table, RowEntrance};

/// Sort state carried by the request
#[derive(Debug, Default, Deserialize)]
pub struct SortQuery {
    /// Active column, `none` or absent for input order
    pub sort: Option<String>,
    /// `asc` or `desc`
    pub dir: Option<String>,
    /// Header-click event: column to toggle
    pub toggle: Option<String>,
}

impl SortQuery {
    /// Rebuild the controller and apply the click event, if any
    pub fn controller(&self) -> SortController {
        let mut controller = SortController::from_query(self.sort.as_deref(), self.dir.as_deref());
        if let Some(column) = self.toggle.as_deref() {
            controller.toggle_sort_str(column);
        }
        controller
    }
}

/// Get transactions in display order (JSON API)
pub async fn api_transactions(
    State(state): State<AppState>,
    Query(params): Query<SortQuery>,
) -> Json<serde_json::Value> {
    let ledger = state.ledger.read().await;
    let controller = params.controller();
    Json(serde_json::to_value(ledger.transactions_response(&controller)).unwrap_or_default())
}

/// Get single transaction detail (JSON API)
pub async fn api_transaction_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id: u64 = id.parse().map_err(|_| ApiError::BadRequest {
        message: format!("Transaction id '{}' is not a number", id),
    })?;

    let ledger = state.ledger.read().await;
    let transaction = ledger.transaction(id)?;
    Ok(Json(serde_json::to_value(transaction).unwrap_or_default()))
}

/// HTMX: Sortable transactions table - Partial page update
pub async fn htmx_transactions_table(
    State(state): State<AppState>,
    Query(params): Query<SortQuery>,
) -> Html<String> {
    let ledger = state.ledger.read().await;
    let controller = params.controller();
    Html(render_transactions_table(&ledger, &controller, RowEntrance::Static))
}
