//! Dashboard HTMX endpoints

use crate::{ApiError, AppState};
use axum::extract::{Path, State};
use axum::response::Html;
use walletledger_config::Tab;

use super::page::render_tabs;

/// HTMX: Tab switch - Partial page update
pub async fn htmx_tab(
    State(state): State<AppState>,
    Path(tab): Path<String>,
) -> Result<Html<String>, ApiError> {
    let tab: Tab = tab.parse().map_err(|_| ApiError::NotFound {
        resource: format!("tab '{}'", tab),
    })?;

    let ledger = state.ledger.read().await;
    Ok(Html(render_tabs(&ledger, tab)))
}
