//! Transaction routes - Sortable transaction table
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Table fragment rendering

pub mod api;
pub mod page;

pub use api::{api_transaction_detail, api_transactions, htmx_transactions_table, SortQuery};
pub use page::{render_transactions_table, RowEntrance};
