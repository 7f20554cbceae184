//! Route modules for the API server
//!
//! - dashboard: Overview page and tab switching
//! - transactions: Sortable transaction table and JSON listing
//! - settings: Settings page
//!
//! Each module follows a consistent structure:
//! - mod.rs: Module declaration and exports
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: HTML rendering

pub mod dashboard;
pub mod settings;
pub mod transactions;
