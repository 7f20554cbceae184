//! Dashboard routes - Overview page and tab switching

pub mod api;
pub mod page;

pub use api::htmx_tab;
pub use page::render_dashboard;
