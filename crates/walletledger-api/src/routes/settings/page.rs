//! Settings page rendering - Full page endpoints

use crate::AppState;
use walletledger_utils::escape_html;

fn setting(label: &str, value: &str) -> String {
    format!(
        "<div><p class='text-sm text-gray-500'>{}</p><p class='font-medium'>{}</p></div>",
        label,
        escape_html(value)
    )
}

pub async fn page_settings(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let config = &state.config;
    let source = {
        let ledger = state.ledger.read().await;
        match ledger.source() {
            walletledger_core::LedgerSource::File(path) => path.display().to_string(),
            walletledger_core::LedgerSource::Sample => "built-in sample".to_string(),
            walletledger_core::LedgerSource::Empty => "not loaded".to_string(),
        }
    };

    let inner_content = format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>Settings</h2></div>
        <div class='bg-white rounded-xl shadow-sm p-6 mb-6'>
            <h3 class='text-lg font-semibold mb-4'>Server</h3>
            <div class='grid grid-cols-2 gap-4 mb-4'>{}{}</div>
        </div>
        <div class='bg-white rounded-xl shadow-sm p-6 mb-6'>
            <h3 class='text-lg font-semibold mb-4'>Data</h3>
            <div class='grid grid-cols-2 gap-4 mb-4'>{}{}{}</div>
            <button hx-post='/api/reload' hx-swap='none' class='rounded-full bg-[#4B8B9F] text-white px-4 py-2'>Reload ledger</button>
        </div>
        <div class='bg-white rounded-xl shadow-sm p-6 mb-6'>
            <h3 class='text-lg font-semibold mb-4'>Dashboard</h3>
            <div class='grid grid-cols-2 gap-4 mb-4'>{}{}{}</div>
        </div>
        <div class='bg-white rounded-xl shadow-sm p-6'>
            <h3 class='text-lg font-semibold mb-4'>Currency &amp; Logging</h3>
            <div class='grid grid-cols-2 gap-4'>{}{}{}</div>
        </div>"#,
        setting("Host", &config.server.host),
        setting("Port", &config.server.port.to_string()),
        setting("Data directory", &config.data.path.display().to_string()),
        setting("Main file", &config.data.main_file),
        setting("Loaded from", &source),
        setting("Title", &config.dashboard.title),
        setting("Default tab", &config.dashboard.default_tab.to_string()),
        setting("Row stagger", &format!("{} ms", config.dashboard.row_stagger_ms)),
        setting("Currency symbol", &config.currency.symbol),
        setting("Thousands separator", &config.currency.thousands_separator),
        setting("Log level", &config.logging.level),
    );

    axum::response::Html(crate::page_response(&headers, "Settings", "/settings", &inner_content))
}
