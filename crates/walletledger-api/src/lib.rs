//! HTTP dashboard server with HTMX support
//!
//! Routes are organized into modules:
//! - routes::dashboard: Overview page and tab switching
//! - routes::transactions: Sortable transaction table, JSON listing
//! - routes::settings: Configuration display

pub mod error;
pub mod routes;

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use walletledger_config::{Config, Tab};
use walletledger_core::{DefaultErrorLogger, ErrorContext, ErrorLogger, Ledger};
use walletledger_utils::escape_html;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<RwLock<Ledger>>,
    pub config: Config,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::dashboard::htmx_tab;
    use routes::settings::{api_settings, page_settings};
    use routes::transactions::{api_transaction_detail, api_transactions, htmx_transactions_table};

    Router::new()
        // API endpoints
        .route("/api/health", get(health_check))
        .route("/api/transactions", get(api_transactions))
        .route("/api/transactions/:id", get(api_transaction_detail))
        .route("/api/summary", get(api_summary))
        .route("/api/settings", get(api_settings))
        .route("/api/reload", post(api_reload))
        // HTMX page routes
        .route("/", get(index_page))
        .route("/dashboard", get(page_dashboard))
        .route("/settings", get(page_settings))
        // HTMX partial routes
        .route("/tabs/:tab", get(htmx_tab))
        .route("/transactions/table", get(htmx_transactions_table))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Get dashboard summary (JSON API)
async fn api_summary(State(state): State<AppState>) -> Json<serde_json::Value> {
    let ledger = state.ledger.read().await;
    Json(serde_json::to_value(ledger.summary()).unwrap_or_default())
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script src="https://unpkg.com/idiomorph@0.3.0/dist/idiomorph-ext.min.js"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
        .htmx-request .htmx-indicator {{ opacity: 1; }}
        @keyframes row-in {{ from {{ opacity: 0; transform: translateX(-20px); }} to {{ opacity: 1; transform: translateX(0); }} }}
        @keyframes fade-up {{ from {{ opacity: 0; transform: translateY(20px); }} to {{ opacity: 1; transform: translateY(0); }} }}
        .txn-row-enter {{ animation: row-in 0.3s ease-out both; }}
        .fade-up {{ animation: fade-up 0.3s ease-out both; }}
    </style>
</head>
<body class="bg-gray-50 text-gray-900" hx-ext="morph">
    {}
</body>
</html>"#,
        escape_html(title),
        content
    )
}

/// Top header: menu button, logo, search, grid and user avatar
pub fn header_bar(brand: &str) -> String {
    format!(
        r#"<header class='bg-white px-6 py-4'>
    <div class='flex items-center justify-between'>
        <div class='flex items-center gap-4'>
            <button class='p-2 rounded hover:bg-gray-100' aria-label='Menu'>&#9776;</button>
            <a href='/' class='text-xl font-bold text-[#3A6C7B]'>{}</a>
        </div>
        <div class='flex items-center gap-4'>
            <button class='p-2 rounded-full hover:bg-gray-100' aria-label='Search'>&#128269;</button>
            <button class='p-2 rounded-full hover:bg-gray-100' aria-label='Apps'>&#9638;</button>
            <div class='w-8 h-8 rounded-full bg-gray-300 flex items-center justify-center text-sm font-medium'>U</div>
        </div>
    </div>
</header>"#,
        escape_html(brand)
    )
}

/// Navigation sidebar
pub fn nav_sidebar(current_path: &str) -> String {
    let links = [
        ("/dashboard", "Dashboard"),
        ("/dashboard?tab=transactions", "Transactions"),
        ("#", "Reports"),
        ("/settings", "Settings"),
    ];

    let mut nav = String::from("<nav class='p-4 space-y-2'>");

    for (path, label) in &links {
        let is_active = match *label {
            "Dashboard" => current_path == "/" || current_path == "/dashboard",
            "Settings" => current_path.starts_with("/settings"),
            _ => false,
        };
        let active_class = if is_active {
            "rounded-full bg-[#38677616] text-[#3A6C7B]"
        } else {
            "rounded-lg text-gray-600 hover:bg-gray-50"
        };
        nav.push_str(&format!(
            r#"<a href='{}' class='block w-full px-4 py-2 {}'>{}</a>"#,
            path, active_class, label
        ));
    }
    nav.push_str("</nav>");
    nav
}

/// Check if request is from HTMX (partial page update)
fn is_htmx_request(headers: &HeaderMap) -> bool {
    headers.get("hx-request").is_some()
}

/// Wrap content for full page or HTMX partial
pub fn page_response(headers: &HeaderMap, title: &str, current_path: &str, inner_content: &str) -> String {
    if is_htmx_request(headers) {
        format!(r#"<main class='flex-1 p-6'>{}</main>"#, inner_content)
    } else {
        base_html(
            title,
            &format!(
                r#"{}
<div class='flex'>
    <aside class='hidden lg:block w-64 bg-white min-h-screen'>{}</aside>
    <main class='flex-1 p-6'>{}</main>
</div>"#,
                header_bar(title),
                nav_sidebar(current_path),
                inner_content
            ),
        )
    }
}

/// Index page: dashboard with the requested or configured tab
async fn index_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Html<String> {
    let ledger = state.ledger.read().await;
    let tab = params
        .get("tab")
        .and_then(|t| t.parse::<Tab>().ok())
        .unwrap_or(state.config.dashboard.default_tab);

    let inner_content = routes::dashboard::render_dashboard(&ledger, tab);
    Html(page_response(&headers, &state.config.dashboard.title, "/dashboard", &inner_content))
}

/// Dashboard page (alias for index)
async fn page_dashboard(
    state: State<AppState>,
    headers: HeaderMap,
    params: Query<HashMap<String, String>>,
) -> Html<String> {
    index_page(state, headers, params).await
}

/// Start the HTTP server
///
/// Creates the router, binds to the configured address and serves until
/// the process is interrupted.
pub async fn start_server(config: Config, ledger: Arc<RwLock<Ledger>>) -> std::io::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState { ledger, config };

    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting walletledger server on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - / (Dashboard)");
    log::info!("  - /transactions/table (Sortable table fragment)");
    log::info!("  - /settings (Configuration)");
    log::info!("  - /api/* (JSON API endpoints)");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    log::info!("Server stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
}

/// Reload ledger API endpoint
///
/// A failed reload leaves the previous store in place.
async fn api_reload(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<serde_json::Value>, ApiError> {
    let (parser, source) = {
        let ledger = state.ledger.read().await;
        (ledger.parser(), ledger.source().clone())
    };

    // Readers keep the current store while the new one is parsed
    let loaded = match Ledger::read_source(&parser, &source).await {
        Ok(loaded) => loaded,
        Err(e) => {
            let mut context = ErrorContext::new("reload".to_string())
                .with_data("source", serde_json::json!(source.to_string()));
            if let Some(request_id) = headers.get("x-request-id").and_then(|v| v.to_str().ok()) {
                context = context.with_request_id(request_id.to_string());
            }
            DefaultErrorLogger.log_error(&e, &context);
            return Err(ApiError::from(e));
        }
    };

    let total_count = loaded.store.len();
    state.ledger.write().await.install(loaded);
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Ledger reloaded",
        "total_count": total_count,
    })))
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{self, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;
    use walletledger_parser::DefaultLedgerParser;

    fn app() -> Router {
        let config = Config::default();
        let mut ledger = Ledger::new(config.clone(), Arc::new(DefaultLedgerParser));
        ledger.load_sample().unwrap();
        create_router(AppState {
            ledger: Arc::new(RwLock::new(ledger)),
            config,
        })
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get(app(), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn test_api_transactions_sorted() {
        let (status, body) = get(app(), "/api/transactions?sort=amount&dir=desc").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["total_count"], 9);
        assert_eq!(json["sort"]["column"], "amount");
        assert_eq!(json["sort"]["direction"], "descending");
        assert_eq!(json["transactions"][0]["remark"], "Salary");
        assert_eq!(json["transactions"][1]["remark"], "Rent");
        assert_eq!(json["transactions"][8]["remark"], "Movie Tickets");
    }

    #[tokio::test]
    async fn test_api_transactions_default_order() {
        let (_, body) = get(app(), "/api/transactions").await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(json["sort"]["column"].is_null());
        let ids: Vec<u64> = json["transactions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, (1..=9).collect::<Vec<u64>>());
    }

    #[tokio::test]
    async fn test_api_transaction_detail() {
        let (status, body) = get(app(), "/api/transactions/6").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["remark"], "Rent");
        assert_eq!(json["type"], "Debit");

        let (status, body) = get(app(), "/api/transactions/99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("TRANSACTION_NOT_FOUND"));

        let (status, _) = get(app(), "/api/transactions/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_table_fragment_toggle() {
        let (status, body) = get(app(), "/transactions/table?sort=amount&dir=asc&toggle=amount").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("data-sort='amount' data-dir='desc'"));
        assert!(body.find("txn-row-1").unwrap() < body.find("txn-row-6").unwrap());
        assert!(!body.contains("<!DOCTYPE html>"));
        assert!(body.contains("hx-swap='morph:outerHTML'"));
        assert!(!body.contains("txn-row-enter"));
        assert!(!body.contains("animation-delay"));
    }

    #[tokio::test]
    async fn test_table_fragment_unknown_toggle() {
        let (status, body) = get(app(), "/transactions/table?sort=date&dir=desc&toggle=category").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("data-sort='date' data-dir='desc'"));
    }

    #[tokio::test]
    async fn test_dashboard_page() {
        let (status, body) = get(app(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<!DOCTYPE html>"));
        assert!(body.contains("Wallet Ledger"));
        assert!(!body.contains("Transactions view coming soon..."));
        assert!(body.contains("id='transactions-table'"));
        assert!(body.contains(r#"hx-ext="morph""#));
        assert!(body.contains("idiomorph-ext.min.js"));
        assert!(body.contains("txn-row-enter"));

        let (_, body) = get(app(), "/dashboard?tab=transactions").await;
        assert!(body.contains("Transactions view coming soon..."));
    }

    #[tokio::test]
    async fn test_tabs() {
        let (status, body) = get(app(), "/tabs/transactions").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Transactions view coming soon..."));

        let (status, _) = get(app(), "/tabs/reports").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_summary_and_settings() {
        let (_, body) = get(app(), "/api/summary").await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "Active");
        assert_eq!(json["summary_cards"].as_array().unwrap().len(), 4);
        assert_eq!(json["extra_members"], 12);

        let (_, body) = get(app(), "/api/settings").await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["server"]["port"], 8081);
        assert_eq!(json["currency"]["symbol"], "$");
    }

    #[tokio::test]
    async fn test_htmx_settings_partial() {
        let response = app()
            .oneshot(
                Request::get("/settings")
                    .header("hx-request", "true")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Settings"));
        assert!(!html.contains("<!DOCTYPE html>"));
    }

    #[tokio::test]
    async fn test_reload_sample() {
        let response = app()
            .oneshot(Request::post("/api/reload").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_reload_from_file_keeps_store_on_failure() {
        let path = std::env::temp_dir().join(format!("walletledger-api-reload-{}.txt", std::process::id()));
        std::fs::write(&path, "2023-10-01 credit \"Salary\" 3000 USD\n").unwrap();

        let config = Config::default();
        let mut ledger = Ledger::new(config.clone(), Arc::new(DefaultLedgerParser));
        ledger.load(path.clone()).await.unwrap();
        let shared = Arc::new(RwLock::new(ledger));
        let app = create_router(AppState {
            ledger: Arc::clone(&shared),
            config,
        });

        std::fs::write(&path, "2023-10-01 credit \"Salary\" -3000 USD\n").unwrap();
        let response = app
            .clone()
            .oneshot(
                Request::post("/api/reload")
                    .header("x-request-id", "req-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(shared.read().await.store().len(), 1);

        std::fs::write(&path, "2023-10-01 credit \"Salary\" 3000 USD\n2023-10-06 debit \"Rent\" -1200 USD\n").unwrap();
        let response = app
            .oneshot(Request::post("/api/reload").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["total_count"], 2);
        assert_eq!(shared.read().await.store().len(), 2);

        std::fs::remove_file(&path).unwrap();
    }
}
