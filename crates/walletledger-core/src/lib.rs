//! Core ledger processing and business logic
//!
//! - models / types: transaction records and the enumerations around them
//! - store: validated immutable ledger store
//! - sort: sort controller and the ordering function
//! - presentation: per-row and per-header display state for the table

pub mod error;
pub mod models;
pub mod presentation;
pub mod sample;
pub mod sort;
pub mod store;
pub mod types;

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use walletledger_config::Config;
use walletledger_parser::{ParseError, ParserRef};

pub use error::{CoreError, CoreResult, DefaultErrorLogger, ErrorContext, ErrorLogger, ErrorSeverity};
pub use models::{Dashboard, SummaryCard, TeamMember, TransactionRecord};
pub use presentation::{header_cells, HeaderCell, RowPresentation};
pub use sort::{order, SortController};
pub use store::LedgerStore;
pub use types::{SortColumn, SortDirection, Trend, TxnType};

/// Where the current store came from
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerSource {
    /// Nothing loaded yet
    Empty,
    /// Built-in sample data
    Sample,
    /// A ledger file on disk
    File(PathBuf),
}

impl std::fmt::Display for LedgerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerSource::Empty => write!(f, "empty"),
            LedgerSource::Sample => write!(f, "sample"),
            LedgerSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A parsed and validated ledger that has not been installed yet
#[derive(Debug)]
pub struct LoadedLedger {
    pub store: LedgerStore,
    pub dashboard: Dashboard,
    pub source: LedgerSource,
}

/// Map a parser failure for `entry`, keeping the path on a missing file
fn load_error(entry: &Path, error: ParseError) -> CoreError {
    match error {
        ParseError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => CoreError::FileNotFound {
            path: entry.to_string_lossy().to_string(),
        },
        other => other.into(),
    }
}

/// Main ledger structure
pub struct Ledger {
    config: Config,
    parser: ParserRef,
    store: LedgerStore,
    dashboard: Dashboard,
    source: LedgerSource,
}

impl Ledger {
    /// Create an empty ledger with config and parser
    pub fn new(config: Config, parser: ParserRef) -> Self {
        Self {
            config,
            parser,
            store: LedgerStore::default(),
            dashboard: Dashboard::default(),
            source: LedgerSource::Empty,
        }
    }

    /// Load ledger from a file.
    ///
    /// The new store replaces the current one only when parsing and
    /// validation both succeed.
    pub async fn load(&mut self, entry: PathBuf) -> CoreResult<()> {
        let loaded = Self::read_source(&self.parser, &LedgerSource::File(entry)).await?;
        self.install(loaded);
        Ok(())
    }

    /// Load the built-in sample ledger
    pub fn load_sample(&mut self) -> CoreResult<()> {
        let (store, dashboard) = sample::sample_ledger()?;
        self.install(LoadedLedger {
            store,
            dashboard,
            source: LedgerSource::Sample,
        });
        Ok(())
    }

    /// Reload the ledger from where it was last loaded
    pub async fn reload(&mut self) -> CoreResult<()> {
        let loaded = Self::read_source(&self.parser, &self.source).await?;
        self.install(loaded);
        Ok(())
    }

    /// Parse and validate `source` into a fresh store.
    ///
    /// Needs no access to a `Ledger`, so callers sharing one behind a lock
    /// can run it without holding the lock and only lock for [`Ledger::install`].
    pub async fn read_source(parser: &ParserRef, source: &LedgerSource) -> CoreResult<LoadedLedger> {
        match source {
            LedgerSource::Empty => Err(CoreError::NotLoaded),
            LedgerSource::Sample => {
                let (store, dashboard) = sample::sample_ledger()?;
                Ok(LoadedLedger {
                    store,
                    dashboard,
                    source: LedgerSource::Sample,
                })
            }
            LedgerSource::File(entry) => {
                if !tokio::fs::try_exists(entry).await.unwrap_or(false) {
                    return Err(CoreError::FileNotFound {
                        path: entry.to_string_lossy().to_string(),
                    });
                }

                let directives = parser
                    .parse_file(entry.clone())
                    .await
                    .map_err(|e| load_error(entry, e))?;
                let (store, dashboard) = store::ingest(&directives)?;
                Ok(LoadedLedger {
                    store,
                    dashboard,
                    source: LedgerSource::File(entry.clone()),
                })
            }
        }
    }

    /// Swap in a freshly read ledger
    pub fn install(&mut self, loaded: LoadedLedger) {
        match &loaded.source {
            LedgerSource::File(entry) => log::info!(
                "Loaded {} transactions from {}",
                loaded.store.len(),
                entry.display()
            ),
            _ => log::info!("Loaded {} sample transactions", loaded.store.len()),
        }
        self.store = loaded.store;
        self.dashboard = loaded.dashboard;
        self.source = loaded.source;
    }

    pub fn parser(&self) -> ParserRef {
        Arc::clone(&self.parser)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn source(&self) -> &LedgerSource {
        &self.source
    }

    pub fn is_loaded(&self) -> bool {
        self.source != LedgerSource::Empty
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Get a single transaction by id
    pub fn transaction(&self, id: u64) -> CoreResult<&TransactionRecord> {
        self.store
            .get(id)
            .ok_or_else(|| CoreError::TransactionNotFound { id: id.to_string() })
    }

    /// Transactions in display order for the given sort state
    pub fn sorted_transactions(&self, controller: &SortController) -> Vec<&TransactionRecord> {
        controller.apply(self.store.records())
    }

    /// Presentation rows in display order for the given sort state
    pub fn table_rows(&self, controller: &SortController) -> Vec<RowPresentation> {
        self.sorted_transactions(controller)
            .into_iter()
            .map(|record| RowPresentation::from_record(record, &self.config.currency))
            .collect()
    }
}

/// Sort state as reported to API clients
#[derive(Debug, Clone, Serialize)]
pub struct SortState {
    pub column: Option<SortColumn>,
    pub direction: SortDirection,
}

impl From<&SortController> for SortState {
    fn from(controller: &SortController) -> Self {
        Self {
            column: controller.column(),
            direction: controller.direction(),
        }
    }
}

/// Transactions list response for API
#[derive(Debug, Serialize)]
pub struct TransactionsResponse<'a> {
    pub transactions: Vec<&'a TransactionRecord>,
    pub sort: SortState,
    pub total_count: usize,
}

/// Dashboard summary response for API
#[derive(Debug, Serialize)]
pub struct SummaryResponse<'a> {
    pub status: &'a str,
    pub summary_cards: &'a [SummaryCard],
    pub members: &'a [TeamMember],
    pub extra_members: usize,
    pub total_transactions: usize,
}

impl Ledger {
    /// Build the JSON transactions response for a sort state
    pub fn transactions_response(&self, controller: &SortController) -> TransactionsResponse<'_> {
        TransactionsResponse {
            transactions: self.sorted_transactions(controller),
            sort: SortState::from(controller),
            total_count: self.store.len(),
        }
    }

    /// Build the JSON summary response
    pub fn summary(&self) -> SummaryResponse<'_> {
        SummaryResponse {
            status: &self.dashboard.status,
            summary_cards: &self.dashboard.summary_cards,
            members: &self.dashboard.members,
            extra_members: self.dashboard.extra_members,
            total_transactions: self.store.len(),
        }
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::RwLock;
    use walletledger_parser::DefaultLedgerParser;

    fn ledger() -> Ledger {
        Ledger::new(Config::default(), Arc::new(DefaultLedgerParser))
    }

    fn temp_ledger_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("walletledger-core-{}-{}.txt", name, std::process::id()))
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = ledger();
        assert!(!ledger.is_loaded());
        assert!(ledger.store().is_empty());
        assert_eq!(ledger.dashboard().status, "Active");
    }

    #[test]
    fn test_load_sample_and_lookup() {
        let mut ledger = ledger();
        ledger.load_sample().unwrap();
        assert_eq!(ledger.source(), &LedgerSource::Sample);
        assert_eq!(ledger.transaction(5).unwrap().remark, "Movie Tickets");
        assert!(matches!(
            ledger.transaction(99),
            Err(CoreError::TransactionNotFound { .. })
        ));
    }

    #[test]
    fn test_table_rows_follow_sort_state() {
        let mut ledger = ledger();
        ledger.load_sample().unwrap();

        let controller = SortController::with_state(Some(SortColumn::Amount), SortDirection::Descending);
        let rows = ledger.table_rows(&controller);
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[0].amount_display, "$3,000");
        assert_eq!(rows[1].amount_display, "-$1,200");

        // Store order is untouched
        assert_eq!(ledger.store().records()[0].id, 1);
        assert_eq!(ledger.store().records()[8].id, 9);
    }

    #[test]
    fn test_transactions_response() {
        let mut ledger = ledger();
        ledger.load_sample().unwrap();
        let controller = SortController::new();
        let response = ledger.transactions_response(&controller);
        assert_eq!(response.total_count, 9);
        assert!(response.sort.column.is_none());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["sort"]["direction"], "ascending");
        assert_eq!(json["transactions"][0]["type"], "Credit");
        assert_eq!(json["transactions"][0]["amount"], "3000");
    }

    #[tokio::test]
    async fn test_reload_without_source() {
        let mut ledger = ledger();
        assert!(matches!(ledger.reload().await, Err(CoreError::NotLoaded)));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let mut ledger = ledger();
        let err = ledger.load(PathBuf::from("/nonexistent/ledger.txt")).await.unwrap_err();
        assert!(matches!(err, CoreError::FileNotFound { .. }));
        assert!(!ledger.is_loaded());
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous_store() {
        let path = temp_ledger_path("reload");
        tokio::fs::write(&path, "2023-10-01 credit \"Salary\" 3000 USD\n").await.unwrap();

        let mut ledger = ledger();
        ledger.load(path.clone()).await.unwrap();
        assert_eq!(ledger.store().len(), 1);

        tokio::fs::write(&path, "2023-10-01 credit \"Salary\" -3000 USD\n").await.unwrap();
        let err = ledger.reload().await.unwrap_err();
        assert!(matches!(err, CoreError::InvalidRecord { .. }));
        assert_eq!(ledger.store().len(), 1);
        assert_eq!(ledger.store().records()[0].amount.to_string(), "3000");

        tokio::fs::write(&path, "2023-10-01 credit \"Salary\" 3000 USD\n2023-10-02 debit \"Rent\" -1200 USD\n")
            .await
            .unwrap();
        ledger.reload().await.unwrap();
        assert_eq!(ledger.store().len(), 2);

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[test]
    fn test_missing_file_error_keeps_path() {
        let entry = PathBuf::from("data/ledger.txt");
        let error = load_error(
            &entry,
            ParseError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory")),
        );
        match error {
            CoreError::FileNotFound { path } => assert_eq!(path, "data/ledger.txt"),
            other => panic!("Expected FileNotFound, got {:?}", other),
        }

        let error = load_error(&entry, ParseError::syntax(Some("data/ledger.txt"), 2, "bad line"));
        assert!(matches!(error, CoreError::ParseError { .. }));
    }

    #[tokio::test]
    async fn test_load_missing_file_reports_path() {
        let mut ledger = ledger();
        let err = ledger.load(PathBuf::from("/nonexistent/ledger.txt")).await.unwrap_err();
        assert!(matches!(err, CoreError::FileNotFound { ref path } if path == "/nonexistent/ledger.txt"));
    }

    #[tokio::test]
    async fn test_read_source_while_readers_hold_the_lock() {
        let path = temp_ledger_path("read-source");
        tokio::fs::write(&path, "2023-10-01 credit \"Salary\" 3000 USD\n").await.unwrap();

        let mut initial = ledger();
        initial.load(path.clone()).await.unwrap();
        let shared = Arc::new(RwLock::new(initial));

        tokio::fs::write(&path, "2023-10-01 credit \"Salary\" 3000 USD\n2023-10-06 debit \"Rent\" -1200 USD\n")
            .await
            .unwrap();

        let reader = shared.read().await;
        let loaded = Ledger::read_source(&reader.parser(), reader.source()).await.unwrap();
        assert_eq!(loaded.store.len(), 2);
        assert_eq!(reader.store().len(), 1);
        drop(reader);

        shared.write().await.install(loaded);
        assert_eq!(shared.read().await.store().len(), 2);

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_read_source_without_source() {
        let ledger = ledger();
        let err = Ledger::read_source(&ledger.parser(), ledger.source()).await.unwrap_err();
        assert!(matches!(err, CoreError::NotLoaded));
    }
}
