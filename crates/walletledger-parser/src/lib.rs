//! Wallet ledger file parser
//!
//! A lightweight line-based parser using regex. A ledger file holds dated
//! transaction lines plus a few undated directives describing the dashboard
//! chrome (summary cards, team members, status badge).

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

pub mod directives;
pub mod error;
pub mod parser;
pub mod types;

pub use error::ParseError;
pub use parser::SimpleLedgerParser;

pub use directives::{
    Directive, MemberDirective, SpannedDirective, SummaryDirective, TransactionDirective,
};
pub use types::{Direction, Meta, SpanInfo, Trend};

// ==================== Parser Trait ====================

/// Parser reference type
pub type ParserRef = Arc<dyn LedgerParserTrait>;

/// Trait for ledger file parsers
#[async_trait]
pub trait LedgerParserTrait: Send + Sync {
    /// Parse ledger content and return directives
    async fn parse(&self, content: &str) -> Result<Vec<SpannedDirective>, ParseError>;

    /// Parse from a file path
    async fn parse_file(&self, path: PathBuf) -> Result<Vec<SpannedDirective>, ParseError>;
}

/// Default parser implementation
#[derive(Debug, Default)]
pub struct DefaultLedgerParser;

#[async_trait]
impl LedgerParserTrait for DefaultLedgerParser {
    async fn parse(&self, content: &str) -> Result<Vec<SpannedDirective>, ParseError> {
        SimpleLedgerParser::parse(content)
    }

    async fn parse_file(&self, path: PathBuf) -> Result<Vec<SpannedDirective>, ParseError> {
        let content = tokio::fs::read_to_string(&path).await?;
        let source_path = path.to_string_lossy().to_string();
        SimpleLedgerParser::parse_with_source(&content, Some(&source_path))
    }
}
