//! Ledger file directive types

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Direction, Meta, SpanInfo, Trend};

/// Spanned directive with position info
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpannedDirective {
    pub data: Directive,
    pub span: SpanInfo,
    /// Source file path
    pub source: Option<String>,
}

/// Main directive enum
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Directive {
    Transaction(TransactionDirective),
    Summary(SummaryDirective),
    Member(MemberDirective),
    ExtraMembers(usize),
    Status(String),
}

/// `2023-10-01 credit "Salary" 3000 USD`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionDirective {
    pub date: NaiveDate,
    pub direction: Direction,
    pub remark: String,
    pub amount: Decimal,
    pub currency: String,
    pub meta: Meta,
}

impl TransactionDirective {
    /// Explicit record id from the `id:` metadata line, if present
    pub fn id(&self) -> Option<&str> {
        self.meta.get("id").map(String::as_str)
    }
}

/// `summary "Total Balance" "$12,345" "+5%" up`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryDirective {
    pub title: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
}

/// `member "Ava" "/placeholder.svg"`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDirective {
    pub name: String,
    pub avatar: String,
}
