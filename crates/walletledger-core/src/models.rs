//! Core data models for the ledger

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{Trend, TxnType};

/// A single ledger entry. Immutable once ingested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Stable identity, used as the row key across re-sorts
    pub id: u64,
    /// Transaction date (YYYY-MM-DD format)
    pub date: String,
    /// Free-text label
    pub remark: String,
    /// Signed amount; positive for credits, negative for debits
    pub amount: Decimal,
    /// Three-letter currency code
    pub currency: String,
    /// Credit or debit
    #[serde(rename = "type")]
    pub txn_type: TxnType,
}

impl TransactionRecord {
    /// Get the transaction date as NaiveDate
    pub fn date_naive(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Absolute value of the amount
    pub fn magnitude(&self) -> Decimal {
        self.amount.abs()
    }

    /// Whether the amount sign agrees with the type
    pub fn is_consistent(&self) -> bool {
        match self.txn_type {
            TxnType::Credit => self.amount.is_sign_positive() && !self.amount.is_zero(),
            TxnType::Debit => self.amount.is_sign_negative() && !self.amount.is_zero(),
        }
    }
}

/// Summary metric card shown above the table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryCard {
    pub title: String,
    /// Pre-formatted value, e.g. "$12,345"
    pub value: String,
    /// Pre-formatted change, e.g. "+5%"
    pub change: String,
    pub trend: Trend,
}

/// Team member avatar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub avatar: String,
}

impl TeamMember {
    /// Avatar fallback text: first character of the name
    pub fn initial(&self) -> String {
        self.name.chars().next().map(|c| c.to_string()).unwrap_or_default()
    }
}

/// Static dashboard chrome supplied alongside the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub summary_cards: Vec<SummaryCard>,
    pub members: Vec<TeamMember>,
    /// Count behind the "+N others" bubble
    pub extra_members: usize,
    /// Status badge label
    pub status: String,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            summary_cards: vec![],
            members: vec![],
            extra_members: 0,
            status: "Active".to_string(),
        }
    }
}

impl Dashboard {
    /// "Ava, Liam, Noah +12 others"
    pub fn members_caption(&self) -> String {
        let names: Vec<&str> = self.members.iter().map(|m| m.name.as_str()).collect();
        let mut caption = names.join(", ");
        if self.extra_members > 0 {
            if !caption.is_empty() {
                caption.push(' ');
            }
            caption.push_str(&format!("+{} others", self.extra_members));
        }
        caption
    }
}
