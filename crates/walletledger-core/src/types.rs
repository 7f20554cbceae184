//! Basic types for the core ledger module

use serde::{Deserialize, Serialize};

/// Transaction type enumeration
///
/// Variant order follows the label order, so `Credit < Debit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TxnType {
    /// Money in, positive amount
    Credit,
    /// Money out, negative amount
    Debit,
}

impl TxnType {
    /// Display label, also used as the sort key for the type column
    pub fn as_str(&self) -> &'static str {
        match self {
            TxnType::Credit => "Credit",
            TxnType::Debit => "Debit",
        }
    }
}

impl std::str::FromStr for TxnType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "credit" => Ok(TxnType::Credit),
            "debit" => Ok(TxnType::Debit),
            _ => Err(format!("Invalid transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TxnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sortable table column
///
/// "No column" is expressed as `Option<SortColumn>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    Date,
    Remark,
    Amount,
    Currency,
    Type,
}

impl SortColumn {
    /// All columns in table order
    pub const ALL: [SortColumn; 5] = [
        SortColumn::Date,
        SortColumn::Remark,
        SortColumn::Amount,
        SortColumn::Currency,
        SortColumn::Type,
    ];

    /// Wire identifier used in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::Date => "date",
            SortColumn::Remark => "remark",
            SortColumn::Amount => "amount",
            SortColumn::Currency => "currency",
            SortColumn::Type => "type",
        }
    }

    /// Column header label
    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Date => "Date",
            SortColumn::Remark => "Remark",
            SortColumn::Amount => "Amount",
            SortColumn::Currency => "Currency",
            SortColumn::Type => "Type",
        }
    }
}

impl std::str::FromStr for SortColumn {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "date" => Ok(SortColumn::Date),
            "remark" => Ok(SortColumn::Remark),
            "amount" => Ok(SortColumn::Amount),
            "currency" => Ok(SortColumn::Currency),
            "type" => Ok(SortColumn::Type),
            _ => Err(format!("Invalid sort column: {}", s)),
        }
    }
}

impl std::fmt::Display for SortColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sort direction enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Short wire identifier (`asc` / `desc`)
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Ascending
    }
}

impl std::str::FromStr for SortDirection {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(format!("Invalid sort direction: {}", s)),
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Trend arrow on a summary card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Up => write!(f, "up"),
            Trend::Down => write!(f, "down"),
        }
    }
}
