//! Row and header presentation for the transaction table

use rust_decimal::Decimal;
use serde::Serialize;
use walletledger_config::CurrencyConfig;
use walletledger_utils::format_number;

use crate::models::TransactionRecord;
use crate::sort::SortController;
use crate::types::{SortColumn, SortDirection, TxnType};

const CREDIT_TEXT: &str = "text-green-600";
const DEBIT_TEXT: &str = "text-red-600";
const CREDIT_DOT: &str = "bg-green-500";
const DEBIT_DOT: &str = "bg-red-500";

/// Everything the table view needs to draw one row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowPresentation {
    /// Row key; stays with the record across re-sorts
    pub id: u64,
    pub date: String,
    pub remark: String,
    /// "$3,000" or "-$1,200"
    pub amount_display: String,
    pub amount_class: &'static str,
    pub currency: String,
    pub type_label: &'static str,
    pub type_class: &'static str,
    pub dot_class: &'static str,
}

impl RowPresentation {
    pub fn from_record(record: &TransactionRecord, currency: &CurrencyConfig) -> Self {
        let credit = record.amount > Decimal::ZERO;
        let (type_class, dot_class) = match record.txn_type {
            TxnType::Credit => (CREDIT_TEXT, CREDIT_DOT),
            TxnType::Debit => (DEBIT_TEXT, DEBIT_DOT),
        };

        Self {
            id: record.id,
            date: record.date.clone(),
            remark: record.remark.clone(),
            amount_display: format_amount(
                &record.amount,
                &currency.symbol,
                &currency.thousands_separator,
            ),
            amount_class: if credit { CREDIT_TEXT } else { DEBIT_TEXT },
            currency: record.currency.clone(),
            type_label: record.txn_type.as_str(),
            type_class,
            dot_class,
        }
    }

    /// Stable DOM id for the row
    pub fn dom_id(&self) -> String {
        format!("txn-row-{}", self.id)
    }
}

/// Format a signed amount as `$1,234.50` / `-$1,234.50`.
///
/// Fractional digits are kept as written in the ledger.
pub fn format_amount(amount: &Decimal, symbol: &str, separator: &str) -> String {
    let magnitude = amount.abs().to_string();
    let glyph = if *amount > Decimal::ZERO {
        symbol.to_string()
    } else {
        format!("-{}", symbol)
    };
    format!("{}{}", glyph, format_number(&magnitude, separator))
}

/// Header cell state for one column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderCell {
    pub column: SortColumn,
    pub label: &'static str,
    pub active: bool,
    /// Direction shown by the caret; only set on the active column
    pub direction: Option<SortDirection>,
}

impl HeaderCell {
    /// Caret is flipped upward for an ascending active column
    pub fn caret_rotated(&self) -> bool {
        self.direction == Some(SortDirection::Ascending)
    }
}

/// Header cells in table order for the given sort state
pub fn header_cells(controller: &SortController) -> Vec<HeaderCell> {
    SortColumn::ALL
        .iter()
        .map(|&column| {
            let active = controller.is_active(column);
            HeaderCell {
                column,
                label: column.label(),
                active,
                direction: active.then(|| controller.direction()),
            }
        })
        .collect()
}
