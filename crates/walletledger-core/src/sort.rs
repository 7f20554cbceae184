//! Sort controller and the ordering function for the transaction table
//!
//! The controller owns the only mutable UI state of the table: the active
//! column and the direction. It is a plain value; handlers rebuild it from
//! the request, apply the header-click event and pass it to the view.
//!
//! Ordering never touches the store. It returns references into the source
//! slice in display order, sorted with the stable `slice::sort_by`.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::TransactionRecord;
use crate::types::{SortColumn, SortDirection};

/// Active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortController {
    column: Option<SortColumn>,
    direction: SortDirection,
}

impl SortController {
    /// Fresh state: no column, ascending
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(column: Option<SortColumn>, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Rebuild a controller from raw query values.
    ///
    /// Unknown or missing values fall back to the defaults.
    pub fn from_query(column: Option<&str>, direction: Option<&str>) -> Self {
        let column = column
            .filter(|c| !c.is_empty() && *c != "none")
            .and_then(|c| match c.parse::<SortColumn>() {
                Ok(col) => Some(col),
                Err(e) => {
                    log::warn!("Ignoring sort state: {}", e);
                    None
                }
            });
        let direction = direction
            .and_then(|d| d.parse::<SortDirection>().ok())
            .unwrap_or_default();
        Self { column, direction }
    }

    pub fn column(&self) -> Option<SortColumn> {
        self.column
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn is_active(&self, column: SortColumn) -> bool {
        self.column == Some(column)
    }

    /// Header-click event: flip direction on the active column, otherwise
    /// switch to `column` ascending.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        if self.column == Some(column) {
            self.direction = self.direction.flipped();
        } else {
            self.column = Some(column);
            self.direction = SortDirection::Ascending;
        }
        log::debug!(
            "Sort state changed: column={} direction={}",
            column,
            self.direction
        );
    }

    /// Header-click event carrying a raw column identifier.
    ///
    /// An unrecognized identifier leaves the state untouched and returns `false`.
    pub fn toggle_sort_str(&mut self, column: &str) -> bool {
        match column.parse::<SortColumn>() {
            Ok(col) => {
                self.toggle_sort(col);
                true
            }
            Err(e) => {
                log::warn!("Ignoring header click: {}", e);
                false
            }
        }
    }

    /// Derive the display order for `records` under the current state
    pub fn apply<'a>(&self, records: &'a [TransactionRecord]) -> Vec<&'a TransactionRecord> {
        order(records, self.column, self.direction)
    }
}

/// Compare two records by a single column, ascending
pub fn compare_by(column: SortColumn, a: &TransactionRecord, b: &TransactionRecord) -> Ordering {
    match column {
        SortColumn::Date => a.date.cmp(&b.date),
        SortColumn::Remark => a.remark.cmp(&b.remark),
        // Magnitude only; sign is not a tiebreak
        SortColumn::Amount => a.magnitude().cmp(&b.magnitude()),
        SortColumn::Currency => a.currency.cmp(&b.currency),
        SortColumn::Type => a.txn_type.as_str().cmp(b.txn_type.as_str()),
    }
}

/// Produce `records` in display order.
///
/// With no column the input order is returned as is, whatever the direction.
/// Equal keys keep their input order in both directions.
pub fn order(
    records: &[TransactionRecord],
    column: Option<SortColumn>,
    direction: SortDirection,
) -> Vec<&TransactionRecord> {
    let mut ordered: Vec<&TransactionRecord> = records.iter().collect();

    if let Some(column) = column {
        ordered.sort_by(|a, b| match direction {
            SortDirection::Ascending => compare_by(column, a, b),
            SortDirection::Descending => compare_by(column, b, a),
        });
    }

    ordered
}

// ==================== Tests ====================
