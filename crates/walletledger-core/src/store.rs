//! Ledger store: the validated, immutable sequence of transaction records
//!
//! Records are checked once at ingestion. A ledger that breaks an invariant is
//! rejected as a whole, so the table never renders an inconsistent row.

use std::collections::HashSet;

use walletledger_parser::{Direction, Directive, SpannedDirective, TransactionDirective};

use crate::error::{CoreError, CoreResult};
use crate::models::{Dashboard, SummaryCard, TeamMember, TransactionRecord};
use crate::types::{Trend, TxnType};

/// Immutable ordered collection of transaction records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerStore {
    records: Vec<TransactionRecord>,
}

impl LedgerStore {
    /// Build a store from already-constructed records, enforcing the record invariants
    pub fn new(records: Vec<TransactionRecord>) -> CoreResult<Self> {
        let mut seen = HashSet::new();
        for (index, record) in records.iter().enumerate() {
            let location = format!("record {}", index + 1);
            validate_record(record, &location)?;
            if !seen.insert(record.id) {
                return Err(CoreError::DuplicateEntry {
                    location,
                    entry: format!("transaction id {}", record.id),
                });
            }
        }
        Ok(Self { records })
    }

    /// Records in insertion order
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&TransactionRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}

/// Validate parsed directives into a store plus the dashboard chrome
pub fn ingest(directives: &[SpannedDirective]) -> CoreResult<(LedgerStore, Dashboard)> {
    let mut records: Vec<TransactionRecord> = Vec::new();
    let mut seen = HashSet::new();
    let mut next_id: u64 = 1;
    let mut dashboard = Dashboard::default();

    for directive in directives {
        let location = walletledger_parser::error::location(
            directive.source.as_deref(),
            directive.span.start,
        );

        match &directive.data {
            Directive::Transaction(txn) => {
                let id = match txn.id() {
                    Some(raw) => raw.parse::<u64>().map_err(|_| CoreError::InvalidRecord {
                        location: location.clone(),
                        reason: format!("id '{}' is not a non-negative integer", raw),
                    })?,
                    None => next_id,
                };
                if !seen.insert(id) {
                    return Err(CoreError::DuplicateEntry {
                        location,
                        entry: format!("transaction id {}", id),
                    });
                }
                next_id = next_id.max(id.saturating_add(1));

                let record = convert_transaction(txn, id);
                validate_record(&record, &location)?;
                records.push(record);
            }
            Directive::Summary(card) => dashboard.summary_cards.push(SummaryCard {
                title: card.title.clone(),
                value: card.value.clone(),
                change: card.change.clone(),
                trend: map_trend(card.trend),
            }),
            Directive::Member(member) => dashboard.members.push(TeamMember {
                name: member.name.clone(),
                avatar: member.avatar.clone(),
            }),
            Directive::ExtraMembers(count) => dashboard.extra_members = *count,
            Directive::Status(status) => dashboard.status = status.clone(),
        }
    }

    log::debug!(
        "Ingested {} transactions and {} summary cards",
        records.len(),
        dashboard.summary_cards.len()
    );

    Ok((LedgerStore { records }, dashboard))
}

fn convert_transaction(txn: &TransactionDirective, id: u64) -> TransactionRecord {
    TransactionRecord {
        id,
        date: txn.date.format("%Y-%m-%d").to_string(),
        remark: txn.remark.clone(),
        amount: txn.amount,
        currency: txn.currency.clone(),
        txn_type: match txn.direction {
            Direction::Credit => TxnType::Credit,
            Direction::Debit => TxnType::Debit,
        },
    }
}

fn map_trend(trend: walletledger_parser::Trend) -> Trend {
    match trend {
        walletledger_parser::Trend::Up => Trend::Up,
        walletledger_parser::Trend::Down => Trend::Down,
    }
}

/// Check a single record against the ledger invariants
fn validate_record(record: &TransactionRecord, location: &str) -> CoreResult<()> {
    let invalid = |reason: String| CoreError::InvalidRecord {
        location: location.to_string(),
        reason,
    };

    if record.date_naive().is_none() {
        return Err(invalid(format!(
            "transaction {} has invalid date '{}'",
            record.id, record.date
        )));
    }
    if record.remark.trim().is_empty() {
        return Err(invalid(format!("transaction {} has an empty remark", record.id)));
    }
    if record.currency.len() != 3 || !record.currency.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(invalid(format!(
            "transaction {} has invalid currency '{}', expected three upper-case letters",
            record.id, record.currency
        )));
    }
    if record.amount.is_zero() {
        return Err(invalid(format!(
            "transaction {} has a zero amount, which is neither credit nor debit",
            record.id
        )));
    }
    if !record.is_consistent() {
        return Err(invalid(format!(
            "transaction {} is a {} but its amount is {}",
            record.id,
            record.txn_type.as_str().to_lowercase(),
            record.amount
        )));
    }
    Ok(())
}
