//! Built-in sample ledger, used when no ledger file is available

use walletledger_parser::SimpleLedgerParser;

use crate::error::CoreResult;
use crate::models::Dashboard;
use crate::store::{ingest, LedgerStore};

/// Nine transactions for October 2023 plus the dashboard chrome
pub const SAMPLE_LEDGER: &str = r#"status "Active"

member "Ava" "/placeholder.svg?height=32&width=32"
member "Liam" "/placeholder.svg?height=32&width=32"
member "Noah" "/placeholder.svg?height=32&width=32"
extra_members 12

summary "Total Balance" "$12,345" "+5%" up
summary "Total Credits" "$7,890" "+3%" up
summary "Total Debits" "$4,455" "-2%" down
summary "Transactions" "150" "+10%" up

2023-10-01 credit "Salary" 3000 USD
2023-10-02 debit "Groceries" -150 USD
2023-10-03 debit "Gym Membership" -50 USD
2023-10-04 debit "Dinner" -40 USD
2023-10-05 debit "Movie Tickets" -30 USD
2023-10-06 debit "Rent" -1200 USD
2023-10-07 debit "Utilities" -100 USD
2023-10-08 debit "Car Payment" -400 USD
2023-10-09 debit "Insurance" -200 USD
"#;

/// Parse and validate the built-in sample
pub fn sample_ledger() -> CoreResult<(LedgerStore, Dashboard)> {
    let directives = SimpleLedgerParser::parse_with_source(SAMPLE_LEDGER, Some("<sample>"))?;
    ingest(&directives)
}
