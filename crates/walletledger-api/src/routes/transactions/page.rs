//! Transaction table rendering - HTML fragments
//!
//! The table is a self-contained fragment (`#transactions-table`). Every
//! header cell re-requests it with the current sort state plus the clicked
//! column, and the idiomorph extension morphs the fragment into place. Rows
//! carry `txn-row-{id}` ids so a re-sort moves the existing `<tr>` nodes.
//! Only the first render plays the row entrance animation.

use walletledger_core::{header_cells, HeaderCell, Ledger, RowPresentation, SortController, SortDirection};
use walletledger_utils::escape_html;

/// Endpoint the header cells post their click events to
pub const TABLE_ENDPOINT: &str = "/transactions/table";

/// Whether the rendered rows play their entrance animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowEntrance {
    /// First render of the table, rows slide in one after another
    Animate,
    /// Re-sorted fragment, rows are morphed without animating
    Static,
}

const CARET_SVG: &str = r#"<svg xmlns='http://www.w3.org/2000/svg' width='24' height='24' viewBox='0 0 24 24' fill='currentColor'><path d='M7 10l5 5 5-5z'/></svg>"#;

/// Query string reproducing `controller`'s state with a toggle on `cell`
fn toggle_query(controller: &SortController, cell: &HeaderCell) -> String {
    let sort = controller.column().map(|c| c.as_str()).unwrap_or("none");
    format!(
        "sort={}&amp;dir={}&amp;toggle={}",
        sort,
        controller.direction().as_str(),
        cell.column.as_str()
    )
}

fn render_header_cell(controller: &SortController, cell: &HeaderCell) -> String {
    let caret_class = match (cell.active, cell.caret_rotated()) {
        (true, true) => "text-gray-900 rotate-180",
        (true, false) => "text-gray-900",
        (false, _) => "text-gray-300",
    };
    let aria_sort = match cell.direction {
        Some(SortDirection::Ascending) => "ascending",
        Some(SortDirection::Descending) => "descending",
        None => "none",
    };

    format!(
        r#"<th class='px-4 py-3 text-left text-sm font-medium text-gray-500' aria-sort='{}'>
    <div hx-get='{}?{}' hx-target='#transactions-table' hx-swap='morph:outerHTML'
         class='h-auto p-0 font-medium flex items-center group cursor-pointer' data-column='{}'>
        {}<span class='inline-block group-hover:ml-1 transition-all duration-300 {}'>{}</span>
    </div>
</th>"#,
        aria_sort,
        TABLE_ENDPOINT,
        toggle_query(controller, cell),
        cell.column.as_str(),
        cell.label,
        caret_class,
        CARET_SVG
    )
}

fn render_row(row: &RowPresentation, index: usize, stagger_ms: u32, entrance: RowEntrance) -> String {
    let (enter_class, style) = match entrance {
        RowEntrance::Animate => (
            " txn-row-enter",
            format!(" style='animation-delay: {}ms'", stagger_ms as usize * index),
        ),
        RowEntrance::Static => ("", String::new()),
    };
    format!(
        r#"<tr id='{}' class='hover:bg-gray-50 transition-colors border-b{}'{}>
    <td class='px-4 py-3'>{}</td>
    <td class='px-4 py-3'>{}</td>
    <td class='px-4 py-3 font-medium {}'>{}</td>
    <td class='px-4 py-3'>{}</td>
    <td class='px-4 py-3'>
        <div class='flex items-center gap-2 bg-gray-200 rounded-full px-2 py-1 w-fit'>
            <div class='w-2 h-2 rounded-full {}'></div>
            <span class='{}'>{}</span>
        </div>
    </td>
</tr>"#,
        row.dom_id(),
        enter_class,
        style,
        escape_html(&row.date),
        escape_html(&row.remark),
        row.amount_class,
        escape_html(&row.amount_display),
        escape_html(&row.currency),
        row.dot_class,
        row.type_class,
        row.type_label
    )
}

/// Render the sortable transaction table for a sort state
pub fn render_transactions_table(ledger: &Ledger, controller: &SortController, entrance: RowEntrance) -> String {
    let stagger_ms = ledger.config().dashboard.row_stagger_ms;

    let headers: String = header_cells(controller)
        .iter()
        .map(|cell| render_header_cell(controller, cell))
        .collect();

    let rows = ledger.table_rows(controller);
    let body = if rows.is_empty() {
        "<tr><td colspan='5' class='px-4 py-8 text-center text-gray-500'>No transactions</td></tr>".to_string()
    } else {
        rows.iter()
            .enumerate()
            .map(|(i, row)| render_row(row, i, stagger_ms, entrance))
            .collect()
    };

    format!(
        r#"<div id='transactions-table' class='overflow-x-auto' data-sort='{}' data-dir='{}'>
    <table class='w-full'>
        <thead><tr class='border-b'>{}</tr></thead>
        <tbody>{}</tbody>
    </table>
</div>"#,
        controller.column().map(|c| c.as_str()).unwrap_or("none"),
        controller.direction().as_str(),
        headers,
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use walletledger_config::Config;
    use walletledger_core::SortColumn;
    use walletledger_parser::DefaultLedgerParser;

    fn sample() -> Ledger {
        let mut ledger = Ledger::new(Config::default(), Arc::new(DefaultLedgerParser));
        ledger.load_sample().unwrap();
        ledger
    }

    #[test]
    fn test_rows_rendered_in_sorted_order() {
        let ledger = sample();
        let controller = SortController::with_state(Some(SortColumn::Amount), SortDirection::Ascending);
        let html = render_transactions_table(&ledger, &controller, RowEntrance::Animate);

        let first = html.find("id='txn-row-5'").unwrap();
        let last = html.find("id='txn-row-1'").unwrap();
        assert!(first < last);
        assert!(html.contains("-$1,200"));
        assert!(html.contains("$3,000"));
        assert!(html.contains("data-sort='amount' data-dir='asc'"));
    }

    #[test]
    fn test_header_links_carry_state_and_toggle() {
        let ledger = sample();
        let controller = SortController::with_state(Some(SortColumn::Date), SortDirection::Descending);
        let html = render_transactions_table(&ledger, &controller, RowEntrance::Animate);

        assert!(html.contains("/transactions/table?sort=date&amp;dir=desc&amp;toggle=remark"));
        assert!(html.contains("/transactions/table?sort=date&amp;dir=desc&amp;toggle=date"));
        assert_eq!(html.matches("aria-sort='descending'").count(), 1);
        assert!(!html.contains("rotate-180"));
    }

    #[test]
    fn test_caret_rotated_only_for_active_ascending() {
        let ledger = sample();
        let controller = SortController::with_state(Some(SortColumn::Type), SortDirection::Ascending);
        let html = render_transactions_table(&ledger, &controller, RowEntrance::Animate);
        assert_eq!(html.matches("rotate-180").count(), 1);

        let html = render_transactions_table(&ledger, &SortController::new(), RowEntrance::Animate);
        assert_eq!(html.matches("rotate-180").count(), 0);
        assert!(html.contains("sort=none&amp;dir=asc&amp;toggle=amount"));
    }

    #[test]
    fn test_row_stagger_delay() {
        let ledger = sample();
        let html = render_transactions_table(&ledger, &SortController::new(), RowEntrance::Animate);
        assert!(html.contains("animation-delay: 0ms"));
        assert!(html.contains("animation-delay: 400ms"));
        assert_eq!(html.matches("txn-row-enter").count(), 9);
    }

    #[test]
    fn test_static_rows_skip_entrance() {
        let ledger = sample();
        let html = render_transactions_table(&ledger, &SortController::new(), RowEntrance::Static);
        assert!(html.contains("<tr id='txn-row-1' class='hover:bg-gray-50 transition-colors border-b'>"));
        assert!(!html.contains("txn-row-enter"));
        assert!(!html.contains("animation-delay"));
        assert_eq!(html.matches("hx-swap='morph:outerHTML'").count(), 5);
    }

    #[test]
    fn test_empty_table() {
        let ledger = Ledger::new(Config::default(), Arc::new(DefaultLedgerParser));
        let html = render_transactions_table(&ledger, &SortController::new(), RowEntrance::Animate);
        assert!(html.contains("No transactions"));
    }
}
