//! Dashboard page rendering - header, members row, tabs and overview

use walletledger_config::Tab;
use walletledger_core::{Dashboard, Ledger, SortController, SummaryCard, Trend};
use walletledger_utils::escape_html;

use crate::routes::transactions::{render_transactions_table, RowEntrance};

const TREND_UP_SVG: &str = r#"<svg class='h-3 w-3' viewBox='0 0 24 24' fill='none' stroke='currentColor' stroke-width='2'><polyline points='22 7 13.5 15.5 8.5 10.5 2 17'/><polyline points='16 7 22 7 22 13'/></svg>"#;
const TREND_DOWN_SVG: &str = r#"<svg class='h-3 w-3' viewBox='0 0 24 24' fill='none' stroke='currentColor' stroke-width='2'><polyline points='22 17 13.5 8.5 8.5 13.5 2 7'/><polyline points='16 17 22 17 22 11'/></svg>"#;

/// Title row with status badge and Share button
pub fn render_page_header(title: &str, dashboard: &Dashboard) -> String {
    format!(
        r#"<div class='flex items-center gap-3 mb-4'>
    <h1 class='text-2xl font-semibold'>{}</h1>
    <span class='inline-flex items-center gap-2 bg-gray-200 rounded-full px-2 py-1 text-sm'>
        <span class='w-2 h-2 bg-green-500 rounded-full'></span>{}
    </span>
    <div class='flex items-center gap-2 ml-auto'>
        <button class='rounded-full bg-[#4B8B9F] text-white px-4 py-2'>Share</button>
        <button class='rounded-full px-3 py-2 hover:bg-gray-100'>&hellip;</button>
    </div>
</div>"#,
        escape_html(title),
        escape_html(&dashboard.status)
    )
}

/// Overlapping member avatars with the "+N others" caption
pub fn render_members(dashboard: &Dashboard) -> String {
    let avatars: String = dashboard
        .members
        .iter()
        .map(|m| {
            format!(
                r#"<img src='{}' alt='{}' title='{}' class='w-8 h-8 rounded-full border-2 border-white bg-gray-300'>"#,
                escape_html(&m.avatar),
                escape_html(&m.initial()),
                escape_html(&m.name)
            )
        })
        .collect();

    let extra = if dashboard.extra_members > 0 {
        format!(
            r#"<div class='w-8 h-8 bg-gray-200 rounded-full flex items-center justify-center text-xs font-medium border-2 border-white'>+{}</div>"#,
            dashboard.extra_members
        )
    } else {
        String::new()
    };

    format!(
        r#"<div class='flex items-center gap-3'>
    <div class='flex -space-x-2'>{}{}</div>
    <span class='text-sm text-gray-600'>{}</span>
</div>"#,
        avatars,
        extra,
        escape_html(&dashboard.members_caption())
    )
}

fn render_summary_card(card: &SummaryCard, index: usize) -> String {
    let (trend_class, icon) = match card.trend {
        Trend::Up => ("text-green-600", TREND_UP_SVG),
        Trend::Down => ("text-red-600", TREND_DOWN_SVG),
    };
    format!(
        r#"<div class='fade-up bg-[#EAEFF0] rounded-[20px] p-4 hover:-translate-y-0.5 transition-transform' style='animation-delay: {}ms'>
    <div class='flex items-center justify-between pb-2'>
        <p class='text-sm font-medium text-gray-600'>{}</p>
    </div>
    <div class='text-2xl font-bold'>{}</div>
    <div class='text-xs flex items-center gap-1 {}'>{}{}</div>
</div>"#,
        index * 100,
        escape_html(&card.title),
        escape_html(&card.value),
        trend_class,
        icon,
        escape_html(&card.change)
    )
}

/// Overview tab: summary cards followed by the sortable table
pub fn render_overview(ledger: &Ledger, controller: &SortController) -> String {
    let cards: String = ledger
        .dashboard()
        .summary_cards
        .iter()
        .enumerate()
        .map(|(i, card)| render_summary_card(card, i))
        .collect();

    format!(
        r#"<div class='space-y-6'>
    <div>
        <h2 class='text-lg font-semibold mb-4'>Summary</h2>
        <div class='grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4 mb-8'>{}</div>
    </div>
    {}
</div>"#,
        cards,
        render_transactions_table(ledger, controller, RowEntrance::Animate)
    )
}

/// Transactions tab placeholder
pub fn render_transactions_stub() -> String {
    r#"<div class='text-center py-8'><p class='text-gray-500'>Transactions view coming soon...</p></div>"#
        .to_string()
}

/// Tab strip plus the selected tab's content, swapped as one fragment
pub fn render_tabs(ledger: &Ledger, active: Tab) -> String {
    let tabs = [(Tab::Overview, "Overview"), (Tab::Transactions, "Transactions")];

    let triggers: String = tabs
        .iter()
        .map(|(tab, label)| {
            let class = if *tab == active {
                "border-b-2 border-black text-gray-900"
            } else {
                "text-gray-500 hover:text-gray-900"
            };
            format!(
                r#"<button hx-get='/tabs/{}' hx-target='#dashboard-tabs' hx-swap='outerHTML' role='tab' aria-selected='{}' class='px-4 py-2 -mb-0.5 {}'>{}</button>"#,
                tab,
                *tab == active,
                class,
                label
            )
        })
        .collect();

    let content = match active {
        Tab::Overview => render_overview(ledger, &SortController::new()),
        Tab::Transactions => render_transactions_stub(),
    };

    format!(
        r#"<div id='dashboard-tabs' class='mb-6 w-full'>
    <div class='flex items-center w-full border-b-2 border-black/10 mb-6' role='tablist'>{}</div>
    <div id='tab-content'>{}</div>
</div>"#,
        triggers, content
    )
}

/// Full dashboard body for the main content area
pub fn render_dashboard(ledger: &Ledger, active: Tab) -> String {
    let dashboard = ledger.dashboard();
    format!(
        r#"<div class='fade-up'>
    <div class='mb-6'>
        {}
        {}
    </div>
    {}
</div>"#,
        render_page_header(&ledger.config().dashboard.title, dashboard),
        render_members(dashboard),
        render_tabs(ledger, active)
    )
}
