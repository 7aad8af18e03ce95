use crate::domain::entities::query::{SortDirection, PAGE_WINDOW_WIDTH, STATUS_ALL};
use crate::domain::entities::record::{Payout, PayoutField, TableRecord};
use crate::domain::entities::summary::{PayoutSummary, ReferralSummary, WithdrawalSummary};
use crate::domain::entities::withdrawal::{requests_for_tab, WithdrawalTab};
use crate::domain::values::{date_input_value, format_amount};
use crate::ui::theme::ACCENT;
use crate::usecase::services::table_service::TableState;

/// Fixed wording for one table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableCopy {
    pub title: &'static str,
    pub description: &'static str,
    pub search_placeholder: &'static str,
    pub empty_title: &'static str,
}

pub const PAYOUT_COPY: TableCopy = TableCopy {
    title: "Payout History",
    description: "Your complete payout transaction history",
    search_placeholder: "Search by reference, method, amount...",
    empty_title: "No payouts found",
};

pub const REFERRAL_COPY: TableCopy = TableCopy {
    title: "Recent Referrals",
    description: "Your latest referral activity",
    search_placeholder: "Search by name, earnings...",
    empty_title: "No referrals found",
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderCell {
    pub label: &'static str,
    pub indicator: &'static str,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowView {
    /// Position on the current page. Imported ids are not guaranteed unique.
    pub key: usize,
    pub cells: Vec<String>,
}

/// Everything the data table renders, flattened to plain values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableView {
    pub copy: TableCopy,
    pub search_text: String,
    pub status_value: String,
    pub status_options: Vec<SelectOption>,
    pub start_date: String,
    pub end_date: String,
    pub page_size: usize,
    pub headers: Vec<HeaderCell>,
    pub status_column: Option<usize>,
    pub rows: Vec<RowView>,
    pub has_active_filters: bool,
    pub filtered_count: usize,
    pub page: usize,
    pub total_pages: usize,
    pub first_item: usize,
    pub last_item: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub page_window: Vec<usize>,
}

pub fn sort_indicator(active: bool, direction: SortDirection) -> &'static str {
    match (active, direction) {
        (false, _) => "⇅",
        (true, SortDirection::Asc) => "↑",
        (true, SortDirection::Desc) => "↓",
    }
}

pub fn status_options(known: &[&str]) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: STATUS_ALL.to_string(),
        label: "All Status".to_string(),
    })
    .chain(known.iter().map(|status| SelectOption {
        value: status.to_lowercase(),
        label: status.to_string(),
    }))
    .collect()
}

pub fn table_view<R: TableRecord>(state: &TableState<R>, copy: TableCopy) -> TableView {
    let descriptor = state.descriptor();
    let page = state.current_page();
    let columns = R::columns();

    let headers = columns
        .iter()
        .map(|column| {
            let active = column.field == descriptor.sort_field;
            HeaderCell {
                label: column.label,
                indicator: sort_indicator(active, descriptor.sort_direction),
                active,
            }
        })
        .collect();

    let status_column = columns.iter().position(|column| column.field == R::STATUS_FIELD);

    let rows = page
        .items
        .iter()
        .enumerate()
        .map(|(position, record)| RowView {
            key: position,
            cells: columns.iter().map(|column| record.cell(column.field)).collect(),
        })
        .collect();

    TableView {
        copy,
        search_text: descriptor.search_text.clone(),
        status_value: descriptor.status_filter.select_value(),
        status_options: status_options(R::KNOWN_STATUSES),
        start_date: date_input_value(descriptor.date_range.start),
        end_date: date_input_value(descriptor.date_range.end),
        page_size: descriptor.page_size,
        headers,
        status_column,
        rows,
        has_active_filters: descriptor.has_active_filters(),
        filtered_count: page.total_count,
        page: page.page,
        total_pages: page.total_pages,
        first_item: page.first_item_number(),
        last_item: page.last_item_number(),
        has_previous: page.has_previous(),
        has_next: page.has_next(),
        page_window: page.page_window(PAGE_WINDOW_WIDTH),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WithdrawalItem {
    pub key: usize,
    pub title: String,
    pub date: String,
    pub amount: String,
    pub method: String,
    pub status: String,
    pub reference: Option<String>,
}

/// One tab of the withdrawal requests page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WithdrawalListView {
    pub tabs: Vec<(WithdrawalTab, bool)>,
    pub items: Vec<WithdrawalItem>,
    pub empty_message: &'static str,
}

pub fn withdrawal_view(requests: &[Payout], tab: WithdrawalTab) -> WithdrawalListView {
    let items = requests_for_tab(requests, tab)
        .iter()
        .enumerate()
        .map(|(position, request)| WithdrawalItem {
            key: position,
            title: format!("Request #{}", request.id),
            date: request.cell(PayoutField::Date),
            amount: request.cell(PayoutField::Amount),
            method: request.cell(PayoutField::Method),
            status: request.cell(PayoutField::Status),
            // Only settled requests carry a transaction reference.
            reference: (tab == WithdrawalTab::Confirmed && !request.reference.trim().is_empty())
                .then(|| format!("Ref: {}", request.reference.trim())),
        })
        .collect();

    WithdrawalListView {
        tabs: WithdrawalTab::ALL
            .into_iter()
            .map(|candidate| (candidate, candidate == tab))
            .collect(),
        items,
        empty_message: tab.empty_message(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SummaryCard {
    pub label: &'static str,
    pub value: String,
    pub color: &'static str,
}

const GREEN: &str = "#16a34a";
const AMBER: &str = "#d97706";
const RED: &str = "#dc2626";
const GREY: &str = "#6b7280";

pub fn payout_cards(summary: &PayoutSummary) -> Vec<SummaryCard> {
    let transactions: usize = summary.count_by_status.values().sum();
    vec![
        SummaryCard {
            label: "Total Paid",
            value: format_amount(summary.total_paid),
            color: GREEN,
        },
        SummaryCard {
            label: "Pending",
            value: format_amount(summary.pending),
            color: AMBER,
        },
        SummaryCard {
            label: "Failed",
            value: format_amount(summary.failed),
            color: RED,
        },
        SummaryCard {
            label: "Transactions",
            value: transactions.to_string(),
            color: ACCENT,
        },
    ]
}

pub fn withdrawal_cards(summary: &WithdrawalSummary) -> Vec<SummaryCard> {
    vec![
        SummaryCard {
            label: "Unconfirmed",
            value: summary.unconfirmed_count.to_string(),
            color: AMBER,
        },
        SummaryCard {
            label: "Awaiting Payout",
            value: format_amount(summary.unconfirmed_amount),
            color: AMBER,
        },
        SummaryCard {
            label: "Confirmed",
            value: summary.confirmed_count.to_string(),
            color: GREEN,
        },
        SummaryCard {
            label: "Withdrawn",
            value: format_amount(summary.confirmed_amount),
            color: ACCENT,
        },
    ]
}

pub fn referral_cards(summary: &ReferralSummary) -> Vec<SummaryCard> {
    vec![
        SummaryCard {
            label: "Active",
            value: summary.active.to_string(),
            color: GREEN,
        },
        SummaryCard {
            label: "Pending",
            value: summary.pending.to_string(),
            color: AMBER,
        },
        SummaryCard {
            label: "Inactive",
            value: summary.inactive.to_string(),
            color: GREY,
        },
        SummaryCard {
            label: "Total Earnings",
            value: format_amount(summary.total_earnings),
            color: ACCENT,
        },
    ]
}
