use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::NaiveDate;

use crate::app::load_startup;
use crate::config::AppConfig;
use crate::domain::entities::preferences::{
    Preferences, Theme, FOLLOW_SYSTEM_THEME_KEY, SIDEBAR_COLLAPSED_KEY, THEME_KEY,
};
use crate::domain::entities::query::{DateRange, QueryDescriptor, SortDirection, StatusFilter};
use crate::domain::entities::record::{
    Payout, PayoutField, RecordKind, Referral, ReferralField, TableRecord,
};
use crate::domain::entities::summary::{
    summarize_payouts, summarize_referrals, summarize_withdrawals,
};
use crate::domain::entities::withdrawal::{is_confirmed, requests_for_tab, WithdrawalTab};
use crate::domain::pipeline;
use crate::domain::values::{
    date_input_value, display_date, format_amount, parse_amount, parse_date, parse_date_input,
};
use crate::infra::import::canonical_header;
use crate::infra::import::csv::parse_csv_records;
use crate::infra::import::json::parse_json_records;
use crate::infra::import::xlsx::{excel_serial_to_date, records_from_rows};
use crate::infra::sqlite::queries::{
    load_payouts, load_preferences, load_referrals, load_withdrawals, replace_payouts,
    replace_referrals, replace_withdrawals, save_preferences,
};
use crate::infra::sqlite::repo::SqliteRepo;
use crate::infra::sqlite::schema::init_db;
use crate::ui::theme::{pager_button_style, palette, status_badge_style};
use crate::ui::view_model::{
    payout_cards, referral_cards, sort_indicator, status_options, table_view, withdrawal_cards,
    withdrawal_view, PAYOUT_COPY, REFERRAL_COPY,
};
use crate::usecase::ports::repo::RecordRepository;
use crate::usecase::services::import_service::{ImportFormat, ImportService};
use crate::usecase::services::preference_service::PreferenceService;
use crate::usecase::services::record_service::RecordService;
use crate::usecase::services::table_service::TableState;

fn unique_test_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("affiliate-desk-{prefix}-{nanos}"))
}

fn payout(id: i64, date: &str, amount: &str, method: &str, status: &str) -> Payout {
    Payout {
        id,
        date: date.to_string(),
        amount: amount.to_string(),
        method: method.to_string(),
        status: status.to_string(),
        reference: format!("PAY-{id:04}"),
    }
}

fn referral(id: i64, name: &str, status: &str, join_date: &str, earnings: &str) -> Referral {
    Referral {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        status: status.to_string(),
        join_date: join_date.to_string(),
        earnings: earnings.to_string(),
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Twelve payouts dated 2024-01-01..=12: ids 3, 7 and 11 pending, id 5
/// failed, the rest completed.
fn twelve_payouts() -> Vec<Payout> {
    (1..=12)
        .map(|id| {
            let status = match id {
                3 | 7 | 11 => "Pending",
                5 => "Failed",
                _ => "Completed",
            };
            payout(
                id,
                &format!("2024-01-{id:02}"),
                &format!("₹{},000.00", id),
                if id % 2 == 0 { "UPI" } else { "Bank Transfer" },
                status,
            )
        })
        .collect()
}

fn ids<R: TableRecord>(records: &[R]) -> Vec<i64> {
    records.iter().map(|record| record.id()).collect()
}

/// Two waiting, one failed and two completed requests, out of date order.
fn withdrawal_requests() -> Vec<Payout> {
    vec![
        payout(1, "2024-02-10", "₹2,300.50", "Bank Transfer", "Processing"),
        payout(2, "2024-02-15", "₹1,500.00", "PayPal", "Pending"),
        payout(3, "2024-01-05", "₹3,450.75", "Bank Transfer", "Completed"),
        payout(4, "2024-01-25", "₹1,200.00", "PayPal", " completed "),
        payout(5, "2024-01-30", "₹100.00", "UPI", "Failed"),
    ]
}

#[test]
fn parse_amount_ignores_currency_symbol_and_separators() {
    assert_eq!(parse_amount("₹1,234.56"), Some(1234.56));
    assert_eq!(parse_amount("  ₹15.00 "), Some(15.0));
    assert_eq!(parse_amount("-₹20"), Some(-20.0));
    assert_eq!(parse_amount("1500"), Some(1500.0));
    assert_eq!(parse_amount("₹"), None);
    assert_eq!(parse_amount(""), None);
    assert_eq!(parse_amount("n/a"), None);
}

#[test]
fn parse_amount_drops_rupee_text_prefix() {
    assert_eq!(parse_amount("Rs. 1,200"), Some(1200.0));
    assert_eq!(parse_amount("Rs.1,200.50"), Some(1200.5));
    assert_eq!(parse_amount("INR 1,200"), Some(1200.0));
    assert_eq!(parse_amount("₹.50"), Some(0.5));
    assert_eq!(parse_amount("Rs."), None);
}

#[test]
fn format_amount_groups_thousands_with_two_decimals() {
    assert_eq!(format_amount(1234.56), "₹1,234.56");
    assert_eq!(format_amount(0.0), "₹0.00");
    assert_eq!(format_amount(15.0), "₹15.00");
    assert_eq!(format_amount(1_234_567.8), "₹1,234,567.80");
    assert_eq!(format_amount(-892.35), "-₹892.35");
    assert_eq!(format_amount(f64::NAN), "₹0.00");
}

#[test]
fn parse_date_accepts_common_export_formats() {
    let expected = Some(day(2024, 1, 15));
    assert_eq!(parse_date("2024-01-15"), expected);
    assert_eq!(parse_date("2024-01-15T10:30:00Z"), expected);
    assert_eq!(parse_date("2024-01-15T10:30:00+05:30"), expected);
    assert_eq!(parse_date("2024-01-15 10:30:00"), expected);
    assert_eq!(parse_date("2024-01-15T10:30:00"), expected);
    assert_eq!(parse_date("2024/01/15"), expected);
    assert_eq!(parse_date("15/01/2024"), expected);
    assert_eq!(parse_date("  "), None);
    assert_eq!(parse_date("yesterday"), None);
}

#[test]
fn display_date_formats_parsable_dates_and_keeps_raw_text_otherwise() {
    assert_eq!(display_date("2024-01-15"), "Jan 15, 2024");
    assert_eq!(display_date("2024-03-05T08:00:00Z"), "Mar 5, 2024");
    assert_eq!(display_date("soon"), "soon");
}

#[test]
fn date_inputs_round_trip_through_html_value() {
    assert_eq!(parse_date_input("2024-02-29"), Some(day(2024, 2, 29)));
    assert_eq!(parse_date_input(""), None);
    assert_eq!(parse_date_input("29/02/2024"), None);
    assert_eq!(date_input_value(Some(day(2024, 2, 9))), "2024-02-09");
    assert_eq!(date_input_value(None), "");
}

#[test]
fn amount_sort_is_numeric_not_lexicographic() {
    let records = vec![
        payout(1, "2024-01-01", "₹892.34", "UPI", "Completed"),
        payout(2, "2024-01-02", "₹1,234.56", "UPI", "Completed"),
        payout(3, "2024-01-03", "₹15.00", "UPI", "Completed"),
    ];

    let ascending = pipeline::sort(records.clone(), PayoutField::Amount, SortDirection::Asc);
    let amounts: Vec<&str> = ascending.iter().map(|p| p.amount.as_str()).collect();
    assert_eq!(amounts, vec!["₹15.00", "₹892.34", "₹1,234.56"]);

    let descending = pipeline::sort(records, PayoutField::Amount, SortDirection::Desc);
    assert_eq!(ids(&descending), vec![2, 1, 3]);
}

#[test]
fn date_sort_compares_calendar_days() {
    let records = vec![
        payout(1, "2024-02-01", "₹1.00", "UPI", "Completed"),
        payout(2, "2023-12-31", "₹1.00", "UPI", "Completed"),
        payout(3, "2024-01-15T09:00:00Z", "₹1.00", "UPI", "Completed"),
    ];
    let sorted = pipeline::sort(records, PayoutField::Date, SortDirection::Asc);
    assert_eq!(ids(&sorted), vec![2, 3, 1]);
}

#[test]
fn text_sort_ignores_case() {
    let records = vec![
        referral(1, "charlie", "Active", "2024-01-01", "₹1.00"),
        referral(2, "Alice", "Active", "2024-01-01", "₹1.00"),
        referral(3, "bob", "Active", "2024-01-01", "₹1.00"),
    ];
    let sorted = pipeline::sort(records, ReferralField::Name, SortDirection::Asc);
    assert_eq!(ids(&sorted), vec![2, 3, 1]);
}

#[test]
fn sort_is_stable_for_equal_keys_in_both_directions() {
    let records = vec![
        payout(1, "2024-01-01", "₹1.00", "UPI", "Completed"),
        payout(2, "2024-01-02", "₹1.00", "UPI", "Pending"),
        payout(3, "2024-01-03", "₹1.00", "UPI", "Completed"),
        payout(4, "2024-01-04", "₹1.00", "UPI", "Pending"),
        payout(5, "2024-01-05", "₹1.00", "UPI", "Completed"),
    ];

    let asc = pipeline::sort(records.clone(), PayoutField::Status, SortDirection::Asc);
    assert_eq!(ids(&asc), vec![1, 3, 5, 2, 4]);

    let desc = pipeline::sort(records, PayoutField::Status, SortDirection::Desc);
    assert_eq!(ids(&desc), vec![2, 4, 1, 3, 5]);
}

#[test]
fn missing_amounts_and_dates_sort_last_in_both_directions() {
    let records = vec![
        payout(1, "", "n/a", "UPI", "Completed"),
        payout(2, "2024-01-02", "₹20.00", "UPI", "Completed"),
        payout(3, "2024-01-01", "₹10.00", "UPI", "Completed"),
    ];

    for direction in [SortDirection::Asc, SortDirection::Desc] {
        let by_amount = pipeline::sort(records.clone(), PayoutField::Amount, direction);
        assert_eq!(by_amount.last().map(|p| p.id), Some(1));

        let by_date = pipeline::sort(records.clone(), PayoutField::Date, direction);
        assert_eq!(by_date.last().map(|p| p.id), Some(1));
    }
}

#[test]
fn filter_applies_status_search_and_date_together() {
    let records = twelve_payouts();
    let mut descriptor = QueryDescriptor::new(PayoutField::Date, SortDirection::Asc, 10);
    descriptor.status_filter = StatusFilter::from_select_value("completed");
    descriptor.search_text = "upi".to_string();
    descriptor.date_range = DateRange {
        start: Some(day(2024, 1, 4)),
        end: Some(day(2024, 1, 10)),
    };

    let filtered = pipeline::filter(&records, &descriptor);
    assert_eq!(ids(&filtered), vec![4, 6, 8, 10]);
    assert_eq!(pipeline::filtered_count(&records, &descriptor), 4);

    for record in &filtered {
        assert_eq!(record.status, "Completed");
        assert_eq!(record.method, "UPI");
    }
}

#[test]
fn search_matches_reference_and_amount_but_not_status() {
    let records = twelve_payouts();
    let mut descriptor = QueryDescriptor::new(PayoutField::Date, SortDirection::Asc, 10);

    descriptor.search_text = "pay-0007".to_string();
    assert_eq!(ids(&pipeline::filter(&records, &descriptor)), vec![7]);

    descriptor.search_text = "₹12,000".to_string();
    assert_eq!(ids(&pipeline::filter(&records, &descriptor)), vec![12]);

    descriptor.search_text = "pending".to_string();
    assert!(pipeline::filter(&records, &descriptor).is_empty());
}

#[test]
fn referral_search_covers_name_and_earnings_only() {
    let records = vec![
        referral(1, "Priya Sharma", "Active", "2024-01-10", "₹1,250.00"),
        referral(2, "Rahul Verma", "Pending", "2024-01-12", "₹0.00"),
    ];
    let mut descriptor = QueryDescriptor::new(ReferralField::JoinDate, SortDirection::Desc, 10);

    descriptor.search_text = "PRIYA".to_string();
    assert_eq!(ids(&pipeline::filter(&records, &descriptor)), vec![1]);

    descriptor.search_text = "1,250".to_string();
    assert_eq!(ids(&pipeline::filter(&records, &descriptor)), vec![1]);

    descriptor.search_text = "example.com".to_string();
    assert!(pipeline::filter(&records, &descriptor).is_empty());
}

#[test]
fn whitespace_search_is_treated_as_empty() {
    let records = twelve_payouts();
    let mut descriptor = QueryDescriptor::new(PayoutField::Date, SortDirection::Asc, 10);
    descriptor.search_text = "   ".to_string();
    assert_eq!(pipeline::filtered_count(&records, &descriptor), 12);
    assert!(!descriptor.has_active_filters());
}

#[test]
fn status_filter_ignores_case_and_padding() {
    let filter = StatusFilter::from_select_value(" Pending ");
    assert!(filter.matches("pending"));
    assert!(filter.matches("  PENDING"));
    assert!(!filter.matches("Completed"));

    assert_eq!(StatusFilter::from_select_value("all"), StatusFilter::All);
    assert_eq!(StatusFilter::from_select_value("ALL"), StatusFilter::All);
    assert_eq!(StatusFilter::from_select_value(""), StatusFilter::All);
    assert!(StatusFilter::All.matches("anything"));
}

#[test]
fn date_range_is_inclusive_and_rejects_missing_dates_when_bounded() {
    let range = DateRange {
        start: Some(day(2024, 1, 3)),
        end: Some(day(2024, 1, 5)),
    };
    assert!(range.contains(Some(day(2024, 1, 3))));
    assert!(range.contains(Some(day(2024, 1, 5))));
    assert!(!range.contains(Some(day(2024, 1, 6))));
    assert!(!range.contains(None));

    let open_start = DateRange {
        start: None,
        end: Some(day(2024, 1, 5)),
    };
    assert!(open_start.contains(Some(day(1999, 1, 1))));
    assert!(!open_start.contains(None));

    assert!(DateRange::default().contains(None));
}

#[test]
fn unparsable_dates_pass_only_without_date_bounds() {
    let records = vec![
        payout(1, "unknown", "₹1.00", "UPI", "Completed"),
        payout(2, "2024-01-02", "₹1.00", "UPI", "Completed"),
    ];
    let mut descriptor = QueryDescriptor::new(PayoutField::Date, SortDirection::Asc, 10);
    assert_eq!(pipeline::filtered_count(&records, &descriptor), 2);

    descriptor.date_range.start = Some(day(2024, 1, 1));
    assert_eq!(ids(&pipeline::filter(&records, &descriptor)), vec![2]);
}

#[test]
fn paginate_empty_input_reports_one_page() {
    let page = pipeline::paginate::<Payout>(&[], 1, 10);
    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.total_count, 0);
    assert_eq!(page.first_item_number(), 0);
    assert_eq!(page.last_item_number(), 0);
    assert!(!page.has_previous());
    assert!(!page.has_next());
}

#[test]
fn paginate_returns_partial_last_page() {
    let records: Vec<Payout> = (1..=25)
        .map(|id| payout(id, "2024-01-01", "₹1.00", "UPI", "Completed"))
        .collect();

    let page = pipeline::paginate(&records, 3, 10);
    assert_eq!(ids(&page.items), (21..=25).collect::<Vec<_>>());
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.first_item_number(), 21);
    assert_eq!(page.last_item_number(), 25);
    assert!(page.has_previous());
    assert!(!page.has_next());

    let past_end = pipeline::paginate(&records, 9, 10);
    assert!(past_end.items.is_empty());
    assert_eq!(past_end.total_pages, 3);
}

#[test]
fn page_window_stays_inside_page_range() {
    let records: Vec<Payout> = (1..=100)
        .map(|id| payout(id, "2024-01-01", "₹1.00", "UPI", "Completed"))
        .collect();

    let window = |page: usize| pipeline::paginate(&records, page, 10).page_window(5);
    assert_eq!(window(1), vec![1, 2, 3, 4, 5]);
    assert_eq!(window(5), vec![3, 4, 5, 6, 7]);
    assert_eq!(window(10), vec![6, 7, 8, 9, 10]);

    let short = pipeline::paginate(&records[..15], 2, 10);
    assert_eq!(short.page_window(5), vec![1, 2]);
}

#[test]
fn pipeline_is_idempotent() {
    let records = twelve_payouts();
    let mut descriptor = QueryDescriptor::new(PayoutField::Amount, SortDirection::Desc, 5);
    descriptor.status_filter = StatusFilter::from_select_value("completed");
    descriptor.page = 2;

    let first = pipeline::run(&records, &descriptor);
    let second = pipeline::run(&records, &descriptor);
    assert_eq!(first, second);
    assert_eq!(ids(&first.items), vec![4, 2, 1]);
}

#[test]
fn table_state_starts_on_default_sort_and_first_page() {
    let state = TableState::new(twelve_payouts(), 10);
    let descriptor = state.descriptor();
    assert_eq!(descriptor.sort_field, PayoutField::Date);
    assert_eq!(descriptor.sort_direction, SortDirection::Desc);
    assert_eq!(descriptor.page, 1);
    assert_eq!(state.total_pages(), 2);
    assert_eq!(ids(&state.current_page().items)[..3], [12, 11, 10]);

    let referrals = TableState::new(
        vec![
            referral(1, "Asha", "Active", "2024-01-01", "₹1.00"),
            referral(2, "Dev", "Active", "2024-03-01", "₹1.00"),
        ],
        10,
    );
    assert_eq!(referrals.descriptor().sort_field, ReferralField::JoinDate);
    assert_eq!(ids(&referrals.current_page().items), vec![2, 1]);
}

#[test]
fn set_page_clamps_to_valid_range() {
    let mut state = TableState::new(twelve_payouts(), 5);
    state.set_page(99);
    assert_eq!(state.descriptor().page, 3);
    state.set_page(0);
    assert_eq!(state.descriptor().page, 1);
    state.set_page(2);
    assert_eq!(state.descriptor().page, 2);
}

#[test]
fn narrowing_filters_resets_out_of_range_page() {
    let mut state = TableState::new(twelve_payouts(), 5);
    state.set_page(3);
    assert_eq!(state.descriptor().page, 3);

    state.set_status_filter(StatusFilter::from_select_value("pending"));
    assert_eq!(state.filtered_count(), 3);
    assert_eq!(state.descriptor().page, 1);
    assert_eq!(state.current_page().items.len(), 3);
}

#[test]
fn narrowing_twenty_five_rows_to_five_returns_to_first_page() {
    let records: Vec<Payout> = (1..=25)
        .map(|id| {
            let status = if id <= 5 { "Failed" } else { "Completed" };
            payout(id, "2024-01-01", "₹1.00", "UPI", status)
        })
        .collect();
    let mut state = TableState::new(records.clone(), 10);
    state.set_page(3);
    assert_eq!(state.current_page().items.len(), 5);

    state.set_status_filter(StatusFilter::from_select_value("failed"));
    assert_eq!(state.descriptor().page, 1);
    assert_eq!(ids(&state.current_page().items), vec![1, 2, 3, 4, 5]);

    state.clear_filters();
    let everything = pipeline::filter(state.records(), state.descriptor());
    assert_eq!(everything, records);
}

#[test]
fn page_that_remains_valid_is_kept() {
    let mut state = TableState::new(twelve_payouts(), 5);
    state.set_page(2);
    state.set_search_text("bank");
    assert_eq!(state.filtered_count(), 6);
    assert_eq!(state.descriptor().page, 2);
}

#[test]
fn growing_page_size_resets_page() {
    let mut state = TableState::new(twelve_payouts(), 5);
    state.set_page(3);
    state.set_page_size(25);
    assert_eq!(state.descriptor().page, 1);
    assert_eq!(state.total_pages(), 1);

    state.set_page_size(0);
    assert_eq!(state.descriptor().page_size, 1);
    assert_eq!(state.total_pages(), 12);
}

#[test]
fn toggle_sort_flips_active_column_and_starts_new_column_ascending() {
    let mut state = TableState::new(twelve_payouts(), 10);
    state.toggle_sort(PayoutField::Date);
    assert_eq!(state.descriptor().sort_direction, SortDirection::Asc);
    state.toggle_sort(PayoutField::Date);
    assert_eq!(state.descriptor().sort_direction, SortDirection::Desc);

    state.toggle_sort(PayoutField::Amount);
    assert_eq!(state.descriptor().sort_field, PayoutField::Amount);
    assert_eq!(state.descriptor().sort_direction, SortDirection::Asc);
}

#[test]
fn clear_filters_keeps_sort_and_page_size() {
    let mut state = TableState::new(twelve_payouts(), 5);
    state.set_sort(PayoutField::Amount, SortDirection::Asc);
    state.set_search_text("upi");
    state.set_status_filter(StatusFilter::from_select_value("completed"));
    state.set_date_start(Some(day(2024, 1, 2)));
    state.set_page(2);
    assert!(state.descriptor().has_active_filters());

    state.clear_filters();
    let descriptor = state.descriptor();
    assert!(!descriptor.has_active_filters());
    assert_eq!(descriptor.search_text, "");
    assert_eq!(descriptor.status_filter, StatusFilter::All);
    assert_eq!(descriptor.date_range, DateRange::default());
    assert_eq!(descriptor.page, 1);
    assert_eq!(descriptor.page_size, 5);
    assert_eq!(descriptor.sort_field, PayoutField::Amount);
    assert_eq!(state.filtered_count(), 12);
}

#[test]
fn pending_payouts_paged_two_at_a_time() {
    let mut state = TableState::new(twelve_payouts(), 10);
    state.set_status_filter(StatusFilter::from_select_value("pending"));
    state.set_sort(PayoutField::Date, SortDirection::Asc);
    state.set_page_size(2);
    state.set_page(2);

    let page = state.current_page();
    assert_eq!(page.total_count, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(ids(&page.items), vec![11]);
    assert_eq!(page.first_item_number(), 3);
    assert_eq!(page.last_item_number(), 3);

    state.set_date_end(Some(day(2024, 1, 8)));
    assert_eq!(state.descriptor().page, 1);
    assert_eq!(ids(&state.current_page().items), vec![3, 7]);
}

#[test]
fn replacing_records_keeps_query_and_reconciles_page() {
    let mut state = TableState::new(twelve_payouts(), 5);
    state.set_page(3);
    state.replace_records(twelve_payouts().into_iter().take(4).collect());
    assert_eq!(state.descriptor().page, 1);
    assert_eq!(state.records().len(), 4);
}

#[test]
fn payout_summary_totals_by_status() {
    let summary = summarize_payouts(&[
        payout(1, "2024-01-01", "₹1,000.00", "UPI", "Completed"),
        payout(2, "2024-01-02", "₹250.50", "UPI", "Pending"),
        payout(3, "2024-01-03", "₹100.00", "UPI", "processing"),
        payout(4, "2024-01-04", "₹75.00", "UPI", "Failed"),
        payout(5, "2024-01-05", "n/a", "UPI", "Completed"),
    ]);
    assert_eq!(summary.total_paid, 1000.0);
    assert_eq!(summary.pending, 350.5);
    assert_eq!(summary.failed, 75.0);
    assert_eq!(summary.count_by_status.get("completed"), Some(&2));
    assert_eq!(summary.count_by_status.get("processing"), Some(&1));

    let cards = payout_cards(&summary);
    let values: Vec<&str> = cards.iter().map(|card| card.value.as_str()).collect();
    assert_eq!(values, vec!["₹1,000.00", "₹350.50", "₹75.00", "5"]);
}

#[test]
fn referral_summary_counts_statuses_and_sums_earnings() {
    let summary = summarize_referrals(&[
        referral(1, "Asha", "Active", "2024-01-01", "₹500.00"),
        referral(2, "Dev", "Pending", "2024-01-02", "₹0.00"),
        referral(3, "Ira", "inactive", "2024-01-03", "₹120.25"),
        referral(4, "Kiran", "Active", "2024-01-04", "₹1,000.00"),
    ]);
    assert_eq!(summary.active, 2);
    assert_eq!(summary.pending, 1);
    assert_eq!(summary.inactive, 1);
    assert_eq!(summary.total_earnings, 1620.25);

    let cards = referral_cards(&summary);
    assert_eq!(cards[3].value, "₹1,620.25");
}

#[test]
fn withdrawal_tabs_split_on_completion_newest_first() {
    let requests = withdrawal_requests();
    assert_eq!(
        ids(&requests_for_tab(&requests, WithdrawalTab::Unconfirmed)),
        vec![2, 1, 5]
    );
    assert_eq!(
        ids(&requests_for_tab(&requests, WithdrawalTab::Confirmed)),
        vec![4, 3]
    );
    assert_eq!(WithdrawalTab::default(), WithdrawalTab::Unconfirmed);
    assert!(is_confirmed(" COMPLETED"));
    assert!(!is_confirmed("Processing"));
    assert!(requests_for_tab(&[], WithdrawalTab::Confirmed).is_empty());
}

#[test]
fn withdrawal_summary_totals_each_tab() {
    let summary = summarize_withdrawals(&withdrawal_requests());
    assert_eq!(summary.unconfirmed_count, 3);
    assert_eq!(summary.unconfirmed_amount, 3900.5);
    assert_eq!(summary.confirmed_count, 2);
    assert_eq!(summary.confirmed_amount, 4650.75);

    let cards = withdrawal_cards(&summary);
    assert_eq!(cards[0].value, "3");
    assert_eq!(cards[1].value, "₹3,900.50");
    assert_eq!(cards[3].value, "₹4,650.75");
}

#[test]
fn preferences_default_to_light_and_expanded_sidebar() {
    let prefs = Preferences::resolve(&BTreeMap::new(), Theme::Dark);
    assert_eq!(prefs.theme, Theme::Light);
    assert!(!prefs.follow_system_theme);
    assert!(!prefs.sidebar_collapsed);
}

#[test]
fn preferences_follow_system_theme_over_saved_theme() {
    let stored = BTreeMap::from([
        (THEME_KEY.to_string(), "light".to_string()),
        (FOLLOW_SYSTEM_THEME_KEY.to_string(), "true".to_string()),
        (SIDEBAR_COLLAPSED_KEY.to_string(), "true".to_string()),
    ]);
    let prefs = Preferences::resolve(&stored, Theme::Dark);
    assert_eq!(prefs.theme, Theme::Dark);
    assert!(prefs.sidebar_collapsed);
}

#[test]
fn preferences_ignore_unreadable_values() {
    let stored = BTreeMap::from([
        (THEME_KEY.to_string(), "purple".to_string()),
        (SIDEBAR_COLLAPSED_KEY.to_string(), "yes".to_string()),
    ]);
    let prefs = Preferences::resolve(&stored, Theme::Dark);
    assert_eq!(prefs.theme, Theme::Light);
    assert!(!prefs.sidebar_collapsed);
}

#[test]
fn preferences_round_trip_through_entries() {
    let prefs = Preferences {
        theme: Theme::Dark,
        follow_system_theme: false,
        sidebar_collapsed: true,
    };
    let entries = prefs.to_entries();
    assert_eq!(entries.get(THEME_KEY).map(String::as_str), Some("dark"));
    assert_eq!(Preferences::resolve(&entries, Theme::Light), prefs);
}

#[test]
fn init_db_creates_required_tables() {
    let temp_dir = unique_test_dir("init-db");
    let db_path = temp_dir.join("records.sqlite");
    init_db(&db_path).expect("init db should succeed");

    let conn = rusqlite::Connection::open(&db_path).expect("should open db");
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .expect("should prepare");
    let tables: Vec<String> = stmt
        .query_map([], |row| row.get(0))
        .expect("should query")
        .collect::<rusqlite::Result<_>>()
        .expect("should collect");
    assert_eq!(
        tables,
        vec!["payout", "preference", "referral", "withdrawal_request"]
    );

    init_db(&db_path).expect("init db should be repeatable");
    let _ = fs::remove_dir_all(temp_dir);
}

#[test]
fn replace_payouts_preserves_order_and_replaces_previous_rows() {
    let temp_dir = unique_test_dir("payouts");
    let db_path = temp_dir.join("records.sqlite");
    init_db(&db_path).expect("init db should succeed");

    let first = twelve_payouts();
    assert_eq!(replace_payouts(&db_path, &first).expect("insert"), 12);
    assert_eq!(load_payouts(&db_path).expect("load"), first);

    let second = vec![
        payout(40, "2024-02-02", "₹2.00", "UPI", "Pending"),
        payout(30, "2024-02-01", "₹1.00", "UPI", "Completed"),
    ];
    replace_payouts(&db_path, &second).expect("replace");
    assert_eq!(load_payouts(&db_path).expect("load"), second);

    let _ = fs::remove_dir_all(temp_dir);
}

#[test]
fn withdrawal_rows_live_in_their_own_table() {
    let temp_dir = unique_test_dir("withdrawals");
    let db_path = temp_dir.join("records.sqlite");
    init_db(&db_path).expect("init db should succeed");

    replace_payouts(&db_path, &twelve_payouts()).expect("insert payouts");
    assert_eq!(replace_withdrawals(&db_path, &withdrawal_requests()).expect("insert"), 5);
    assert_eq!(load_withdrawals(&db_path).expect("load"), withdrawal_requests());

    replace_withdrawals(&db_path, &[]).expect("clear");
    assert!(load_withdrawals(&db_path).expect("load").is_empty());
    assert_eq!(load_payouts(&db_path).expect("load").len(), 12);

    let _ = fs::remove_dir_all(temp_dir);
}

#[test]
fn replace_referrals_round_trips_all_fields() {
    let temp_dir = unique_test_dir("referrals");
    let db_path = temp_dir.join("records.sqlite");
    init_db(&db_path).expect("init db should succeed");

    let referrals = vec![
        referral(1, "Priya Sharma", "Active", "2024-01-10", "₹1,250.00"),
        referral(2, "Rahul Verma", "Pending", "", ""),
    ];
    replace_referrals(&db_path, &referrals).expect("insert");
    assert_eq!(load_referrals(&db_path).expect("load"), referrals);

    let _ = fs::remove_dir_all(temp_dir);
}

#[test]
fn saved_preferences_overwrite_earlier_values() {
    let temp_dir = unique_test_dir("prefs");
    let db_path = temp_dir.join("records.sqlite");
    init_db(&db_path).expect("init db should succeed");

    save_preferences(
        &db_path,
        &BTreeMap::from([(THEME_KEY.to_string(), "light".to_string())]),
    )
    .expect("save");
    save_preferences(
        &db_path,
        &BTreeMap::from([(THEME_KEY.to_string(), "dark".to_string())]),
    )
    .expect("save again");

    let stored = load_preferences(&db_path).expect("load");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored.get(THEME_KEY).map(String::as_str), Some("dark"));

    let _ = fs::remove_dir_all(temp_dir);
}

#[test]
fn preference_service_persists_changes_across_instances() {
    let temp_dir = unique_test_dir("pref-service");
    let repo: Arc<dyn RecordRepository> =
        Arc::new(SqliteRepo::new(temp_dir.join("records.sqlite")));
    repo.init().expect("init should succeed");

    let service = PreferenceService::new(repo.clone(), Theme::Dark);
    let mut prefs = service.init();
    assert_eq!(prefs.theme, Theme::Light);

    service.toggle_theme(&mut prefs).expect("toggle theme");
    service.toggle_sidebar(&mut prefs).expect("toggle sidebar");
    assert_eq!(prefs.theme, Theme::Dark);

    let reopened = PreferenceService::new(repo.clone(), Theme::Light).init();
    assert_eq!(reopened.theme, Theme::Dark);
    assert!(reopened.sidebar_collapsed);
    assert!(!reopened.follow_system_theme);

    service
        .set_follow_system_theme(&mut prefs, true)
        .expect("follow system");
    assert_eq!(prefs.theme, Theme::Dark);
    let following = PreferenceService::new(repo.clone(), Theme::Light).init();
    assert_eq!(following.theme, Theme::Light);

    service.set_theme(&mut prefs, Theme::Light).expect("set theme");
    assert!(!prefs.follow_system_theme);

    let _ = fs::remove_dir_all(temp_dir);
}

#[test]
fn preference_service_falls_back_to_defaults_without_store() {
    let temp_dir = unique_test_dir("pref-missing");
    let repo: Arc<dyn RecordRepository> =
        Arc::new(SqliteRepo::new(temp_dir.join("missing").join("records.sqlite")));
    let prefs = PreferenceService::new(repo, Theme::Dark).init();
    assert_eq!(prefs, Preferences::resolve(&BTreeMap::new(), Theme::Dark));
}

#[test]
fn canonical_header_matches_known_fields_loosely() {
    let known = ["id", "name", "joinDate"];
    assert_eq!(canonical_header("Join Date", &known), "joinDate");
    assert_eq!(canonical_header("join_date", &known), "joinDate");
    assert_eq!(canonical_header(" ID ", &known), "id");
    assert_eq!(canonical_header("Notes", &known), "Notes");
}

#[test]
fn csv_payouts_accept_display_headers_and_numeric_cells() {
    let input = "ID,Date,Amount,Method,Status,Reference\n\
                 1,2024-01-15,\"₹1,234.56\",UPI,Completed,PAY-1\n\
                 2,2024-01-16,1500,Bank Transfer,Pending,PAY-2\n";
    let payouts: Vec<Payout> = parse_csv_records(input.as_bytes()).expect("csv should parse");
    assert_eq!(payouts.len(), 2);
    assert_eq!(payouts[0].amount, "₹1,234.56");
    assert_eq!(payouts[1].amount, "1500");
    assert_eq!(payouts[1].method, "Bank Transfer");
}

#[test]
fn csv_keeps_numeric_looking_text_exactly_as_written() {
    let input = "id,date,amount,method,status,reference\n\
                 1,2024-01-15,1200.50,NaN,Completed,007123\n\
                 2,2024-01-16,₹5.00,UPI,Pending,123456789012345678901234\n";
    let payouts: Vec<Payout> = parse_csv_records(input.as_bytes()).expect("csv should parse");
    assert_eq!(payouts[0].amount, "1200.50");
    assert_eq!(payouts[0].method, "NaN");
    assert_eq!(payouts[0].reference, "007123");
    assert_eq!(payouts[1].reference, "123456789012345678901234");

    let mut descriptor = QueryDescriptor::new(PayoutField::Date, SortDirection::Asc, 10);
    descriptor.search_text = "007".to_string();
    assert_eq!(ids(&pipeline::filter(&payouts, &descriptor)), vec![1]);
}

#[test]
fn csv_referrals_read_join_date_and_tolerate_missing_columns() {
    let input = "id,name,email,status,Join Date\n7,Asha,asha@example.com,Active,2024-02-01\n";
    let referrals: Vec<Referral> = parse_csv_records(input.as_bytes()).expect("csv should parse");
    assert_eq!(referrals[0].id, 7);
    assert_eq!(referrals[0].join_date, "2024-02-01");
    assert_eq!(referrals[0].earnings, "");
}

#[test]
fn csv_with_bad_id_reports_row() {
    let input = "id,date,amount,method,status,reference\nabc,2024-01-15,₹1,UPI,Completed,R\n";
    let err = parse_csv_records::<Payout, _>(input.as_bytes()).expect_err("id must be numeric");
    assert!(format!("{err:#}").contains("row 2"));
}

#[test]
fn json_accepts_array_and_data_envelope() {
    let array = r#"[{"id": "3", "date": "2024-01-15", "amount": 99.5, "method": "UPI", "status": "Completed", "reference": "R-3"}]"#;
    let payouts: Vec<Payout> = parse_json_records(array).expect("array should parse");
    assert_eq!(payouts[0].id, 3);
    assert_eq!(payouts[0].amount, "99.5");

    let envelope = r#"{"data": [{"id": 1, "name": "Asha", "email": "a@example.com", "status": "Active", "joinDate": "2024-01-01", "earnings": "₹10.00"}]}"#;
    let referrals: Vec<Referral> = parse_json_records(envelope).expect("envelope should parse");
    assert_eq!(referrals[0].join_date, "2024-01-01");

    assert!(parse_json_records::<Payout>(r#"{"items": []}"#).is_err());
    assert!(parse_json_records::<Payout>("not json").is_err());
}

#[test]
fn sheet_rows_skip_blank_leading_rows() {
    let rows = vec![
        vec![String::new(), String::new()],
        vec!["Id".to_string(), "Date".to_string(), "Amount".to_string(), "Status".to_string()],
        vec!["5".to_string(), "2024-03-01".to_string(), "₹5.00".to_string(), "Failed".to_string()],
    ];
    let payouts: Vec<Payout> = records_from_rows(&rows).expect("rows should parse");
    assert_eq!(payouts.len(), 1);
    assert_eq!(payouts[0].id, 5);
    assert_eq!(payouts[0].status, "Failed");
    assert_eq!(payouts[0].reference, "");

    assert!(records_from_rows::<Payout>(&[]).is_err());
}

#[test]
fn excel_serial_dates_become_calendar_days() {
    assert_eq!(excel_serial_to_date(45306.0).as_deref(), Some("2024-01-15"));
    assert_eq!(excel_serial_to_date(45306.75).as_deref(), Some("2024-01-15"));
    assert_eq!(excel_serial_to_date(0.0).as_deref(), Some("1899-12-30"));
    assert_eq!(excel_serial_to_date(-1.0), None);
    assert_eq!(excel_serial_to_date(f64::NAN), None);
}

#[test]
fn import_format_follows_extension() {
    assert_eq!(ImportFormat::from_path("a/b.CSV".as_ref()), Some(ImportFormat::Csv));
    assert_eq!(ImportFormat::from_path("book.xlsx".as_ref()), Some(ImportFormat::Xlsx));
    assert_eq!(ImportFormat::from_path("dump.json".as_ref()), Some(ImportFormat::Json));
    assert_eq!(ImportFormat::from_path("notes.txt".as_ref()), None);
    assert_eq!(ImportFormat::from_path("no_extension".as_ref()), None);
}

#[test]
fn import_service_replaces_stored_records_of_one_kind() {
    let temp_dir = unique_test_dir("import");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let repo: Arc<dyn RecordRepository> =
        Arc::new(SqliteRepo::new(temp_dir.join("records.sqlite")));
    let records = RecordService::new(repo.clone());
    records.init().expect("init should succeed");

    let csv_path = temp_dir.join("payouts.csv");
    fs::write(
        &csv_path,
        "id,date,amount,method,status,reference\n\
         1,2024-01-15,₹10.00,UPI,Completed,R-1\n\
         2,2024-01-16,₹20.00,UPI,Pending,R-2\n",
    )
    .expect("should write csv");

    let importer = ImportService::new(repo.clone());
    let result = importer
        .import_file(RecordKind::Payouts, &csv_path)
        .expect("import should succeed");
    assert_eq!(result.row_count, 2);
    assert_eq!(result.format, ImportFormat::Csv);
    assert_eq!(ids(&records.load_payouts().expect("load")), vec![1, 2]);
    assert!(records.load_referrals().expect("load").is_empty());

    let txt_path = temp_dir.join("payouts.txt");
    fs::write(&txt_path, "id\n1\n").expect("should write txt");
    assert!(importer.import_file(RecordKind::Payouts, &txt_path).is_err());
    assert_eq!(records.load_payouts().expect("load").len(), 2);

    let _ = fs::remove_dir_all(temp_dir);
}

#[test]
fn import_service_keeps_withdrawal_requests_apart_from_payouts() {
    let temp_dir = unique_test_dir("import-withdrawals");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let repo: Arc<dyn RecordRepository> =
        Arc::new(SqliteRepo::new(temp_dir.join("records.sqlite")));
    let records = RecordService::new(repo.clone());
    records.init().expect("init should succeed");

    let json_path = temp_dir.join("withdrawals.json");
    fs::write(
        &json_path,
        r#"{"data": [{"id": 9, "date": "2024-02-15", "amount": "₹1,500.00", "method": "PayPal", "status": "Pending"}]}"#,
    )
    .expect("should write json");

    let result = ImportService::new(repo)
        .import_file(RecordKind::Withdrawals, &json_path)
        .expect("import should succeed");
    assert_eq!(result.row_count, 1);
    assert_eq!(result.format, ImportFormat::Json);

    let stored = records.load_withdrawals().expect("load");
    assert_eq!(ids(&stored), vec![9]);
    assert_eq!(stored[0].reference, "");
    assert!(records.load_payouts().expect("load").is_empty());

    let _ = fs::remove_dir_all(temp_dir);
}

#[test]
fn startup_applies_saved_preferences_when_records_fail_to_load() {
    let temp_dir = unique_test_dir("startup-broken");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let db_path = temp_dir.join("records.sqlite");

    let conn = rusqlite::Connection::open(&db_path).expect("should open db");
    conn.execute_batch("CREATE TABLE payout (row_idx INTEGER PRIMARY KEY);")
        .expect("should create outdated payout table");
    drop(conn);
    init_db(&db_path).expect("init db should succeed");

    let saved = Preferences {
        theme: Theme::Dark,
        follow_system_theme: false,
        sidebar_collapsed: true,
    };
    save_preferences(&db_path, &saved.to_entries()).expect("save");

    let repo: Arc<dyn RecordRepository> = Arc::new(SqliteRepo::new(db_path));
    let (prefs, loaded) = load_startup(
        &RecordService::new(repo.clone()),
        &PreferenceService::new(repo, Theme::Light),
    );
    assert!(loaded.is_err());
    assert_eq!(prefs, saved);

    let _ = fs::remove_dir_all(temp_dir);
}

#[test]
fn startup_loads_every_collection() {
    let temp_dir = unique_test_dir("startup");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let db_path = temp_dir.join("records.sqlite");
    init_db(&db_path).expect("init db should succeed");
    replace_payouts(&db_path, &twelve_payouts()).expect("insert payouts");
    replace_withdrawals(&db_path, &withdrawal_requests()).expect("insert withdrawals");

    let repo: Arc<dyn RecordRepository> = Arc::new(SqliteRepo::new(db_path));
    let (prefs, loaded) = load_startup(
        &RecordService::new(repo.clone()),
        &PreferenceService::new(repo, Theme::Dark),
    );
    let loaded = loaded.expect("records should load");
    assert_eq!(loaded.payouts.len(), 12);
    assert_eq!(loaded.withdrawals, withdrawal_requests());
    assert!(loaded.referrals.is_empty());
    assert_eq!(prefs, Preferences::resolve(&BTreeMap::new(), Theme::Dark));

    let _ = fs::remove_dir_all(temp_dir);
}

#[test]
fn config_overrides_fall_back_to_defaults_when_invalid() {
    let dir = PathBuf::from("/tmp/affiliate-desk-config");
    let config = AppConfig::with_data_dir(dir.clone(), Some("25"), Some("light"));
    assert_eq!(config.db_path, dir.join("records.sqlite"));
    assert_eq!(config.default_page_size, 25);
    assert_eq!(config.system_theme, Theme::Light);

    let fallback = AppConfig::with_data_dir(dir.clone(), Some("7"), Some("purple"));
    assert_eq!(fallback.default_page_size, 10);
    assert_eq!(fallback.system_theme, Theme::Dark);

    let unset = AppConfig::with_data_dir(dir, None, None);
    assert_eq!(unset.default_page_size, 10);
    assert_eq!(unset.system_theme, Theme::Dark);
}

#[test]
fn sort_indicator_marks_only_active_column() {
    assert_eq!(sort_indicator(false, SortDirection::Asc), "⇅");
    assert_eq!(sort_indicator(true, SortDirection::Asc), "↑");
    assert_eq!(sort_indicator(true, SortDirection::Desc), "↓");
}

#[test]
fn status_options_start_with_all() {
    let options = status_options(Payout::KNOWN_STATUSES);
    assert_eq!(options[0].value, "all");
    assert_eq!(options[0].label, "All Status");
    assert_eq!(options[2].value, "pending");
    assert_eq!(options[2].label, "Pending");
    assert_eq!(options.len(), 5);
}

#[test]
fn table_view_flattens_current_page() {
    let mut state = TableState::new(twelve_payouts(), 5);
    state.set_status_filter(StatusFilter::from_select_value("pending"));
    let view = table_view(&state, PAYOUT_COPY);

    assert_eq!(view.copy.title, "Payout History");
    assert_eq!(view.status_value, "pending");
    assert_eq!(view.status_column, Some(3));
    assert_eq!(view.filtered_count, 3);
    assert_eq!(view.first_item, 1);
    assert_eq!(view.last_item, 3);
    assert_eq!(view.page_window, vec![1]);
    assert!(view.has_active_filters);
    assert!(!view.has_previous);
    assert!(!view.has_next);

    let active: Vec<&str> = view
        .headers
        .iter()
        .filter(|header| header.active)
        .map(|header| header.label)
        .collect();
    assert_eq!(active, vec!["Date"]);
    assert_eq!(view.headers[0].indicator, "↓");
    assert_eq!(view.headers[1].indicator, "⇅");

    assert_eq!(view.rows[0].key, 0);
    assert_eq!(view.rows[0].cells[0], "Jan 11, 2024");
    assert_eq!(view.rows[0].cells[3], "Pending");
}

#[test]
fn repeated_ids_still_get_distinct_row_keys() {
    let records = vec![
        payout(4, "2024-01-03", "₹1.00", "UPI", "Completed"),
        payout(4, "2024-01-02", "₹2.00", "UPI", "Pending"),
        payout(4, "2024-01-01", "₹3.00", "UPI", "Failed"),
    ];
    let view = table_view(&TableState::new(records, 10), PAYOUT_COPY);
    let keys: Vec<usize> = view.rows.iter().map(|row| row.key).collect();
    assert_eq!(keys, vec![0, 1, 2]);
}

#[test]
fn status_column_follows_the_status_field() {
    assert_eq!(
        Payout::columns()[3].field,
        <Payout as TableRecord>::STATUS_FIELD
    );
    assert_eq!(
        Referral::columns()[2].field,
        <Referral as TableRecord>::STATUS_FIELD
    );
}

#[test]
fn referral_table_view_reports_date_inputs() {
    let mut state = TableState::new(
        vec![referral(1, "Asha", "Active", "2024-01-01", "₹1.00")],
        10,
    );
    state.set_date_start(Some(day(2024, 1, 1)));
    let view = table_view(&state, REFERRAL_COPY);
    assert_eq!(view.start_date, "2024-01-01");
    assert_eq!(view.end_date, "");
    assert_eq!(view.status_column, Some(2));
    assert_eq!(view.headers[3].label, "Join Date");
}

#[test]
fn empty_table_view_has_no_rows() {
    let state = TableState::<Payout>::new(Vec::new(), 10);
    let view = table_view(&state, PAYOUT_COPY);
    assert!(view.rows.is_empty());
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.first_item, 0);
    assert_eq!(view.page_window, vec![1]);
}

#[test]
fn status_badges_differ_by_status_and_theme() {
    let completed = status_badge_style("Completed", Theme::Light);
    assert_eq!(completed, status_badge_style(" completed ", Theme::Light));
    assert_ne!(completed, status_badge_style("Failed", Theme::Light));
    assert_ne!(completed, status_badge_style("Completed", Theme::Dark));
    assert_eq!(
        status_badge_style("Archived", Theme::Light),
        status_badge_style("unknown", Theme::Light)
    );
}

#[test]
fn current_pager_button_is_highlighted() {
    let colors = palette(Theme::Light);
    assert_ne!(
        pager_button_style(&colors, true),
        pager_button_style(&colors, false)
    );
}

#[test]
fn record_kind_labels() {
    assert_eq!(RecordKind::Payouts.label(), "Payout History");
    assert_eq!(RecordKind::Withdrawals.label(), "Withdrawal Requests");
    assert_eq!(RecordKind::Referrals.noun(), "referrals");
    assert_eq!(RecordKind::ALL.len(), 3);
}

#[test]
fn confirmed_withdrawals_show_their_reference() {
    let view = withdrawal_view(&withdrawal_requests(), WithdrawalTab::Confirmed);
    assert_eq!(
        view.tabs,
        vec![
            (WithdrawalTab::Unconfirmed, false),
            (WithdrawalTab::Confirmed, true)
        ]
    );
    assert_eq!(view.items.len(), 2);
    assert_eq!(view.items[0].key, 0);
    assert_eq!(view.items[0].title, "Request #4");
    assert_eq!(view.items[0].date, "Jan 25, 2024");
    assert_eq!(view.items[0].amount, "₹1,200.00");
    assert_eq!(view.items[0].reference.as_deref(), Some("Ref: PAY-0004"));

    let waiting = withdrawal_view(&withdrawal_requests(), WithdrawalTab::Unconfirmed);
    assert_eq!(waiting.items[0].title, "Request #2");
    assert!(waiting.items.iter().all(|item| item.reference.is_none()));
}

#[test]
fn empty_withdrawal_tab_explains_itself() {
    let view = withdrawal_view(&[], WithdrawalTab::Unconfirmed);
    assert!(view.items.is_empty());
    assert_eq!(view.empty_message, "No unconfirmed withdrawal requests found.");
}
