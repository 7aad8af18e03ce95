use dioxus::prelude::*;

use crate::domain::entities::preferences::Theme;
use crate::domain::entities::query::PAGE_SIZE_OPTIONS;
use crate::domain::entities::record::RecordKind;
use crate::domain::entities::withdrawal::WithdrawalTab;
use crate::ui::theme::{
    control_style, palette, pager_button_style, status_badge_style, table_cell_style,
    table_header_cell_style, ACCENT,
};
use crate::ui::view_model::{SummaryCard, TableView, WithdrawalItem, WithdrawalListView};

#[component]
pub fn SummaryCards(cards: Vec<SummaryCard>, theme: Theme) -> Element {
    let colors = palette(theme);

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(4, minmax(0, 1fr)); gap: 16px; margin-bottom: 24px;",
            for card in cards.iter() {
                div {
                    key: "{card.label}",
                    style: "background: {colors.surface}; border: 1px solid {colors.border}; border-radius: 12px; padding: 16px;",
                    p { style: "margin: 0; font-size: 13px; color: {colors.muted};", "{card.label}" }
                    p { style: "margin: 8px 0 0; font-size: 22px; font-weight: 700; color: {card.color};", "{card.value}" }
                }
            }
        }
    }
}

#[component]
pub fn Sidebar(
    active: RecordKind,
    collapsed: bool,
    theme: Theme,
    on_select: EventHandler<RecordKind>,
    on_toggle: EventHandler<()>,
) -> Element {
    let colors = palette(theme);
    let width = if collapsed { 64 } else { 220 };
    let toggle_label = if collapsed { "»" } else { "«" };
    let entries: Vec<(RecordKind, &'static str, String, String)> =
        RecordKind::ALL
            .into_iter()
            .map(|kind| {
                let label = kind.label();
                let text = if collapsed {
                    label.chars().next().map(String::from).unwrap_or_default()
                } else {
                    label.to_string()
                };
                let style = if kind == active {
                    format!("text-align: left; padding: 8px 12px; border: none; border-radius: 8px; background: {ACCENT}; color: #fff; cursor: pointer;")
                } else {
                    format!(
                        "text-align: left; padding: 8px 12px; border: none; border-radius: 8px; background: transparent; color: {}; cursor: pointer;",
                        colors.text
                    )
                };
                (kind, label, text, style)
            })
            .collect();

    rsx! {
        nav {
            style: "width: {width}px; flex-shrink: 0; background: {colors.surface}; border-right: 1px solid {colors.border}; padding: 16px 8px; display: flex; flex-direction: column; gap: 4px;",
            button {
                style: "align-self: flex-end; border: none; background: transparent; color: {colors.muted}; cursor: pointer;",
                onclick: move |_| on_toggle.call(()),
                "{toggle_label}"
            }
            for (kind, label, text, style) in entries.into_iter() {
                button {
                    key: "{label}",
                    style: "{style}",
                    title: "{label}",
                    onclick: move |_| on_select.call(kind),
                    "{text}"
                }
            }
        }
    }
}

#[component]
pub fn DataTable(
    view: TableView,
    theme: Theme,
    on_search: EventHandler<String>,
    on_status: EventHandler<String>,
    on_start_date: EventHandler<String>,
    on_end_date: EventHandler<String>,
    on_sort: EventHandler<usize>,
    on_page: EventHandler<usize>,
    on_page_size: EventHandler<usize>,
    on_clear: EventHandler<()>,
) -> Element {
    let colors = palette(theme);
    let control = control_style(&colors);
    let header_style = table_header_cell_style(&colors);
    let cell_style = table_cell_style(&colors);
    let first_page_button = pager_button_style(&colors, false);
    let status_column = view.status_column;
    let last_page = view.total_pages;
    let current_page = view.page;
    let has_previous = view.has_previous;
    let has_next = view.has_next;
    let body_rows: Vec<(usize, Vec<(String, Option<String>)>)> = view
        .rows
        .iter()
        .map(|row| {
            let cells = row
                .cells
                .iter()
                .enumerate()
                .map(|(col_idx, cell)| {
                    let badge = (Some(col_idx) == status_column)
                        .then(|| status_badge_style(cell, theme));
                    (cell.clone(), badge)
                })
                .collect();
            (row.key, cells)
        })
        .collect();
    let pager_numbers: Vec<(usize, String)> = view
        .page_window
        .iter()
        .map(|&number| (number, pager_button_style(&colors, number == current_page)))
        .collect();

    rsx! {
        div {
            style: "background: {colors.surface}; border: 1px solid {colors.border}; border-radius: 12px; padding: 24px;",

            div { style: "border-bottom: 1px solid {colors.border}; padding-bottom: 16px; margin-bottom: 24px;",
                h3 { style: "margin: 0; color: {colors.text};", "{view.copy.title}" }
                p { style: "margin: 4px 0 0; color: {colors.muted};", "{view.copy.description}" }
            }

            div { style: "display: grid; grid-template-columns: repeat(4, minmax(0, 1fr)); gap: 16px; margin-bottom: 16px;",
                label { style: "display: flex; flex-direction: column; gap: 6px; color: {colors.muted}; font-size: 13px;",
                    "Search"
                    input {
                        style: "{control}",
                        placeholder: "{view.copy.search_placeholder}",
                        value: "{view.search_text}",
                        oninput: move |event| on_search.call(event.value()),
                    }
                }
                label { style: "display: flex; flex-direction: column; gap: 6px; color: {colors.muted}; font-size: 13px;",
                    "Status"
                    select {
                        style: "{control}",
                        value: "{view.status_value}",
                        onchange: move |event| on_status.call(event.value()),
                        for option in view.status_options.iter() {
                            option {
                                key: "{option.value}",
                                value: "{option.value}",
                                selected: option.value == view.status_value,
                                "{option.label}"
                            }
                        }
                    }
                }
                label { style: "display: flex; flex-direction: column; gap: 6px; color: {colors.muted}; font-size: 13px;",
                    "Start Date"
                    input {
                        style: "{control}",
                        r#type: "date",
                        value: "{view.start_date}",
                        oninput: move |event| on_start_date.call(event.value()),
                    }
                }
                label { style: "display: flex; flex-direction: column; gap: 6px; color: {colors.muted}; font-size: 13px;",
                    "End Date"
                    input {
                        style: "{control}",
                        r#type: "date",
                        value: "{view.end_date}",
                        oninput: move |event| on_end_date.call(event.value()),
                    }
                }
            }

            div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 24px; font-size: 14px;",
                div { style: "display: flex; gap: 8px; align-items: center;",
                    button {
                        style: "border: none; background: transparent; color: {colors.muted}; text-decoration: underline; cursor: pointer;",
                        disabled: !view.has_active_filters,
                        onclick: move |_| on_clear.call(()),
                        "Clear all filters"
                    }
                    span { style: "color: {colors.muted};", "({view.filtered_count} results)" }
                }
                div { style: "display: flex; gap: 8px; align-items: center; color: {colors.muted};",
                    "Show:"
                    select {
                        style: "{control}",
                        value: "{view.page_size}",
                        onchange: move |event| {
                            if let Ok(size) = event.value().parse::<usize>() {
                                on_page_size.call(size);
                            }
                        },
                        for size in PAGE_SIZE_OPTIONS {
                            option {
                                key: "{size}",
                                value: "{size}",
                                selected: size == view.page_size,
                                "{size}"
                            }
                        }
                    }
                }
            }

            div { style: "overflow-x: auto;",
                table { style: "border-collapse: collapse; width: 100%;",
                    thead {
                        tr {
                            for (col_idx, header) in view.headers.iter().enumerate() {
                                th {
                                    key: "{header.label}",
                                    style: "{header_style}",
                                    onclick: move |_| on_sort.call(col_idx),
                                    "{header.label}"
                                    span {
                                        style: if header.active {
                                            format!("margin-left: 4px; color: {ACCENT};")
                                        } else {
                                            format!("margin-left: 4px; color: {};", colors.muted)
                                        },
                                        "{header.indicator}"
                                    }
                                }
                            }
                        }
                    }
                    tbody {
                        for (row_key, cells) in body_rows.into_iter() {
                            tr { key: "{row_key}",
                                for (cell, badge) in cells.into_iter() {
                                    td { style: "{cell_style}",
                                        if let Some(badge) = badge {
                                            span { style: "{badge}", "{cell}" }
                                        } else {
                                            "{cell}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if view.filtered_count == 0 {
                div { style: "text-align: center; padding: 48px 0;",
                    h3 { style: "margin: 0 0 8px; color: {colors.text};", "{view.copy.empty_title}" }
                    p { style: "margin: 0; color: {colors.muted};", "Try adjusting your filters to see more results." }
                }
            } else {
                div { style: "display: flex; justify-content: space-between; align-items: center; padding-top: 24px; margin-top: 8px; border-top: 1px solid {colors.border}; font-size: 14px;",
                    div { style: "color: {colors.muted};",
                        "Showing {view.first_item} to {view.last_item} of {view.filtered_count} results"
                    }
                    div { style: "display: flex; gap: 8px; align-items: center;",
                        button {
                            style: "{first_page_button}",
                            disabled: !has_previous,
                            onclick: move |_| on_page.call(1),
                            "First"
                        }
                        button {
                            style: "{first_page_button}",
                            disabled: !has_previous,
                            onclick: move |_| on_page.call(current_page.saturating_sub(1)),
                            "Previous"
                        }
                        for (number, number_style) in pager_numbers.into_iter() {
                            button {
                                key: "{number}",
                                style: "{number_style}",
                                onclick: move |_| on_page.call(number),
                                "{number}"
                            }
                        }
                        button {
                            style: "{first_page_button}",
                            disabled: !has_next,
                            onclick: move |_| on_page.call(current_page + 1),
                            "Next"
                        }
                        button {
                            style: "{first_page_button}",
                            disabled: !has_next,
                            onclick: move |_| on_page.call(last_page),
                            "Last"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn WithdrawalList(
    view: WithdrawalListView,
    theme: Theme,
    on_tab: EventHandler<WithdrawalTab>,
) -> Element {
    let colors = palette(theme);
    let tabs: Vec<(WithdrawalTab, &'static str, String)> = view
        .tabs
        .iter()
        .map(|&(tab, active)| {
            let style = if active {
                format!("padding: 8px 16px; border: none; border-bottom: 2px solid {ACCENT}; background: transparent; color: {ACCENT}; font-weight: 600; cursor: pointer;")
            } else {
                format!(
                    "padding: 8px 16px; border: none; border-bottom: 2px solid transparent; background: transparent; color: {}; font-weight: 600; cursor: pointer;",
                    colors.muted
                )
            };
            (tab, tab.label(), style)
        })
        .collect();
    let empty = view.items.is_empty();
    let rows: Vec<(WithdrawalItem, String)> = view
        .items
        .iter()
        .map(|item| (item.clone(), status_badge_style(&item.status, theme)))
        .collect();

    rsx! {
        div {
            style: "background: {colors.surface}; border: 1px solid {colors.border}; border-radius: 12px; padding: 24px;",

            div { style: "display: flex; gap: 16px; border-bottom: 1px solid {colors.border}; margin-bottom: 24px;",
                for (tab, label, style) in tabs.into_iter() {
                    button {
                        key: "{label}",
                        style: "{style}",
                        onclick: move |_| on_tab.call(tab),
                        "{label}"
                    }
                }
            }

            if empty {
                div { style: "text-align: center; padding: 32px 0; color: {colors.muted};",
                    "{view.empty_message}"
                }
            } else {
                div { style: "display: flex; flex-direction: column; gap: 16px;",
                    for (item, badge) in rows.into_iter() {
                        div {
                            key: "{item.key}",
                            style: "display: flex; justify-content: space-between; align-items: center; padding: 16px; border: 1px solid {colors.border}; border-radius: 8px; background: {colors.background};",
                            div { style: "display: flex; flex-direction: column; gap: 4px;",
                                span { style: "font-size: 14px; font-weight: 600; color: {colors.text};", "{item.title}" }
                                span { style: "font-size: 13px; color: {colors.muted};", "{item.date}" }
                            }
                            div { style: "display: flex; flex-direction: column; gap: 4px; align-items: center;",
                                span { style: "font-size: 14px; font-weight: 600; color: {colors.text};", "{item.amount}" }
                                span { style: "font-size: 13px; color: {colors.muted};", "{item.method}" }
                            }
                            div { style: "display: flex; gap: 16px; align-items: center;",
                                span { style: "{badge}", "{item.status}" }
                                if let Some(reference) = item.reference.clone() {
                                    span { style: "font-size: 13px; color: {colors.muted};", "{reference}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
