use std::sync::Arc;

use dioxus::prelude::*;
use rfd::FileDialog;

use crate::config::AppConfig;
use crate::domain::entities::preferences::Preferences;
use crate::domain::entities::query::StatusFilter;
use crate::domain::entities::record::{Payout, RecordKind, Referral, TableRecord};
use crate::domain::entities::summary::{
    summarize_payouts, summarize_referrals, summarize_withdrawals,
};
use crate::domain::entities::withdrawal::WithdrawalTab;
use crate::domain::values::parse_date_input;
use crate::infra::sqlite::repo::SqliteRepo;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::components::{DataTable, Sidebar, SummaryCards, WithdrawalList};
use crate::ui::state::app_state::{AppState, RecordSignals};
use crate::ui::theme::{palette, ACCENT};
use crate::ui::view_model::{
    payout_cards, referral_cards, table_view, withdrawal_cards, withdrawal_view, TableCopy,
    PAYOUT_COPY, REFERRAL_COPY,
};
use crate::usecase::ports::repo::{RecordRepository, RepoError};
use crate::usecase::services::import_service::ImportService;
use crate::usecase::services::preference_service::PreferenceService;
use crate::usecase::services::record_service::RecordService;
use crate::usecase::services::table_service::TableState;

#[derive(Clone)]
struct Services {
    records: Arc<RecordService>,
    imports: Arc<ImportService>,
    preferences: Arc<PreferenceService>,
}

impl Services {
    fn new(config: &AppConfig) -> Self {
        let repo: Arc<dyn RecordRepository> = Arc::new(SqliteRepo::new(config.db_path.clone()));
        Self {
            records: Arc::new(RecordService::new(repo.clone())),
            imports: Arc::new(ImportService::new(repo.clone())),
            preferences: Arc::new(PreferenceService::new(repo, config.system_theme)),
        }
    }
}

/// Everything read from the store at launch.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LoadedRecords {
    pub payouts: Vec<Payout>,
    pub withdrawals: Vec<Payout>,
    pub referrals: Vec<Referral>,
}

/// Preferences are resolved even when the records cannot be read, so a
/// damaged store still opens with the saved theme and sidebar state.
pub(crate) fn load_startup(
    records: &RecordService,
    preferences: &PreferenceService,
) -> (Preferences, Result<LoadedRecords, RepoError>) {
    let schema = records.init();
    let prefs = preferences.init();
    let loaded = schema.and_then(|()| {
        Ok(LoadedRecords {
            payouts: records.load_payouts()?,
            withdrawals: records.load_withdrawals()?,
            referrals: records.load_referrals()?,
        })
    });
    (prefs, loaded)
}

fn reload_records(
    services: &Services,
    kind: RecordKind,
    mut records: RecordSignals,
) -> Result<usize, RepoError> {
    match kind {
        RecordKind::Payouts => {
            let loaded = services.records.load_payouts()?;
            let count = loaded.len();
            records.payouts.write().replace_records(loaded);
            Ok(count)
        }
        RecordKind::Withdrawals => {
            let loaded = services.records.load_withdrawals()?;
            let count = loaded.len();
            records.withdrawals.set(loaded);
            Ok(count)
        }
        RecordKind::Referrals => {
            let loaded = services.records.load_referrals()?;
            let count = loaded.len();
            records.referrals.write().replace_records(loaded);
            Ok(count)
        }
    }
}

/// Binds one record table to the shared `DataTable` component.
fn render_table<R: TableRecord>(
    mut state: Signal<TableState<R>>,
    copy: TableCopy,
    preferences: Preferences,
) -> Element {
    let view = table_view(&state.read(), copy);

    rsx! {
        DataTable {
            view,
            theme: preferences.theme,
            on_search: move |text: String| state.write().set_search_text(text),
            on_status: move |value: String| {
                state.write().set_status_filter(StatusFilter::from_select_value(&value));
            },
            on_start_date: move |value: String| state.write().set_date_start(parse_date_input(&value)),
            on_end_date: move |value: String| state.write().set_date_end(parse_date_input(&value)),
            on_sort: move |col_idx: usize| {
                if let Some(column) = R::columns().get(col_idx) {
                    state.write().toggle_sort(column.field);
                }
            },
            on_page: move |page: usize| state.write().set_page(page),
            on_page_size: move |size: usize| state.write().set_page_size(size),
            on_clear: move |_: ()| state.write().clear_filters(),
        }
    }
}

#[component]
pub fn App() -> Element {
    let config = use_hook(|| AppConfig::load().map_err(|err| format!("{err:#}")));
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            return rsx! {
                div {
                    p { "Unable to resolve the data directory: {err}" }
                }
            };
        }
    };

    let AppState {
        mut active_view,
        mut records,
        mut withdrawal_tab,
        mut preferences,
        mut busy,
        mut status,
    } = AppState::new(config.default_page_size);

    let services = use_hook(|| Services::new(&config));

    let services_for_init = services.clone();
    use_effect(move || {
        busy.set(true);
        let (prefs, loaded) = run_blocking(|| {
            load_startup(&services_for_init.records, &services_for_init.preferences)
        });
        preferences.set(prefs);
        match loaded {
            Ok(loaded) => {
                status.set(format!(
                    "Loaded {} payouts, {} withdrawal requests and {} referrals",
                    loaded.payouts.len(),
                    loaded.withdrawals.len(),
                    loaded.referrals.len()
                ));
                records.payouts.write().replace_records(loaded.payouts);
                records.withdrawals.set(loaded.withdrawals);
                records.referrals.write().replace_records(loaded.referrals);
            }
            Err(err) => {
                tracing::error!("failed to load records: {err}");
                status.set(format!("Failed to load records: {err}"));
            }
        }
        busy.set(false);
    });

    let services_for_import = services.clone();
    let services_for_theme = services.clone();
    let services_for_follow = services.clone();
    let services_for_sidebar = services.clone();

    let prefs = preferences();
    let colors = palette(prefs.theme);
    let active = active_view();
    let title = active.label();
    let theme_label = if prefs.theme.is_dark() { "Light mode" } else { "Dark mode" };
    let is_busy = busy();
    let status_text = status();

    let cards = match active {
        RecordKind::Payouts => {
            payout_cards(&summarize_payouts(records.payouts.read().records()))
        }
        RecordKind::Withdrawals => {
            withdrawal_cards(&summarize_withdrawals(&records.withdrawals.read()))
        }
        RecordKind::Referrals => {
            referral_cards(&summarize_referrals(records.referrals.read().records()))
        }
    };
    let content = match active {
        RecordKind::Payouts => render_table(records.payouts, PAYOUT_COPY, prefs),
        RecordKind::Withdrawals => rsx! {
            WithdrawalList {
                view: withdrawal_view(&records.withdrawals.read(), withdrawal_tab()),
                theme: prefs.theme,
                on_tab: move |tab: WithdrawalTab| withdrawal_tab.set(tab),
            }
        },
        RecordKind::Referrals => render_table(records.referrals, REFERRAL_COPY, prefs),
    };

    rsx! {
        div {
            style: "display: flex; min-height: 100vh; background: {colors.background}; color: {colors.text}; font-family: system-ui, sans-serif;",

            Sidebar {
                active,
                collapsed: prefs.sidebar_collapsed,
                theme: prefs.theme,
                on_select: move |kind: RecordKind| active_view.set(kind),
                on_toggle: move |_: ()| {
                    let mut next = preferences();
                    if let Err(err) = services_for_sidebar.preferences.toggle_sidebar(&mut next) {
                        status.set(format!("Failed to save sidebar state: {err}"));
                    }
                    preferences.set(next);
                },
            }

            main { style: "flex: 1; padding: 24px; overflow: auto;",
                div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;",
                    h1 { style: "margin: 0; font-size: 24px;", "{title}" }
                    div { style: "display: flex; gap: 12px; align-items: center;",
                        button {
                            style: "border: none; border-radius: 8px; padding: 8px 14px; background: {ACCENT}; color: #fff; cursor: pointer;",
                            disabled: is_busy,
                            onclick: move |_| {
                                let Some(file_path) = FileDialog::new()
                                    .add_filter("CSV", &["csv"])
                                    .add_filter("Excel", &["xlsx", "xls"])
                                    .add_filter("JSON", &["json"])
                                    .pick_file()
                                else {
                                    return;
                                };
                                let kind = active_view();
                                busy.set(true);
                                status.set(format!("Importing {}", file_path.display()));
                                let import_result = run_blocking(|| {
                                    services_for_import.imports.import_file(kind, &file_path)
                                });
                                match import_result {
                                    Ok(imported) => {
                                        match reload_records(&services_for_import, kind, records) {
                                            Ok(_) => status.set(format!(
                                                "Imported {} {} from {} ({:?})",
                                                imported.row_count,
                                                imported.kind.noun(),
                                                file_path.display(),
                                                imported.format
                                            )),
                                            Err(err) => status.set(format!("Reload failed: {err}")),
                                        }
                                    }
                                    Err(err) => {
                                        tracing::warn!("import failed: {err:#}");
                                        status.set(format!("Import failed: {err:#}"));
                                    }
                                }
                                busy.set(false);
                            },
                            "Import"
                        }
                        label { style: "display: flex; gap: 6px; align-items: center; font-size: 13px; color: {colors.muted};",
                            input {
                                r#type: "checkbox",
                                checked: prefs.follow_system_theme,
                                onchange: move |_| {
                                    let mut next = preferences();
                                    let follow = !next.follow_system_theme;
                                    if let Err(err) = services_for_follow
                                        .preferences
                                        .set_follow_system_theme(&mut next, follow)
                                    {
                                        status.set(format!("Failed to save theme: {err}"));
                                    }
                                    preferences.set(next);
                                },
                            }
                            "Use system theme"
                        }
                        button {
                            style: "border: 1px solid {colors.border}; border-radius: 8px; padding: 8px 14px; background: {colors.surface}; color: {colors.text}; cursor: pointer;",
                            onclick: move |_| {
                                let mut next = preferences();
                                if let Err(err) = services_for_theme.preferences.toggle_theme(&mut next) {
                                    status.set(format!("Failed to save theme: {err}"));
                                }
                                preferences.set(next);
                            },
                            "{theme_label}"
                        }
                    }
                }
                p { style: "margin: 0 0 24px; font-size: 13px; color: {colors.muted};", "{status_text}" }

                SummaryCards { cards, theme: prefs.theme }

                {content}
            }
        }
    }
}
