use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::preferences::Preferences;
use crate::domain::entities::record::{Payout, RecordKind, Referral};
use crate::domain::entities::withdrawal::WithdrawalTab;
use crate::usecase::services::table_service::TableState;

/// Loaded record collections. Copy, like the signals inside it.
#[derive(Clone, Copy)]
pub struct RecordSignals {
    pub payouts: Signal<TableState<Payout>>,
    pub withdrawals: Signal<Vec<Payout>>,
    pub referrals: Signal<TableState<Referral>>,
}

pub struct AppState {
    pub active_view: Signal<RecordKind>,
    pub records: RecordSignals,
    pub withdrawal_tab: Signal<WithdrawalTab>,
    pub preferences: Signal<Preferences>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
}

impl AppState {
    /// Must be called from a component body; every field is a hook.
    pub fn new(page_size: usize) -> Self {
        Self {
            active_view: use_signal(|| RecordKind::Payouts),
            records: RecordSignals {
                payouts: use_signal(|| TableState::new(Vec::new(), page_size)),
                withdrawals: use_signal(Vec::new),
                referrals: use_signal(|| TableState::new(Vec::new(), page_size)),
            },
            withdrawal_tab: use_signal(WithdrawalTab::default),
            preferences: use_signal(Preferences::default),
            busy: use_signal(|| false),
            status: use_signal(|| "Ready".to_string()),
        }
    }
}
