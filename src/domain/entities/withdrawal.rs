use crate::domain::entities::query::SortDirection;
use crate::domain::entities::record::{Payout, PayoutField};
use crate::domain::pipeline;

/// The two lists on the withdrawal requests page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WithdrawalTab {
    #[default]
    Unconfirmed,
    Confirmed,
}

impl WithdrawalTab {
    pub const ALL: [WithdrawalTab; 2] = [WithdrawalTab::Unconfirmed, WithdrawalTab::Confirmed];

    pub fn label(self) -> &'static str {
        match self {
            WithdrawalTab::Unconfirmed => "Unconfirmed",
            WithdrawalTab::Confirmed => "Confirmed",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            WithdrawalTab::Unconfirmed => "No unconfirmed withdrawal requests found.",
            WithdrawalTab::Confirmed => "No confirmed withdrawal requests found.",
        }
    }

    pub fn contains(self, request: &Payout) -> bool {
        is_confirmed(&request.status) == (self == WithdrawalTab::Confirmed)
    }
}

/// A request is confirmed once it has completed. Anything else, including a
/// failed request, still waits on the user.
pub fn is_confirmed(status: &str) -> bool {
    status.trim().eq_ignore_ascii_case("completed")
}

/// Requests shown under `tab`, newest first.
pub fn requests_for_tab(requests: &[Payout], tab: WithdrawalTab) -> Vec<Payout> {
    let selected = requests
        .iter()
        .filter(|request| tab.contains(request))
        .cloned()
        .collect();
    pipeline::sort(selected, PayoutField::Date, SortDirection::Desc)
}
