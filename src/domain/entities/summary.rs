use std::collections::BTreeMap;

use crate::domain::entities::record::{Payout, Referral};
use crate::domain::entities::withdrawal::is_confirmed;
use crate::domain::values::parse_amount;

/// Figures for the payout overview cards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PayoutSummary {
    pub total_paid: f64,
    pub pending: f64,
    pub failed: f64,
    pub count_by_status: BTreeMap<String, usize>,
}

/// Figures for the withdrawal request cards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WithdrawalSummary {
    pub unconfirmed_count: usize,
    pub unconfirmed_amount: f64,
    pub confirmed_count: usize,
    pub confirmed_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReferralSummary {
    pub active: usize,
    pub pending: usize,
    pub inactive: usize,
    pub total_earnings: f64,
}

fn normalized_status(status: &str) -> String {
    status.trim().to_lowercase()
}

pub fn summarize_payouts(payouts: &[Payout]) -> PayoutSummary {
    let mut summary = PayoutSummary::default();
    for payout in payouts {
        let amount = parse_amount(&payout.amount).unwrap_or(0.0);
        let status = normalized_status(&payout.status);
        match status.as_str() {
            "completed" => summary.total_paid += amount,
            "pending" | "processing" => summary.pending += amount,
            "failed" => summary.failed += amount,
            _ => {}
        }
        *summary.count_by_status.entry(status).or_insert(0) += 1;
    }
    summary
}

pub fn summarize_withdrawals(requests: &[Payout]) -> WithdrawalSummary {
    let mut summary = WithdrawalSummary::default();
    for request in requests {
        let amount = parse_amount(&request.amount).unwrap_or(0.0);
        if is_confirmed(&request.status) {
            summary.confirmed_count += 1;
            summary.confirmed_amount += amount;
        } else {
            summary.unconfirmed_count += 1;
            summary.unconfirmed_amount += amount;
        }
    }
    summary
}

pub fn summarize_referrals(referrals: &[Referral]) -> ReferralSummary {
    let mut summary = ReferralSummary::default();
    for referral in referrals {
        match normalized_status(&referral.status).as_str() {
            "active" => summary.active += 1,
            "pending" => summary.pending += 1,
            "inactive" => summary.inactive += 1,
            _ => {}
        }
        summary.total_earnings += parse_amount(&referral.earnings).unwrap_or(0.0);
    }
    summary
}
