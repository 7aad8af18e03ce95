use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::query::SortDirection;
use crate::domain::values::{display_date, parse_amount, parse_date};

pub const PAYOUT_STATUSES: [&str; 4] = ["Completed", "Pending", "Failed", "Processing"];
pub const REFERRAL_STATUSES: [&str; 3] = ["Active", "Pending", "Inactive"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    #[serde(deserialize_with = "lenient::id")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub amount: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub method: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Referral {
    #[serde(deserialize_with = "lenient::id")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: String,
    #[serde(default, alias = "join_date", deserialize_with = "lenient::text")]
    pub join_date: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub earnings: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayoutField {
    Id,
    Date,
    Amount,
    Method,
    Status,
    Reference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferralField {
    Id,
    Name,
    Email,
    Status,
    JoinDate,
    Earnings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column<F> {
    pub field: F,
    pub label: &'static str,
}

/// Typed sort key. Amounts and dates are compared by value, text is
/// compared case-insensitively.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Integer(i64),
    Amount(Option<f64>),
    Date(Option<NaiveDate>),
    Text(String),
}

impl SortKey {
    /// Orders two keys for the given direction. Missing amounts and dates
    /// stay after present ones in both directions.
    pub fn compare(&self, other: &SortKey, direction: SortDirection) -> Ordering {
        let directed = |ordering: Ordering| match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        };

        match (self, other) {
            (SortKey::Integer(a), SortKey::Integer(b)) => directed(a.cmp(b)),
            (SortKey::Amount(a), SortKey::Amount(b)) => {
                compare_present(a.as_ref(), b.as_ref(), |a, b| directed(a.total_cmp(b)))
            }
            (SortKey::Date(a), SortKey::Date(b)) => {
                compare_present(a.as_ref(), b.as_ref(), |a, b| directed(a.cmp(b)))
            }
            (SortKey::Text(a), SortKey::Text(b)) => directed(a.cmp(b)),
            // One field always yields the same variant.
            _ => Ordering::Equal,
        }
    }
}

fn compare_present<T>(
    a: Option<&T>,
    b: Option<&T>,
    present: impl FnOnce(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => present(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn text_key(value: &str) -> SortKey {
    SortKey::Text(value.to_lowercase())
}

/// A row type the list pipeline can filter, sort and page.
pub trait TableRecord: Clone + PartialEq + 'static {
    type Field: Copy + Eq + std::fmt::Debug + 'static;

    const KNOWN_STATUSES: &'static [&'static str];
    const DEFAULT_SORT_FIELD: Self::Field;
    /// Column rendered as a status badge.
    const STATUS_FIELD: Self::Field;
    const DEFAULT_SORT_DIRECTION: SortDirection;

    fn columns() -> &'static [Column<Self::Field>];
    fn id(&self) -> i64;
    fn status(&self) -> &str;
    fn date(&self) -> Option<NaiveDate>;
    /// The fixed set of fields free-text search looks at.
    fn searchable_fields(&self) -> Vec<&str>;
    fn sort_key(&self, field: Self::Field) -> SortKey;
    fn cell(&self, field: Self::Field) -> String;
}

static PAYOUT_COLUMNS: [Column<PayoutField>; 5] = [
    Column { field: PayoutField::Date, label: "Date" },
    Column { field: PayoutField::Amount, label: "Amount" },
    Column { field: PayoutField::Method, label: "Method" },
    Column { field: PayoutField::Status, label: "Status" },
    Column { field: PayoutField::Reference, label: "Reference" },
];

static REFERRAL_COLUMNS: [Column<ReferralField>; 5] = [
    Column { field: ReferralField::Name, label: "Name" },
    Column { field: ReferralField::Email, label: "Email" },
    Column { field: ReferralField::Status, label: "Status" },
    Column { field: ReferralField::JoinDate, label: "Join Date" },
    Column { field: ReferralField::Earnings, label: "Earnings" },
];

impl TableRecord for Payout {
    type Field = PayoutField;

    const KNOWN_STATUSES: &'static [&'static str] = &PAYOUT_STATUSES;
    const DEFAULT_SORT_FIELD: PayoutField = PayoutField::Date;
    const STATUS_FIELD: PayoutField = PayoutField::Status;
    const DEFAULT_SORT_DIRECTION: SortDirection = SortDirection::Desc;

    fn columns() -> &'static [Column<PayoutField>] {
        &PAYOUT_COLUMNS
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.reference.as_str(), self.method.as_str(), self.amount.as_str()]
    }

    fn sort_key(&self, field: PayoutField) -> SortKey {
        match field {
            PayoutField::Id => SortKey::Integer(self.id),
            PayoutField::Date => SortKey::Date(self.date()),
            PayoutField::Amount => SortKey::Amount(parse_amount(&self.amount)),
            PayoutField::Method => text_key(&self.method),
            PayoutField::Status => text_key(&self.status),
            PayoutField::Reference => text_key(&self.reference),
        }
    }

    fn cell(&self, field: PayoutField) -> String {
        match field {
            PayoutField::Id => self.id.to_string(),
            PayoutField::Date => display_date(&self.date),
            PayoutField::Amount => self.amount.clone(),
            PayoutField::Method => self.method.clone(),
            PayoutField::Status => self.status.clone(),
            PayoutField::Reference => self.reference.clone(),
        }
    }
}

impl TableRecord for Referral {
    type Field = ReferralField;

    const KNOWN_STATUSES: &'static [&'static str] = &REFERRAL_STATUSES;
    const DEFAULT_SORT_FIELD: ReferralField = ReferralField::JoinDate;
    const STATUS_FIELD: ReferralField = ReferralField::Status;
    const DEFAULT_SORT_DIRECTION: SortDirection = SortDirection::Desc;

    fn columns() -> &'static [Column<ReferralField>] {
        &REFERRAL_COLUMNS
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn date(&self) -> Option<NaiveDate> {
        parse_date(&self.join_date)
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.earnings.as_str()]
    }

    fn sort_key(&self, field: ReferralField) -> SortKey {
        match field {
            ReferralField::Id => SortKey::Integer(self.id),
            ReferralField::Name => text_key(&self.name),
            ReferralField::Email => text_key(&self.email),
            ReferralField::Status => text_key(&self.status),
            ReferralField::JoinDate => SortKey::Date(self.date()),
            ReferralField::Earnings => SortKey::Amount(parse_amount(&self.earnings)),
        }
    }

    fn cell(&self, field: ReferralField) -> String {
        match field {
            ReferralField::Id => self.id.to_string(),
            ReferralField::Name => self.name.clone(),
            ReferralField::Email => self.email.clone(),
            ReferralField::Status => self.status.clone(),
            ReferralField::JoinDate => display_date(&self.join_date),
            ReferralField::Earnings => self.earnings.clone(),
        }
    }
}

/// Accepts numbers where strings are expected and vice versa, since exports
/// and spreadsheets disagree on cell types.
mod lenient {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn id<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Number(number) => number
                .as_i64()
                .or_else(|| number.as_f64().filter(|v| v.fract() == 0.0).map(|v| v as i64))
                .ok_or_else(|| D::Error::custom(format!("id must be an integer: {number}"))),
            Value::String(text) => {
                let trimmed = text.trim();
                trimmed
                    .parse::<i64>()
                    .ok()
                    .or_else(|| {
                        trimmed
                            .parse::<f64>()
                            .ok()
                            .filter(|v| v.fract() == 0.0)
                            .map(|v| v as i64)
                    })
                    .ok_or_else(|| D::Error::custom(format!("id must be an integer: {text:?}")))
            }
            other => Err(D::Error::custom(format!("id must be an integer: {other}"))),
        }
    }

    pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(String::new()),
            Value::String(text) => Ok(text),
            Value::Number(number) => Ok(number.to_string()),
            Value::Bool(flag) => Ok(flag.to_string()),
            other => Err(D::Error::custom(format!("expected text, got {other}"))),
        }
    }
}

/// The record collections the desk shows. Withdrawal requests share the
/// [`Payout`] shape but are stored and imported separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Payouts,
    Withdrawals,
    Referrals,
}

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [
        RecordKind::Payouts,
        RecordKind::Withdrawals,
        RecordKind::Referrals,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Payouts => "Payout History",
            RecordKind::Withdrawals => "Withdrawal Requests",
            RecordKind::Referrals => "Referrals",
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            RecordKind::Payouts => "payouts",
            RecordKind::Withdrawals => "withdrawal requests",
            RecordKind::Referrals => "referrals",
        }
    }
}
