//! Payment and payout models and DTOs.
//!
//! Amounts are integer minor currency units (cents).

use choptop_core::serde::deserialize_optional_string;
use choptop_core::{PaginationMeta, PaginationParams};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    Sale,
    Refund,
}

impl PaymentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sale => "sale",
            Self::Refund => "refund",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Succeeded,
    Pending,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Succeeded => "succeeded",
            Self::Pending => "pending",
            Self::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    Mpesa,
    AirtelMoney,
    MtnMomo,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Card => "Card",
            Self::Mpesa => "M-Pesa",
            Self::AirtelMoney => "Airtel Money",
            Self::MtnMomo => "MTN MoMo",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Payment {
    pub id: String,
    pub kind: PaymentKind,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    /// Amount in minor units
    pub amount: i64,
    pub event: String,
    pub created: DateTime<Utc>,
}

impl Payment {
    /// Lowercased text the list search matches against.
    pub fn search_text(&self) -> String {
        format!(
            "{}{}{}{}{}",
            self.id,
            self.kind.as_str(),
            self.method.label(),
            self.status.as_str(),
            self.event
        )
        .to_lowercase()
    }

    /// Successful or still pending sale, i.e. money owed to an event.
    pub fn is_payable_sale(&self) -> bool {
        self.kind == PaymentKind::Sale && self.status != PaymentStatus::Failed
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RecordPaymentDto {
    pub kind: PaymentKind,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    #[validate(range(min = 0))]
    pub amount: i64,
    #[validate(length(min = 1, max = 200))]
    pub event: String,
    pub created: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PayoutMethod {
    Bank,
    Mpesa,
    AirtelMoney,
    MtnMomo,
    /// Aggregated across several payment methods
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PayoutStatus {
    Pending,
    Paid,
    Failed,
}

/// A payout scheduled to an organizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Payout {
    pub id: String,
    pub organizer: String,
    pub amount: i64,
    pub method: PayoutMethod,
    pub status: PayoutStatus,
    pub scheduled: NaiveDate,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SchedulePayoutDto {
    #[validate(length(min = 1, max = 200))]
    pub organizer: String,
    #[validate(range(min = 0))]
    pub amount: i64,
    pub method: PayoutMethod,
    pub scheduled: NaiveDate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PayoutGroupBy {
    #[default]
    Event,
    Organizer,
}

/// One row of the payouts table; `payee` is the event or the organizer
/// depending on the grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PayoutLine {
    pub id: String,
    pub payee: String,
    pub amount: i64,
    pub method: PayoutMethod,
    pub status: PayoutStatus,
    pub scheduled: NaiveDate,
}

impl From<&Payout> for PayoutLine {
    fn from(payout: &Payout) -> Self {
        Self {
            id: payout.id.clone(),
            payee: payout.organizer.clone(),
            amount: payout.amount,
            method: payout.method,
            status: payout.status,
            scheduled: payout.scheduled,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PaymentFilterParams {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub q: Option<String>,
    pub status: Option<PaymentStatus>,
    pub method: Option<PaymentMethod>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

impl PaymentFilterParams {
    pub fn matches(&self, payment: &Payment) -> bool {
        let hits = self
            .q
            .as_ref()
            .is_none_or(|q| payment.search_text().contains(&q.to_lowercase()));

        hits && self.status.is_none_or(|s| payment.status == s)
            && self.method.is_none_or(|m| payment.method == m)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PayoutFilterParams {
    pub group_by: Option<PayoutGroupBy>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedPaymentsResponse {
    pub data: Vec<Payment>,
    pub meta: PaginationMeta,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedPayoutsResponse {
    pub group_by: PayoutGroupBy,
    pub data: Vec<PayoutLine>,
    pub meta: PaginationMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BalanceSummary {
    /// Sum of succeeded sales
    pub total_gmv: i64,
    /// Sum of refunds, whatever their status
    pub refunds: i64,
    /// Rounded percentage of succeeded payments; 0 without payments
    pub success_rate: u32,
    pub payments: usize,
    /// Earliest pending payout of the selected grouping, by scheduled date;
    /// ties go to the first line in list order
    pub next_scheduled_payout: Option<PayoutLine>,
}
