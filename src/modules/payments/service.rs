use std::collections::HashMap;

use chrono::{Days, NaiveDate, Utc};
use tracing::{info, instrument};

use choptop_core::{calc_rows_for_height, paginate, secondary_page_size};
use choptop_models::payments::{
    BalanceSummary, PaginatedPaymentsResponse, PaginatedPayoutsResponse, PaymentFilterParams,
    PaymentKind, PaymentStatus, PayoutFilterParams, PayoutMethod, PayoutStatus,
    RecordPaymentDto, SchedulePayoutDto,
};
use choptop_models::{Payment, Payout, PayoutGroupBy, PayoutLine};

use crate::state::AppState;

const FIRST_PAYMENT_NUMBER: usize = 10001;
const FIRST_PAYOUT_NUMBER: usize = 101;

/// Recorded payments and organizer payouts, both in recording order.
#[derive(Debug, Default)]
pub struct PaymentLedger {
    payments: Vec<Payment>,
    payouts: Vec<Payout>,
}

impl PaymentLedger {
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    pub fn payouts(&self) -> &[Payout] {
        &self.payouts
    }

    pub fn record_payment(&mut self, dto: RecordPaymentDto) -> Payment {
        let payment = Payment {
            id: format!("TXN-{}", FIRST_PAYMENT_NUMBER + self.payments.len()),
            kind: dto.kind,
            method: dto.method,
            status: dto.status,
            amount: dto.amount,
            event: dto.event,
            created: dto.created.unwrap_or_else(Utc::now),
        };
        self.payments.push(payment.clone());
        payment
    }

    pub fn schedule_payout(&mut self, dto: SchedulePayoutDto) -> Payout {
        let payout = Payout {
            id: format!("PO-{}", FIRST_PAYOUT_NUMBER + self.payouts.len()),
            organizer: dto.organizer,
            amount: dto.amount,
            method: dto.method,
            status: PayoutStatus::Pending,
            scheduled: dto.scheduled,
        };
        self.payouts.push(payout.clone());
        payout
    }

    /// Payout rows for the selected grouping.
    pub fn payout_lines(&self, group_by: PayoutGroupBy, settlement: NaiveDate) -> Vec<PayoutLine> {
        match group_by {
            PayoutGroupBy::Event => payouts_by_event(&self.payments, settlement),
            PayoutGroupBy::Organizer => self.payouts.iter().map(PayoutLine::from).collect(),
        }
    }
}

/// Sums the sales that did not fail per event, in order of first
/// appearance. The i-th event is scheduled `i + 1` days after `settlement`.
pub fn payouts_by_event(payments: &[Payment], settlement: NaiveDate) -> Vec<PayoutLine> {
    let mut totals: Vec<(&str, i64)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for payment in payments.iter().filter(|p| p.is_payable_sale()) {
        let event = payment.event.as_str();
        match positions.get(event) {
            Some(&i) => totals[i].1 = totals[i].1.saturating_add(payment.amount),
            None => {
                positions.insert(event, totals.len());
                totals.push((event, payment.amount));
            }
        }
    }

    totals
        .into_iter()
        .enumerate()
        .map(|(i, (event, amount))| PayoutLine {
            id: format!("POE-{}", i + 1),
            payee: event.to_string(),
            amount,
            method: PayoutMethod::Mixed,
            status: PayoutStatus::Pending,
            scheduled: settlement
                .checked_add_days(Days::new(i as u64 + 1))
                .unwrap_or(NaiveDate::MAX),
        })
        .collect()
}

/// Balances and health figures over all payments, with the earliest pending
/// payout of `lines`.
pub fn balance_summary(payments: &[Payment], lines: &[PayoutLine]) -> BalanceSummary {
    let total_gmv = payments
        .iter()
        .filter(|p| p.kind == PaymentKind::Sale && p.status == PaymentStatus::Succeeded)
        .fold(0i64, |acc, p| acc.saturating_add(p.amount));

    let refunds = payments
        .iter()
        .filter(|p| p.kind == PaymentKind::Refund)
        .fold(0i64, |acc, p| acc.saturating_add(p.amount));

    let succeeded = payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Succeeded)
        .count();
    let success_rate = if payments.is_empty() {
        0
    } else {
        (succeeded as f64 * 100.0 / payments.len() as f64).round() as u32
    };

    let next_scheduled_payout = lines
        .iter()
        .filter(|line| line.status == PayoutStatus::Pending)
        .min_by_key(|line| line.scheduled)
        .cloned();

    BalanceSummary {
        total_gmv,
        refunds,
        success_rate,
        payments: payments.len(),
        next_scheduled_payout,
    }
}

pub struct PaymentService;

impl PaymentService {
    #[instrument(skip(state))]
    pub async fn list_payments(
        state: &AppState,
        filters: PaymentFilterParams,
    ) -> PaginatedPaymentsResponse {
        let page_size = filters.pagination.page_size(state.rows_config.bounds);

        let matched: Vec<Payment> = {
            let ledger = state.ledger.read().await;
            ledger
                .payments()
                .iter()
                .filter(|p| filters.matches(p))
                .cloned()
                .collect()
        };

        let (data, meta) = paginate(matched, filters.pagination.page(), page_size);
        PaginatedPaymentsResponse { data, meta }
    }

    #[instrument(skip(state))]
    pub async fn record_payment(state: &AppState, dto: RecordPaymentDto) -> Payment {
        let payment = state.ledger.write().await.record_payment(dto);
        info!(id = %payment.id, amount = payment.amount, "Payment recorded");
        payment
    }

    #[instrument(skip(state))]
    pub async fn schedule_payout(state: &AppState, dto: SchedulePayoutDto) -> Payout {
        let payout = state.ledger.write().await.schedule_payout(dto);
        info!(id = %payout.id, organizer = %payout.organizer, "Payout scheduled");
        payout
    }

    /// Lists payouts for the grouping. Without an explicit page size the
    /// table gets half the main table's rows, never fewer than 8.
    #[instrument(skip(state))]
    pub async fn list_payouts(
        state: &AppState,
        filters: PayoutFilterParams,
        settlement: NaiveDate,
    ) -> PaginatedPayoutsResponse {
        let bounds = state.rows_config.bounds;
        let page_size = match filters.pagination.page_size {
            Some(_) => filters.pagination.page_size(bounds),
            None => {
                let rows = filters
                    .pagination
                    .viewport_height
                    .map_or(bounds.min, |height| calc_rows_for_height(height, bounds));
                i64::from(secondary_page_size(rows))
            }
        };

        let group_by = filters.group_by.unwrap_or_default();
        let lines = state.ledger.read().await.payout_lines(group_by, settlement);

        let (data, meta) = paginate(lines, filters.pagination.page(), page_size);
        PaginatedPayoutsResponse {
            group_by,
            data,
            meta,
        }
    }

    #[instrument(skip(state))]
    pub async fn summary(
        state: &AppState,
        group_by: PayoutGroupBy,
        settlement: NaiveDate,
    ) -> BalanceSummary {
        let ledger = state.ledger.read().await;
        let lines = ledger.payout_lines(group_by, settlement);
        balance_summary(ledger.payments(), &lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use choptop_models::payments::PaymentMethod;

    fn sale(event: &str, amount: i64, status: PaymentStatus) -> RecordPaymentDto {
        RecordPaymentDto {
            kind: PaymentKind::Sale,
            method: PaymentMethod::Mpesa,
            status,
            amount,
            event: event.to_string(),
            created: DateTime::<Utc>::from_timestamp(1_764_000_000, 0),
        }
    }

    fn refund(event: &str, amount: i64, status: PaymentStatus) -> RecordPaymentDto {
        RecordPaymentDto {
            kind: PaymentKind::Refund,
            ..sale(event, amount, status)
        }
    }

    fn settlement() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()
    }

    #[test]
    fn test_ledger_assigns_sequential_ids() {
        let mut ledger = PaymentLedger::default();
        let first = ledger.record_payment(sale("Afro Night Jam", 1200, PaymentStatus::Succeeded));
        let second = ledger.record_payment(sale("City Lights", 800, PaymentStatus::Pending));
        assert_eq!(first.id, "TXN-10001");
        assert_eq!(second.id, "TXN-10002");

        let payout = ledger.schedule_payout(SchedulePayoutDto {
            organizer: "Kampala Live".to_string(),
            amount: 5000,
            method: PayoutMethod::Bank,
            scheduled: settlement(),
        });
        assert_eq!(payout.id, "PO-101");
        assert_eq!(payout.status, PayoutStatus::Pending);
    }

    #[test]
    fn test_payouts_by_event_sum_in_first_appearance_order() {
        let mut ledger = PaymentLedger::default();
        ledger.record_payment(sale("City Lights", 500, PaymentStatus::Succeeded));
        ledger.record_payment(sale("Afro Night Jam", 1200, PaymentStatus::Pending));
        ledger.record_payment(sale("City Lights", 300, PaymentStatus::Succeeded));
        ledger.record_payment(sale("City Lights", 9999, PaymentStatus::Failed));
        ledger.record_payment(refund("Afro Night Jam", 200, PaymentStatus::Succeeded));

        let lines = payouts_by_event(ledger.payments(), settlement());
        assert_eq!(lines.len(), 2);

        assert_eq!(lines[0].id, "POE-1");
        assert_eq!(lines[0].payee, "City Lights");
        assert_eq!(lines[0].amount, 800);
        assert_eq!(lines[0].scheduled, NaiveDate::from_ymd_opt(2025, 12, 2).unwrap());

        assert_eq!(lines[1].id, "POE-2");
        assert_eq!(lines[1].payee, "Afro Night Jam");
        assert_eq!(lines[1].amount, 1200);
        assert_eq!(lines[1].method, PayoutMethod::Mixed);
        assert_eq!(lines[1].scheduled, NaiveDate::from_ymd_opt(2025, 12, 3).unwrap());
    }

    #[test]
    fn test_balance_summary() {
        let mut ledger = PaymentLedger::default();
        ledger.record_payment(sale("City Lights", 500, PaymentStatus::Succeeded));
        ledger.record_payment(sale("City Lights", 700, PaymentStatus::Pending));
        ledger.record_payment(refund("City Lights", 100, PaymentStatus::Failed));

        let lines = ledger.payout_lines(PayoutGroupBy::Event, settlement());
        let summary = balance_summary(ledger.payments(), &lines);

        assert_eq!(summary.total_gmv, 500);
        assert_eq!(summary.refunds, 100);
        assert_eq!(summary.success_rate, 33);
        assert_eq!(summary.payments, 3);
        assert_eq!(
            summary.next_scheduled_payout.map(|line| line.amount),
            Some(1200)
        );
    }

    #[test]
    fn test_balance_summary_without_payments() {
        let summary = balance_summary(&[], &[]);
        assert_eq!(summary.success_rate, 0);
        assert_eq!(summary.total_gmv, 0);
        assert!(summary.next_scheduled_payout.is_none());
    }

    #[test]
    fn test_next_scheduled_payout_by_organizer_is_earliest_pending() {
        let mut ledger = PaymentLedger::default();
        for (organizer, day) in [("Late Org", 20), ("Early Org", 5), ("Mid Org", 10)] {
            ledger.schedule_payout(SchedulePayoutDto {
                organizer: organizer.to_string(),
                amount: 1000,
                method: PayoutMethod::Mpesa,
                scheduled: NaiveDate::from_ymd_opt(2025, 12, day).unwrap(),
            });
        }

        let lines = ledger.payout_lines(PayoutGroupBy::Organizer, settlement());
        let summary = balance_summary(ledger.payments(), &lines);
        assert_eq!(
            summary.next_scheduled_payout.map(|line| line.payee),
            Some("Early Org".to_string())
        );
    }
}
