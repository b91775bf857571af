//! Reports API
//!
//! Tabular/chart report data plus the dashboard's overdue-credit alerts.
//! The backend's aging classification is authoritative; the local
//! classifier only fills in records the backend left unclassified.

use chrono::NaiveDate;

use crate::{ClientResult, HttpClient};
use shared::models::credit::{CreditRecord, CreditStatus};
use shared::models::report::{CreditAgingReport, SalesSummary};
use shared::request::DateRange;
use shared::response::ApiResponse;

/// Report endpoints
#[derive(Debug, Clone, Copy)]
pub struct ReportService<'a> {
    http: &'a HttpClient,
}

impl<'a> ReportService<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Aggregated sales over a date range
    pub async fn sales_summary(&self, range: DateRange) -> ClientResult<SalesSummary> {
        let resp: ApiResponse<SalesSummary> = self
            .http
            .get_query("/reports/sales-summary", &range)
            .await?;
        HttpClient::require_data(resp, "summary")
    }

    /// Credit aging report with every record carrying a resolved status
    pub async fn credit_aging(&self, today: NaiveDate) -> ClientResult<CreditAgingReport> {
        let resp: ApiResponse<CreditAgingReport> = self.http.get("/reports/credit-aging").await?;
        let mut report = HttpClient::require_data(resp, "report")?;
        resolve_statuses(&mut report.records, today);
        Ok(report)
    }
}

/// Fill in missing aging buckets from the due date. Backend-provided
/// statuses are kept untouched.
pub fn resolve_statuses(records: &mut [CreditRecord], today: NaiveDate) {
    for record in records {
        if record.status.is_none() {
            record.status = Some(CreditStatus::classify(record.due_date, today));
        }
    }
}

/// Free-text alert lines for the dashboard: one per overdue credit with a
/// remaining balance, worst first.
pub fn overdue_alerts(records: &[CreditRecord], today: NaiveDate) -> Vec<String> {
    let mut overdue: Vec<&CreditRecord> = records
        .iter()
        .filter(|r| r.balance() > 0.0 && r.is_overdue(today))
        .collect();
    overdue.sort_by_key(|r| std::cmp::Reverse(r.days_overdue(today)));

    overdue
        .iter()
        .map(|r| {
            format!(
                "{}: {} — {:.2} vencido hace {} días",
                r.effective_status(today).label(),
                r.client_name,
                r.balance(),
                r.days_overdue(today)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(id: i64, due: NaiveDate, paid: f64, status: Option<CreditStatus>) -> CreditRecord {
        CreditRecord {
            id,
            sale_id: id * 10,
            client_id: id,
            client_name: format!("Cliente {id}"),
            due_date: due,
            amount_due: 100.0,
            amount_paid: paid,
            status,
        }
    }

    #[test]
    fn resolve_statuses_keeps_backend_values() {
        let today = date(2026, 8, 25);
        let mut records = vec![
            record(1, date(2026, 6, 1), 0.0, Some(CreditStatus::Warning)),
            record(2, date(2026, 8, 20), 0.0, None),
        ];
        resolve_statuses(&mut records, today);
        // backend said warning; local math would say critical
        assert_eq!(records[0].status, Some(CreditStatus::Warning));
        // 5 days overdue, classified locally
        assert_eq!(records[1].status, Some(CreditStatus::Warning));
    }

    #[test]
    fn overdue_alerts_skips_settled_and_current_credits() {
        let today = date(2026, 8, 25);
        let records = vec![
            record(1, date(2026, 8, 30), 0.0, None), // not due yet
            record(2, date(2026, 8, 20), 100.0, None), // overdue but fully paid
            record(3, date(2026, 8, 10), 40.0, None), // 15 days overdue
            record(4, date(2026, 6, 1), 0.0, None),  // 85 days overdue
        ];
        let alerts = overdue_alerts(&records, today);
        assert_eq!(alerts.len(), 2);
        // worst first
        assert!(alerts[0].contains("Cliente 4"));
        assert!(alerts[0].contains("85 días"));
        assert!(alerts[1].contains("Cliente 3"));
        assert!(alerts[1].contains("60.00"));
    }
}
