//! Credit Model
//!
//! Outstanding credit records and the aging classification used by both the
//! credits report and the dashboard alert list. The classification lives
//! here, once, as a pure function of `(due_date, today)`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Days overdue past which a credit turns from warning to critical
pub const CRITICAL_OVERDUE_DAYS: i64 = 30;

/// Aging bucket for an outstanding credit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreditStatus {
    /// Not yet overdue
    #[default]
    Normal,
    /// Overdue by 1..=30 days
    Warning,
    /// Overdue by more than 30 days
    Critical,
}

impl CreditStatus {
    /// Classify a due date against a reference date.
    ///
    /// Recomputed on every render from the current date, never cached.
    pub fn classify(due_date: NaiveDate, today: NaiveDate) -> CreditStatus {
        let overdue = days_overdue(due_date, today);
        if overdue == 0 {
            CreditStatus::Normal
        } else if overdue <= CRITICAL_OVERDUE_DAYS {
            CreditStatus::Warning
        } else {
            CreditStatus::Critical
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            CreditStatus::Normal => "Al día",
            CreditStatus::Warning => "Por cobrar",
            CreditStatus::Critical => "Crítico",
        }
    }
}

/// Days a credit is overdue, clamped to zero for future due dates
pub fn days_overdue(due_date: NaiveDate, today: NaiveDate) -> i64 {
    (today - due_date).num_days().max(0)
}

/// Outstanding credit record (read-only, created by the backend when a
/// credit sale is recorded)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditRecord {
    pub id: i64,
    pub sale_id: i64,
    pub client_id: i64,
    pub client_name: String,
    pub due_date: NaiveDate,
    pub amount_due: f64,
    pub amount_paid: f64,
    /// Backend-computed aging bucket, when the endpoint provides one.
    /// Authoritative over the locally computed status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CreditStatus>,
}

impl CreditRecord {
    /// Remaining balance on this credit
    pub fn balance(&self) -> f64 {
        (self.amount_due - self.amount_paid).max(0.0)
    }

    /// Days overdue relative to a reference date
    pub fn days_overdue(&self, today: NaiveDate) -> i64 {
        days_overdue(self.due_date, today)
    }

    /// Whether the credit is past its due date
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.days_overdue(today) > 0
    }

    /// Effective aging bucket: the backend's classification when present,
    /// otherwise computed locally from the due date.
    pub fn effective_status(&self, today: NaiveDate) -> CreditStatus {
        self.status
            .unwrap_or_else(|| CreditStatus::classify(self.due_date, today))
    }
}

/// Payload to register a payment against a credit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditPaymentCreate {
    pub credit_id: i64,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn classification_buckets() {
        let due = date(2026, 8, 1);
        // not due yet, and due today, are both normal
        assert_eq!(CreditStatus::classify(due, date(2026, 7, 20)), CreditStatus::Normal);
        assert_eq!(CreditStatus::classify(due, due), CreditStatus::Normal);
        // 1 and 30 days overdue: warning
        assert_eq!(CreditStatus::classify(due, date(2026, 8, 2)), CreditStatus::Warning);
        assert_eq!(CreditStatus::classify(due, date(2026, 8, 31)), CreditStatus::Warning);
        // 31 days overdue: critical
        assert_eq!(CreditStatus::classify(due, date(2026, 9, 1)), CreditStatus::Critical);
    }

    #[test]
    fn days_overdue_clamps_to_zero() {
        let due = date(2026, 8, 10);
        assert_eq!(days_overdue(due, date(2026, 8, 1)), 0);
        assert_eq!(days_overdue(due, date(2026, 8, 10)), 0);
        assert_eq!(days_overdue(due, date(2026, 8, 15)), 5);
    }

    #[test]
    fn backend_status_is_authoritative() {
        let record = CreditRecord {
            id: 1,
            sale_id: 10,
            client_id: 5,
            client_name: "Transportes Sur".to_string(),
            due_date: date(2026, 1, 1),
            amount_due: 500.0,
            amount_paid: 100.0,
            // backend says warning even though local math says critical
            status: Some(CreditStatus::Warning),
        };
        assert_eq!(record.effective_status(date(2026, 8, 1)), CreditStatus::Warning);

        let local = CreditRecord { status: None, ..record };
        assert_eq!(local.effective_status(date(2026, 8, 1)), CreditStatus::Critical);
        assert_eq!(local.balance(), 400.0);
    }
}
