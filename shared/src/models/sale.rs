//! Sale Model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::payment::PaymentMethod;

/// Sale status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SaleStatus {
    #[default]
    Completed,
    Pending,
    Cancelled,
}

/// Recorded sale, as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    pub user_id: i64,
    pub client_id: Option<i64>,
    pub nozzle_id: i64,
    pub product_name: Option<String>,
    /// Gallons dispensed
    pub quantity: f64,
    /// Tax-exclusive subtotal
    pub total_amount: f64,
    /// Tax-inclusive amount actually charged
    pub final_amount: f64,
    pub discount_amount: Option<f64>,
    pub payment_method_id: Option<i64>,
    pub payment_method: Option<String>,
    pub status: SaleStatus,
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Sale {
    /// Display label for the payment method; falls back to a placeholder
    /// for unresolvable historical values.
    pub fn payment_label(&self) -> &'static str {
        PaymentMethod::display_label(self.payment_method.as_deref(), self.payment_method_id)
    }
}
