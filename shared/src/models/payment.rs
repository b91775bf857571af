//! Payment Method Model
//!
//! Closed set of payment methods accepted at the station. Each maps to the
//! backend's numeric id and wire name via a static lookup.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Placeholder shown for historical sales whose method cannot be resolved
pub const UNKNOWN_METHOD_LABEL: &str = "—";

/// Days of credit granted by default when a sale is on credit
pub const DEFAULT_CREDIT_TERM_DAYS: u64 = 30;

/// Payment method for a sale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Credit,
    Card,
    Transfer,
}

impl PaymentMethod {
    /// Backend identifier
    pub fn id(&self) -> i64 {
        match self {
            PaymentMethod::Cash => 1,
            PaymentMethod::Credit => 2,
            PaymentMethod::Card => 3,
            PaymentMethod::Transfer => 4,
        }
    }

    /// Wire name expected by the backend
    pub fn wire_name(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Credit => "credit",
            PaymentMethod::Card => "card",
            PaymentMethod::Transfer => "transfer",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Efectivo",
            PaymentMethod::Credit => "Crédito",
            PaymentMethod::Card => "Tarjeta",
            PaymentMethod::Transfer => "Transferencia",
        }
    }

    /// Whether this method records an outstanding credit
    pub fn is_credit(&self) -> bool {
        matches!(self, PaymentMethod::Credit)
    }

    /// Default due date for a sale paid with this method.
    ///
    /// Only credit sales carry a due date; every other method clears it.
    pub fn default_due_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        self.is_credit()
            .then(|| today + Days::new(DEFAULT_CREDIT_TERM_DAYS))
    }

    /// Resolve a backend id back to a method
    pub fn from_id(id: i64) -> Option<PaymentMethod> {
        match id {
            1 => Some(PaymentMethod::Cash),
            2 => Some(PaymentMethod::Credit),
            3 => Some(PaymentMethod::Card),
            4 => Some(PaymentMethod::Transfer),
            _ => None,
        }
    }

    /// Resolve a stored wire name back to a method
    pub fn from_wire_name(name: &str) -> Option<PaymentMethod> {
        match name {
            "cash" => Some(PaymentMethod::Cash),
            "credit" => Some(PaymentMethod::Credit),
            "card" => Some(PaymentMethod::Card),
            "transfer" => Some(PaymentMethod::Transfer),
            _ => None,
        }
    }

    /// Display label for a historical sale, resolving by name first, then
    /// numeric id. Unresolvable values fall back to a placeholder instead of
    /// failing.
    pub fn display_label(name: Option<&str>, id: Option<i64>) -> &'static str {
        name.and_then(PaymentMethod::from_wire_name)
            .or_else(|| id.and_then(PaymentMethod::from_id))
            .map(|m| m.label())
            .unwrap_or(UNKNOWN_METHOD_LABEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_and_wire_name_round_trip() {
        for method in [
            PaymentMethod::Cash,
            PaymentMethod::Credit,
            PaymentMethod::Card,
            PaymentMethod::Transfer,
        ] {
            assert_eq!(PaymentMethod::from_id(method.id()), Some(method));
            assert_eq!(
                PaymentMethod::from_wire_name(method.wire_name()),
                Some(method)
            );
        }
    }

    #[test]
    fn only_credit_gets_a_default_due_date() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        assert_eq!(
            PaymentMethod::Credit.default_due_date(today),
            Some(NaiveDate::from_ymd_opt(2026, 8, 31).unwrap())
        );
        assert_eq!(PaymentMethod::Cash.default_due_date(today), None);
        assert_eq!(PaymentMethod::Card.default_due_date(today), None);
        assert_eq!(PaymentMethod::Transfer.default_due_date(today), None);
    }

    #[test]
    fn display_label_falls_back_to_placeholder() {
        assert_eq!(PaymentMethod::display_label(Some("card"), None), "Tarjeta");
        assert_eq!(PaymentMethod::display_label(None, Some(2)), "Crédito");
        // name wins over id when both resolve
        assert_eq!(
            PaymentMethod::display_label(Some("cash"), Some(3)),
            "Efectivo"
        );
        assert_eq!(
            PaymentMethod::display_label(Some("bitcoin"), Some(99)),
            UNKNOWN_METHOD_LABEL
        );
        assert_eq!(PaymentMethod::display_label(None, None), UNKNOWN_METHOD_LABEL);
    }
}
