//! Fuel Type Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fuel types sold at the station
///
/// Each fuel type carries one fixed IGV tax rate, defined at compile time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FuelType {
    #[default]
    Diesel,
    Regular,
    Premium,
}

impl FuelType {
    /// IGV tax rate for this fuel type (fraction, not percent)
    pub fn igv_rate(&self) -> Decimal {
        match self {
            // Decimal::new(mantissa, scale): 12 / 10^2 = 0.12
            FuelType::Diesel => Decimal::new(12, 2),
            FuelType::Regular => Decimal::new(16, 2),
            FuelType::Premium => Decimal::new(18, 2),
        }
    }

    /// Display name
    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Diesel => "Diesel",
            FuelType::Regular => "Regular",
            FuelType::Premium => "Premium",
        }
    }

    /// All fuel types, for selectors and reports
    pub fn all() -> [FuelType; 3] {
        [FuelType::Diesel, FuelType::Regular, FuelType::Premium]
    }
}
