//! Product Model

use serde::{Deserialize, Serialize};

use super::fuel::FuelType;

/// Fuel product as sold at the station (one per fuel grade)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub fuel: FuelType,
    /// Price per gallon, tax exclusive
    pub unit_price: f64,
    pub is_active: bool,
}

/// Update product payload (price changes come from the admin pages)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
