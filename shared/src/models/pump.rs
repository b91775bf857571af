//! Pump and Nozzle Models

use serde::{Deserialize, Serialize};

/// Dispensing nozzle: the point on a pump tied to one fuel product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Nozzle {
    pub id: i64,
    pub pump_id: i64,
    pub product_id: i64,
    /// Position on the pump (1-based)
    pub number: i32,
    pub is_active: bool,
}

/// Fuel pump ("surtidor") with its nozzles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pump {
    pub id: i64,
    pub number: i32,
    pub name: String,
    pub is_active: bool,
    #[serde(default)]
    pub nozzles: Vec<Nozzle>,
}

impl Pump {
    /// First nozzle dispensing the given product, if any
    pub fn nozzle_for_product(&self, product_id: i64) -> Option<&Nozzle> {
        self.nozzles.iter().find(|n| n.product_id == product_id)
    }

    /// First nozzle on the pump, if any
    pub fn first_nozzle(&self) -> Option<&Nozzle> {
        self.nozzles.first()
    }
}
