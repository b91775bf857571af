//! Tank Model
//!
//! Storage tank levels for the inventory monitoring page.

use serde::{Deserialize, Serialize};

use super::fuel::FuelType;

/// Fill fraction below which a tank is flagged as low
pub const LOW_LEVEL_THRESHOLD: f64 = 0.20;

/// Storage tank with its current reading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tank {
    pub id: i64,
    pub name: String,
    pub fuel: FuelType,
    /// Total capacity in gallons
    pub capacity: f64,
    /// Current level in gallons, as last reported
    pub current_level: f64,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Tank {
    /// Fill fraction in [0, 1]; zero-capacity tanks read as empty
    pub fn fill_percent(&self) -> f64 {
        if self.capacity <= 0.0 {
            return 0.0;
        }
        (self.current_level / self.capacity).clamp(0.0, 1.0)
    }

    /// Whether the tank is below the low-level threshold
    pub fn is_low(&self) -> bool {
        self.fill_percent() < LOW_LEVEL_THRESHOLD
    }
}
