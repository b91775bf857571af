//! Report Models
//!
//! Pre-aggregated summaries returned by the report endpoints.

use serde::{Deserialize, Serialize};

use super::credit::CreditRecord;
use super::fuel::FuelType;

/// Sales totals for one fuel type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelSummary {
    pub fuel: FuelType,
    pub quantity: f64,
    pub amount: f64,
}

/// Aggregated sales over a date range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesSummary {
    pub sale_count: u64,
    pub total_amount: f64,
    pub total_tax: f64,
    #[serde(default)]
    pub by_fuel: Vec<FuelSummary>,
}

/// Outstanding totals per aging bucket
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgingBuckets {
    pub normal: f64,
    pub warning: f64,
    pub critical: f64,
}

/// Credit aging report: backend buckets plus the individual records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditAgingReport {
    #[serde(default)]
    pub buckets: AgingBuckets,
    #[serde(default)]
    pub records: Vec<CreditRecord>,
}
