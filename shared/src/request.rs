//! Outbound request payloads
//!
//! DTOs assembled by the client immediately before a call; field names match
//! the backend REST contract.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::sale::SaleStatus;

/// `POST /sales` body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateSaleRequest {
    pub user_id: i64,
    pub client_id: Option<i64>,
    pub nozzle_id: i64,
    /// Gallons dispensed
    pub quantity: f64,
    /// Tax-exclusive subtotal
    pub total_amount: f64,
    /// Tax-inclusive amount charged
    pub final_amount: f64,
    pub payment_method_id: i64,
    pub payment_method: String,
    pub status: SaleStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// `GET /sales` query
#[derive(Debug, Clone, Serialize, Default)]
pub struct SaleQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
}

impl SaleQuery {
    /// Query for the N most recent sales
    pub fn recent(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Default::default()
        }
    }
}

/// Date range for report endpoints
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}
