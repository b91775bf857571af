//! Shared types for the Grifo back-office
//!
//! Common types used across the workspace: data models, API response
//! envelopes, request payloads and the pure pricing/aging calculations.

pub mod models;
pub mod pricing;
pub mod request;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use pricing::{EntryMode, PricingInput, PricingResult};
pub use response::{ApiResponse, Paginated, Pagination};
