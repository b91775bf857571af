//! Grifo Client - HTTP client for the station backend
//!
//! Typed service wrappers over the Grifo REST API, plus the sale submission
//! assembler and the recent-sales poller used by the back-office dashboard.

pub mod config;
pub mod error;
pub mod http;
pub mod nozzle;
pub mod poller;
pub mod sale_form;
pub mod services;
pub mod session;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use sale_form::{SaleForm, SaleFormError};
pub use session::Session;

// Re-export shared types for convenience
pub use shared::response::ApiResponse;
