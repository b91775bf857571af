//! Data models
//!
//! Shared between the service layer and any frontend (via API).
//! All IDs are `i64` (backend INTEGER primary keys).

pub mod credit;
pub mod customer;
pub mod employee;
pub mod fuel;
pub mod payment;
pub mod product;
pub mod pump;
pub mod report;
pub mod sale;
pub mod tank;
pub mod user;

// Re-exports
pub use credit::*;
pub use customer::*;
pub use employee::*;
pub use fuel::*;
pub use payment::*;
pub use product::*;
pub use pump::*;
pub use report::*;
pub use sale::*;
pub use tank::*;
pub use user::*;
