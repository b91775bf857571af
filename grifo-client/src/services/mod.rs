//! Typed service wrappers over the backend REST API
//!
//! One service struct per backend area; all are thin borrows over a shared
//! [`HttpClient`](crate::HttpClient) and return `ClientResult`.

pub mod catalog;
pub mod credits;
pub mod employees;
pub mod reports;
pub mod sales;
pub mod tanks;
pub mod users;

pub use catalog::CatalogService;
pub use credits::CreditService;
pub use employees::EmployeeService;
pub use reports::ReportService;
pub use sales::SaleService;
pub use tanks::TankService;
pub use users::UserService;
