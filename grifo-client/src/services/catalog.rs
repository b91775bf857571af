//! Catalog API
//!
//! Reference data loaded before a sale can be entered: products, pumps with
//! their nozzles, and customers.

use crate::{ClientResult, HttpClient};
use shared::models::customer::{Customer, CustomerCreate};
use shared::models::product::{Product, ProductUpdate};
use shared::models::pump::{Nozzle, Pump};
use shared::response::ApiResponse;

/// Reference-data endpoints
#[derive(Debug, Clone, Copy)]
pub struct CatalogService<'a> {
    http: &'a HttpClient,
}

impl<'a> CatalogService<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Active fuel products
    pub async fn products(&self) -> ClientResult<Vec<Product>> {
        let resp: ApiResponse<Vec<Product>> = self.http.get("/products").await?;
        HttpClient::require_data(resp, "products")
    }

    /// Update a product (admin price changes)
    pub async fn update_product(&self, id: i64, changes: &ProductUpdate) -> ClientResult<Product> {
        let resp: ApiResponse<Product> =
            self.http.put(&format!("/products/{id}"), changes).await?;
        HttpClient::require_data(resp, "product")
    }

    /// Pumps with their nozzles
    pub async fn pumps(&self) -> ClientResult<Vec<Pump>> {
        let resp: ApiResponse<Vec<Pump>> = self.http.get("/pumps").await?;
        HttpClient::require_data(resp, "pumps")
    }

    /// Nozzles for one pump
    pub async fn nozzles(&self, pump_id: i64) -> ClientResult<Vec<Nozzle>> {
        let resp: ApiResponse<Vec<Nozzle>> =
            self.http.get(&format!("/pumps/{pump_id}/nozzles")).await?;
        HttpClient::require_data(resp, "nozzles")
    }

    /// All customers
    pub async fn customers(&self) -> ClientResult<Vec<Customer>> {
        let resp: ApiResponse<Vec<Customer>> = self.http.get("/clients").await?;
        HttpClient::require_data(resp, "clients")
    }

    /// Customers matching a free-text search (credit-sale client picker)
    pub async fn search_customers(&self, query: &str) -> ClientResult<Vec<Customer>> {
        let resp: ApiResponse<Vec<Customer>> = self
            .http
            .get_query("/clients", &[("search", query)])
            .await?;
        HttpClient::require_data(resp, "clients")
    }

    /// Register a new customer
    pub async fn create_customer(&self, customer: &CustomerCreate) -> ClientResult<Customer> {
        let resp: ApiResponse<Customer> = self.http.post("/clients", customer).await?;
        HttpClient::require_data(resp, "client")
    }
}
