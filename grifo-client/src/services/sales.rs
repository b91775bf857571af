//! Sales API

use crate::{ClientResult, HttpClient};
use shared::models::sale::Sale;
use shared::request::{CreateSaleRequest, SaleQuery};
use shared::response::ApiResponse;

/// Sales endpoints
#[derive(Debug, Clone, Copy)]
pub struct SaleService<'a> {
    http: &'a HttpClient,
}

impl<'a> SaleService<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Record a new sale
    pub async fn create(&self, request: &CreateSaleRequest) -> ClientResult<Sale> {
        let resp: ApiResponse<Sale> = self.http.post("/sales", request).await?;
        HttpClient::require_data(resp, "sale")
    }

    /// The N most recent sales, for the dashboard list
    pub async fn recent(&self, limit: u32) -> ClientResult<Vec<Sale>> {
        self.list(&SaleQuery::recent(limit)).await
    }

    /// Sales matching a query
    pub async fn list(&self, query: &SaleQuery) -> ClientResult<Vec<Sale>> {
        let resp: ApiResponse<Vec<Sale>> = self.http.get_query("/sales", query).await?;
        HttpClient::require_data(resp, "sales")
    }

    /// Cancel a recorded sale
    pub async fn cancel(&self, id: i64) -> ClientResult<Sale> {
        let resp: ApiResponse<Sale> = self
            .http
            .post(&format!("/sales/{id}/cancel"), &serde_json::json!({}))
            .await?;
        HttpClient::require_data(resp, "sale")
    }
}
