//! Credits API

use crate::{ClientResult, HttpClient};
use shared::models::credit::{CreditPaymentCreate, CreditRecord};
use shared::response::ApiResponse;

/// Credit tracking endpoints
#[derive(Debug, Clone, Copy)]
pub struct CreditService<'a> {
    http: &'a HttpClient,
}

impl<'a> CreditService<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// All credits with an outstanding balance
    pub async fn outstanding(&self) -> ClientResult<Vec<CreditRecord>> {
        let resp: ApiResponse<Vec<CreditRecord>> = self.http.get("/credits/outstanding").await?;
        HttpClient::require_data(resp, "credits")
    }

    /// Credits for one customer
    pub async fn by_customer(&self, client_id: i64) -> ClientResult<Vec<CreditRecord>> {
        let resp: ApiResponse<Vec<CreditRecord>> = self
            .http
            .get(&format!("/clients/{client_id}/credits"))
            .await?;
        HttpClient::require_data(resp, "credits")
    }

    /// Register a payment against a credit
    pub async fn register_payment(
        &self,
        payment: &CreditPaymentCreate,
    ) -> ClientResult<CreditRecord> {
        let resp: ApiResponse<CreditRecord> = self
            .http
            .post(&format!("/credits/{}/payments", payment.credit_id), payment)
            .await?;
        HttpClient::require_data(resp, "credit")
    }
}
