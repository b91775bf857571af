//! Tanks API

use crate::{ClientResult, HttpClient};
use shared::models::tank::Tank;
use shared::response::ApiResponse;

/// Tank monitoring endpoints (inventory page)
#[derive(Debug, Clone, Copy)]
pub struct TankService<'a> {
    http: &'a HttpClient,
}

impl<'a> TankService<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Current tank readings
    pub async fn tanks(&self) -> ClientResult<Vec<Tank>> {
        let resp: ApiResponse<Vec<Tank>> = self.http.get("/tanks").await?;
        HttpClient::require_data(resp, "tanks")
    }

    /// Tanks currently below the low-level threshold
    pub async fn low_tanks(&self) -> ClientResult<Vec<Tank>> {
        let mut tanks = self.tanks().await?;
        tanks.retain(|t| t.is_low());
        Ok(tanks)
    }
}
