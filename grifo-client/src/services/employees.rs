//! Employees API

use crate::{ClientResult, HttpClient};
use shared::models::employee::{Employee, EmployeeCreate, EmployeeUpdate};
use shared::response::ApiResponse;

/// Employee management endpoints
#[derive(Debug, Clone, Copy)]
pub struct EmployeeService<'a> {
    http: &'a HttpClient,
}

impl<'a> EmployeeService<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// All employees
    pub async fn list(&self) -> ClientResult<Vec<Employee>> {
        let resp: ApiResponse<Vec<Employee>> = self.http.get("/employees").await?;
        HttpClient::require_data(resp, "employees")
    }

    /// Register a new employee
    pub async fn create(&self, employee: &EmployeeCreate) -> ClientResult<Employee> {
        let resp: ApiResponse<Employee> = self.http.post("/employees", employee).await?;
        HttpClient::require_data(resp, "employee")
    }

    /// Update an employee
    pub async fn update(&self, id: i64, changes: &EmployeeUpdate) -> ClientResult<Employee> {
        let resp: ApiResponse<Employee> =
            self.http.put(&format!("/employees/{id}"), changes).await?;
        HttpClient::require_data(resp, "employee")
    }

    /// Deactivate an employee (soft delete)
    pub async fn deactivate(&self, id: i64) -> ClientResult<Employee> {
        self.update(
            id,
            &EmployeeUpdate {
                full_name: None,
                document: None,
                phone: None,
                position: None,
                is_active: Some(false),
            },
        )
        .await
    }
}
