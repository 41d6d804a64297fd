use reqwest::Method;

use super::{
    client::{path_segment, ApiClient},
    types::{ApiError, Employee, NewEmployee},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let request = self.request(Method::GET, "/api/employees").await;
        self.send_json(request).await
    }

    pub async fn get_employee(&self, employee_id: &str) -> Result<Employee, ApiError> {
        let path = format!("/api/employees/{}", path_segment(employee_id));
        let request = self.request(Method::GET, &path).await;
        self.send_json(request).await
    }

    pub async fn create_employee(&self, payload: &NewEmployee) -> Result<Employee, ApiError> {
        let request = self
            .request(Method::POST, "/api/employees")
            .await
            .json(payload);
        self.send_json(request).await
    }

    /// Deletes the employee; the backend cascades to their attendance records.
    pub async fn delete_employee(&self, employee_id: &str) -> Result<(), ApiError> {
        let path = format!("/api/employees/{}", path_segment(employee_id));
        let request = self.request(Method::DELETE, &path).await;
        self.send_ack(request).await
    }
}
