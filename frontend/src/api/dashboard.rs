use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, DashboardSummary},
};

impl ApiClient {
    pub async fn get_dashboard(&self) -> Result<DashboardSummary, ApiError> {
        let request = self.request(Method::GET, "/api/dashboard").await;
        self.send_json(request).await
    }
}
