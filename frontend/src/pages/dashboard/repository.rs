use crate::api::{ApiClient, ApiError, DashboardSummary, Employee};

/// Rows shown in the "Recent Employees" table.
pub const RECENT_LIMIT: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardData {
    pub summary: DashboardSummary,
    pub recent: Vec<Employee>,
}

impl DashboardData {
    /// Keeps the first rows of the roster in backend order.
    pub fn new(summary: DashboardSummary, roster: Vec<Employee>) -> Self {
        let recent = roster.into_iter().take(RECENT_LIMIT).collect();
        Self { summary, recent }
    }
}

/// Fetches the summary and the roster concurrently; either failure fails the load.
pub async fn load_dashboard(api: &ApiClient) -> Result<DashboardData, ApiError> {
    let (summary, roster) = futures::try_join!(api.get_dashboard(), api.list_employees())?;
    Ok(DashboardData::new(summary, roster))
}
