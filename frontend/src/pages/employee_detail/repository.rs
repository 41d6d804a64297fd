use crate::api::{ApiClient, ApiError, AttendanceQuery, AttendanceRecord, Employee};

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDetail {
    pub employee: Employee,
    pub records: Vec<AttendanceRecord>,
}

/// Profile first; history is only requested once the employee is known to exist.
pub async fn load_employee_detail(
    api: &ApiClient,
    employee_id: &str,
    query: AttendanceQuery,
) -> Result<EmployeeDetail, ApiError> {
    let employee = api.get_employee(employee_id).await?;
    let records = api.list_attendance(employee_id, query).await?;
    Ok(EmployeeDetail { employee, records })
}
