use crate::api::{ApiClient, ApiError, Employee};

pub async fn fetch_roster(api: &ApiClient) -> Result<Vec<Employee>, ApiError> {
    api.list_employees().await
}

/// Deletes `employee` and hands it back so the caller can report on it.
pub async fn delete_employee(api: &ApiClient, employee: Employee) -> Result<Employee, ApiError> {
    api.delete_employee(&employee.employee_id).await?;
    Ok(employee)
}

#[cfg(all(test, not(target_arch = "wasm32"), not(coverage)))]
mod api_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::test_support::helpers::employee;
    use serde_json::json;

    #[tokio::test]
    async fn delete_returns_the_removed_employee() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE).path("/api/employees/EMP001");
            then.status(200).json_body(json!({ "message": "deleted" }));
        });

        let api = ApiClient::new_with_base_url(server.url(""));
        let removed = delete_employee(&api, employee("EMP001", "Jane Doe", "Engineering"))
            .await
            .unwrap();
        assert_eq!(removed.full_name, "Jane Doe");
        assert_eq!(server.hits(DELETE, "/api/employees/EMP001"), 1);
    }

    #[tokio::test]
    async fn delete_failure_keeps_detail() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE).path("/api/employees/EMP404");
            then.status(404)
                .json_body(json!({ "detail": "Employee with ID 'EMP404' not found" }));
        });

        let api = ApiClient::new_with_base_url(server.url(""));
        let err = delete_employee(&api, employee("EMP404", "Ghost", "Legal"))
            .await
            .unwrap_err();
        assert_eq!(
            err.message_or("Failed to delete employee"),
            "Employee with ID 'EMP404' not found"
        );
    }

    #[tokio::test]
    async fn roster_is_returned_in_backend_order() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/employees");
            then.status(200).json_body(json!([
                { "employee_id": "B", "full_name": "Bee", "email": "b@x.io", "department": "Sales" },
                { "employee_id": "A", "full_name": "Ay", "email": "a@x.io", "department": "Sales" }
            ]));
        });

        let api = ApiClient::new_with_base_url(server.url(""));
        let roster = fetch_roster(&api).await.unwrap();
        let ids: Vec<_> = roster.iter().map(|e| e.employee_id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
    }
}
