use crate::api::{ApiClient, ApiError, AttendanceRecord, Employee, NewAttendance};

pub async fn fetch_roster(api: &ApiClient) -> Result<Vec<Employee>, ApiError> {
    api.list_employees().await
}

pub async fn mark_attendance(
    api: &ApiClient,
    payload: NewAttendance,
) -> Result<AttendanceRecord, ApiError> {
    api.mark_attendance(&payload).await
}

#[cfg(all(test, not(target_arch = "wasm32"), not(coverage)))]
mod api_tests {
    use super::*;
    use crate::api::{test_support::mock::*, AttendanceStatus};
    use chrono::NaiveDate;
    use serde_json::json;

    #[tokio::test]
    async fn mark_sends_wire_format() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/attendance");
            then.status(201).json_body(json!({
                "id": 4,
                "employee_id": "EMP001",
                "date": "2025-03-14",
                "status": "Absent"
            }));
        });

        let api = ApiClient::new_with_base_url(server.url(""));
        let payload = NewAttendance {
            employee_id: "EMP001".into(),
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            status: AttendanceStatus::Absent,
        };
        let record = mark_attendance(&api, payload).await.unwrap();
        assert_eq!(record.status, AttendanceStatus::Absent);

        let body = server
            .last_request(POST, "/api/attendance")
            .and_then(|r| r.body)
            .unwrap();
        assert_eq!(body["date"], "2025-03-14");
        assert_eq!(body["status"], "Absent");
    }

    #[tokio::test]
    async fn duplicate_mark_surfaces_detail() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/attendance");
            then.status(409).json_body(json!({
                "detail": "Attendance already marked for EMP001 on 2025-03-14"
            }));
        });

        let api = ApiClient::new_with_base_url(server.url(""));
        let payload = NewAttendance {
            employee_id: "EMP001".into(),
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            status: AttendanceStatus::Present,
        };
        let err = mark_attendance(&api, payload).await.unwrap_err();
        assert_eq!(err.status(), Some(409));
        assert!(err.message_or("Failed to mark attendance").contains("already marked"));
    }
}
