use reqwest::Method;

use super::{
    client::{path_segment, ApiClient},
    types::{ApiError, AttendanceQuery, AttendanceRecord, NewAttendance},
};

impl ApiClient {
    pub async fn mark_attendance(
        &self,
        payload: &NewAttendance,
    ) -> Result<AttendanceRecord, ApiError> {
        let request = self
            .request(Method::POST, "/api/attendance")
            .await
            .json(payload);
        self.send_json(request).await
    }

    pub async fn list_attendance(
        &self,
        employee_id: &str,
        query: AttendanceQuery,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let path = format!("/api/attendance/{}", path_segment(employee_id));
        let mut request = self.request(Method::GET, &path).await;
        let params = query.to_params();
        if !params.is_empty() {
            request = request.query(&params);
        }
        self.send_json(request).await
    }
}
