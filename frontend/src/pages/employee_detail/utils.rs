use crate::api::{AttendanceQuery, AttendanceRecord, AttendanceStatus};
use crate::utils::{
    time::{format_display_date, weekday_name},
    validation::parse_date_input,
};
use percent_encoding::percent_decode_str;

/// Share of marked days that were present, as a rounded percentage.
pub fn attendance_rate(present: u32, absent: u32) -> u32 {
    let total = u64::from(present) + u64::from(absent);
    if total == 0 {
        return 0;
    }
    ((200 * u64::from(present) + total) / (2 * total)) as u32
}

/// Route parameter to employee identifier.
pub fn decode_employee_id(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub index: usize,
    pub date_label: String,
    pub weekday: &'static str,
    pub status: AttendanceStatus,
}

pub fn history_rows(records: &[AttendanceRecord]) -> Vec<HistoryRow> {
    records
        .iter()
        .enumerate()
        .map(|(idx, record)| HistoryRow {
            index: idx + 1,
            date_label: format_display_date(record.date),
            weekday: weekday_name(record.date),
            status: record.status,
        })
        .collect()
}

/// Raw values of the From/To inputs, applied only on Filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInputs {
    pub from: String,
    pub to: String,
}

impl FilterInputs {
    pub fn has_any(&self) -> bool {
        !self.from.trim().is_empty() || !self.to.trim().is_empty()
    }

    /// Unparseable values are left out of the query.
    pub fn to_query(&self) -> AttendanceQuery {
        AttendanceQuery::new(
            parse_date_input(&self.from).ok().flatten(),
            parse_date_input(&self.to).ok().flatten(),
        )
    }
}

/// Applied filter plus a token, so applying the same bounds twice still reloads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryQuery {
    pub filter: AttendanceQuery,
    pub token: u32,
}

impl HistoryQuery {
    pub fn with_filter(self, filter: AttendanceQuery) -> Self {
        Self {
            filter,
            token: self.token.wrapping_add(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wasm_bindgen_test::*;

    fn record(id: i64, date: &str, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id,
            employee_id: "EMP001".into(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            status,
            employee_name: None,
        }
    }

    #[wasm_bindgen_test]
    fn rate_rounds_and_handles_no_marks() {
        assert_eq!(attendance_rate(0, 0), 0);
        assert_eq!(attendance_rate(3, 1), 75);
        assert_eq!(attendance_rate(2, 1), 67);
        assert_eq!(attendance_rate(1, 1), 50);
        assert_eq!(attendance_rate(1, 7), 13);
        assert_eq!(attendance_rate(5, 0), 100);
        assert_eq!(attendance_rate(0, 4), 0);
    }

    #[wasm_bindgen_test]
    fn rows_keep_backend_order_with_labels() {
        let rows = history_rows(&[
            record(2, "2025-01-06", AttendanceStatus::Absent),
            record(1, "2025-01-05", AttendanceStatus::Present),
        ]);
        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[0].date_label, "Jan 6, 2025");
        assert_eq!(rows[0].weekday, "Monday");
        assert_eq!(rows[0].status, AttendanceStatus::Absent);
        assert_eq!(rows[1].index, 2);
        assert_eq!(rows[1].weekday, "Sunday");
    }

    #[wasm_bindgen_test]
    fn filter_inputs_build_partial_queries() {
        let inputs = FilterInputs {
            from: "2025-01-01".into(),
            to: String::new(),
        };
        assert!(inputs.has_any());
        let query = inputs.to_query();
        assert_eq!(query.date_from, NaiveDate::from_ymd_opt(2025, 1, 1));
        assert!(query.date_to.is_none());
        assert!(!FilterInputs::default().has_any());
        assert!(FilterInputs::default().to_query().is_empty());
    }

    #[wasm_bindgen_test]
    fn reversed_bounds_are_passed_through() {
        let inputs = FilterInputs {
            from: "2025-02-01".into(),
            to: "2025-01-01".into(),
        };
        let query = inputs.to_query();
        assert!(query.date_from > query.date_to);
    }

    #[wasm_bindgen_test]
    fn reapplying_the_same_filter_changes_the_query() {
        let first = HistoryQuery::default().with_filter(AttendanceQuery::default());
        let second = first.with_filter(AttendanceQuery::default());
        assert_ne!(first, second);
    }

    #[wasm_bindgen_test]
    fn route_ids_are_percent_decoded() {
        assert_eq!(decode_employee_id("EMP%20001"), "EMP 001");
        assert_eq!(decode_employee_id("EMP001"), "EMP001");
    }
}
