use crate::api::{AttendanceStatus, Employee, NewAttendance};
use crate::utils::{
    time::{format_input_date, today},
    validation::{parse_date_input, FieldErrors},
};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceField {
    Employee,
    Date,
}

pub type AttendanceErrors = FieldErrors<AttendanceField>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceForm {
    pub employee_id: String,
    pub date: String,
    pub status: AttendanceStatus,
}

impl Default for AttendanceForm {
    fn default() -> Self {
        Self::for_day(today())
    }
}

impl AttendanceForm {
    pub fn for_day(date: NaiveDate) -> Self {
        Self {
            employee_id: String::new(),
            date: format_input_date(date),
            status: AttendanceStatus::Present,
        }
    }

    /// Either the payload to send or the messages that block it.
    pub fn validate(&self) -> Result<NewAttendance, AttendanceErrors> {
        let mut errors = AttendanceErrors::new();
        if self.employee_id.trim().is_empty() {
            errors.insert(AttendanceField::Employee, "Please select an employee");
        }
        let date = match parse_date_input(&self.date) {
            Ok(Some(date)) => Some(date),
            Ok(None) => {
                errors.insert(AttendanceField::Date, "Please select a date");
                None
            }
            Err(_) => {
                errors.insert(AttendanceField::Date, "Date must be in YYYY-MM-DD format");
                None
            }
        };
        match date {
            Some(date) if errors.is_empty() => Ok(NewAttendance {
                employee_id: self.employee_id.trim().to_string(),
                date,
                status: self.status,
            }),
            _ => Err(errors),
        }
    }
}

pub fn option_label(employee: &Employee) -> String {
    format!("{} ({})", employee.full_name, employee.employee_id)
}

/// Confirmation text; falls back to the identifier when the roster has no match.
pub fn marked_message(roster: &[Employee], marked: &NewAttendance) -> String {
    let name = roster
        .iter()
        .find(|emp| emp.employee_id == marked.employee_id)
        .map(|emp| emp.full_name.as_str())
        .unwrap_or(&marked.employee_id);
    format!(
        "Attendance marked for \"{}\" on {} ({})",
        name,
        format_input_date(marked.date),
        marked.status
    )
}
