use crate::api::NewEmployee;
use crate::utils::validation::{is_valid_email, FieldErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    EmployeeId,
    FullName,
    Email,
    Department,
}

pub type EmployeeErrors = FieldErrors<EmployeeField>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl EmployeeForm {
    pub fn get(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::EmployeeId => &self.employee_id,
            EmployeeField::FullName => &self.full_name,
            EmployeeField::Email => &self.email,
            EmployeeField::Department => &self.department,
        }
    }

    pub fn set(&mut self, field: EmployeeField, value: String) {
        match field {
            EmployeeField::EmployeeId => self.employee_id = value,
            EmployeeField::FullName => self.full_name = value,
            EmployeeField::Email => self.email = value,
            EmployeeField::Department => self.department = value,
        }
    }

    pub fn validate(&self) -> EmployeeErrors {
        let mut errors = EmployeeErrors::new();
        if self.employee_id.trim().is_empty() {
            errors.insert(EmployeeField::EmployeeId, "Employee ID is required");
        }
        if self.full_name.trim().is_empty() {
            errors.insert(EmployeeField::FullName, "Full name is required");
        }
        if self.email.trim().is_empty() {
            errors.insert(EmployeeField::Email, "Email is required");
        } else if !is_valid_email(&self.email) {
            errors.insert(EmployeeField::Email, "Invalid email format");
        }
        if self.department.trim().is_empty() {
            errors.insert(EmployeeField::Department, "Department is required");
        }
        errors
    }

    pub fn to_payload(&self) -> NewEmployee {
        NewEmployee {
            employee_id: self.employee_id.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.department.trim().to_string(),
        }
    }
}

/// Field a rejected create should highlight, judged from the backend detail.
pub fn field_for_error(detail: &str) -> Option<EmployeeField> {
    if detail.contains("ID") {
        Some(EmployeeField::EmployeeId)
    } else if detail.contains("email") {
        Some(EmployeeField::Email)
    } else {
        None
    }
}

pub fn created_message(full_name: &str) -> String {
    format!("Employee \"{}\" added successfully!", full_name)
}
