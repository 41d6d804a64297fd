#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::Employee;

    pub fn employee(id: &str, name: &str, department: &str) -> Employee {
        Employee {
            id: None,
            employee_id: id.into(),
            full_name: name.into(),
            email: format!("{}@company.com", id.to_lowercase()),
            department: department.into(),
            total_present: 0,
            total_absent: 0,
            created_at: None,
        }
    }

    pub fn roster() -> Vec<Employee> {
        vec![
            employee("EMP001", "Jane Doe", "Engineering"),
            employee("EMP002", "John Roe", "Design"),
            employee("EMP003", "Ada Lovelace", "Engineering"),
            employee("HR010", "Grace Hopper", "Human Resources"),
            employee("EMP005", "Alan Turing", "Finance"),
            employee("EMP006", "Linus Torvalds", "Operations"),
        ]
    }
}
