use crate::api::Employee;

/// Case-insensitive substring match over name, id, department and email.
/// A blank query keeps the roster as is.
pub fn filter_employees(roster: &[Employee], query: &str) -> Vec<Employee> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return roster.to_vec();
    }
    roster
        .iter()
        .filter(|emp| {
            [
                &emp.full_name,
                &emp.employee_id,
                &emp.department,
                &emp.email,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

pub fn delete_prompt(employee: &Employee) -> String {
    format!(
        "Are you sure you want to delete \"{}\" ({})? This will also remove all their attendance records. This action cannot be undone.",
        employee.full_name, employee.employee_id
    )
}

pub fn deleted_message(full_name: &str) -> String {
    format!("Employee \"{}\" deleted successfully", full_name)
}

pub fn no_results_message(query: &str) -> String {
    format!("No employees matching \"{}\"", query)
}
