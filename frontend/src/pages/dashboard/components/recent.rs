use crate::api::Employee;
use leptos::*;

#[component]
pub fn RecentEmployees(employees: Vec<Employee>) -> impl IntoView {
    if employees.is_empty() {
        return ().into_view();
    }
    view! {
        <section class="mt-10">
            <div class="flex items-center justify-between mb-3">
                <h3 class="text-lg font-semibold text-fg">"Recent Employees"</h3>
                <a href="/employees" class="px-3 py-1.5 rounded-md text-xs font-semibold bg-surface-muted text-fg hover:bg-surface-elevated">
                    "View All →"
                </a>
            </div>
            <div class="overflow-x-auto rounded-lg border border-border bg-surface-elevated">
                <table class="min-w-full divide-y divide-border">
                    <thead>
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Employee ID"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Name"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Department"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Present"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Absent"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        {employees
                            .into_iter()
                            .map(|emp| view! {
                                <tr>
                                    <td class="px-6 py-4 whitespace-nowrap font-mono text-sm font-semibold text-action-primary-bg">{emp.employee_id}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm font-semibold text-fg">{emp.full_name}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm">
                                        <span class="px-2 py-0.5 rounded-full text-xs bg-primary-subtle text-action-primary-bg">{emp.department}</span>
                                    </td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-status-success-text">{format!("✓ {}", emp.total_present)}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-status-error-text">{format!("✕ {}", emp.total_absent)}</td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </section>
    }
    .into_view()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::roster, ssr::render_to_string};

    #[test]
    fn renders_rows_and_view_all_link() {
        let html = render_to_string(|| {
            let employees = roster().into_iter().take(2).collect::<Vec<_>>();
            view! { <RecentEmployees employees=employees/> }
        });
        assert!(html.contains("Recent Employees"));
        assert!(html.contains("View All"));
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("John Roe"));
        assert!(!html.contains("Ada Lovelace"));
    }

    #[test]
    fn hidden_for_empty_roster() {
        let html = render_to_string(|| view! { <RecentEmployees employees=Vec::new()/> });
        assert!(!html.contains("Recent Employees"));
    }
}
