use crate::api::{client::path_segment, Employee};
use crate::utils::format::initials;
use leptos::*;

pub fn detail_href(employee_id: &str) -> String {
    format!("/employees/{}", path_segment(employee_id))
}

/// One roster entry. The delete button sits beside the link so pressing it
/// never navigates.
#[component]
pub fn EmployeeCard(employee: Employee, on_delete: Callback<Employee>) -> impl IntoView {
    let href = detail_href(&employee.employee_id);
    let badge = initials(&employee.full_name);
    let delete_label = format!("Delete {}", employee.full_name);
    let target = employee.clone();

    view! {
        <div class="relative rounded-2xl bg-surface-elevated border border-border shadow-sm hover:shadow-md transition-shadow">
            <a href=href class="block p-5">
                <div class="flex items-center gap-3">
                    <div class="w-11 h-11 rounded-full bg-primary-subtle text-action-primary-bg flex items-center justify-center text-sm font-bold">
                        {badge}
                    </div>
                    <div class="min-w-0">
                        <h3 class="font-semibold text-fg truncate">{employee.full_name.clone()}</h3>
                        <p class="text-xs font-mono text-fg-muted">{employee.employee_id.clone()}</p>
                    </div>
                </div>
                <div class="mt-4 space-y-1 text-sm text-fg-muted">
                    <p class="truncate">{employee.email.clone()}</p>
                    <span class="inline-block px-2 py-0.5 rounded-full text-xs font-medium bg-surface-muted text-fg">
                        {employee.department.clone()}
                    </span>
                </div>
                <div class="mt-4 flex gap-4 text-xs font-semibold">
                    <span class="text-status-success-text">{format!("✓ {} present", employee.total_present)}</span>
                    <span class="text-status-error-text">{format!("✕ {} absent", employee.total_absent)}</span>
                </div>
            </a>
            <button
                type="button"
                class="absolute top-3 right-3 p-2 rounded-md text-fg-muted hover:text-status-error-text hover:bg-status-error-bg"
                title="Delete employee"
                aria-label=delete_label
                on:click=move |_| on_delete.call(target.clone())
            >
                <svg width="16" height="16" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" viewBox="0 0 24 24">
                    <polyline points="3 6 5 6 21 6"/>
                    <path d="M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6"/>
                    <path d="M10 11v6"/>
                    <path d="M14 11v6"/>
                </svg>
            </button>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::employee, ssr::render_to_string};

    #[test]
    fn card_shows_identity_and_counters() {
        let html = render_to_string(|| {
            let mut emp = employee("EMP001", "Jane Doe", "Engineering");
            emp.total_present = 4;
            emp.total_absent = 1;
            view! { <EmployeeCard employee=emp on_delete=Callback::new(|_| ())/> }
        });
        assert!(html.contains("JD"));
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("emp001@company.com"));
        assert!(html.contains("Engineering"));
        assert!(html.contains("4 present"));
        assert!(html.contains("1 absent"));
        assert!(html.contains("href=\"/employees/EMP001\""));
        assert!(html.contains("Delete Jane Doe"));
    }
}
