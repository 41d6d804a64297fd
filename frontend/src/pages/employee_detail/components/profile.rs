use crate::api::Employee;
use crate::pages::employee_detail::utils::attendance_rate;
use crate::utils::format::initials;
use leptos::*;

#[component]
pub fn ProfileCard(employee: Employee) -> impl IntoView {
    let rate = attendance_rate(employee.total_present, employee.total_absent);
    let Employee {
        employee_id,
        full_name,
        email,
        department,
        total_present,
        total_absent,
        ..
    } = employee;
    let avatar = initials(&full_name);

    view! {
        <section class="mb-8 rounded-2xl bg-surface-elevated border border-border shadow-sm p-6">
            <div class="flex flex-col gap-4 sm:flex-row sm:items-center">
                <div class="w-16 h-16 rounded-2xl bg-action-primary-bg text-action-primary-text flex items-center justify-center text-xl font-bold">
                    {avatar}
                </div>
                <div class="min-w-0">
                    <h2 class="text-2xl font-bold text-fg">{full_name}</h2>
                    <div class="mt-2 flex flex-wrap items-center gap-3 text-sm text-fg-muted">
                        <span class="font-mono">{employee_id}</span>
                        <span>{email}</span>
                        <span class="px-2 py-0.5 rounded-full text-xs font-medium bg-surface-muted text-fg">
                            {department}
                        </span>
                    </div>
                </div>
            </div>
            <dl class="mt-6 grid grid-cols-3 gap-4 text-center">
                <ProfileStat label="Present Days" value=total_present.to_string() tone="text-status-success-text"/>
                <ProfileStat label="Absent Days" value=total_absent.to_string() tone="text-status-error-text"/>
                <ProfileStat label="Attendance Rate" value=format!("{}%", rate) tone="text-action-primary-bg"/>
            </dl>
        </section>
    }
}

#[component]
fn ProfileStat(label: &'static str, value: String, tone: &'static str) -> impl IntoView {
    view! {
        <div class="rounded-xl bg-surface-muted p-4">
            <dd class=format!("text-2xl font-extrabold {}", tone)>{value}</dd>
            <dt class="text-xs font-semibold uppercase tracking-wider text-fg-muted">{label}</dt>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::employee, ssr::render_to_string};

    #[test]
    fn profile_shows_counters_and_rate() {
        let html = render_to_string(|| {
            let mut emp = employee("EMP001", "Jane Doe", "Engineering");
            emp.total_present = 3;
            emp.total_absent = 1;
            view! { <ProfileCard employee=emp/> }
        });
        assert!(html.contains("JD"));
        assert!(html.contains("emp001@company.com"));
        assert!(html.contains("Present Days"));
        assert!(html.contains("Absent Days"));
        assert!(html.contains("75%"));
    }
}
