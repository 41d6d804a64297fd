use crate::api::AttendanceStatus;
use crate::components::forms::{control_class, FormField, SubmitButton};
use crate::pages::attendance::{
    utils::{option_label, AttendanceField},
    view_model::AttendanceViewModel,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn MarkAttendanceForm(vm: AttendanceViewModel) -> impl IntoView {
    let roster = vm.roster();
    let form = vm.form;
    let pending = vm.mark_action.pending();
    let employee_error = vm.error(AttendanceField::Employee);
    let date_error = vm.error(AttendanceField::Date);

    let submit_vm = vm.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        submit_vm.submit();
    };
    let select_vm = vm.clone();
    let date_vm = vm.clone();
    let status_vm = vm.clone();
    let on_status = Callback::new(move |status| status_vm.set_status(status));

    view! {
        <div class="max-w-xl rounded-2xl bg-surface-elevated border border-border shadow-sm p-6">
            <form class="space-y-5" on:submit=on_submit novalidate=true>
                <FormField label="Employee" error=employee_error>
                    <select
                        class=move || control_class(employee_error.with(Option::is_some))
                        prop:value=move || form.with(|f| f.employee_id.clone())
                        on:change=move |ev| select_vm.select_employee(event_target_value(&ev))
                    >
                        <option value="">"Select an employee"</option>
                        <For
                            each=move || roster.get()
                            key=|emp| emp.employee_id.clone()
                            children=move |emp| {
                                let label = option_label(&emp);
                                view! { <option value=emp.employee_id>{label}</option> }
                            }
                        />
                    </select>
                </FormField>
                <FormField label="Date" error=date_error>
                    <input
                        type="date"
                        class=move || control_class(date_error.with(Option::is_some))
                        prop:value=move || form.with(|f| f.date.clone())
                        on:change=move |ev| date_vm.set_date(event_target_value(&ev))
                    />
                </FormField>
                <StatusToggle
                    selected=Signal::derive(move || form.with(|f| f.status))
                    on_select=on_status
                />
                <SubmitButton label="Mark Attendance" pending_label="Marking..." pending=pending/>
            </form>
        </div>
    }
}

#[component]
pub fn StatusToggle(
    #[prop(into)] selected: Signal<AttendanceStatus>,
    on_select: Callback<AttendanceStatus>,
) -> impl IntoView {
    let option = move |status: AttendanceStatus| {
        let tone = match status {
            AttendanceStatus::Present => "border-status-success-border bg-status-success-bg text-status-success-text",
            AttendanceStatus::Absent => "border-status-error-border bg-status-error-bg text-status-error-text",
        };
        view! {
            <label class=move || {
                if selected.get() == status {
                    format!("flex-1 flex items-center justify-center gap-2 rounded-lg border-2 px-4 py-3 text-sm font-semibold cursor-pointer {}", tone)
                } else {
                    "flex-1 flex items-center justify-center gap-2 rounded-lg border-2 border-border px-4 py-3 text-sm font-semibold text-fg-muted cursor-pointer".to_string()
                }
            }>
                <input
                    type="radio"
                    name="status"
                    class="sr-only"
                    value=status.as_str()
                    prop:checked=move || selected.get() == status
                    on:change=move |_| on_select.call(status)
                />
                {format!("{} {}", status.icon(), status)}
            </label>
        }
    };

    view! {
        <div class="flex flex-col">
            <span class="text-sm font-medium text-fg-muted">"Status"</span>
            <div class="mt-1 flex gap-3" role="radiogroup">
                {option(AttendanceStatus::Present)}
                {option(AttendanceStatus::Absent)}
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn toggle_renders_both_statuses() {
        let html = render_to_string(|| {
            view! {
                <StatusToggle
                    selected=Signal::derive(|| AttendanceStatus::Absent)
                    on_select=Callback::new(|_| ())
                />
            }
        });
        assert!(html.contains("✓ Present"));
        assert!(html.contains("✕ Absent"));
        assert!(html.contains("bg-status-error-bg"));
        assert!(!html.contains("bg-status-success-bg"));
    }

    #[test]
    fn form_renders_defaults() {
        let html = render_to_string(|| {
            let vm = AttendanceViewModel::new();
            view! { <MarkAttendanceForm vm=vm/> }
        });
        assert!(html.contains("Select an employee"));
        assert!(html.contains("Mark Attendance"));
        assert!(html.contains("type=\"date\""));
    }
}
