use crate::api::DEPARTMENTS;
use crate::components::{
    forms::{control_class, FormField, SubmitButton},
    layout::{BackLink, PageHeader},
};
use crate::pages::add_employee::{
    utils::EmployeeField,
    view_model::{use_add_employee_view_model, AddEmployeeViewModel},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn AddEmployeePage() -> impl IntoView {
    let vm = use_add_employee_view_model();
    view! {
        <div class="animate-fade-in">
            <BackLink href="/employees" label="Back to Employees"/>
            <PageHeader title="Add New Employee" subtitle="Fill in the details to register a new team member"/>
            <EmployeeFormCard vm=vm/>
        </div>
    }
}

#[component]
fn EmployeeFormCard(vm: AddEmployeeViewModel) -> impl IntoView {
    let pending = vm.create_action.pending();
    let submit_vm = vm.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        submit_vm.submit();
    };

    view! {
        <div class="max-w-2xl rounded-2xl bg-surface-elevated border border-border shadow-sm p-6">
            <form class="space-y-5" on:submit=on_submit novalidate=true>
                <div class="grid gap-5 sm:grid-cols-2">
                    <TextInput vm=vm.clone() field=EmployeeField::EmployeeId label="Employee ID" placeholder="e.g. EMP001"/>
                    <TextInput vm=vm.clone() field=EmployeeField::FullName label="Full Name" placeholder="e.g. John Doe"/>
                </div>
                <div class="grid gap-5 sm:grid-cols-2">
                    <TextInput
                        vm=vm.clone()
                        field=EmployeeField::Email
                        label="Email Address"
                        placeholder="e.g. john@company.com"
                        input_type="email"
                    />
                    <DepartmentSelect vm=vm.clone()/>
                </div>
                <div class="flex items-center gap-3 pt-2">
                    <SubmitButton label="Add Employee" pending_label="Adding..." pending=pending/>
                    <a
                        href="/employees"
                        class="inline-flex items-center px-4 py-2 rounded-md text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                    >
                        "Cancel"
                    </a>
                </div>
            </form>
        </div>
    }
}

#[component]
fn TextInput(
    vm: AddEmployeeViewModel,
    field: EmployeeField,
    label: &'static str,
    placeholder: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
) -> impl IntoView {
    let value = vm.value(field);
    let error = vm.error(field);
    view! {
        <FormField label=label error=error>
            <input
                type=input_type.unwrap_or("text")
                class=move || control_class(error.with(Option::is_some))
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| vm.update_field(field, event_target_value(&ev))
            />
        </FormField>
    }
}

#[component]
fn DepartmentSelect(vm: AddEmployeeViewModel) -> impl IntoView {
    let value = vm.value(EmployeeField::Department);
    let error = vm.error(EmployeeField::Department);
    view! {
        <FormField label="Department" error=error>
            <select
                class=move || control_class(error.with(Option::is_some))
                prop:value=move || value.get()
                on:change=move |ev| vm.update_field(EmployeeField::Department, event_target_value(&ev))
            >
                <option value="">"Select department"</option>
                {DEPARTMENTS
                    .iter()
                    .map(|dept| view! { <option value=*dept>{*dept}</option> })
                    .collect_view()}
            </select>
        </FormField>
    }
}
