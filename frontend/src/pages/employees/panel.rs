use crate::api::Employee;
use crate::components::{
    confirm_dialog::ConfirmDialog,
    empty_state::EmptyState,
    error::ErrorState,
    layout::{LoadingSpinner, PageHeader},
};
use crate::pages::employees::{
    components::{EmployeeCard, SearchBar},
    utils::{delete_prompt, no_results_message},
    view_model::use_employees_view_model,
};
use crate::state::screen::ScreenState;
use leptos::*;

const ADD_LINK_CLASS: &str = "inline-flex items-center gap-2 px-4 py-2 rounded-md text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover";

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let vm = use_employees_view_model();
    let state = vm.loader.state();
    let visible = vm.visible();
    let search = vm.search;
    let pending_delete = vm.pending_delete;
    let deleting = vm.delete_action.pending();

    let retry_vm = vm.clone();
    let on_retry = Callback::new(move |_| retry_vm.reload());
    let request_vm = vm.clone();
    let on_delete = Callback::new(move |employee: Employee| request_vm.request_delete(employee));
    let confirm_vm = vm.clone();
    let on_confirm = Callback::new(move |_| confirm_vm.confirm_delete());
    let cancel_vm = vm.clone();
    let on_cancel = Callback::new(move |_| cancel_vm.cancel_delete());

    let dialog_open = Signal::derive(move || pending_delete.with(Option::is_some));
    let dialog_message = Signal::derive(move || {
        pending_delete.with(|target| target.as_ref().map(delete_prompt).unwrap_or_default())
    });
    let confirm_label =
        Signal::derive(move || if deleting.get() { "Deleting..." } else { "Delete" }.to_string());

    view! {
        <div class="animate-fade-in">
            <PageHeader title="Employees" subtitle="Manage your team members">
                <a href="/employees/add" class=ADD_LINK_CLASS>"+ Add Employee"</a>
            </PageHeader>
            {move || match state.get() {
                ScreenState::Idle | ScreenState::Loading => {
                    view! { <LoadingSpinner text="Loading employees..."/> }.into_view()
                }
                ScreenState::Error(message) | ScreenState::NotFound(message) => {
                    view! { <ErrorState message=message on_retry=on_retry/> }.into_view()
                }
                ScreenState::Empty => view! { <NoEmployees/> }.into_view(),
                ScreenState::Populated(_) => view! {
                    <SearchBar query=search/>
                    <EmployeeGrid employees=visible query=search on_delete=on_delete/>
                }
                .into_view(),
            }}
            <ConfirmDialog
                is_open=dialog_open
                title="Delete Employee".to_string()
                message=dialog_message
                on_confirm=on_confirm
                on_cancel=on_cancel
                confirm_label=confirm_label
                confirm_disabled=deleting
                destructive=true
            />
        </div>
    }
}

#[component]
fn NoEmployees() -> impl IntoView {
    view! {
        <EmptyState
            icon="👥"
            title="No employees yet"
            description="Start by adding your first employee to the system."
        >
            <a href="/employees/add" class=ADD_LINK_CLASS>"+ Add Employee"</a>
        </EmptyState>
    }
}

/// Cards for the filtered roster, or a no-results notice naming the query.
#[component]
pub fn EmployeeGrid(
    #[prop(into)] employees: Signal<Vec<Employee>>,
    #[prop(into)] query: Signal<String>,
    on_delete: Callback<Employee>,
) -> impl IntoView {
    view! {
        <Show
            when=move || employees.with(|list| !list.is_empty())
            fallback=move || view! {
                <EmptyState
                    icon="🔍"
                    title="No results found"
                    description=no_results_message(&query.get())
                />
            }
        >
            <div class="grid gap-4 sm:grid-cols-2 xl:grid-cols-3">
                <For
                    each=move || employees.get()
                    key=|emp| emp.employee_id.clone()
                    children=move |emp| view! { <EmployeeCard employee=emp on_delete=on_delete/> }
                />
            </div>
        </Show>
    }
}
