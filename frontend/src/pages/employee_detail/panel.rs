use crate::components::{
    error::ErrorState,
    layout::{BackLink, LoadingSpinner},
};
use crate::pages::employee_detail::{
    components::{FilterBar, HistoryTable, ProfileCard},
    repository::EmployeeDetail,
    utils::FilterInputs,
    view_model::use_employee_detail_view_model,
};
use crate::state::screen::ScreenState;
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn EmployeeDetailPage() -> impl IntoView {
    let vm = use_employee_detail_view_model();
    let state = vm.loader.state();
    let inputs = vm.inputs;

    let retry_vm = vm.clone();
    let on_retry = Callback::new(move |_| retry_vm.reload());
    let apply_vm = vm.clone();
    let on_apply = Callback::new(move |_| apply_vm.apply_filter());
    let clear_vm = vm.clone();
    let on_clear = Callback::new(move |_| clear_vm.clear_filter());

    view! {
        <div class="animate-fade-in">
            <BackLink href="/employees" label="Back to Employees"/>
            {move || match state.get() {
                ScreenState::Idle | ScreenState::Loading => {
                    view! { <LoadingSpinner text="Loading employee details..."/> }.into_view()
                }
                ScreenState::NotFound(message) => {
                    view! { <EmployeeMissing message=message/> }.into_view()
                }
                ScreenState::Error(message) => {
                    view! { <ErrorState message=message on_retry=on_retry/> }.into_view()
                }
                ScreenState::Empty => ().into_view(),
                ScreenState::Populated(detail) => view! {
                    <DetailView detail=detail inputs=inputs on_apply=on_apply on_clear=on_clear/>
                }
                .into_view(),
            }}
        </div>
    }
}

#[component]
fn EmployeeMissing(message: String) -> impl IntoView {
    view! {
        <ErrorState title="Employee not found" message=message>
            <a href="/employees" class="text-sm font-semibold text-action-primary-bg hover:underline">
                "View all employees"
            </a>
        </ErrorState>
    }
}

#[component]
pub fn DetailView(
    detail: EmployeeDetail,
    inputs: RwSignal<FilterInputs>,
    on_apply: Callback<()>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let EmployeeDetail { employee, records } = detail;
    let document_title = format!("{} | HRMS Lite", employee.full_name);

    view! {
        <Title text=document_title/>
        <ProfileCard employee=employee/>
        <div class="mb-4 flex items-center justify-between">
            <h3 class="text-lg font-semibold text-fg">"Attendance Records"</h3>
            <a
                href="/attendance"
                class="inline-flex items-center gap-1 px-3 py-1.5 rounded-md text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
            >
                "+ Mark Attendance"
            </a>
        </div>
        <FilterBar inputs=inputs on_apply=on_apply on_clear=on_clear/>
        <HistoryTable records=records/>
    }
}
