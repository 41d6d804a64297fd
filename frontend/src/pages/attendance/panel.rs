use crate::components::{
    empty_state::EmptyState,
    error::ErrorState,
    layout::{LoadingSpinner, PageHeader},
};
use crate::pages::attendance::{
    components::MarkAttendanceForm, view_model::use_attendance_view_model,
};
use crate::state::screen::ScreenState;
use leptos::*;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let vm = use_attendance_view_model();
    let state = vm.loader.state();
    let retry_vm = vm.clone();
    let on_retry = Callback::new(move |_| retry_vm.reload());

    view! {
        <div class="animate-fade-in">
            <PageHeader title="Mark Attendance" subtitle="Record daily attendance for your employees"/>
            {move || match state.get() {
                ScreenState::Idle | ScreenState::Loading => {
                    view! { <LoadingSpinner text="Loading employees..."/> }.into_view()
                }
                ScreenState::Error(message) | ScreenState::NotFound(message) => {
                    view! { <ErrorState message=message on_retry=on_retry/> }.into_view()
                }
                ScreenState::Empty => view! { <NoRoster/> }.into_view(),
                ScreenState::Populated(_) => view! { <MarkAttendanceForm vm=vm.clone()/> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn NoRoster() -> impl IntoView {
    view! {
        <EmptyState
            icon="👥"
            title="No employees found"
            description="You need to add employees before marking attendance."
        >
            <a
                href="/employees/add"
                class="inline-flex items-center px-4 py-2 rounded-md text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
            >
                "Add Employee First"
            </a>
        </EmptyState>
    }
}
