use crate::components::{
    error::ErrorState,
    layout::{LoadingSpinner, PageHeader},
};
use crate::pages::dashboard::{
    components::{DepartmentTags, RecentEmployees, StatCards},
    repository::DashboardData,
    view_model::use_dashboard_view_model,
};
use crate::state::screen::ScreenState;
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let state = vm.loader.state();
    let on_retry = Callback::new(move |_| vm.reload());

    view! {
        {move || match state.get() {
            ScreenState::Idle | ScreenState::Loading => {
                view! { <LoadingSpinner text="Loading dashboard..."/> }.into_view()
            }
            ScreenState::Error(message) | ScreenState::NotFound(message) => {
                view! { <ErrorState message=message on_retry=on_retry/> }.into_view()
            }
            ScreenState::Empty => view! { <DashboardView data=None/> }.into_view(),
            ScreenState::Populated(data) => view! { <DashboardView data=Some(data)/> }.into_view(),
        }}
    }
}

#[component]
pub fn DashboardView(data: Option<DashboardData>) -> impl IntoView {
    let DashboardData { summary, recent } = data.unwrap_or_else(|| DashboardData {
        summary: Default::default(),
        recent: Vec::new(),
    });
    let departments = summary.departments.clone();

    view! {
        <div class="animate-fade-in">
            <PageHeader title="Dashboard" subtitle="Welcome back. Here is your HR overview for today."/>
            <StatCards summary=summary/>
            <DepartmentTags departments=departments/>
            <RecentEmployees employees=recent/>
        </div>
    }
}
