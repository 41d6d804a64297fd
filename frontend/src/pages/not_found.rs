use crate::components::empty_state::EmptyState;
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page not found | HRMS Lite"/>
        <EmptyState
            icon="🧭"
            title="Page not found"
            description="The page you are looking for does not exist."
        >
            <a
                href="/"
                class="inline-flex items-center px-4 py-2 rounded-md text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
            >
                "Return to Dashboard"
            </a>
        </EmptyState>
    }
}
