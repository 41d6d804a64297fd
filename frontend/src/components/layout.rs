use crate::components::nav::{MobileNav, Sidebar};
use leptos::*;
use leptos_meta::Title;
use leptos_router::use_location;

/// Application shell: sidebar on wide screens, bottom bar on small ones.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let location = use_location();
    let path = Signal::derive(move || location.pathname.get());

    view! {
        <div class="min-h-screen bg-surface lg:flex">
            <Sidebar path=path/>
            <MobileNav path=path/>
            <main class="flex-1 min-w-0 px-4 py-6 pb-24 sm:px-6 lg:px-10 lg:pb-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let document_title = format!("{} | HRMS Lite", title);
    view! {
        <Title text=document_title/>
        <div class="flex flex-col gap-4 sm:flex-row sm:items-end sm:justify-between mb-6">
            <div>
                <h2 class="text-2xl font-bold text-fg">{title}</h2>
                {subtitle.map(|text| view! { <p class="mt-1 text-sm text-fg-muted">{text}</p> })}
            </div>
            {children.map(|children| children())}
        </div>
    }
}

#[component]
pub fn BackLink(#[prop(into)] href: String, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <a href=href class="inline-flex items-center gap-2 mb-4 text-sm font-medium text-fg-muted hover:text-fg">
            <svg width="16" height="16" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" viewBox="0 0 24 24">
                <line x1="19" y1="12" x2="5" y2="12"/>
                <polyline points="12 19 5 12 12 5"/>
            </svg>
            {label}
        </a>
    }
}

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] text: Option<String>) -> impl IntoView {
    view! {
        <div class="flex flex-col justify-center items-center gap-3 p-12" role="status">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
            {text.map(|text| view! { <p class="text-sm text-fg-muted">{text}</p> })}
        </div>
    }
}
