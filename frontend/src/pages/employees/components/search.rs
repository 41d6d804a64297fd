use leptos::*;

#[component]
pub fn SearchBar(query: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="relative mb-6 max-w-md">
            <span class="absolute inset-y-0 left-3 flex items-center text-fg-muted" aria-hidden="true">
                <svg width="16" height="16" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
                    <circle cx="11" cy="11" r="8"/>
                    <line x1="21" y1="21" x2="16.65" y2="16.65"/>
                </svg>
            </span>
            <input
                type="search"
                class="w-full rounded-md border border-form-control-border bg-form-control-bg pl-9 pr-3 py-2 text-sm text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-focus"
                placeholder="Search by name, ID, department, or email..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn search_bar_renders_placeholder() {
        let html = render_to_string(|| {
            let query = create_rw_signal(String::from("jane"));
            view! { <SearchBar query=query/> }
        });
        assert!(html.contains("Search by name, ID, department, or email..."));
    }
}
