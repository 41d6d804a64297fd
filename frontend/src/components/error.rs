use leptos::*;

/// Full-screen failure view for a screen's initial load.
#[component]
pub fn ErrorState(
    #[prop(into)] message: String,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] on_retry: Option<Callback<()>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let title = title.unwrap_or_else(|| "Oops! Something went wrong".to_string());
    view! {
        <div class="flex flex-col items-center text-center gap-3 py-16 px-4" role="alert">
            <div class="text-4xl">"⚠️"</div>
            <h3 class="text-lg font-semibold text-fg">{title}</h3>
            <p class="text-sm text-status-error-text">{message}</p>
            {on_retry.map(|retry| view! {
                <button
                    type="button"
                    class="mt-2 px-4 py-2 rounded-md text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                    on:click=move |_| retry.call(())
                >
                    "Try Again"
                </button>
            })}
            {children.map(|children| children())}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn error_state_offers_retry_when_given_a_callback() {
        let html = render_to_string(|| {
            view! { <ErrorState message="Failed to load employees" on_retry=Callback::new(|_| {})/> }
        });
        assert!(html.contains("Oops! Something went wrong"));
        assert!(html.contains("Failed to load employees"));
        assert!(html.contains("Try Again"));
    }

    #[test]
    fn error_state_without_retry_hides_button() {
        let html = render_to_string(|| {
            view! { <ErrorState title="Employee not found" message="No such employee"/> }
        });
        assert!(html.contains("Employee not found"));
        assert!(!html.contains("Try Again"));
    }
}
