use leptos::*;

const CONTROL_BASE: &str =
    "mt-1 w-full rounded-md border bg-form-control-bg px-3 py-2 text-sm text-fg focus:outline-none focus:ring-2";

pub fn control_class(has_error: bool) -> String {
    if has_error {
        format!("{} border-status-error-border focus:ring-status-error-border", CONTROL_BASE)
    } else {
        format!("{} border-form-control-border focus:ring-action-primary-focus", CONTROL_BASE)
    }
}

#[component]
pub fn FormField(
    #[prop(into)] label: String,
    #[prop(into)] error: Signal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="flex flex-col">
            <label class="text-sm font-medium text-fg-muted">{label}</label>
            {children()}
            <FieldError error=error/>
        </div>
    }
}

#[component]
pub fn FieldError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <p class="mt-1 text-xs text-status-error-text">{move || error.get().unwrap_or_default()}</p>
        </Show>
    }
}

#[component]
pub fn SubmitButton(
    #[prop(into)] label: String,
    #[prop(into)] pending_label: String,
    #[prop(into)] pending: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="inline-flex items-center gap-2 px-4 py-2 rounded-md text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
            disabled=move || pending.get()
        >
            <Show when=move || pending.get()>
                <span class="animate-spin rounded-full h-4 w-4 border-b-2 border-current"></span>
            </Show>
            {move || if pending.get() { pending_label.clone() } else { label.clone() }}
        </button>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn form_field_shows_error_message() {
        let html = render_to_string(|| {
            let error = Signal::derive(|| Some("Email is required".to_string()));
            view! {
                <FormField label="Email Address" error=error>
                    <input type="email"/>
                </FormField>
            }
        });
        assert!(html.contains("Email Address"));
        assert!(html.contains("Email is required"));
    }

    #[test]
    fn submit_button_uses_pending_label() {
        let html = render_to_string(|| {
            view! { <SubmitButton label="Add Employee" pending_label="Adding..." pending=Signal::derive(|| true)/> }
        });
        assert!(html.contains("Adding..."));
        assert!(!html.contains("Add Employee"));
    }
}
