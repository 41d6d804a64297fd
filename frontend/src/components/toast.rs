use crate::state::toast::{provide_toasts, use_toasts, Toast};
use leptos::*;

/// Owns the toast queue for everything rendered beneath it.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    provide_toasts();
    view! {
        {children()}
        <ToastContainer/>
    }
}

#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = use_toasts();
    let items = toasts.toasts();
    view! {
        <div class="fixed top-4 right-4 z-[80] flex flex-col gap-2 w-80 max-w-[calc(100vw-2rem)]" aria-live="polite">
            <For
                each=move || items.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let ctx = toasts.clone();
                    let id = toast.id;
                    view! {
                        <div class=format!("{} flex items-start gap-3 rounded-lg border px-4 py-3 shadow-lg", toast.kind.class())>
                            <span class="font-bold">{toast.kind.icon()}</span>
                            <p class="flex-1 text-sm">{toast.text}</p>
                            <button
                                type="button"
                                aria-label="Dismiss"
                                class="text-sm opacity-70 hover:opacity-100"
                                on:click=move |_| ctx.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
