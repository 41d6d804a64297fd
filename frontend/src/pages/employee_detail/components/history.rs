use crate::api::AttendanceRecord;
use crate::components::empty_state::EmptyState;
use crate::pages::employee_detail::utils::{history_rows, FilterInputs};
use leptos::*;

const SMALL_PRIMARY: &str = "inline-flex items-center gap-1 px-3 py-1.5 rounded-md text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover";
const SMALL_SECONDARY: &str = "inline-flex items-center px-3 py-1.5 rounded-md text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated";
const DATE_INPUT: &str = "rounded-md border border-form-control-border bg-form-control-bg px-3 py-1.5 text-sm text-fg";

#[component]
pub fn FilterBar(
    inputs: RwSignal<FilterInputs>,
    on_apply: Callback<()>,
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="mb-4 flex flex-wrap items-center gap-3">
            <label class="text-sm font-medium text-fg-muted">"From"</label>
            <input
                type="date"
                class=DATE_INPUT
                prop:value=move || inputs.with(|i| i.from.clone())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    inputs.update(|i| i.from = value);
                }
            />
            <label class="text-sm font-medium text-fg-muted">"To"</label>
            <input
                type="date"
                class=DATE_INPUT
                prop:value=move || inputs.with(|i| i.to.clone())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    inputs.update(|i| i.to = value);
                }
            />
            <button type="button" class=SMALL_PRIMARY on:click=move |_| on_apply.call(())>
                "Filter"
            </button>
            <Show when=move || inputs.with(FilterInputs::has_any)>
                <button type="button" class=SMALL_SECONDARY on:click=move |_| on_clear.call(())>
                    "Clear"
                </button>
            </Show>
        </div>
    }
}

#[component]
pub fn HistoryTable(records: Vec<AttendanceRecord>) -> impl IntoView {
    if records.is_empty() {
        return view! {
            <EmptyState
                icon="📋"
                title="No attendance records"
                description="No attendance has been marked for this employee yet."
            >
                <a href="/attendance" class=SMALL_PRIMARY>"Mark Attendance"</a>
            </EmptyState>
        }
        .into_view();
    }

    let rows = history_rows(&records);
    view! {
        <div class="overflow-x-auto rounded-2xl border border-border bg-surface-elevated">
            <table class="min-w-full divide-y divide-border text-sm">
                <thead class="bg-surface-muted text-left text-xs font-semibold uppercase tracking-wider text-fg-muted">
                    <tr>
                        <th class="px-4 py-3">"#"</th>
                        <th class="px-4 py-3">"Date"</th>
                        <th class="px-4 py-3">"Day"</th>
                        <th class="px-4 py-3">"Status"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {rows
                        .into_iter()
                        .map(|row| view! {
                            <tr>
                                <td class="px-4 py-3 font-mono text-fg-muted">{row.index}</td>
                                <td class="px-4 py-3 font-semibold text-fg">{row.date_label}</td>
                                <td class="px-4 py-3 text-fg-muted">{row.weekday}</td>
                                <td class="px-4 py-3">
                                    <span class=row.status.badge_class()>
                                        {format!("{} {}", row.status.icon(), row.status)}
                                    </span>
                                </td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_view()
}
