use crate::api::DashboardSummary;
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tone {
    Primary,
    Success,
    Danger,
    Warning,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Primary => "bg-primary-subtle text-action-primary-bg",
            Tone::Success => "bg-status-success-bg text-status-success-text",
            Tone::Danger => "bg-status-error-bg text-status-error-text",
            Tone::Warning => "bg-status-warning-bg text-status-warning-text",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Tone::Primary => "👥",
            Tone::Success => "✓",
            Tone::Danger => "✕",
            Tone::Warning => "◷",
        }
    }
}

fn stat_cards(summary: &DashboardSummary) -> [(&'static str, u32, Tone); 4] {
    [
        ("Total Employees", summary.total_employees, Tone::Primary),
        ("Present Today", summary.present_today, Tone::Success),
        ("Absent Today", summary.absent_today, Tone::Danger),
        ("Unmarked Today", summary.unmarked_today(), Tone::Warning),
    ]
}

#[component]
pub fn StatCards(summary: DashboardSummary) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 gap-4 lg:grid-cols-4">
            {stat_cards(&summary)
                .into_iter()
                .map(|(label, value, tone)| view! { <StatCard label=label value=value tone=tone/> })
                .collect_view()}
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: u32, tone: Tone) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 p-5 rounded-2xl bg-surface-elevated border border-border shadow-sm">
            <div class=format!("w-12 h-12 rounded-xl flex items-center justify-center text-lg font-bold {}", tone.class())>
                {tone.glyph()}
            </div>
            <div>
                <h3 class="text-2xl font-extrabold text-fg">{value}</h3>
                <p class="text-xs font-semibold uppercase tracking-wider text-fg-muted">{label}</p>
            </div>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_four_cards() {
        let html = render_to_string(|| {
            let summary = DashboardSummary {
                total_employees: 10,
                present_today: 7,
                absent_today: 2,
                departments: Vec::new(),
            };
            view! { <StatCards summary=summary/> }
        });
        for label in ["Total Employees", "Present Today", "Absent Today", "Unmarked Today"] {
            assert!(html.contains(label), "missing {label}");
        }
        assert!(html.contains("10"));
    }
}
