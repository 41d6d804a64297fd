use leptos::*;

#[component]
pub fn DepartmentTags(departments: Vec<String>) -> impl IntoView {
    if departments.is_empty() {
        return ().into_view();
    }
    view! {
        <section class="mt-10">
            <h3 class="text-lg font-semibold text-fg mb-3">"Active Departments"</h3>
            <div class="flex flex-wrap gap-2">
                {departments
                    .into_iter()
                    .map(|dept| view! {
                        <span class="inline-flex px-3 py-1 rounded-full text-xs font-semibold bg-primary-subtle text-action-primary-bg">
                            {dept}
                        </span>
                    })
                    .collect_view()}
            </div>
        </section>
    }
    .into_view()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn hidden_when_no_departments() {
        let html = render_to_string(|| view! { <DepartmentTags departments=Vec::new()/> });
        assert!(!html.contains("Active Departments"));
    }

    #[test]
    fn lists_each_department() {
        let html = render_to_string(|| {
            view! { <DepartmentTags departments=vec!["Engineering".into(), "Legal".into()]/> }
        });
        assert!(html.contains("Active Departments"));
        assert!(html.contains("Engineering"));
        assert!(html.contains("Legal"));
    }
}
