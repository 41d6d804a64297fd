use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{layout::Layout, toast::ToastProvider},
    pages::{
        AddEmployeePage, AttendancePage, DashboardPage, EmployeeDetailPage, EmployeesPage,
        NotFoundPage,
    },
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/employees",
    "/employees/add",
    "/employees/:employee_id",
    "/attendance",
];

pub const FALLBACK_ROUTE: &str = "/*any";

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_meta_context();
    view! {
        <ToastProvider>
            <Router>
                <Layout>
                    <Routes>
                        <Route path="/" view=DashboardPage/>
                        <Route path="/employees" view=EmployeesPage/>
                        <Route path="/employees/add" view=AddEmployeePage/>
                        <Route path="/employees/:employee_id" view=EmployeeDetailPage/>
                        <Route path="/attendance" view=AttendancePage/>
                        <Route path=FALLBACK_ROUTE view=NotFoundPage/>
                    </Routes>
                </Layout>
            </Router>
        </ToastProvider>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn render_at(path: &str) -> String {
        let url = format!("http://localhost{}", path);
        render_to_string(move || {
            provide_context(RouterIntegrationContext::new(ServerIntegration { path: url }));
            app_root()
        })
    }

    #[test]
    fn unknown_path_renders_not_found_inside_shell() {
        let html = render_at("/payroll");
        assert!(html.contains("Page not found"));
        assert!(html.contains("Management System"));
    }

    #[test]
    fn add_route_wins_over_detail_param() {
        let html = render_at("/employees/add");
        assert!(html.contains("Add New Employee"));
        assert!(!html.contains("Loading employee details..."));
    }

    #[test]
    fn detail_route_starts_loading() {
        let html = render_at("/employees/EMP001");
        assert!(html.contains("Loading employee details..."));
    }
}
