use crate::api::{ApiClient, ApiError, Employee};
use crate::pages::employees::{
    repository,
    utils::{deleted_message, filter_employees},
};
use crate::state::{
    screen::ScreenLoader,
    toast::{use_toasts, ToastContext},
};
use leptos::*;

pub const LOAD_FALLBACK: &str = "Failed to load employees";
pub const DELETE_FALLBACK: &str = "Failed to delete employee";

/// Reacts to a finished delete. Returns `true` when the roster should be refetched.
pub fn apply_delete_result(
    result: Result<Employee, ApiError>,
    pending_delete: RwSignal<Option<Employee>>,
    toasts: &ToastContext,
) -> bool {
    match result {
        Ok(removed) => {
            toasts.success(deleted_message(&removed.full_name));
            pending_delete.try_set(None);
            true
        }
        Err(err) => {
            log::warn!("delete failed: {}", err);
            toasts.error(err.message_or(DELETE_FALLBACK));
            false
        }
    }
}

#[derive(Clone)]
pub struct EmployeesViewModel {
    api: ApiClient,
    pub loader: ScreenLoader<Vec<Employee>>,
    pub search: RwSignal<String>,
    pub pending_delete: RwSignal<Option<Employee>>,
    pub delete_action: Action<Employee, Result<Employee, ApiError>>,
}

impl EmployeesViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let api_for_delete = api.clone();
        let delete_action = create_action(move |target: &Employee| {
            let api = api_for_delete.clone();
            let target = target.clone();
            async move { repository::delete_employee(&api, target).await }
        });

        Self {
            api,
            loader: ScreenLoader::with_empty_check(LOAD_FALLBACK, Vec::is_empty),
            search: create_rw_signal(String::new()),
            pending_delete: create_rw_signal(None),
            delete_action,
        }
    }

    pub fn reload(&self) {
        let api = self.api.clone();
        self.loader.load(async move { repository::fetch_roster(&api).await });
    }

    pub fn visible(&self) -> Signal<Vec<Employee>> {
        let state = self.loader.state();
        let search = self.search;
        Signal::derive(move || {
            state.with(|s| {
                s.data()
                    .map(|roster| search.with(|q| filter_employees(roster, q)))
                    .unwrap_or_default()
            })
        })
    }

    pub fn request_delete(&self, employee: Employee) {
        self.pending_delete.set(Some(employee));
    }

    /// Closing is ignored while a delete is in flight.
    pub fn cancel_delete(&self) {
        if !self.delete_action.pending().get_untracked() {
            self.pending_delete.set(None);
        }
    }

    pub fn confirm_delete(&self) {
        if self.delete_action.pending().get_untracked() {
            return;
        }
        if let Some(target) = self.pending_delete.get_untracked() {
            self.delete_action.dispatch(target);
        }
    }
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    let vm = EmployeesViewModel::new();
    let toasts = use_toasts();

    let on_mount = vm.clone();
    create_effect(move |_| on_mount.reload());

    let on_result = vm.clone();
    create_effect(move |_| {
        if let Some(result) = on_result.delete_action.value().get() {
            if apply_delete_result(result, on_result.pending_delete, &toasts) {
                on_result.reload();
            }
        }
    });
    vm
}


#[cfg(all(test, not(target_arch = "wasm32"), not(coverage)))]
mod api_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::test_support::helpers::employee;
    use serde_json::json;

    const PATH: &str = "/api/employees/EMP001";

    #[tokio::test]
    async fn delete_waits_for_confirmation() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE).path(PATH);
            then.status(200).json_body(json!({ "message": "deleted" }));
        });

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let runtime = create_runtime();
                provide_context(ApiClient::new_with_base_url(server.url("")));
                let vm = EmployeesViewModel::new();
                let target = employee("EMP001", "Jane Doe", "Engineering");

                vm.request_delete(target.clone());
                assert_eq!(vm.pending_delete.get_untracked(), Some(target.clone()));
                vm.cancel_delete();
                assert!(vm.pending_delete.get_untracked().is_none());
                vm.confirm_delete();
                for _ in 0..10 {
                    tokio::task::yield_now().await;
                }
                assert_eq!(server.hits(DELETE, PATH), 0);

                vm.request_delete(target);
                vm.confirm_delete();
                for _ in 0..50 {
                    if server.hits(DELETE, PATH) > 0 {
                        break;
                    }
                    tokio::task::yield_now().await;
                }
                assert_eq!(server.hits(DELETE, PATH), 1);
                runtime.dispose();
            })
            .await;
    }
}
