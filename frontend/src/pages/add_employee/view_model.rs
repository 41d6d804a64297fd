use crate::api::{ApiClient, ApiError, Employee, NewEmployee};
use crate::pages::add_employee::{
    repository,
    utils::{created_message, field_for_error, EmployeeErrors, EmployeeField, EmployeeForm},
};
use crate::state::toast::{use_toasts, ToastContext};
use gloo_timers::future::TimeoutFuture;
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};
use std::{cell::Cell, rc::Rc};

pub const CREATE_FALLBACK: &str = "Failed to add employee";
pub const REDIRECT_DELAY_MS: u32 = 1000;
pub const REDIRECT_TARGET: &str = "/employees";

/// Reacts to a finished create. Returns `true` when the page should move on to
/// the roster.
pub fn apply_create_result(
    result: Result<Employee, ApiError>,
    errors: RwSignal<EmployeeErrors>,
    toasts: &ToastContext,
) -> bool {
    match result {
        Ok(created) => {
            toasts.success(created_message(&created.full_name));
            true
        }
        Err(err) => {
            log::warn!("create employee failed: {}", err);
            let message = err.message_or(CREATE_FALLBACK);
            toasts.error(message.clone());
            if let Some(field) = field_for_error(&message) {
                let mut mapped = EmployeeErrors::new();
                mapped.insert(field, message);
                errors.try_set(mapped);
            }
            false
        }
    }
}

#[derive(Clone)]
pub struct AddEmployeeViewModel {
    pub form: RwSignal<EmployeeForm>,
    pub errors: RwSignal<EmployeeErrors>,
    pub create_action: Action<NewEmployee, Result<Employee, ApiError>>,
}

impl AddEmployeeViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let create_action = create_action(move |payload: &NewEmployee| {
            let api = api.clone();
            let payload = payload.clone();
            async move { repository::create_employee(&api, payload).await }
        });
        Self {
            form: create_rw_signal(EmployeeForm::default()),
            errors: create_rw_signal(EmployeeErrors::new()),
            create_action,
        }
    }

    pub fn value(&self, field: EmployeeField) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.get(field).to_string()))
    }

    pub fn error(&self, field: EmployeeField) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    /// Stores the new value and drops that field's error.
    pub fn update_field(&self, field: EmployeeField, value: String) {
        self.form.update(|f| f.set(field, value));
        if self.errors.with_untracked(|e| e.get(field).is_some()) {
            self.errors.update(|e| {
                e.remove(field);
            });
        }
    }

    /// Validates and dispatches; returns whether a request was sent.
    pub fn submit(&self) -> bool {
        if self.create_action.pending().get_untracked() {
            return false;
        }
        let form = self.form.get_untracked();
        let errors = form.validate();
        let valid = errors.is_empty();
        self.errors.set(errors);
        if valid {
            self.create_action.dispatch(form.to_payload());
        }
        valid
    }
}

pub fn use_add_employee_view_model() -> AddEmployeeViewModel {
    let vm = AddEmployeeViewModel::new();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let mounted = Rc::new(Cell::new(true));
    {
        let mounted = Rc::clone(&mounted);
        on_cleanup(move || mounted.set(false));
    }

    let errors = vm.errors;
    let value = vm.create_action.value();
    create_effect(move |_| {
        let Some(result) = value.get() else {
            return;
        };
        if apply_create_result(result, errors, &toasts) {
            let mounted = Rc::clone(&mounted);
            let navigate = navigate.clone();
            spawn_local(async move {
                TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                if mounted.get() {
                    navigate(REDIRECT_TARGET, NavigateOptions::default());
                }
            });
        }
    });
    vm
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::state::toast::{provide_toasts, ToastKind};
    use crate::test_support::{helpers::employee, ssr::with_runtime};

    #[test]
    fn success_toasts_and_requests_redirect() {
        with_runtime(|| {
            let toasts = provide_toasts();
            let errors = create_rw_signal(EmployeeErrors::new());
            let created = employee("EMP007", "Jane Doe", "Engineering");

            assert!(apply_create_result(Ok(created), errors, &toasts));
            let shown = toasts.toasts().get_untracked();
            assert_eq!(shown[0].kind, ToastKind::Success);
            assert_eq!(shown[0].text, "Employee \"Jane Doe\" added successfully!");
        });
    }

    #[test]
    fn duplicate_email_marks_the_email_field() {
        with_runtime(|| {
            let toasts = provide_toasts();
            let errors = create_rw_signal(EmployeeErrors::new());
            let err = ApiError::from_body(
                409,
                r#"{"detail":"Employee with email 'jane@company.com' already exists"}"#,
            );

            assert!(!apply_create_result(Err(err), errors, &toasts));
            let current = errors.get_untracked();
            assert_eq!(current.len(), 1);
            assert!(current.get(EmployeeField::Email).is_some());
            assert_eq!(toasts.toasts().get_untracked()[0].kind, ToastKind::Error);
        });
    }

    #[test]
    fn unmapped_failure_leaves_field_errors_alone() {
        with_runtime(|| {
            let toasts = provide_toasts();
            let errors = create_rw_signal(EmployeeErrors::new());
            assert!(!apply_create_result(
                Err(ApiError::network("offline")),
                errors,
                &toasts
            ));
            assert!(errors.get_untracked().is_empty());
            assert_eq!(toasts.toasts().get_untracked()[0].text, CREATE_FALLBACK);
        });
    }

    #[test]
    fn invalid_submit_stays_local_and_edits_clear_errors() {
        with_runtime(|| {
            let vm = AddEmployeeViewModel::new();
            assert!(!vm.submit());
            assert_eq!(vm.errors.get_untracked().len(), 4);

            vm.update_field(EmployeeField::FullName, "Jane".into());
            let errors = vm.errors.get_untracked();
            assert_eq!(errors.len(), 3);
            assert!(errors.get(EmployeeField::FullName).is_none());
            assert_eq!(vm.value(EmployeeField::FullName).get_untracked(), "Jane");
        });
    }
}
