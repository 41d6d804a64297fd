use crate::api::{ApiClient, ApiError, AttendanceStatus, Employee, NewAttendance};
use crate::pages::attendance::{
    repository,
    utils::{marked_message, AttendanceErrors, AttendanceField, AttendanceForm},
};
use crate::state::{
    screen::ScreenLoader,
    toast::{use_toasts, ToastContext},
};
use leptos::*;

pub const LOAD_FALLBACK: &str = "Failed to load employees";
pub const MARK_FALLBACK: &str = "Failed to mark attendance";

/// Reacts to a finished mark. Success clears only the employee selection.
pub fn apply_mark_result(
    result: Result<NewAttendance, ApiError>,
    roster: &[Employee],
    form: RwSignal<AttendanceForm>,
    toasts: &ToastContext,
) {
    match result {
        Ok(marked) => {
            toasts.success(marked_message(roster, &marked));
            form.try_update(|f| f.employee_id.clear());
        }
        Err(err) => {
            log::warn!("mark attendance failed: {}", err);
            toasts.error(err.message_or(MARK_FALLBACK));
        }
    }
}

#[derive(Clone)]
pub struct AttendanceViewModel {
    api: ApiClient,
    pub loader: ScreenLoader<Vec<Employee>>,
    pub form: RwSignal<AttendanceForm>,
    pub errors: RwSignal<AttendanceErrors>,
    pub mark_action: Action<NewAttendance, Result<NewAttendance, ApiError>>,
}

impl AttendanceViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let api_for_mark = api.clone();
        let mark_action = create_action(move |payload: &NewAttendance| {
            let api = api_for_mark.clone();
            let payload = payload.clone();
            async move {
                repository::mark_attendance(&api, payload.clone())
                    .await
                    .map(|_| payload)
            }
        });

        Self {
            api,
            loader: ScreenLoader::with_empty_check(LOAD_FALLBACK, Vec::is_empty),
            form: create_rw_signal(AttendanceForm::default()),
            errors: create_rw_signal(AttendanceErrors::new()),
            mark_action,
        }
    }

    pub fn reload(&self) {
        let api = self.api.clone();
        self.loader.load(async move { repository::fetch_roster(&api).await });
    }

    pub fn roster(&self) -> Signal<Vec<Employee>> {
        let state = self.loader.state();
        Signal::derive(move || state.with(|s| s.data().cloned().unwrap_or_default()))
    }

    pub fn error(&self, field: AttendanceField) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    fn clear_error(&self, field: AttendanceField) {
        if self.errors.with_untracked(|e| e.get(field).is_some()) {
            self.errors.update(|e| {
                e.remove(field);
            });
        }
    }

    pub fn select_employee(&self, employee_id: String) {
        self.form.update(|f| f.employee_id = employee_id);
        self.clear_error(AttendanceField::Employee);
    }

    pub fn set_date(&self, date: String) {
        self.form.update(|f| f.date = date);
        self.clear_error(AttendanceField::Date);
    }

    pub fn set_status(&self, status: AttendanceStatus) {
        self.form.update(|f| f.status = status);
    }

    /// Validates and dispatches; returns whether a request was sent.
    pub fn submit(&self) -> bool {
        if self.mark_action.pending().get_untracked() {
            return false;
        }
        match self.form.with_untracked(AttendanceForm::validate) {
            Ok(payload) => {
                self.errors.set(AttendanceErrors::new());
                self.mark_action.dispatch(payload);
                true
            }
            Err(errors) => {
                self.errors.set(errors);
                false
            }
        }
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    let vm = AttendanceViewModel::new();
    let toasts = use_toasts();

    let on_mount = vm.clone();
    create_effect(move |_| on_mount.reload());

    let on_result = vm.clone();
    create_effect(move |_| {
        if let Some(result) = on_result.mark_action.value().get() {
            let roster = on_result.loader.state().with_untracked(|s| s.data().cloned());
            apply_mark_result(
                result,
                roster.as_deref().unwrap_or_default(),
                on_result.form,
                &toasts,
            );
        }
    });
    vm
}
