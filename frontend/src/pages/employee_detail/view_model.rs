use crate::api::{ApiClient, AttendanceQuery};
use crate::pages::employee_detail::{
    repository::{self, EmployeeDetail},
    utils::{decode_employee_id, FilterInputs, HistoryQuery},
};
use crate::state::screen::ScreenLoader;
use leptos::*;
use leptos_router::use_params_map;

pub const LOAD_FALLBACK: &str = "Failed to load employee details";

#[derive(Clone)]
pub struct EmployeeDetailViewModel {
    api: ApiClient,
    pub employee_id: Signal<String>,
    pub inputs: RwSignal<FilterInputs>,
    pub history: RwSignal<HistoryQuery>,
    pub loader: ScreenLoader<EmployeeDetail>,
}

impl EmployeeDetailViewModel {
    pub fn new(employee_id: Signal<String>) -> Self {
        Self {
            api: use_context::<ApiClient>().unwrap_or_else(ApiClient::new),
            employee_id,
            inputs: create_rw_signal(FilterInputs::default()),
            history: create_rw_signal(HistoryQuery::default()),
            loader: ScreenLoader::new(LOAD_FALLBACK),
        }
    }

    pub fn reload(&self) {
        let api = self.api.clone();
        let employee_id = self.employee_id.get_untracked();
        let filter = self.history.get_untracked().filter;
        self.loader.load(async move {
            repository::load_employee_detail(&api, &employee_id, filter).await
        });
    }

    /// Applies the From/To inputs; the load effect picks the change up.
    pub fn apply_filter(&self) {
        let filter = self.inputs.with_untracked(FilterInputs::to_query);
        self.history.update(|query| *query = query.with_filter(filter));
    }

    pub fn clear_filter(&self) {
        self.inputs.set(FilterInputs::default());
        self.history.update(|query| *query = query.with_filter(AttendanceQuery::default()));
    }
}

pub fn use_employee_detail_view_model() -> EmployeeDetailViewModel {
    let params = use_params_map();
    let employee_id = Signal::derive(move || {
        params.with(|map| {
            map.get("employee_id")
                .map(|raw| decode_employee_id(raw))
                .unwrap_or_default()
        })
    });
    let vm = EmployeeDetailViewModel::new(employee_id);

    let on_change = vm.clone();
    create_effect(move |_| {
        on_change.employee_id.with(|_| ());
        on_change.history.with(|_| ());
        on_change.reload();
    });
    vm
}
