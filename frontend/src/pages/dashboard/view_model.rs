use crate::api::ApiClient;
use crate::pages::dashboard::repository::{self, DashboardData};
use crate::state::screen::ScreenLoader;
use leptos::*;

pub const LOAD_FALLBACK: &str = "Failed to load dashboard";

#[derive(Clone)]
pub struct DashboardViewModel {
    api: ApiClient,
    pub loader: ScreenLoader<DashboardData>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        Self {
            api,
            loader: ScreenLoader::new(LOAD_FALLBACK),
        }
    }

    pub fn reload(&self) {
        let api = self.api.clone();
        self.loader.load(async move { repository::load_dashboard(&api).await });
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let vm = DashboardViewModel::new();
    let on_mount = vm.clone();
    create_effect(move |_| on_mount.reload());
    vm
}
