use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

/// Trims whitespace and trailing slashes so paths can be appended directly.
pub fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| normalize_base_url(&v))
        .filter(|v| !v.is_empty())
}

fn build_time_base_url() -> Option<String> {
    non_blank(option_env!("HRMS_API_URL").map(str::to_string))
}

#[cfg(target_arch = "wasm32")]
fn get_from_env_js() -> Option<String> {
    // Optional global injected by env.js: window.__HRMS_ENV = { API_BASE_URL: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &"__HRMS_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &"API_BASE_URL".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &"api_base_url".into()).ok());
    non_blank(val.and_then(|v| v.as_string()))
}

#[cfg(not(target_arch = "wasm32"))]
fn get_from_env_js() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    // reqwest needs an absolute URL, so resolve config.json against the page origin.
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    None
}

fn cache_base_url(value: &str) -> String {
    let value = value.to_string();
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = get_from_env_js() {
        return cache_base_url(&existing);
    }
    if let Some(url) = fetch_runtime_config()
        .await
        .and_then(|cfg| non_blank(cfg.api_base_url))
    {
        return cache_base_url(&url);
    }
    if let Some(url) = build_time_base_url() {
        return cache_base_url(&url);
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let base_url = await_api_base_url().await;
    log::info!("API base URL resolved to {}", base_url);
}
