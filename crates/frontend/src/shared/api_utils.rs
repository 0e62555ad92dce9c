//! API base-URL resolution for frontend-backend communication.

use once_cell::unsync::OnceCell;

/// Context path of the backend, same-origin by default.
const CONTEXT_PATH: &str = "/SpringMVC";

/// localStorage key that overrides the API base, e.g. for pointing a
/// dev build at a remote backend.
const STORAGE_KEY: &str = "achat.apiBase";

thread_local! {
    static API_BASE: OnceCell<String> = const { OnceCell::new() };
}

/// Get the base URL for API requests, resolved once per page load.
pub fn api_base() -> String {
    API_BASE.with(|cell| cell.get_or_init(resolve_base).clone())
}

/// Build a full API URL from a controller path like `/produit/...`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn resolve_base() -> String {
    let Some(window) = web_sys::window() else {
        return CONTEXT_PATH.to_string();
    };
    if let Ok(Some(storage)) = window.local_storage() {
        if let Ok(Some(base)) = storage.get_item(STORAGE_KEY) {
            if !base.trim().is_empty() {
                return base;
            }
        }
    }
    CONTEXT_PATH.to_string()
}
