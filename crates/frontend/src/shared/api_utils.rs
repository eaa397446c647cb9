//! API utilities for frontend-backend communication
//!
//! Base URLs are fixed at build time. Set `APP_BASE_API` / `APP_BASE_URL`
//! when running `trunk build` to point the page at another backend.

use web_sys::window;

const DEFAULT_BASE_API: &str = "https://ecommerce-backend-xope.onrender.com/api";
const DEFAULT_BASE_URL: &str = "https://ecommerce-backend-xope.onrender.com";

const ACCESS_TOKEN_KEY: &str = "token";

fn configured(value: Option<&'static str>, fallback: &'static str) -> &'static str {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .trim_end_matches('/')
}

/// Base URL of the REST API, e.g. "https://host/api"
pub fn api_base() -> &'static str {
    configured(option_env!("APP_BASE_API"), DEFAULT_BASE_API)
}

/// Base URL of the backend site, used for uploaded files
pub fn site_base() -> &'static str {
    configured(option_env!("APP_BASE_URL"), DEFAULT_BASE_URL)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/orders/installment/admin");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}/{}", api_base(), path.trim_start_matches('/'))
}

/// Link to a file served by the backend; absolute URLs are kept as-is
pub fn site_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!("{}/{}", site_base(), path.trim_start_matches('/'))
}

/// `Authorization` header value when the admin is logged in
pub fn auth_header() -> Option<String> {
    let storage = window()?.local_storage().ok()??;
    let token = storage.get_item(ACCESS_TOKEN_KEY).ok()??;
    if token.is_empty() {
        None
    } else {
        Some(format!("Bearer {}", token))
    }
}
