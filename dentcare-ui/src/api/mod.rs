//! Browser adapters for the clinic API client and the session store.

mod storage;
mod transport;

pub use storage::LocalStorage;
pub use transport::GlooTransport;

use dentcare::client::DEFAULT_API_BASE;

/// localStorage key overriding the API base URL
const API_URL_KEY: &str = "dentcare_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}
