//! Startup Configuration
//!
//! Defaults, optionally overridden by a JSON `<meta>` tag in `index.html`:
//! `<meta name="user-records-config" content='{"storageKey":"users"}'>`

use user_records::{RecordResult, RecordsConfig};

const CONFIG_META_NAME: &str = "user-records-config";

/// Read the config once at startup
pub fn load_config() -> RecordResult<RecordsConfig> {
    match meta_content(CONFIG_META_NAME) {
        Some(raw) => RecordsConfig::from_json(&raw),
        None => Ok(RecordsConfig::default()),
    }
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document.query_selector(&selector).ok()??.get_attribute("content")
}
