use yew::prelude::*;

use crate::config::AppSettings;

fn settings_or_default(shared: Option<&AppSettings>) -> AppSettings {
    shared.cloned().unwrap_or_default()
}

/// Settings shared from the app root, or the defaults when rendered outside it.
#[hook]
pub fn use_settings() -> AppSettings {
    let shared = use_context::<UseStateHandle<AppSettings>>();
    settings_or_default(shared.as_deref())
}
