use std::{collections::HashMap, fs, path::Path, time::Duration};

use anyhow::Context;
use cart_ui::UiSettings;
use url::Url;

pub const SETTINGS_FILE: &str = "cart.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub server_url: String,
    pub ui: UiSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8000/".into(),
            ui: UiSettings::default(),
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();
    apply_file_overrides(&mut settings, Path::new(SETTINGS_FILE));
    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    settings
}

pub(crate) fn apply_file_overrides(settings: &mut Settings, path: &Path) {
    let Ok(raw) = fs::read_to_string(path) else {
        return;
    };
    let file_cfg = match toml::from_str::<HashMap<String, toml::Value>>(&raw) {
        Ok(file_cfg) => file_cfg,
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "ignoring unreadable settings file");
            return;
        }
    };
    let get = |key: &str| file_cfg.get(key).and_then(value_as_string);

    if let Some(v) = get("server_url") {
        settings.server_url = v;
    }
    if let Some(ms) = get("notification_timeout_ms").and_then(|v| v.parse::<u64>().ok()) {
        settings.ui.notification_timeout = Duration::from_millis(ms);
    }
    if let Some(ms) = get("mini_cart_timeout_ms").and_then(|v| v.parse::<u64>().ok()) {
        settings.ui.mini_cart_timeout = Duration::from_millis(ms);
    }
    if let Some(v) = get("currency_symbol") {
        settings.ui.currency_symbol = v;
    }
    if let Some(v) = get("cart_url") {
        settings.ui.cart_url = v;
    }
    if let Some(v) = get("checkout_url") {
        settings.ui.checkout_url = v;
    }
}

fn value_as_string(value: &toml::Value) -> Option<String> {
    match value {
        toml::Value::String(s) => Some(s.clone()),
        toml::Value::Integer(i) => Some(i.to_string()),
        _ => None,
    }
}

pub(crate) fn apply_env_overrides(
    settings: &mut Settings,
    env: impl Fn(&str) -> Option<String>,
) {
    if let Some(v) = env("CART_SERVER_URL") {
        settings.server_url = v;
    }
    if let Some(v) = env("APP__SERVER_URL") {
        settings.server_url = v;
    }

    if let Some(ms) = env("APP__NOTIFICATION_TIMEOUT_MS").and_then(|v| v.parse::<u64>().ok()) {
        settings.ui.notification_timeout = Duration::from_millis(ms);
    }
    if let Some(ms) = env("APP__MINI_CART_TIMEOUT_MS").and_then(|v| v.parse::<u64>().ok()) {
        settings.ui.mini_cart_timeout = Duration::from_millis(ms);
    }

    if let Some(v) = env("APP__CURRENCY_SYMBOL") {
        settings.ui.currency_symbol = v;
    }
}

/// Parses the storefront page URL that form actions resolve against. A path
/// without a trailing slash is treated as a directory.
pub fn parse_page_url(raw: &str) -> anyhow::Result<Url> {
    let raw = raw.trim();
    let mut url = Url::parse(raw).with_context(|| format!("invalid server url '{raw}'"))?;
    if url.cannot_be_a_base() {
        anyhow::bail!("server url '{raw}' cannot resolve form actions");
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
