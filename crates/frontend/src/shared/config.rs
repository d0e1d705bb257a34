//! Dashboard configuration: the embedded TOML defaults, optionally replaced by
//! a TOML document stored in `localStorage` under [`CONFIG_STORAGE_KEY`].

use contracts::shared::config::{parse_config, DashboardConfig, DEFAULT_CONFIG};
use leptos::prelude::*;

pub const CONFIG_STORAGE_KEY: &str = "dashboard_config";

/// Read the configuration once at startup.
pub fn load_config() -> DashboardConfig {
    resolve_config(read_override().as_deref())
}

/// Pick the override when it parses and validates, else the embedded default.
pub fn resolve_config(override_toml: Option<&str>) -> DashboardConfig {
    if let Some(text) = override_toml {
        match parse_config(text) {
            Ok(config) => {
                log::info!("config: using override from localStorage");
                return config;
            }
            Err(e) => log::warn!("config: ignoring stored override: {}", e),
        }
    }
    match parse_config(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("config: embedded default rejected: {}", e);
            DashboardConfig::default()
        }
    }
}

fn read_override() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(CONFIG_STORAGE_KEY).ok()?
}

/// Configuration provided by `App`, or the defaults outside of it.
pub fn use_dashboard_config() -> DashboardConfig {
    use_context::<DashboardConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_no_override() {
        assert_eq!(resolve_config(None), DashboardConfig::default());
    }

    #[test]
    fn test_valid_override_applies() {
        let config = resolve_config(Some(
            "[table]\ndefault_page_size = 25\npage_size_options = [25, 50]\n",
        ));
        assert_eq!(config.table.default_page_size, 25);
        assert_eq!(config.table.page_size_options, vec![25, 50]);
        assert_eq!(config.table.empty_message, "No records found.");
        assert_eq!(config.loader.latency_ms, 400);
    }

    #[test]
    fn test_invalid_override_falls_back() {
        assert_eq!(
            resolve_config(Some("[table]\ndefault_page_size = 0\n")),
            DashboardConfig::default()
        );
        assert_eq!(resolve_config(Some("not toml [")), DashboardConfig::default());
    }
}
