use crate::shared::pagination::state::DEFAULT_PAGE_SIZE;
use crate::shared::table::TableError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub table: TableSettings,
    #[serde(default)]
    pub loader: LoaderSettings,
}

/// Defaults applied to every `DataTable` unless a page overrides them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSettings {
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
    #[serde(default = "default_empty_message")]
    pub empty_message: String,
    #[serde(default = "default_loading_message")]
    pub loading_message: String,
    /// Delay before a typed search is applied.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u32,
}

/// Mock loader behaviour for server-side pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderSettings {
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u32,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_page_size_options() -> Vec<usize> {
    vec![10, 20, 50, 100]
}

fn default_empty_message() -> String {
    "No records found.".to_string()
}

fn default_loading_message() -> String {
    "Loading...".to_string()
}

fn default_search_debounce_ms() -> u32 {
    300
}

fn default_latency_ms() -> u32 {
    400
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            page_size_options: default_page_size_options(),
            empty_message: default_empty_message(),
            loading_message: default_loading_message(),
            search_debounce_ms: default_search_debounce_ms(),
        }
    }
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            table: TableSettings::default(),
            loader: LoaderSettings::default(),
        }
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[table]
default_page_size = 10
page_size_options = [10, 20, 50, 100]
empty_message = "No records found."
loading_message = "Loading..."
search_debounce_ms = 300

[loader]
latency_ms = 400
"#;

/// Parse and validate a TOML configuration.
pub fn parse_config(contents: &str) -> Result<DashboardConfig, TableError> {
    let config: DashboardConfig =
        toml::from_str(contents).map_err(|e| TableError::InvalidConfig(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<(), TableError> {
        let table = &self.table;
        if table.default_page_size == 0 {
            return Err(TableError::InvalidConfig(
                "default_page_size must be positive".to_string(),
            ));
        }
        if table.page_size_options.is_empty() {
            return Err(TableError::InvalidConfig(
                "page_size_options must not be empty".to_string(),
            ));
        }
        if table.page_size_options.contains(&0) {
            return Err(TableError::InvalidConfig(
                "page_size_options must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
