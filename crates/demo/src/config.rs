//! Environment-driven configuration for the demo binary.

use stocktake_observability::LogFormat;

use crate::shelves::parse_dimensions;

pub const SEARCH_VAR: &str = "STOCKTAKE_SEARCH";
pub const GRID_VAR: &str = "STOCKTAKE_GRID";
pub const LOG_FORMAT_VAR: &str = "STOCKTAKE_LOG_FORMAT";

const DEFAULT_SEARCH: &str = "2";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Substring used to look products up by name.
    pub search: String,
    /// Benchmark dimensions; prompted for when `None`.
    pub grid: Option<(usize, usize)>,
    pub log_format: LogFormat,
    /// Variables that were set but unusable, and so fell back to defaults.
    pub fallbacks: Vec<&'static str>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            search: DEFAULT_SEARCH.to_string(),
            grid: None,
            log_format: LogFormat::default(),
            fallbacks: Vec::new(),
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(search) = lookup(SEARCH_VAR) {
            config.search = search;
        }

        if let Some(raw) = lookup(GRID_VAR) {
            match parse_dimensions(&raw) {
                Some(dims) => config.grid = Some(dims),
                None => config.fallbacks.push(GRID_VAR),
            }
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match raw.parse() {
                Ok(format) => config.log_format = format,
                Err(_) => config.fallbacks.push(LOG_FORMAT_VAR),
            }
        }

        config
    }
}
