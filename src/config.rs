use std::env;
use std::path::PathBuf;

/// Runtime settings, read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory holding the storage slots
    pub data_dir: PathBuf,
    /// JSON catalog to search instead of the built-in one
    pub catalog_path: Option<PathBuf>,
    /// Where search results are written
    pub output_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            catalog_path: None,
            output_path: PathBuf::from("search_results.json"),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            data_dir: non_empty("AUTOPREMIUM_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            catalog_path: non_empty("AUTOPREMIUM_CATALOG").map(PathBuf::from),
            output_path: non_empty("AUTOPREMIUM_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_path),
        }
    }
}
