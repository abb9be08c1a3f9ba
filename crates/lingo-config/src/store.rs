use std::env;

use serde::{Deserialize, Serialize};

fn default_data_path() -> String {
    "data/words.json".to_string()
}

fn default_cache_path() -> String {
    ".lingo/cache.json".to_string()
}

fn default_export_path() -> String {
    "words.json".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    /// Bundled dictionary, read when no cache exists
    #[serde(default = "default_data_path")]
    pub data_path: String,
    /// Serialized working copy, rewritten after every mutation
    #[serde(default = "default_cache_path")]
    pub cache_path: String,
    /// Default target for `export` without an explicit path
    #[serde(default = "default_export_path")]
    pub export_path: String,
}

impl StoreConfig {
    pub fn new() -> Self {
        let data_path = env::var("LINGO_DATA_PATH").unwrap_or_else(|_| default_data_path());
        let cache_path = env::var("LINGO_CACHE_PATH").unwrap_or_else(|_| default_cache_path());

        Self {
            data_path,
            cache_path,
            export_path: default_export_path(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            cache_path: default_cache_path(),
            export_path: default_export_path(),
        }
    }
}
