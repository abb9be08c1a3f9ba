use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AiConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Populated from the environment, never from profile files.
    #[serde(skip)]
    pub api_key: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl AiConfig {
    pub fn new() -> Self {
        let api_key = env::var("GEMINI_API_KEY").unwrap_or_default();
        let model = env::var("LINGO_MODEL").unwrap_or_else(|_| default_model());

        Self {
            enabled: default_enabled(),
            model,
            api_url: default_api_url(),
            api_key,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            model: default_model(),
            api_url: default_api_url(),
            api_key: String::new(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
