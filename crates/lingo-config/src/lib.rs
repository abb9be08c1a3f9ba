use serde::{Deserialize, Serialize};

use self::ai::AiConfig;
use self::store::StoreConfig;

pub mod ai;
pub mod store;

#[derive(Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub ai: AiConfig,
    pub store: StoreConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            ai: AiConfig::new(),
            store: StoreConfig::new(),
        }
    }
}
