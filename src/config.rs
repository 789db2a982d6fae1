//! App Configuration
//!
//! Title and seed list, embedded at build time from `config/packing.json`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Item, ItemId};

const EMBEDDED_CONFIG: &str = include_str!("../config/packing.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("seed item {0} has an empty description")]
    EmptyDescription(ItemId),
    #[error("seed item {0} has zero quantity")]
    ZeroQuantity(ItemId),
    #[error("seed item id {0} appears more than once")]
    DuplicateId(ItemId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Items shown on every fresh load
    #[serde(default)]
    pub seed: Vec<Item>,
}

fn default_title() -> String {
    "My Travel List".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        let mut shirt = Item::new(ItemId(1), "Shirt".to_string(), 5);
        shirt.packed = true;
        Self {
            title: default_title(),
            seed: vec![shirt, Item::new(ItemId(2), "Pants".to_string(), 2)],
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Embedded config, or the built-in default if it does not parse
    pub fn load() -> Self {
        match Self::from_json(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::error!("[CONFIG] {}, using defaults", e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for item in &self.seed {
            if item.description.is_empty() {
                return Err(ConfigError::EmptyDescription(item.id));
            }
            if item.quantity == 0 {
                return Err(ConfigError::ZeroQuantity(item.id));
            }
            if !seen.insert(item.id) {
                return Err(ConfigError::DuplicateId(item.id));
            }
        }
        Ok(())
    }
}
