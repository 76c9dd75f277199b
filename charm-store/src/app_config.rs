use serde::Deserialize;
use std::env;

use charm_catalog::ItemCategory;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "charm_app=info,charm_core=info,charm_order=info".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// Items inserted into the catalog at startup.
    #[serde(default)]
    pub seed: Vec<SeedItem>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedItem {
    pub name: String,
    pub price: i32,
    pub stock: i32,
    pub category: ItemCategory,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of CHARM)
            .add_source(config::Environment::with_prefix("CHARM").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
