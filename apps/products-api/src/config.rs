//! Configuration for Products API

use core_config::{
    app_info, env_flag, env_parse, server::ServerConfig, AppInfo, ConfigError, FromEnv,
};
use domain_products::{Locale, MatchPolicy};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub catalog: CatalogConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let catalog = CatalogConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            catalog,
        })
    }
}

/// Catalogue and validation settings
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogConfig {
    /// Load the demo products at startup (`PRODUCTS_SEED`)
    pub seed: bool,
    /// How the SKU pattern must match (`SKU_MATCH_POLICY`)
    pub sku_policy: MatchPolicy,
    /// Language of validation messages (`VALIDATION_LOCALE`)
    pub locale: Locale,
}

impl FromEnv for CatalogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            seed: env_flag("PRODUCTS_SEED", false)?,
            sku_policy: env_parse("SKU_MATCH_POLICY", "exactly-once")?,
            locale: env_parse("VALIDATION_LOCALE", "en")?,
        })
    }
}
