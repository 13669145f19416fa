//! Application state management

use domain_products::{product_validator, InMemoryProductRepository, ProductService};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub service: ProductService<InMemoryProductRepository>,
}

impl AppState {
    /// Builds the validator and the store.
    ///
    /// Fails when the validation rules cannot be registered; the process
    /// must not serve requests in that case.
    pub fn new(config: Config) -> eyre::Result<Self> {
        let validator = product_validator(config.catalog.sku_policy, config.catalog.locale)?;

        let repository = if config.catalog.seed {
            InMemoryProductRepository::seeded()
        } else {
            InMemoryProductRepository::new()
        };

        Ok(Self {
            config,
            service: ProductService::new(repository, validator),
        })
    }
}
