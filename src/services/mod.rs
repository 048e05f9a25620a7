//! Business logic services

pub mod catalog;
pub mod loans;

use crate::config::AppConfig;

/// Container for all services
#[derive(Debug, Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub loans: loans::LoansService,
}

impl Services {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            catalog: catalog::CatalogService::new(),
            loans: loans::LoansService::new(&config.lending),
        }
    }
}
