use std::sync::Arc;

use crate::{
    domain::catalog::Catalog,
    infra::{config::AppConfig, storage_layout::StorageLayout},
};

#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub layout: StorageLayout,
    pub catalog: Arc<Catalog>,
}

impl AppContext {
    pub fn new(config: AppConfig, layout: StorageLayout, catalog: Catalog) -> Self {
        Self {
            config,
            layout,
            catalog: Arc::new(catalog),
        }
    }
}
