use crate::adapters::CourseraCatalog;
use crate::core::{Aggregator, ConfigProvider};
use crate::utils::error::Result;
use std::sync::Arc;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<Aggregator>,
}

impl AppState {
    pub fn new(aggregator: Aggregator) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
        }
    }

    /// 依設定建立 Coursera catalog 與聚合器
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let catalog = CourseraCatalog::new(config.catalog_endpoint(), config.request_timeout())?;
        tracing::info!("Catalog endpoint: {}", catalog.endpoint());

        let aggregator = Aggregator::new(Arc::new(catalog), config.result_limit());
        Ok(Self::new(aggregator))
    }
}
