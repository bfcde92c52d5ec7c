//! Facade bundling every resource client over one gateway.

use std::sync::Arc;

use crate::config::Config;

use super::gateway::{Gateway, Result, Transport};
use super::{CategoriesApi, SettingsApi, TagsApi, WorksheetsApi};

/// API client for the worksheet catalog.
/// Clone is cheap - the gateway shares its transport behind an Arc.
#[derive(Clone)]
pub struct ApiClient {
    gateway: Gateway,
    categories: CategoriesApi,
    tags: TagsApi,
    settings: SettingsApi,
    worksheets: WorksheetsApi,
}

impl ApiClient {
    /// Create a client over HTTP for the configured base address.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::from_gateway(Gateway::new(&config.base_url)?))
    }

    pub fn with_transport(base_url: &str, transport: Arc<dyn Transport>) -> Self {
        Self::from_gateway(Gateway::with_transport(base_url, transport))
    }

    pub fn from_gateway(gateway: Gateway) -> Self {
        Self {
            categories: CategoriesApi::new(gateway.clone()),
            tags: TagsApi::new(gateway.clone()),
            settings: SettingsApi::new(gateway.clone()),
            worksheets: WorksheetsApi::new(gateway.clone()),
            gateway,
        }
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub fn categories(&self) -> &CategoriesApi {
        &self.categories
    }

    pub fn tags(&self) -> &TagsApi {
        &self.tags
    }

    pub fn settings(&self) -> &SettingsApi {
        &self.settings
    }

    pub fn worksheets(&self) -> &WorksheetsApi {
        &self.worksheets
    }
}
