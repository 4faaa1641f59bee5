//! Catalog client: fetches the model list from the VERSE API.

use std::sync::Arc;
use std::time::Duration;

use bevy::prelude::*;

use super::record::{normalize_catalog, ModelRecord};
use crate::config::ClientConfigData;
use crate::constants::{CATALOG_ENDPOINT, USER_AGENT};
use crate::error::CatalogError;

/// Anything that can produce the model catalog.
///
/// Called from the I/O task pool, so implementations may block.
pub trait CatalogSource: Send + Sync + 'static {
    fn fetch_catalog(&self) -> Result<Vec<ModelRecord>, CatalogError>;
}

/// Shared handle to the catalog source used by the catalog view
#[derive(Resource, Clone)]
pub struct CatalogSourceHandle(pub Arc<dyn CatalogSource>);

impl CatalogSourceHandle {
    pub fn new(source: impl CatalogSource) -> Self {
        Self(Arc::new(source))
    }
}

/// Catalog source backed by a single HTTP GET
pub struct HttpCatalogClient {
    agent: ureq::Agent,
    url: String,
}

impl HttpCatalogClient {
    pub fn new(api_base_url: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build();

        Self {
            agent,
            url: catalog_url(api_base_url),
        }
    }

    pub fn from_config(config: &ClientConfigData) -> Self {
        Self::new(&config.api_base_url, config.request_timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Join the API base URL and the catalog endpoint
pub fn catalog_url(api_base_url: &str) -> String {
    format!("{}{}", api_base_url.trim_end_matches('/'), CATALOG_ENDPOINT)
}

impl CatalogSource for HttpCatalogClient {
    fn fetch_catalog(&self) -> Result<Vec<ModelRecord>, CatalogError> {
        debug!("Fetching catalog from {}", self.url);

        let response = match self.agent.get(&self.url).call() {
            Ok(resp) => resp,
            Err(ureq::Error::Status(status, resp)) => {
                return Err(CatalogError::Status {
                    status,
                    reason: resp.status_text().to_string(),
                });
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(CatalogError::Transport(transport.to_string()));
            }
        };

        let body = response
            .into_string()
            .map_err(|e| CatalogError::Read(e.to_string()))?;

        let records = normalize_catalog(&body)?;
        info!("Fetched {} model records", records.len());
        Ok(records)
    }
}
