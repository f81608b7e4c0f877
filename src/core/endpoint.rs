use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use url::Url;

use crate::core::service::{ServiceFamily, DEFAULT_BASE_URL};
use crate::domain::ports::{RpcTransport, ServiceDescription};
use crate::utils::error::{MemoQError, Result};

/// A bound connection to one service family.
///
/// Construction fetches the service description, so a proxy that exists is always bound.
/// Operations are forwarded to the transport; names the description does not declare are
/// rejected locally.
pub struct EndpointProxy {
    family: ServiceFamily,
    base_url: String,
    description: ServiceDescription,
    transport: Arc<dyn RpcTransport>,
}

impl EndpointProxy {
    pub async fn connect(
        family: ServiceFamily,
        base_url: Option<&str>,
        transport: Arc<dyn RpcTransport>,
    ) -> Result<Self> {
        let base_url = base_url.unwrap_or(DEFAULT_BASE_URL).to_string();
        let service_url = family.service_url(&base_url)?;

        tracing::debug!("Fetching {} service description from {}", family, service_url);
        let description = transport.describe(&service_url).await?;
        tracing::debug!(
            "{} service declares {} operations",
            family,
            description.operations.len()
        );

        Ok(Self {
            family,
            base_url,
            description,
            transport,
        })
    }

    pub fn family(&self) -> ServiceFamily {
        self.family
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn service_url(&self) -> &Url {
        &self.description.service_url
    }

    pub fn description(&self) -> &ServiceDescription {
        &self.description
    }

    /// 服務描述中宣告的操作名稱（已排序）
    pub fn operations(&self) -> Vec<&str> {
        self.description.operations.iter().map(String::as_str).collect()
    }

    pub fn supports(&self, operation: &str) -> bool {
        self.description.declares(operation)
    }

    pub async fn call(&self, operation: &str, arguments: Value) -> Result<Value> {
        if !self.supports(operation) {
            return Err(MemoQError::UnknownOperation {
                family: self.family.to_string(),
                operation: operation.to_string(),
            });
        }

        tracing::debug!("Calling {}.{}", self.family, operation);
        self.transport
            .call(&self.description, operation, arguments)
            .await
    }
}

impl fmt::Debug for EndpointProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointProxy")
            .field("family", &self.family)
            .field("service_url", &self.description.service_url.as_str())
            .field("operations", &self.description.operations.len())
            .finish()
    }
}
