use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeSet;
use url::Url;

/// 從服務描述文件取得的資訊
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescription {
    /// URL the description was fetched from (includes the `?wsdl` suffix).
    pub service_url: Url,
    /// URL operations are posted to: the service URL without its query.
    pub endpoint_url: Url,
    pub operations: BTreeSet<String>,
}

impl ServiceDescription {
    pub fn new(service_url: Url, operations: impl IntoIterator<Item = String>) -> Self {
        let mut endpoint_url = service_url.clone();
        endpoint_url.set_query(None);
        Self {
            service_url,
            endpoint_url,
            operations: operations.into_iter().collect(),
        }
    }

    pub fn declares(&self, operation: &str) -> bool {
        self.operations.contains(operation)
    }
}

/// The RPC collaborator every endpoint talks through.
///
/// Implementations own all network I/O. Errors are returned as-is to the caller; nothing in
/// this crate retries a failed call.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    async fn describe(&self, service_url: &Url) -> Result<ServiceDescription>;

    async fn call(
        &self,
        description: &ServiceDescription,
        operation: &str,
        arguments: Value,
    ) -> Result<Value>;
}
