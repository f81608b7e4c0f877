//! Typed operations for each service family.
//!
//! Each wrapper names only the operations this crate consumes. Anything else stays reachable
//! through [`EndpointProxy::call`].

use std::sync::Arc;

use serde_json::{json, Value};

use crate::core::endpoint::EndpointProxy;
use crate::core::light_resources::ResourceType;
use crate::domain::model::{ProjectListFilter, Record};
use crate::utils::error::Result;
use crate::utils::normalize::{to_records, to_scalar_string};

async fn list(proxy: &EndpointProxy, operation: &str, arguments: Value) -> Result<Vec<Record>> {
    let raw = proxy.call(operation, arguments).await?;
    let records = to_records(operation, raw);
    tracing::debug!("{} returned {} records", operation, records.len());
    Ok(records)
}

#[derive(Debug, Clone)]
pub struct ServerProjectService {
    proxy: Arc<EndpointProxy>,
}

impl ServerProjectService {
    pub fn new(proxy: Arc<EndpointProxy>) -> Self {
        Self { proxy }
    }

    pub async fn get_api_version(&self) -> Result<String> {
        let raw = self.proxy.call("GetApiVersion", json!({})).await?;
        to_scalar_string("GetApiVersion", raw)
    }

    /// `None` 使用伺服器預設的篩選條件
    pub async fn list_projects(&self, filter: Option<&ProjectListFilter>) -> Result<Vec<Record>> {
        let arguments = match filter {
            Some(filter) => json!({ "filter": filter }),
            None => json!({}),
        };
        list(&self.proxy, "ListProjects", arguments).await
    }
}

#[derive(Debug, Clone)]
pub struct SecurityService {
    proxy: Arc<EndpointProxy>,
}

impl SecurityService {
    pub fn new(proxy: Arc<EndpointProxy>) -> Self {
        Self { proxy }
    }

    pub async fn list_users(&self) -> Result<Vec<Record>> {
        list(&self.proxy, "ListUsers", json!({})).await
    }

    pub async fn list_groups(&self) -> Result<Vec<Record>> {
        list(&self.proxy, "ListGroups", json!({})).await
    }
}

#[derive(Debug, Clone)]
pub struct LiveDocsService {
    proxy: Arc<EndpointProxy>,
}

impl LiveDocsService {
    pub fn new(proxy: Arc<EndpointProxy>) -> Self {
        Self { proxy }
    }

    pub async fn list_corpora(&self) -> Result<Vec<Record>> {
        list(&self.proxy, "ListCorpora", json!({})).await
    }
}

#[derive(Debug, Clone)]
pub struct TbService {
    proxy: Arc<EndpointProxy>,
}

impl TbService {
    pub fn new(proxy: Arc<EndpointProxy>) -> Self {
        Self { proxy }
    }

    pub async fn list_tbs(&self) -> Result<Vec<Record>> {
        list(&self.proxy, "ListTBs", json!({})).await
    }
}

#[derive(Debug, Clone)]
pub struct TmService {
    proxy: Arc<EndpointProxy>,
}

impl TmService {
    pub fn new(proxy: Arc<EndpointProxy>) -> Self {
        Self { proxy }
    }

    pub async fn list_tms(&self) -> Result<Vec<Record>> {
        list(&self.proxy, "ListTMs", json!({})).await
    }
}

#[derive(Debug, Clone)]
pub struct ResourceService {
    proxy: Arc<EndpointProxy>,
}

impl ResourceService {
    pub fn new(proxy: Arc<EndpointProxy>) -> Self {
        Self { proxy }
    }

    pub async fn list_resources(&self, resource_type: ResourceType) -> Result<Vec<Record>> {
        list(
            &self.proxy,
            "ListResources",
            json!({ "resourceType": resource_type.as_str() }),
        )
        .await
    }
}

#[derive(Debug, Clone)]
pub struct TaskService {
    proxy: Arc<EndpointProxy>,
}

impl TaskService {
    pub fn new(proxy: Arc<EndpointProxy>) -> Self {
        Self { proxy }
    }

    pub async fn get_task_status(&self, task_id: &str) -> Result<String> {
        let raw = self
            .proxy
            .call("GetTaskStatus", json!({ "taskId": task_id }))
            .await?;
        to_scalar_string("GetTaskStatus", raw)
    }
}
