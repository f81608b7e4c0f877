use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::config::TransportConfig;
use crate::domain::ports::{RpcTransport, ServiceDescription};
use crate::utils::error::{MemoQError, Result};

/// `RpcTransport` over plain HTTP.
///
/// The service description is fetched with a `GET` on the `?wsdl` URL and only the declared
/// operation names are read from it. Operations are posted as JSON to
/// `<endpoint>/<Operation>`.
#[derive(Debug, Clone)]
pub struct HttpRpcTransport {
    client: Client,
}

impl HttpRpcTransport {
    pub fn new(config: &TransportConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpRpcTransport {
    fn default() -> Self {
        Self::with_client(Client::new())
    }
}

fn operation_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"<(?:[A-Za-z0-9_]+:)?operation\s+name\s*=\s*"([^"]+)""#)
            .expect("operation pattern is a valid regex")
    })
}

/// 從服務描述文件中擷取宣告的操作名稱（去重並排序）
pub fn declared_operations(document: &str) -> Vec<String> {
    let mut operations: Vec<String> = operation_pattern()
        .captures_iter(document)
        .map(|caps| caps[1].to_string())
        .collect();
    operations.sort();
    operations.dedup();
    operations
}

#[async_trait]
impl RpcTransport for HttpRpcTransport {
    async fn describe(&self, service_url: &Url) -> Result<ServiceDescription> {
        let response = self
            .client
            .get(service_url.clone())
            .send()
            .await
            .map_err(|e| MemoQError::ServiceDescription {
                url: service_url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MemoQError::ServiceDescription {
                url: service_url.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        let document = response.text().await?;
        let operations = declared_operations(&document);
        if operations.is_empty() {
            return Err(MemoQError::ServiceDescription {
                url: service_url.to_string(),
                message: "document declares no operations".to_string(),
            });
        }

        Ok(ServiceDescription::new(service_url.clone(), operations))
    }

    async fn call(
        &self,
        description: &ServiceDescription,
        operation: &str,
        arguments: Value,
    ) -> Result<Value> {
        let mut url = description.endpoint_url.clone();
        url.path_segments_mut()
            .map_err(|_| MemoQError::InvalidResponse {
                operation: operation.to_string(),
                message: format!("cannot append operation to {}", description.endpoint_url),
            })?
            .push(operation);

        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .header("SOAPAction", operation)
            .json(&arguments)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(MemoQError::RemoteFault {
                operation: operation.to_string(),
                status: status.as_u16(),
                message: body,
            });
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(|e| MemoQError::InvalidResponse {
            operation: operation.to_string(),
            message: e.to_string(),
        })
    }
}
