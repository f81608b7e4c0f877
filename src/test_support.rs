//! In-memory transport used by the unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::domain::ports::{RpcTransport, ServiceDescription};
use crate::utils::error::{MemoQError, Result};

const DECLARED_OPERATIONS: &[&str] = &[
    "GetApiVersion",
    "ListProjects",
    "ListUsers",
    "ListGroups",
    "ListCorpora",
    "ListTBs",
    "ListTMs",
    "ListResources",
    "GetTaskStatus",
];

pub(crate) struct RecordingTransport {
    describes: AtomicUsize,
    described_urls: Mutex<Vec<String>>,
    calls: Mutex<Vec<(String, Value)>>,
    responses: Mutex<HashMap<String, Value>>,
    fail_describe: bool,
}

impl RecordingTransport {
    pub(crate) fn new() -> Self {
        Self {
            describes: AtomicUsize::new(0),
            described_urls: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            responses: Mutex::new(HashMap::new()),
            fail_describe: false,
        }
    }

    pub(crate) fn fail_describe(mut self) -> Self {
        self.fail_describe = true;
        self
    }

    pub(crate) fn respond(&self, operation: &str, value: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert(operation.to_string(), value);
    }

    /// `ListResources` 依資源類型回應
    pub(crate) fn respond_resource(&self, resource_type: &str, value: Value) {
        self.respond(&format!("ListResources:{}", resource_type), value);
    }

    pub(crate) fn describe_count(&self) -> usize {
        self.describes.load(Ordering::SeqCst)
    }

    pub(crate) fn described_urls(&self) -> Vec<String> {
        self.described_urls.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self, operation: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(op, _)| op == operation)
            .count()
    }

    pub(crate) fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub(crate) fn arguments(&self, operation: &str) -> Vec<Value> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(op, _)| op == operation)
            .map(|(_, args)| args.clone())
            .collect()
    }
}

#[async_trait]
impl RpcTransport for RecordingTransport {
    async fn describe(&self, service_url: &Url) -> Result<ServiceDescription> {
        self.describes.fetch_add(1, Ordering::SeqCst);
        self.described_urls
            .lock()
            .unwrap()
            .push(service_url.to_string());

        if self.fail_describe {
            return Err(MemoQError::ServiceDescription {
                url: service_url.to_string(),
                message: "connection refused".to_string(),
            });
        }

        Ok(ServiceDescription::new(
            service_url.clone(),
            DECLARED_OPERATIONS.iter().map(|op| op.to_string()),
        ))
    }

    async fn call(
        &self,
        _description: &ServiceDescription,
        operation: &str,
        arguments: Value,
    ) -> Result<Value> {
        let response_key = match arguments.get("resourceType").and_then(Value::as_str) {
            Some(resource_type) if operation == "ListResources" => {
                format!("ListResources:{}", resource_type)
            }
            _ => operation.to_string(),
        };

        self.calls
            .lock()
            .unwrap()
            .push((operation.to_string(), arguments));

        Ok(self
            .responses
            .lock()
            .unwrap()
            .get(&response_key)
            .cloned()
            .unwrap_or(Value::Null))
    }
}
