pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(test)]
mod test_support;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http_transport::HttpRpcTransport;
pub use config::{ClientConfig, ServerConfig, TransportConfig};
pub use crate::core::{
    endpoint::EndpointProxy,
    light_resources::{LightResources, ResourceType},
    server::MemoQServer,
    service::{ServiceFamily, DEFAULT_BASE_URL},
};
pub use domain::model::{ProjectListFilter, ProjectStatus, Record};
pub use domain::ports::{RpcTransport, ServiceDescription};
pub use utils::error::{MemoQError, Result};
