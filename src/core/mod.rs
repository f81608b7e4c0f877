pub mod endpoint;
pub mod light_resources;
pub mod projects;
pub mod server;
pub mod service;
pub mod services;

pub use crate::domain::model::{ProjectListFilter, ProjectStatus, Record};
pub use crate::domain::ports::{RpcTransport, ServiceDescription};
pub use crate::utils::error::Result;
