use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ClientConfig;
use crate::core::service::DEFAULT_BASE_URL;
use crate::utils::error::Result;

#[derive(Debug, Clone, Parser)]
#[command(name = "memoq", version)]
#[command(about = "Query a memoQ server through its Web Service API")]
pub struct CliConfig {
    /// Server base URL, e.g. http://localhost:8080
    #[arg(long)]
    pub base_url: Option<String>,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Output format for list commands: json or csv
    #[arg(long, default_value = "json")]
    pub format: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the server version
    Info,
    /// List projects
    Projects {
        /// Every project regardless of status
        #[arg(long, conflicts_with_all = ["active", "closed"])]
        all: bool,
        #[arg(long, conflicts_with = "closed")]
        active: bool,
        #[arg(long)]
        closed: bool,
    },
    Users,
    Groups,
    Corpora,
    Tbs,
    Tms,
    /// List light resources of one type, e.g. ProjectTemplate
    Resources { resource_type: String },
    /// List the operations a service family declares, e.g. serverproject
    Operations { family: String },
}

impl CliConfig {
    /// 合併設定檔與命令列參數，命令列優先
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::with_base_url(DEFAULT_BASE_URL),
        };

        if let Some(base_url) = &self.base_url {
            config.server.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.transport.timeout_seconds = timeout;
        }

        Ok(config)
    }
}
