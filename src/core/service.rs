use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::utils::error::{MemoQError, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// One group of remote operations published under a fixed path on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ServiceFamily {
    ServerProject,
    TermBase,
    TranslationMemory,
    LiveDocs,
    Security,
    LightResource,
    FileManager,
    Tasks,
    Elm,
}

impl ServiceFamily {
    pub const ALL: [ServiceFamily; 9] = [
        ServiceFamily::ServerProject,
        ServiceFamily::TermBase,
        ServiceFamily::TranslationMemory,
        ServiceFamily::LiveDocs,
        ServiceFamily::Security,
        ServiceFamily::LightResource,
        ServiceFamily::FileManager,
        ServiceFamily::Tasks,
        ServiceFamily::Elm,
    ];

    /// 端點快取使用的鍵
    pub fn key(&self) -> &'static str {
        match self {
            ServiceFamily::ServerProject => "_server_project_service",
            ServiceFamily::TermBase => "_tb_service",
            ServiceFamily::TranslationMemory => "_tm_service",
            ServiceFamily::LiveDocs => "_live_docs_service",
            ServiceFamily::Security => "_security_service",
            ServiceFamily::LightResource => "_light_resource_service",
            ServiceFamily::FileManager => "_file_manager_service",
            ServiceFamily::Tasks => "_tasks_service",
            ServiceFamily::Elm => "_elm_service",
        }
    }

    pub fn relative_path(&self) -> &'static str {
        match self {
            ServiceFamily::ServerProject => "/memoqservices/serverproject?wsdl",
            ServiceFamily::TermBase => "/memoqservices/tb?wsdl",
            ServiceFamily::TranslationMemory => "/memoqservices/tm?wsdl",
            ServiceFamily::LiveDocs => "/memoqservices/livedocs?wsdl",
            ServiceFamily::Security => "/memoqservices/security?wsdl",
            ServiceFamily::LightResource => "/memoqservices/resource?wsdl",
            ServiceFamily::FileManager => "/memoqservices/filemanager?wsdl",
            ServiceFamily::Tasks => "/memoqservices/tasks?wsdl",
            ServiceFamily::Elm => "/memoqservices/elm?wsdl",
        }
    }

    /// Joins `base_url` with this family's path. The path is absolute, so any path already
    /// present on the base URL is replaced.
    pub fn service_url(&self, base_url: &str) -> Result<Url> {
        let base = Url::parse(base_url)?;
        Ok(base.join(self.relative_path())?)
    }

    fn cli_name(&self) -> &'static str {
        match self {
            ServiceFamily::ServerProject => "serverproject",
            ServiceFamily::TermBase => "tb",
            ServiceFamily::TranslationMemory => "tm",
            ServiceFamily::LiveDocs => "livedocs",
            ServiceFamily::Security => "security",
            ServiceFamily::LightResource => "resource",
            ServiceFamily::FileManager => "filemanager",
            ServiceFamily::Tasks => "tasks",
            ServiceFamily::Elm => "elm",
        }
    }
}

impl fmt::Display for ServiceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cli_name())
    }
}

impl FromStr for ServiceFamily {
    type Err = MemoQError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        ServiceFamily::ALL
            .iter()
            .copied()
            .find(|family| family.cli_name() == wanted)
            .ok_or_else(|| MemoQError::KeyNotFound {
                key: s.to_string(),
                valid: ServiceFamily::ALL
                    .iter()
                    .map(|family| family.cli_name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}
