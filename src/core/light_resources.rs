use std::fmt;
use std::str::FromStr;

use crate::core::services::ResourceService;
use crate::domain::model::Record;
use crate::utils::error::{MemoQError, Result};

/// Categories of light resources the server publishes, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    AutoCorrect,
    AutoTrans,
    FilterConfigs,
    FontSubstitution,
    IgnoreLists,
    KeyboardShortcuts,
    KeyboardShortcuts2,
    LiveDocsSettings,
    Lqa,
    MtSettings,
    NonTrans,
    PathRules,
    ProjectTemplate,
    QaSettings,
    SegRules,
    Stopwords,
    TmSettings,
    WebSearchSettings,
}

impl ResourceType {
    pub const ALL: [ResourceType; 18] = [
        ResourceType::AutoCorrect,
        ResourceType::AutoTrans,
        ResourceType::FilterConfigs,
        ResourceType::FontSubstitution,
        ResourceType::IgnoreLists,
        ResourceType::KeyboardShortcuts,
        ResourceType::KeyboardShortcuts2,
        ResourceType::LiveDocsSettings,
        ResourceType::Lqa,
        ResourceType::MtSettings,
        ResourceType::NonTrans,
        ResourceType::PathRules,
        ResourceType::ProjectTemplate,
        ResourceType::QaSettings,
        ResourceType::SegRules,
        ResourceType::Stopwords,
        ResourceType::TmSettings,
        ResourceType::WebSearchSettings,
    ];

    /// 伺服器端使用的名稱
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::AutoCorrect => "AutoCorrect",
            ResourceType::AutoTrans => "AutoTrans",
            ResourceType::FilterConfigs => "FilterConfigs",
            ResourceType::FontSubstitution => "FontSubstitution",
            ResourceType::IgnoreLists => "IgnoreLists",
            ResourceType::KeyboardShortcuts => "KeyboardShortcuts",
            ResourceType::KeyboardShortcuts2 => "KeyboardShortcuts2",
            ResourceType::LiveDocsSettings => "LiveDocsSettings",
            ResourceType::Lqa => "LQA",
            ResourceType::MtSettings => "MTSettings",
            ResourceType::NonTrans => "NonTrans",
            ResourceType::PathRules => "PathRules",
            ResourceType::ProjectTemplate => "ProjectTemplate",
            ResourceType::QaSettings => "QASettings",
            ResourceType::SegRules => "SegRules",
            ResourceType::Stopwords => "Stopwords",
            ResourceType::TmSettings => "TMSettings",
            ResourceType::WebSearchSettings => "WebSearchSettings",
        }
    }

    pub fn valid_keys() -> String {
        ResourceType::ALL
            .iter()
            .map(ResourceType::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = MemoQError;

    /// Exact, case-sensitive match against the server names.
    fn from_str(s: &str) -> Result<Self> {
        ResourceType::ALL
            .iter()
            .copied()
            .find(|rt| rt.as_str() == s)
            .ok_or_else(|| MemoQError::KeyNotFound {
                key: s.to_string(),
                valid: ResourceType::valid_keys(),
            })
    }
}

/// Read-only view of the server's light resources, keyed by resource type.
///
/// Nothing is fetched up front: each lookup issues one `ListResources` call, and walking all
/// entries issues one call per declared key.
#[derive(Debug, Clone)]
pub struct LightResources {
    service: ResourceService,
}

impl LightResources {
    pub fn new(service: ResourceService) -> Self {
        Self { service }
    }

    pub async fn get(&self, key: &str) -> Result<Vec<Record>> {
        let resource_type: ResourceType = key.parse()?;
        self.get_type(resource_type).await
    }

    pub async fn get_type(&self, resource_type: ResourceType) -> Result<Vec<Record>> {
        self.service.list_resources(resource_type).await
    }

    pub fn contains(&self, key: &str) -> bool {
        key.parse::<ResourceType>().is_ok()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        ResourceType::ALL.iter().map(ResourceType::as_str)
    }

    pub fn len(&self) -> usize {
        ResourceType::ALL.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// 依宣告順序逐一取得所有資源類型
    pub async fn entries(&self) -> Result<Vec<(ResourceType, Vec<Record>)>> {
        let mut entries = Vec::with_capacity(ResourceType::ALL.len());
        for resource_type in ResourceType::ALL {
            let resources = self.get_type(resource_type).await?;
            entries.push((resource_type, resources));
        }
        Ok(entries)
    }
}
