use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use tokio::sync::{Mutex, OnceCell};

use crate::adapters::http_transport::HttpRpcTransport;
use crate::config::ClientConfig;
use crate::core::endpoint::EndpointProxy;
use crate::core::light_resources::LightResources;
use crate::core::projects;
use crate::core::service::ServiceFamily;
use crate::core::services::{
    LiveDocsService, ResourceService, SecurityService, ServerProjectService, TaskService,
    TbService, TmService,
};
use crate::domain::model::{ProjectListFilter, ProjectStatus, Record};
use crate::domain::ports::RpcTransport;
use crate::utils::error::{MemoQError, Result};

/// Entry point for one memoQ server.
///
/// Creating a `MemoQServer` performs no I/O. Each service endpoint is bound on first use and
/// kept for the life of the value, as is the unfiltered project list. Create a new
/// `MemoQServer` to see projects added after the first fetch.
pub struct MemoQServer {
    base_url: String,
    transport: Arc<dyn RpcTransport>,
    api_endpoints: Mutex<HashMap<ServiceFamily, Arc<OnceCell<Arc<EndpointProxy>>>>>,
    all_projects: OnceCell<Vec<Record>>,
    light_resources: OnceCell<LightResources>,
}

impl MemoQServer {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_transport(base_url, Arc::new(HttpRpcTransport::default()))
    }

    pub fn with_transport(base_url: impl Into<String>, transport: Arc<dyn RpcTransport>) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            api_endpoints: Mutex::new(HashMap::new()),
            all_projects: OnceCell::new(),
            light_resources: OnceCell::new(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let transport = HttpRpcTransport::new(&config.transport)?;
        Ok(Self::with_transport(
            config.server.base_url.clone(),
            Arc::new(transport),
        ))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the bound proxy for `family`, connecting on first use.
    ///
    /// Each family has its own slot. Concurrent first calls for one family bind one proxy,
    /// and a slow binding never holds up the other families.
    pub async fn endpoint(&self, family: ServiceFamily) -> Result<Arc<EndpointProxy>> {
        let slot = {
            let mut endpoints = self.api_endpoints.lock().await;
            Arc::clone(endpoints.entry(family).or_default())
        };

        let proxy = slot
            .get_or_try_init(|| async {
                let proxy = EndpointProxy::connect(
                    family,
                    Some(&self.base_url),
                    Arc::clone(&self.transport),
                )
                .await?;
                tracing::info!("🔌 Bound {} ({})", family.key(), proxy.service_url());
                Ok::<_, MemoQError>(Arc::new(proxy))
            })
            .await?;
        Ok(Arc::clone(proxy))
    }

    pub async fn server_project_service(&self) -> Result<ServerProjectService> {
        Ok(ServerProjectService::new(
            self.endpoint(ServiceFamily::ServerProject).await?,
        ))
    }

    pub async fn security_service(&self) -> Result<SecurityService> {
        Ok(SecurityService::new(
            self.endpoint(ServiceFamily::Security).await?,
        ))
    }

    pub async fn live_docs_service(&self) -> Result<LiveDocsService> {
        Ok(LiveDocsService::new(
            self.endpoint(ServiceFamily::LiveDocs).await?,
        ))
    }

    pub async fn tb_service(&self) -> Result<TbService> {
        Ok(TbService::new(self.endpoint(ServiceFamily::TermBase).await?))
    }

    pub async fn tm_service(&self) -> Result<TmService> {
        Ok(TmService::new(
            self.endpoint(ServiceFamily::TranslationMemory).await?,
        ))
    }

    pub async fn resource_service(&self) -> Result<ResourceService> {
        Ok(ResourceService::new(
            self.endpoint(ServiceFamily::LightResource).await?,
        ))
    }

    pub async fn task_service(&self) -> Result<TaskService> {
        Ok(TaskService::new(self.endpoint(ServiceFamily::Tasks).await?))
    }

    /// 伺服器版本，每次都重新查詢
    pub async fn api_version(&self) -> Result<String> {
        self.server_project_service().await?.get_api_version().await
    }

    /// `"memoQ server v<version> @ <base_url>"`
    pub async fn description(&self) -> Result<String> {
        let version = self.api_version().await?;
        Ok(format!("memoQ server v{} @ {}", version, self.base_url))
    }

    /// Projects matching the server's default filter. Not cached.
    pub async fn projects(&self) -> Result<Vec<Record>> {
        self.server_project_service()
            .await?
            .list_projects(None)
            .await
    }

    /// Every project regardless of status, fetched once and then served from cache.
    pub async fn all_projects(&self) -> Result<&[Record]> {
        let projects = self
            .all_projects
            .get_or_try_init(|| async {
                let filter = ProjectListFilter::closed_after(closed_since_epoch());
                let projects = self
                    .server_project_service()
                    .await?
                    .list_projects(Some(&filter))
                    .await?;
                tracing::info!("📂 Cached {} projects", projects.len());
                Ok::<_, MemoQError>(projects)
            })
            .await?;
        Ok(projects.as_slice())
    }

    pub async fn active_projects(&self) -> Result<Vec<Record>> {
        self.projects_with_status(ProjectStatus::Active, Utc::now())
            .await
    }

    pub async fn closed_projects(&self) -> Result<Vec<Record>> {
        self.projects_with_status(ProjectStatus::Closed, Utc::now())
            .await
    }

    /// Classifies the cached project list against `now`.
    pub async fn projects_with_status(
        &self,
        status: ProjectStatus,
        now: DateTime<Utc>,
    ) -> Result<Vec<Record>> {
        let all = self.all_projects().await?;
        Ok(projects::filter_by_status(all, status, now))
    }

    pub async fn users(&self) -> Result<Vec<Record>> {
        self.security_service().await?.list_users().await
    }

    pub async fn groups(&self) -> Result<Vec<Record>> {
        self.security_service().await?.list_groups().await
    }

    pub async fn corpora(&self) -> Result<Vec<Record>> {
        self.live_docs_service().await?.list_corpora().await
    }

    pub async fn tbs(&self) -> Result<Vec<Record>> {
        self.tb_service().await?.list_tbs().await
    }

    pub async fn tms(&self) -> Result<Vec<Record>> {
        self.tm_service().await?.list_tms().await
    }

    pub async fn light_resources(&self) -> Result<&LightResources> {
        self.light_resources
            .get_or_try_init(|| async {
                Ok::<_, MemoQError>(LightResources::new(
                    self.resource_service().await?,
                ))
            })
            .await
    }
}

/// `TimeClosed` 篩選值：早於任何專案的時間點
fn closed_since_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1900, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

impl fmt::Debug for MemoQServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoQServer")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
