use async_trait::async_trait;

use crate::modules::admin::application::domain::DashboardSummary;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetDashboardError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetDashboardUseCase: Send + Sync {
    async fn execute(&self) -> Result<DashboardSummary, GetDashboardError>;
}
