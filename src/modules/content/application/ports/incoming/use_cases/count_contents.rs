use async_trait::async_trait;

use crate::modules::content::application::domain::Content;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CountContentsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CountContentsUseCase<C: Content>: Send + Sync {
    async fn execute(&self) -> Result<u64, CountContentsError>;
}
