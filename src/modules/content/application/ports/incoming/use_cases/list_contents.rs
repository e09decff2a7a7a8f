use async_trait::async_trait;

use crate::modules::content::application::domain::Content;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListContentsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListContentsUseCase<C: Content>: Send + Sync {
    async fn execute(&self) -> Result<Vec<C>, ListContentsError>;
}
