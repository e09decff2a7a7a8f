use async_trait::async_trait;

use crate::modules::content::application::domain::Content;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteContentError {
    #[error("Content not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteContentUseCase<C: Content>: Send + Sync {
    async fn execute(&self, id: i32) -> Result<(), DeleteContentError>;
}
