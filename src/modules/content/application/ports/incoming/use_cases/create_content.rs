use async_trait::async_trait;

use crate::modules::content::application::domain::Content;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateContentError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateContentUseCase<C: Content>: Send + Sync {
    async fn execute(&self, input: C::Input) -> Result<C, CreateContentError>;
}
