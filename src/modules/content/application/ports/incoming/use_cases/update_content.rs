use async_trait::async_trait;

use crate::modules::content::application::domain::Content;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateContentError {
    #[error("Content not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Full replace: the input carries every editable field.
#[async_trait]
pub trait UpdateContentUseCase<C: Content>: Send + Sync {
    async fn execute(&self, id: i32, input: C::Input) -> Result<C, UpdateContentError>;
}
