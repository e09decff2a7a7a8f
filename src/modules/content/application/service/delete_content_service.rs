use async_trait::async_trait;
use tracing::info;

use crate::modules::content::application::domain::Content;
use crate::modules::content::application::ports::incoming::use_cases::{
    DeleteContentError, DeleteContentUseCase,
};
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError,
};

pub struct DeleteContentService<R> {
    repository: R,
}

impl<R> DeleteContentService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<C, R> DeleteContentUseCase<C> for DeleteContentService<R>
where
    C: Content,
    R: ContentRepository<C>,
{
    async fn execute(&self, id: i32) -> Result<(), DeleteContentError> {
        ContentRepository::<C>::delete(&self.repository, id)
            .await
            .map_err(|e| match e {
                ContentRepositoryError::NotFound => DeleteContentError::NotFound,
                other => DeleteContentError::RepositoryError(other.to_string()),
            })?;

        info!(kind = C::KIND.singular(), id, "content deleted");
        Ok(())
    }
}
