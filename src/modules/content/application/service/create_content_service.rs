use async_trait::async_trait;
use tracing::info;

use crate::modules::content::application::domain::Content;
use crate::modules::content::application::ports::incoming::use_cases::{
    CreateContentError, CreateContentUseCase,
};
use crate::modules::content::application::ports::outgoing::ContentRepository;

pub struct CreateContentService<R> {
    repository: R,
}

impl<R> CreateContentService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<C, R> CreateContentUseCase<C> for CreateContentService<R>
where
    C: Content,
    R: ContentRepository<C>,
{
    async fn execute(&self, input: C::Input) -> Result<C, CreateContentError> {
        let created = self
            .repository
            .create(input)
            .await
            .map_err(|e| CreateContentError::RepositoryError(e.to_string()))?;

        info!(kind = C::KIND.singular(), id = created.id(), "content created");
        Ok(created)
    }
}
