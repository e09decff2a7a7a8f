use async_trait::async_trait;

use crate::modules::content::application::domain::Content;
use crate::modules::content::application::ports::incoming::use_cases::{
    GetContentError, GetContentUseCase,
};
use crate::modules::content::application::ports::outgoing::ContentRepository;

pub struct GetContentService<R> {
    repository: R,
}

impl<R> GetContentService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<C, R> GetContentUseCase<C> for GetContentService<R>
where
    C: Content,
    R: ContentRepository<C>,
{
    async fn execute(&self, id: i32) -> Result<C, GetContentError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| GetContentError::RepositoryError(e.to_string()))?
            .ok_or(GetContentError::NotFound)
    }
}
