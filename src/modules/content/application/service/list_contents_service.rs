use async_trait::async_trait;

use crate::modules::content::application::domain::Content;
use crate::modules::content::application::ports::incoming::use_cases::{
    ListContentsError, ListContentsUseCase,
};
use crate::modules::content::application::ports::outgoing::ContentRepository;

pub struct ListContentsService<R> {
    repository: R,
}

impl<R> ListContentsService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<C, R> ListContentsUseCase<C> for ListContentsService<R>
where
    C: Content,
    R: ContentRepository<C>,
{
    async fn execute(&self) -> Result<Vec<C>, ListContentsError> {
        self.repository
            .list()
            .await
            .map_err(|e| ListContentsError::RepositoryError(e.to_string()))
    }
}
