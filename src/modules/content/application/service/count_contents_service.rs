use async_trait::async_trait;

use crate::modules::content::application::domain::Content;
use crate::modules::content::application::ports::incoming::use_cases::{
    CountContentsError, CountContentsUseCase,
};
use crate::modules::content::application::ports::outgoing::ContentRepository;

pub struct CountContentsService<R> {
    repository: R,
}

impl<R> CountContentsService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<C, R> CountContentsUseCase<C> for CountContentsService<R>
where
    C: Content,
    R: ContentRepository<C>,
{
    async fn execute(&self) -> Result<u64, CountContentsError> {
        ContentRepository::<C>::count(&self.repository)
            .await
            .map_err(|e| CountContentsError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::skill::Skill;
    use crate::tests::support::content_fixtures::skill_input;
    use crate::tests::support::in_memory_repository::InMemoryContentRepository;
    use crate::tests::support::stubs::FailingContentRepository;

    #[tokio::test]
    async fn counts_stored_records() {
        let repo = InMemoryContentRepository::<Skill>::default();
        repo.create(skill_input("Rust")).await.unwrap();
        repo.create(skill_input("Go")).await.unwrap();

        let service = CountContentsService::new(repo);
        let total = CountContentsUseCase::<Skill>::execute(&service).await.unwrap();

        assert_eq!(total, 2);
    }

    #[tokio::test]
    async fn repository_failure_is_reported() {
        let service = CountContentsService::new(FailingContentRepository);

        let result = CountContentsUseCase::<Skill>::execute(&service).await;
        assert!(matches!(result, Err(CountContentsError::RepositoryError(_))));
    }
}
