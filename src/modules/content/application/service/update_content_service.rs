use async_trait::async_trait;

use crate::modules::content::application::domain::Content;
use crate::modules::content::application::ports::incoming::use_cases::{
    UpdateContentError, UpdateContentUseCase,
};
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError,
};

pub struct UpdateContentService<R> {
    repository: R,
}

impl<R> UpdateContentService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<C, R> UpdateContentUseCase<C> for UpdateContentService<R>
where
    C: Content,
    R: ContentRepository<C>,
{
    async fn execute(&self, id: i32, input: C::Input) -> Result<C, UpdateContentError> {
        self.repository
            .replace(id, input)
            .await
            .map_err(|e| match e {
                ContentRepositoryError::NotFound => UpdateContentError::NotFound,
                other => UpdateContentError::RepositoryError(other.to_string()),
            })
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
    async fn replaces_fields_and_keeps_created_at() {
        let repo = InMemoryContentRepository::<Skill>::default();
        let created = repo.create(skill_input("Rust")).await.unwrap();

        let service = UpdateContentService::new(repo.clone());
        let mut input = skill_input("Rust 2024");
        input.description = None;

        let updated: Skill = service.execute(created.id, input).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Rust 2024");
        assert_eq!(updated.description, None);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn missing_id_is_not_found() {
        let service = UpdateContentService::new(InMemoryContentRepository::<Skill>::default());

        let result: Result<Skill, _> = service.execute(9, skill_input("Rust")).await;
        assert!(matches!(result, Err(UpdateContentError::NotFound)));
    }

    #[tokio::test]
    async fn repository_failure_is_reported() {
        let service = UpdateContentService::new(FailingContentRepository);

        let result: Result<Skill, _> = service.execute(1, skill_input("Rust")).await;
        assert!(matches!(result, Err(UpdateContentError::RepositoryError(_))));
    }
}
