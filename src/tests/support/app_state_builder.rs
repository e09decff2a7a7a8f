use std::sync::Arc;

use crate::modules::auth::adapter::outgoing::SingleAdminVerifier;
use crate::modules::auth::application::ports::incoming::use_cases::LoginAdminUseCase;
use crate::modules::auth::application::ports::outgoing::SessionTokenProvider;
use crate::modules::auth::application::service::LoginAdminService;
use crate::modules::blog::Blog;
use crate::modules::content::application::ports::outgoing::ContentRepository;
use crate::modules::content::application::ContentUseCases;
use crate::modules::experience::Experience;
use crate::modules::project::Project;
use crate::modules::publication::Publication;
use crate::modules::skill::Skill;
use crate::tests::support::in_memory_repository::InMemoryContentRepository;
use crate::tests::support::session_helper::{
    test_session_tokens, TEST_ADMIN_EMAIL, TEST_ADMIN_PASSWORD,
};
use crate::tests::support::stubs::PlaintextHasher;
use crate::{AppState, ContentCatalog};

pub const TEST_API_BASE_URL: &str = "http://localhost:8080/api";

/// Builds an [`AppState`] over empty in-memory repositories and a login that
/// accepts `TEST_ADMIN_EMAIL` / `TEST_ADMIN_PASSWORD`.
pub struct TestAppStateBuilder {
    content: ContentCatalog,
    login_admin: Option<Arc<dyn LoginAdminUseCase>>,
    session_tokens: Arc<dyn SessionTokenProvider>,
    secure_cookies: bool,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            content: ContentCatalog {
                skills: ContentUseCases::from_repository(InMemoryContentRepository::default()),
                experiences: ContentUseCases::from_repository(InMemoryContentRepository::default()),
                projects: ContentUseCases::from_repository(InMemoryContentRepository::default()),
                publications: ContentUseCases::from_repository(
                    InMemoryContentRepository::default(),
                ),
                blogs: ContentUseCases::from_repository(InMemoryContentRepository::default()),
            },
            login_admin: None,
            session_tokens: test_session_tokens(),
            secure_cookies: false,
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_skills<R>(mut self, repo: R) -> Self
    where
        R: ContentRepository<Skill> + Clone + 'static,
    {
        self.content.skills = ContentUseCases::from_repository(repo);
        self
    }

    pub fn with_experiences<R>(mut self, repo: R) -> Self
    where
        R: ContentRepository<Experience> + Clone + 'static,
    {
        self.content.experiences = ContentUseCases::from_repository(repo);
        self
    }

    pub fn with_projects<R>(mut self, repo: R) -> Self
    where
        R: ContentRepository<Project> + Clone + 'static,
    {
        self.content.projects = ContentUseCases::from_repository(repo);
        self
    }

    pub fn with_publications<R>(mut self, repo: R) -> Self
    where
        R: ContentRepository<Publication> + Clone + 'static,
    {
        self.content.publications = ContentUseCases::from_repository(repo);
        self
    }

    pub fn with_blogs<R>(mut self, repo: R) -> Self
    where
        R: ContentRepository<Blog> + Clone + 'static,
    {
        self.content.blogs = ContentUseCases::from_repository(repo);
        self
    }

    pub fn with_login_admin(mut self, use_case: impl LoginAdminUseCase + 'static) -> Self {
        self.login_admin = Some(Arc::new(use_case));
        self
    }

    pub fn with_session_tokens(mut self, tokens: Arc<dyn SessionTokenProvider>) -> Self {
        self.session_tokens = tokens;
        self
    }

    pub fn with_secure_cookies(mut self, secure: bool) -> Self {
        self.secure_cookies = secure;
        self
    }

    pub fn build(self) -> AppState {
        let login_admin = self.login_admin.unwrap_or_else(|| {
            let verifier = SingleAdminVerifier::new(
                TEST_ADMIN_EMAIL,
                PlaintextHasher::hash(TEST_ADMIN_PASSWORD),
                Arc::new(PlaintextHasher),
            );
            let service: Arc<dyn LoginAdminUseCase> = Arc::new(LoginAdminService::new(
                Arc::new(verifier),
                Arc::clone(&self.session_tokens),
            ));
            service
        });

        AppState::new(
            self.content,
            login_admin,
            self.session_tokens,
            TEST_API_BASE_URL.to_string(),
            self.secure_cookies,
        )
    }
}
