use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::content::application::ports::incoming::use_cases::{
    ListContentsError, ListContentsUseCase,
};
use crate::modules::experience::Experience;
use crate::modules::portfolio::application::domain::Portfolio;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioError, GetPortfolioUseCase,
};
use crate::modules::project::Project;
use crate::modules::publication::Publication;
use crate::modules::skill::Skill;

#[derive(Clone)]
pub struct GetPortfolioService {
    skills: Arc<dyn ListContentsUseCase<Skill>>,
    experiences: Arc<dyn ListContentsUseCase<Experience>>,
    projects: Arc<dyn ListContentsUseCase<Project>>,
    publications: Arc<dyn ListContentsUseCase<Publication>>,
}

impl GetPortfolioService {
    pub fn new(
        skills: Arc<dyn ListContentsUseCase<Skill>>,
        experiences: Arc<dyn ListContentsUseCase<Experience>>,
        projects: Arc<dyn ListContentsUseCase<Project>>,
        publications: Arc<dyn ListContentsUseCase<Publication>>,
    ) -> Self {
        Self {
            skills,
            experiences,
            projects,
            publications,
        }
    }
}

#[async_trait]
impl GetPortfolioUseCase for GetPortfolioService {
    async fn execute(&self) -> Result<Portfolio, GetPortfolioError> {
        let repo_err = |e: ListContentsError| GetPortfolioError::RepositoryError(e.to_string());

        let (skills, experiences, projects, publications) = futures::try_join!(
            async { self.skills.execute().await.map_err(repo_err) },
            async { self.experiences.execute().await.map_err(repo_err) },
            async { self.projects.execute().await.map_err(repo_err) },
            async { self.publications.execute().await.map_err(repo_err) },
        )?;

        Ok(Portfolio {
            skills,
            experiences,
            projects,
            publications,
        })
    }
}
