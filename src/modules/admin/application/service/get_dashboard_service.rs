use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::admin::application::domain::{DashboardCounts, DashboardSummary};
use crate::modules::admin::application::ports::incoming::use_cases::{
    GetDashboardError, GetDashboardUseCase,
};
use crate::modules::blog::Blog;
use crate::modules::content::application::ports::incoming::use_cases::{
    CountContentsError, CountContentsUseCase,
};
use crate::modules::experience::Experience;
use crate::modules::project::Project;
use crate::modules::publication::Publication;
use crate::modules::skill::Skill;

#[derive(Clone)]
pub struct GetDashboardService {
    skills: Arc<dyn CountContentsUseCase<Skill>>,
    experiences: Arc<dyn CountContentsUseCase<Experience>>,
    projects: Arc<dyn CountContentsUseCase<Project>>,
    publications: Arc<dyn CountContentsUseCase<Publication>>,
    blogs: Arc<dyn CountContentsUseCase<Blog>>,
    api_base_url: String,
}

impl GetDashboardService {
    pub fn new(
        skills: Arc<dyn CountContentsUseCase<Skill>>,
        experiences: Arc<dyn CountContentsUseCase<Experience>>,
        projects: Arc<dyn CountContentsUseCase<Project>>,
        publications: Arc<dyn CountContentsUseCase<Publication>>,
        blogs: Arc<dyn CountContentsUseCase<Blog>>,
        api_base_url: impl Into<String>,
    ) -> Self {
        Self {
            skills,
            experiences,
            projects,
            publications,
            blogs,
            api_base_url: api_base_url.into(),
        }
    }
}

#[async_trait]
impl GetDashboardUseCase for GetDashboardService {
    async fn execute(&self) -> Result<DashboardSummary, GetDashboardError> {
        let repo_err = |e: CountContentsError| GetDashboardError::RepositoryError(e.to_string());

        let (skills, experiences, projects, publications, blogs) = futures::try_join!(
            async { self.skills.execute().await.map_err(repo_err) },
            async { self.experiences.execute().await.map_err(repo_err) },
            async { self.projects.execute().await.map_err(repo_err) },
            async { self.publications.execute().await.map_err(repo_err) },
            async { self.blogs.execute().await.map_err(repo_err) },
        )?;

        Ok(DashboardSummary {
            counts: DashboardCounts {
                skills,
                experiences,
                projects,
                publications,
                blogs,
            },
            api_base_url: self.api_base_url.clone(),
        })
    }
}
