use std::sync::Arc;

use actix_web::web;

use crate::modules::admin::application::ports::incoming::use_cases::GetDashboardUseCase;
use crate::modules::admin::application::service::GetDashboardService;
use crate::modules::auth::application::ports::incoming::use_cases::LoginAdminUseCase;
use crate::modules::auth::application::ports::outgoing::SessionTokenProvider;
use crate::modules::blog::Blog;
use crate::modules::content::application::ContentUseCases;
use crate::modules::experience::Experience;
use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfolioUseCase;
use crate::modules::portfolio::application::service::GetPortfolioService;
use crate::modules::project::Project;
use crate::modules::publication::Publication;
use crate::modules::skill::Skill;

/// Use cases for the five content types.
#[derive(Clone)]
pub struct ContentCatalog {
    pub skills: ContentUseCases<Skill>,
    pub experiences: ContentUseCases<Experience>,
    pub projects: ContentUseCases<Project>,
    pub publications: ContentUseCases<Publication>,
    pub blogs: ContentUseCases<Blog>,
}

impl ContentCatalog {
    /// Generic content handlers extract `web::Data<ContentUseCases<C>>`.
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.skills.clone()))
            .app_data(web::Data::new(self.experiences.clone()))
            .app_data(web::Data::new(self.projects.clone()))
            .app_data(web::Data::new(self.publications.clone()))
            .app_data(web::Data::new(self.blogs.clone()));
    }
}

#[derive(Clone)]
pub struct AppState {
    pub content: ContentCatalog,
    pub login_admin_use_case: Arc<dyn LoginAdminUseCase>,
    pub get_dashboard_use_case: Arc<dyn GetDashboardUseCase>,
    pub get_portfolio_use_case: Arc<dyn GetPortfolioUseCase>,
    pub session_tokens: Arc<dyn SessionTokenProvider>,
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(
        content: ContentCatalog,
        login_admin_use_case: Arc<dyn LoginAdminUseCase>,
        session_tokens: Arc<dyn SessionTokenProvider>,
        api_base_url: String,
        secure_cookies: bool,
    ) -> Self {
        let get_dashboard_use_case = Arc::new(GetDashboardService::new(
            Arc::clone(&content.skills.count),
            Arc::clone(&content.experiences.count),
            Arc::clone(&content.projects.count),
            Arc::clone(&content.publications.count),
            Arc::clone(&content.blogs.count),
            api_base_url,
        ));

        let get_portfolio_use_case = Arc::new(GetPortfolioService::new(
            Arc::clone(&content.skills.list),
            Arc::clone(&content.experiences.list),
            Arc::clone(&content.projects.list),
            Arc::clone(&content.publications.list),
        ));

        Self {
            content,
            login_admin_use_case,
            get_dashboard_use_case,
            get_portfolio_use_case,
            session_tokens,
            secure_cookies,
        }
    }
}
