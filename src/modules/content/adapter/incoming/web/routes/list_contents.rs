use actix_web::{web, HttpResponse};
use tracing::error;

use crate::modules::content::application::domain::Content;
use crate::modules::content::application::ports::incoming::use_cases::ListContentsError;
use crate::modules::content::application::ContentUseCases;
use crate::shared::api::ApiResponse;

pub async fn list_contents_handler<C: Content>(
    use_cases: web::Data<ContentUseCases<C>>,
) -> HttpResponse {
    match use_cases.list.execute().await {
        Ok(records) => ApiResponse::keyed(C::KIND.plural(), records),

        Err(ListContentsError::RepositoryError(e)) => {
            error!(kind = C::KIND.plural(), "Repository error listing content: {}", e);
            ApiResponse::internal_error(&format!("Failed to fetch {}", C::KIND.plural()))
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::Value;

    use crate::modules::content::adapter::incoming::web::routes::content_scope;
    use crate::modules::content::application::ports::outgoing::ContentRepository;
    use crate::modules::content::application::ContentUseCases;
    use crate::modules::skill::Skill;
    use crate::tests::support::content_fixtures::skill_input;
    use crate::tests::support::in_memory_repository::InMemoryContentRepository;
    use crate::tests::support::stubs::FailingContentRepository;

    #[actix_web::test]
    async fn test_list_skills_empty() {
        let use_cases =
            ContentUseCases::<Skill>::from_repository(InMemoryContentRepository::default());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(use_cases))
                .service(content_scope::<Skill>()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/skills").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "ok": true, "skills": [] }));
    }

    #[actix_web::test]
    async fn test_list_skills_returns_records() {
        let repo = InMemoryContentRepository::<Skill>::default();
        repo.create(skill_input("Rust")).await.unwrap();
        repo.create(skill_input("Go")).await.unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ContentUseCases::<Skill>::from_repository(repo)))
                .service(content_scope::<Skill>()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/skills").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let skills = body["skills"].as_array().unwrap();
        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0]["name"], "Go");
        assert_eq!(skills[0]["level"], "INTERMEDIATE");
    }

    #[actix_web::test]
    async fn test_list_skills_repository_error() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ContentUseCases::<Skill>::from_repository(
                    FailingContentRepository,
                )))
                .service(content_scope::<Skill>()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/skills").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["ok"], false);
        assert_eq!(body["message"], "Failed to fetch skills");
    }
}
