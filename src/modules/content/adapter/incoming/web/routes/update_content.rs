use actix_web::{web, HttpResponse};
use serde_json::Value;
use tracing::{error, warn};

use crate::modules::content::application::domain::Content;
use crate::modules::content::application::ports::incoming::use_cases::UpdateContentError;
use crate::modules::content::application::ContentUseCases;
use crate::shared::api::ApiResponse;

use super::parse_content_id;

/// PATCH with create semantics: the body is validated as a complete record.
pub async fn update_content_handler<C: Content>(
    path: web::Path<String>,
    payload: web::Json<Value>,
    use_cases: web::Data<ContentUseCases<C>>,
) -> HttpResponse {
    let id = match parse_content_id(&path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let input = match C::validate(&payload) {
        Ok(input) => input,
        Err(errors) => {
            warn!(kind = C::KIND.singular(), id, %errors, "Rejected update payload");
            return ApiResponse::validation_failed(errors.into_errors());
        }
    };

    match use_cases.update.execute(id, input).await {
        Ok(updated) => ApiResponse::keyed(C::KIND.singular(), updated),

        Err(UpdateContentError::NotFound) => {
            ApiResponse::not_found(&format!("{} not found", C::KIND.label()))
        }

        Err(UpdateContentError::RepositoryError(e)) => {
            error!(kind = C::KIND.singular(), id, "Repository error updating content: {}", e);
            ApiResponse::internal_error(&format!("Failed to update {}", C::KIND.singular()))
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::{json, Value};

    use crate::modules::content::adapter::incoming::web::routes::content_scope;
    use crate::modules::content::application::ports::outgoing::ContentRepository;
    use crate::modules::content::application::ContentUseCases;
    use crate::modules::experience::Experience;
    use crate::modules::skill::Skill;
    use crate::tests::support::content_fixtures::{experience_input, skill_input};
    use crate::tests::support::in_memory_repository::InMemoryContentRepository;

    #[actix_web::test]
    async fn test_update_skill_replaces_record() {
        let repo = InMemoryContentRepository::<Skill>::default();
        let created = repo.create(skill_input("Rust")).await.unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ContentUseCases::<Skill>::from_repository(
                    repo.clone(),
                )))
                .service(content_scope::<Skill>()),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/skills/{}", created.id))
            .set_json(json!({ "name": "Rust", "level": "expert", "category": "backend", "years": "8" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["skill"]["level"], "EXPERT");
        assert_eq!(body["skill"]["years"], 8);
        assert!(body["skill"]["description"].is_null());

        let stored = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(stored.years, Some(8));
        assert_eq!(stored.created_at, created.created_at);
    }

    #[actix_web::test]
    async fn test_update_skill_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ContentUseCases::<Skill>::from_repository(
                    InMemoryContentRepository::default(),
                )))
                .service(content_scope::<Skill>()),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/skills/77")
            .set_json(json!({ "name": "Rust", "level": "EXPERT", "category": "BACKEND" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_update_skill_validation_runs_before_lookup() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ContentUseCases::<Skill>::from_repository(
                    InMemoryContentRepository::default(),
                )))
                .service(content_scope::<Skill>()),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/skills/77")
            .set_json(json!({ "name": "" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        let fields: Vec<_> = body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["field"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(fields, vec!["name", "level", "category"]);
    }

    #[actix_web::test]
    async fn test_update_experience_accepts_end_before_start() {
        let repo = InMemoryContentRepository::<Experience>::default();
        let created = repo.create(experience_input("Engineer")).await.unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ContentUseCases::<Experience>::from_repository(
                    repo.clone(),
                )))
                .service(content_scope::<Experience>()),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/experiences/{}", created.id))
            .set_json(json!({
                "title": "Engineer",
                "company": "Acme",
                "type": "FULLTIME",
                "startDate": "2022-06-01",
                "endDate": "2021-01-01"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["experience"]["startDate"], "2022-06-01");
        assert_eq!(body["experience"]["endDate"], "2021-01-01");
    }
}
