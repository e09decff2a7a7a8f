use actix_web::{web, HttpResponse};
use serde_json::Value;
use tracing::{error, warn};

use crate::modules::content::application::domain::Content;
use crate::modules::content::application::ports::incoming::use_cases::CreateContentError;
use crate::modules::content::application::ContentUseCases;
use crate::shared::api::ApiResponse;

pub async fn create_content_handler<C: Content>(
    payload: web::Json<Value>,
    use_cases: web::Data<ContentUseCases<C>>,
) -> HttpResponse {
    let input = match C::validate(&payload) {
        Ok(input) => input,
        Err(errors) => {
            warn!(kind = C::KIND.singular(), %errors, "Rejected create payload");
            return ApiResponse::validation_failed(errors.into_errors());
        }
    };

    match use_cases.create.execute(input).await {
        Ok(created) => ApiResponse::keyed(C::KIND.singular(), created),

        Err(CreateContentError::RepositoryError(e)) => {
            error!(kind = C::KIND.singular(), "Repository error creating content: {}", e);
            ApiResponse::internal_error(&format!("Failed to create {}", C::KIND.singular()))
        }
    }
}
