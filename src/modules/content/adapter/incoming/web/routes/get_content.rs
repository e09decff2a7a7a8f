use actix_web::{web, HttpResponse};
use tracing::error;

use crate::modules::content::application::domain::Content;
use crate::modules::content::application::ports::incoming::use_cases::GetContentError;
use crate::modules::content::application::ContentUseCases;
use crate::shared::api::ApiResponse;

use super::parse_content_id;

pub async fn get_content_handler<C: Content>(
    path: web::Path<String>,
    use_cases: web::Data<ContentUseCases<C>>,
) -> HttpResponse {
    let id = match parse_content_id(&path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match use_cases.get.execute(id).await {
        Ok(record) => ApiResponse::keyed(C::KIND.singular(), record),

        Err(GetContentError::NotFound) => {
            ApiResponse::not_found(&format!("{} not found", C::KIND.label()))
        }

        Err(GetContentError::RepositoryError(e)) => {
            error!(kind = C::KIND.singular(), id, "Repository error fetching content: {}", e);
            ApiResponse::internal_error(&format!("Failed to fetch {}", C::KIND.singular()))
        }
    }
}
