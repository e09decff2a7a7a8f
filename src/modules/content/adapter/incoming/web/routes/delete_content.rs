use actix_web::{web, HttpResponse};
use tracing::error;

use crate::modules::content::application::domain::Content;
use crate::modules::content::application::ports::incoming::use_cases::DeleteContentError;
use crate::modules::content::application::ContentUseCases;
use crate::shared::api::ApiResponse;

use super::parse_content_id;

pub async fn delete_content_handler<C: Content>(
    path: web::Path<String>,
    use_cases: web::Data<ContentUseCases<C>>,
) -> HttpResponse {
    let id = match parse_content_id(&path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match use_cases.delete.execute(id).await {
        Ok(()) => ApiResponse::message(&format!("{} deleted successfully", C::KIND.label())),

        Err(DeleteContentError::NotFound) => {
            ApiResponse::not_found(&format!("{} not found", C::KIND.label()))
        }

        Err(DeleteContentError::RepositoryError(e)) => {
            error!(kind = C::KIND.singular(), id, "Repository error deleting content: {}", e);
            ApiResponse::internal_error(&format!("Failed to delete {}", C::KIND.singular()))
        }
    }
}
