use actix_web::{web, HttpResponse, Scope};

use crate::modules::content::application::domain::Content;
use crate::shared::api::ApiResponse;

use super::{
    create_content_handler, delete_content_handler, get_content_handler, list_contents_handler,
    update_content_handler,
};

/// `/api/<resource>` for one content type.
///
/// Handlers read `web::Data<ContentUseCases<C>>`, which must be registered on
/// the enclosing app.
pub fn content_scope<C: Content>() -> Scope {
    web::scope(&format!("/api/{}", C::KIND.plural()))
        .route("", web::get().to(list_contents_handler::<C>))
        .route("", web::post().to(create_content_handler::<C>))
        .route("/{id}", web::get().to(get_content_handler::<C>))
        .route("/{id}", web::patch().to(update_content_handler::<C>))
        .route("/{id}", web::delete().to(delete_content_handler::<C>))
}

pub fn parse_content_id(raw: &str) -> Result<i32, HttpResponse> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| ApiResponse::bad_request("Invalid ID"))
}
