use actix_web::{web, HttpResponse};
use tracing::error;

use crate::modules::content::application::domain::{Content, ContentCard};
use crate::modules::content::application::ports::incoming::use_cases::ListContentsError;
use crate::modules::content::application::ContentUseCases;
use crate::shared::api::ApiResponse;

/// `GET /admin/<resource>`: every record as a card, newest first.
pub async fn admin_cards_handler<C: Content>(
    use_cases: web::Data<ContentUseCases<C>>,
) -> HttpResponse {
    match use_cases.list.execute().await {
        Ok(records) => {
            let cards: Vec<ContentCard> = records.iter().map(C::card).collect();
            ApiResponse::keyed(C::KIND.plural(), cards)
        }

        Err(ListContentsError::RepositoryError(e)) => {
            error!(kind = C::KIND.singular(), "Repository error listing cards: {}", e);
            ApiResponse::internal_error(&format!("Failed to fetch {}", C::KIND.plural()))
        }
    }
}
