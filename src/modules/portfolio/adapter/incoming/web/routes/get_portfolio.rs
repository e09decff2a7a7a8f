use actix_web::{web, HttpResponse};
use tracing::error;

use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// `GET /api/portfolio`
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> HttpResponse {
    match data.get_portfolio_use_case.execute().await {
        Ok(portfolio) => ApiResponse::success(portfolio),

        Err(GetPortfolioError::RepositoryError(e)) => {
            error!("Repository error loading portfolio: {}", e);
            ApiResponse::internal_error("Failed to fetch portfolio")
        }
    }
}
