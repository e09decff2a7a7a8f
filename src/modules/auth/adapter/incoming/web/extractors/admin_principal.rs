use std::future::{ready, Ready};

use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpMessage, HttpRequest};

use crate::modules::auth::application::domain::Principal;
use crate::shared::api::ApiResponse;

/// The principal placed in the request by the session gate.
#[derive(Debug, Clone)]
pub struct AdminPrincipal(pub Principal);

impl FromRequest for AdminPrincipal {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<Principal>().cloned() {
            Some(principal) => ready(Ok(AdminPrincipal(principal))),
            None => ready(Err(actix_web::error::InternalError::from_response(
                "",
                ApiResponse::unauthorized("Not authenticated"),
            )
            .into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test::TestRequest};

    #[actix_web::test]
    async fn extracts_principal_from_extensions() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut()
            .insert(Principal::admin("owner@example.com"));

        let principal = AdminPrincipal::extract(&req).await.unwrap();
        assert_eq!(principal.0.email, "owner@example.com");
    }

    #[actix_web::test]
    async fn missing_principal_is_unauthorized() {
        let req = TestRequest::default().to_http_request();

        let err = AdminPrincipal::extract(&req).await.unwrap_err();
        assert_eq!(err.as_response_error().status_code(), StatusCode::UNAUTHORIZED);
    }
}
