use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header,
    middleware::Next,
    Error, HttpMessage, HttpResponse,
};
use tracing::debug;

use super::super::session_cookie::{session_principal, LOGIN_PATH};

/// Admits requests carrying a valid admin session and stores the
/// [`Principal`](crate::modules::auth::application::domain::Principal) in the
/// request extensions; everything else is redirected to the login page.
pub async fn admin_session_gate(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    match session_principal(req.request()) {
        Some(principal) => {
            req.extensions_mut().insert(principal);
            next.call(req).await.map(|res| res.map_into_left_body())
        }
        None => {
            debug!(path = %req.path(), "no admin session, redirecting to login");
            let response = HttpResponse::Found()
                .insert_header((header::LOCATION, LOGIN_PATH))
                .finish();
            Ok(req.into_response(response).map_into_right_body())
        }
    }
}
