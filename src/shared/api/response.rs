// src/shared/api/response.rs
use std::collections::BTreeMap;

use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

use crate::shared::validation::FieldError;

/// Response envelope shared by every endpoint.
///
/// Payload entries are flattened next to `ok`, so a single skill renders as
/// `{ "ok": true, "skill": { .. } }` and a list as `{ "ok": true, "skills": [..] }`.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub ok: bool,
    #[serde(flatten)]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            ok: true,
            data: Some(data),
            message: None,
            errors: None,
        })
    }
}

impl ApiResponse<()> {
    /// `{ "ok": true, "<key>": value }`
    pub fn keyed<V: Serialize>(key: &str, value: V) -> HttpResponse {
        let mut data = BTreeMap::new();
        data.insert(key, value);
        ApiResponse::success(data)
    }

    pub fn message(message: &str) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse::<()> {
            ok: true,
            data: None,
            message: Some(message.to_string()),
            errors: None,
        })
    }

    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            ok: false,
            data: None,
            message: Some(message.to_string()),
            errors: None,
        })
    }

    pub fn validation_failed(errors: Vec<FieldError>) -> HttpResponse {
        HttpResponse::BadRequest().json(ApiResponse::<()> {
            ok: false,
            data: None,
            message: Some("Validation failed".to_string()),
            errors: Some(errors),
        })
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, message)
    }

    /// Details stay in the logs; callers only ever see `message`.
    pub fn internal_error(message: &str) -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}
