use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::HttpResponse;
use serde::Serialize;

/// Map plans only change with a deploy, so clients may hold them for an hour.
const STATIC_MAX_AGE_SECS: u32 = 3600;

#[derive(Serialize)]
pub(crate) struct ApiResponse<T: Serialize> {
    pub code: u16,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(payload: T) -> Self {
        Self {
            code: 200,
            message: "success",
            payload: Some(payload),
        }
    }

    pub fn ok(payload: T) -> HttpResponse {
        HttpResponse::Ok().json(Self::success(payload))
    }

    pub fn cached(payload: T) -> HttpResponse {
        HttpResponse::Ok()
            .insert_header(CacheControl(vec![
                CacheDirective::Public,
                CacheDirective::MaxAge(STATIC_MAX_AGE_SECS),
            ]))
            .json(Self::success(payload))
    }
}
