use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

use crate::map::MapError;

#[derive(Debug)]
pub(crate) enum AppError {
    Validation(String),
    Config(MapError),
    NotFound(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "validation error: {msg}"),
            Self::Config(err) => write!(f, "configuration error: {err}"),
            Self::NotFound(msg) => write!(f, "not found: {msg}"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            Self::Validation(msg) => HttpResponse::BadRequest().json(ErrorBody {
                code: 400,
                message: msg,
            }),
            Self::Config(err) if err.is_config() => HttpResponse::BadRequest().json(ErrorBody {
                code: 400,
                message: &err.to_string(),
            }),
            Self::Config(err) => {
                log::error!("Map composition error: {err}");
                HttpResponse::InternalServerError().json(ErrorBody {
                    code: 500,
                    message: "map composition error",
                })
            }
            Self::NotFound(msg) => HttpResponse::NotFound().json(ErrorBody {
                code: 404,
                message: msg,
            }),
        }
    }
}

impl From<MapError> for AppError {
    fn from(err: MapError) -> Self {
        Self::Config(err)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(format!("Validation failed: {err}"))
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: u16,
    message: &'a str,
}
