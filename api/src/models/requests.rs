use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::map::Viewport;

#[derive(Debug, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MapQuery {
    /// Center latitude, defaults to Sudbury, Ontario.
    #[serde(default = "default_lat")]
    #[validate(custom(function = "crate::validation::validate_lat"))]
    pub lat: f64,
    /// Center longitude.
    #[serde(default = "default_lng")]
    #[validate(custom(function = "crate::validation::validate_lng"))]
    pub lng: f64,
    #[serde(default = "default_zoom")]
    #[validate(custom(function = "crate::validation::validate_zoom"))]
    pub zoom: u8,
}

#[derive(Debug, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RiskQuery {
    #[validate(custom(function = "crate::validation::validate_lat"))]
    pub lat: f64,
    #[validate(custom(function = "crate::validation::validate_lng"))]
    pub lng: f64,
}

fn default_lat() -> f64 {
    Viewport::DEFAULT_CENTER.lat()
}

fn default_lng() -> f64 {
    Viewport::DEFAULT_CENTER.lng()
}

fn default_zoom() -> u8 {
    Viewport::DEFAULT_ZOOM
}
