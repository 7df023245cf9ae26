use actix_web::{web, HttpResponse, Result as ActixResult};
use validator::Validate;

use crate::errors::AppError;
use crate::map::{classify_region, risk_markers, Coordinate};
use crate::models::{RiskPayload, RiskQuery};
use crate::response::ApiResponse;

/// Demo risk markers for the region around a coordinate.
#[utoipa::path(
    get,
    path = "/risk",
    tag = "Map",
    summary = "Demo risk markers",
    description = "Fixed demonstration points. Centers north of 60° latitude get the NWT set, \
        all others the Northern Ontario set. Weights are illustrative, not a computed score.",
    params(RiskQuery),
    responses(
        (status = 200, description = "Styled risk markers", body = RiskPayload),
        (status = 400, description = "Invalid coordinates")
    )
)]
pub(crate) async fn risk_points(query: web::Query<RiskQuery>) -> ActixResult<HttpResponse> {
    query.validate().map_err(AppError::from)?;

    let center = Coordinate::new(query.lat, query.lng).map_err(AppError::from)?;
    let markers = risk_markers(center);

    Ok(ApiResponse::cached(RiskPayload {
        center: center.into(),
        region: classify_region(center).as_str(),
        markers: markers.iter().map(Into::into).collect(),
    }))
}
