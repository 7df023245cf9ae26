use actix_web::{web, HttpResponse, Result as ActixResult};
use validator::Validate;

use crate::config::Config;
use crate::errors::AppError;
use crate::map::{MapViewport, Viewport};
use crate::models::{MapPlanPayload, MapQuery};
use crate::response::ApiResponse;

/// The map as the page should mount it. Built without mounting anything: the
/// browser creates the interactive surface once it has loaded the map library.
#[utoipa::path(
    get,
    path = "/map",
    tag = "Map",
    summary = "Composed map plan for a viewport",
    description = "Returns the re-key identity, region, placeholder size, and ordered layer \
        entries (base map, Sentinel-2 imagery overlays, risk marker overlay) for a center and \
        zoom. A different `key` means the client must destroy and recreate its map.",
    params(MapQuery),
    responses(
        (status = 200, description = "Map plan", body = MapPlanPayload),
        (status = 400, description = "Coordinates or zoom out of range")
    )
)]
pub(crate) async fn map_plan(
    cfg: web::Data<Config>,
    query: web::Query<MapQuery>,
) -> ActixResult<HttpResponse> {
    query.validate().map_err(AppError::from)?;

    let viewport = Viewport::from_parts(query.lat, query.lng, query.zoom).map_err(AppError::from)?;
    let plan = MapViewport::new(viewport)
        .with_size(cfg.surface)
        .plan()
        .map_err(AppError::from)?;

    Ok(ApiResponse::cached(MapPlanPayload::from(&plan)))
}
