use actix_web::{web, HttpResponse, Result as ActixResult};

use crate::config::Config;
use crate::errors::AppError;
use crate::map::{MapViewport, RegionPreset};
use crate::models::{MapPlanPayload, RegionListPayload, RegionPayload};
use crate::response::ApiResponse;

#[utoipa::path(
    get,
    path = "/regions",
    tag = "Regions",
    summary = "Demo regions shown on the landing page",
    responses((status = 200, description = "Region presets", body = RegionListPayload))
)]
pub(crate) async fn list_regions() -> HttpResponse {
    let regions: Vec<RegionPayload> = RegionPreset::all().iter().map(Into::into).collect();
    ApiResponse::cached(RegionListPayload {
        count: regions.len(),
        regions,
    })
}

#[utoipa::path(
    get,
    path = "/regions/{id}/map",
    tag = "Regions",
    summary = "Map plan for a demo region",
    params(("id" = String, Path, description = "Region id", example = "nwt")),
    responses(
        (status = 200, description = "Map plan", body = MapPlanPayload),
        (status = 404, description = "Unknown region")
    )
)]
pub(crate) async fn region_map(
    cfg: web::Data<Config>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    let preset = RegionPreset::find(&id)
        .ok_or_else(|| AppError::NotFound(format!("No demo region '{id}'")))?;

    let plan = MapViewport::new(preset.viewport)
        .with_size(cfg.surface)
        .plan()
        .map_err(AppError::from)?;

    Ok(ApiResponse::cached(MapPlanPayload::from(&plan)))
}
