use actix_web::HttpResponse;

use crate::map::RegionPreset;
use crate::models::HealthPayload;
use crate::response::ApiResponse;

#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses((status = 200, description = "Service is healthy", body = HealthPayload))
)]
pub async fn health() -> HttpResponse {
    ApiResponse::ok(HealthPayload {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        regions: RegionPreset::all().len(),
    })
}
