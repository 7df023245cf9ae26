use actix_web::HttpResponse;

use crate::map::TileSourceRegistry;
use crate::models::{TileLayerListPayload, TileLayerPayload};
use crate::response::ApiResponse;

#[utoipa::path(
    get,
    path = "/layers",
    tag = "Map",
    summary = "Configured tile sources",
    responses((status = 200, description = "Base and imagery tile layers, base first", body = TileLayerListPayload))
)]
pub(crate) async fn tile_layers() -> HttpResponse {
    let registry = TileSourceRegistry::builtin();
    let layers: Vec<TileLayerPayload> = registry.layers().iter().map(Into::into).collect();
    ApiResponse::cached(TileLayerListPayload {
        count: layers.len(),
        layers,
    })
}
