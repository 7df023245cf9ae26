pub mod health;
pub mod layers;
pub mod map;
pub mod page;
pub mod regions;
pub mod risk;

use actix_web::web;

use crate::config::API_PREFIX;

pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(page::index)).service(
        web::scope(API_PREFIX)
            .route("/health", web::get().to(health::health))
            .route("/map", web::get().to(map::map_plan))
            .route("/layers", web::get().to(layers::tile_layers))
            .route("/risk", web::get().to(risk::risk_points))
            .route("/regions", web::get().to(regions::list_regions))
            .route("/regions/{id}/map", web::get().to(regions::region_map)),
    );
}
