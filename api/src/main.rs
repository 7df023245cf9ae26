mod config;
mod errors;
mod html;
mod models;
mod response;
mod routes;
mod validation;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use utoipa::openapi::Server;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use lythos_map::map;

use crate::config::API_PREFIX;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LYTHOS Map API",
        description = "Map composition for the LYTHOS siting-intelligence demo: NASA GIBS \
            Sentinel-2 imagery overlays, an OpenStreetMap base layer, and demo risk markers \
            for Northern Ontario and the Northwest Territories.\n\n\
            Risk markers are static demonstration data, not a computed model.",
        version = "1.0.0"
    ),
    paths(
        routes::health::health,
        routes::map::map_plan,
        routes::layers::tile_layers,
        routes::risk::risk_points,
        routes::regions::list_regions,
        routes::regions::region_map,
    ),
    components(schemas(
        models::MapQuery, models::RiskQuery,
        models::HealthPayload, models::CoordinateInfo, models::SizeInfo,
        models::TileLayerPayload, models::TileLayerListPayload,
        models::MarkerStylePayload, models::RiskMarkerPayload, models::RiskPayload,
        models::LayerEntryPayload, models::MapPlanPayload,
        models::RegionPayload, models::RegionListPayload,
    )),
    tags(
        (name = "System", description = "Health and status"),
        (name = "Map", description = "Tile sources, layer plan, and risk markers"),
        (name = "Regions", description = "Demo regions from the landing page"),
    )
)]
struct ApiDoc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();
    let cfg = config::Config::from_env();

    let bind = format!("{}:{}", cfg.host, cfg.port);
    log::info!("Starting LYTHOS map service on {bind}");
    log::info!("Demo page: http://{bind}/");
    log::info!("Swagger UI: http://{bind}{API_PREFIX}/docs/");
    log::debug!("Map surface {}x{}", cfg.surface.width, cfg.surface.height);

    let mut openapi = ApiDoc::openapi();
    openapi.servers = Some(vec![Server::new(API_PREFIX)]);

    let openapi_url: &'static str = Box::leak(format!("{API_PREFIX}/openapi.json").into_boxed_str());
    let docs_path: &'static str = Box::leak(format!("{API_PREFIX}/docs/{{_:.*}}").into_boxed_str());
    let health_path = format!("{API_PREFIX}/health");

    let cfg = web::Data::new(cfg);
    HttpServer::new(move || {
        App::new()
            .wrap(
                Logger::new(r#"%a "%r" %s %b %Dms "%{User-Agent}i""#)
                    .exclude(health_path.clone()),
            )
            .wrap(Cors::permissive())
            .app_data(cfg.clone())
            .service(SwaggerUi::new(docs_path).url(openapi_url, openapi.clone()))
            .configure(routes::configure_routes)
    })
    .bind(&bind)?
    .run()
    .await
}
