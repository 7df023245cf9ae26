use actix_web::http::header::ContentType;
use actix_web::HttpResponse;

use crate::html::map_page::MAP_PAGE_HTML;

pub(crate) async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(MAP_PAGE_HTML)
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};

    use super::*;

    #[actix_web::test]
    async fn serves_placeholder_first() {
        let app = test::init_service(App::new().route("/", web::get().to(index))).await;
        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains(r#"id="slot" class="placeholder""#));
        assert!(!html.contains("<script src=\"https://unpkg.com/leaflet"));
    }

    #[actix_web::test]
    async fn only_latest_region_request_mounts() {
        let app = test::init_service(App::new().route("/", web::get().to(index))).await;
        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = std::str::from_utf8(&body).unwrap();

        let show = &html[html.find("async function show").unwrap()..];
        assert!(show.contains("const token = ++requestSeq;"));
        let fetched = show.find("await fetch(uri)").unwrap();
        let loaded = show.find("await loadLeaflet()").unwrap();
        let mounted = show.find("mount(L, plan)").unwrap();
        let guard = "if (token !== requestSeq";
        assert!(show[fetched..loaded].contains(guard));
        assert!(show[loaded..mounted].contains(guard));
    }

    #[actix_web::test]
    async fn frame_follows_configured_surface_size() {
        let app = test::init_service(App::new().route("/", web::get().to(index))).await;
        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = std::str::from_utf8(&body).unwrap();

        assert!(html.contains(r#"id="frame""#));
        assert!(html.contains("sizeFrame(plan.placeholder)"));
        assert!(html.contains("`${size.width} / ${size.height}`"));
    }
}
