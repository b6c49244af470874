use crate::services::fallback;
use actix_web::web::{get, resource, route};
use actix_web::{HttpResponse, Resource};
use chrono::Utc;
use common::requests::HealthResponse;

/// `GET /api/health` and its alias `GET /health`.
pub fn configure_routes() -> (Resource, Resource) {
    (health_resource("/api/health"), health_resource("/health"))
}

fn health_resource(path: &str) -> Resource {
    resource(path)
        .route(get().to(process))
        .default_service(route().to(fallback::not_found))
}

async fn process() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn both_paths_report_ok() {
        let app = test::init_service(App::new().service(configure_routes())).await;
        for uri in ["/api/health", "/health"] {
            let response = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert!(response.status().is_success());
            let body: HealthResponse = test::read_body_json(response).await;
            assert_eq!(body.status, "ok");
            assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        }
    }
}
