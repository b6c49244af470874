//! HTTP surface of the ad board.
//!
//! `configure` registers every route on an `App`, so the server and the
//! tests build exactly the same service.

pub mod ads;
pub mod fallback;
pub mod form_config;
pub mod health;
pub mod uploads;

use crate::state::AppState;
use actix_web::web;

pub fn configure(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        let files = uploads::files_service(&state.uploads);
        cfg.app_data(web::Data::new(state))
            .service(ads::configure_routes())
            .service(form_config::configure_routes())
            .service(health::configure_routes())
            .service(uploads::configure_routes())
            .service(files)
            .default_service(web::route().to(fallback::serve_embedded));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::temp_state;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use common::requests::ErrorResponse;

    #[actix_web::test]
    async fn unknown_api_path_is_json_not_found() {
        let (_dir, state) = temp_state(1024);
        let app = test::init_service(App::new().configure(configure(state))).await;

        let response = test::call_service(&app, test::TestRequest::get().uri("/api/nothing").to_request()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: ErrorResponse = test::read_body_json(response).await;
        assert_eq!(body.error, "Not found");
        assert_eq!(body.path.as_deref(), Some("/api/nothing"));
    }
}
