//! Requests that match no API route.
//!
//! API and upload paths get a JSON 404 naming the path. Everything else is
//! served from the frontend bundle embedded at build time (see `build.rs`),
//! falling back to `index.html` so client-side routes keep working.

use actix_web::{HttpRequest, HttpResponse};
use common::requests::ErrorResponse;
use include_dir::{include_dir, Dir};
use log::debug;
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

pub async fn not_found(req: HttpRequest) -> HttpResponse {
    debug!("No route for {} {}", req.method(), req.path());
    HttpResponse::NotFound().json(ErrorResponse::route_not_found(req.path()))
}

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    if path.starts_with("api/") || path == "api" || path.starts_with("uploads/") {
        return not_found(req).await;
    }

    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => not_found(req).await,
        },
    }
}
