//! # Upload Handler
//!
//! Accepts multipart file parts, writes them into the uploads directory under
//! collision-free names and hands back their public URLs.
//!
//! ## Sub-modules:
//! - `storage`: naming, size limiting and writing of a single file.
//! - `multipart`: splits a multipart request into text fields and stored files.
//!   Also used by the ad create/update endpoints.
//! - `upload`: the standalone `POST /api/upload` endpoint.
//!
//! Stored files are served back by `actix_files` under `/uploads`, see `files_service`.

pub mod multipart;
pub mod storage;
mod upload;

use crate::services::fallback;
use actix_files::Files;
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::web::{post, resource, route};
use actix_web::Resource;
use storage::{UploadSettings, UPLOADS_ROUTE};

const API_PATH: &str = "/api/upload";

/// Registers `POST /api/upload`. Any other method on the path answers 404.
pub fn configure_routes() -> Resource {
    resource(API_PATH)
        .route(post().to(upload::process))
        .default_service(route().to(fallback::not_found))
}

/// Serves the raw bytes of uploaded files at `/uploads/{file}`.
/// Missing files answer with the JSON 404 body used by the rest of the API.
pub fn files_service(settings: &UploadSettings) -> Files {
    Files::new(UPLOADS_ROUTE, settings.dir.clone()).default_handler(fn_service(
        |req: ServiceRequest| async move {
            let (req, _) = req.into_parts();
            let response = fallback::not_found(req.clone()).await;
            Ok::<_, actix_web::Error>(ServiceResponse::new(req, response))
        },
    ))
}
