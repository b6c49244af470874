//! # Ad Service Module
//!
//! CRUD and click tracking over the ad collection. Every operation locks
//! `AppState::write_gate`, reads the whole collection from the store, changes
//! it in memory and writes it back.
//!
//! ## Sub-modules:
//! - `list`: ranked listing.
//! - `create`: validates a multipart form and appends a new ad.
//! - `update`: per-field update of an existing ad, including its videos.
//! - `delete`: removes one ad.
//! - `click`: increments the click counter of one ad.

mod click;
mod create;
mod delete;
mod list;
mod update;

use crate::error::ApiError;
use crate::services::fallback;
use crate::services::form_config::ad_form_config;
use crate::services::uploads::multipart::ParsedForm;
use crate::services::uploads::storage::UploadSettings;
use actix_web::web::{delete, get, post, put, resource, route, scope};
use actix_web::Scope;
use common::model::ad::Ad;
use common::requests::FieldError;
use common::validation::{parse_price, supplied, validate_fields, Completeness};
use log::warn;
use std::collections::HashMap;

/// The base path for all ad endpoints.
const API_PATH: &str = "/api/ads";

/// Configures and returns the Actix `Scope` for the ad routes.
///
/// # Registered Routes:
///
/// *   **`GET /api/ads`**: every ad, highest score first.
/// *   **`POST /api/ads`**: multipart form with the ad fields and optional video
///     files. Answers `201 Created` with the stored ad.
/// *   **`PUT /api/ads/{id}`**: multipart form; blank or missing fields keep
///     their current value. `replaceVideos=true` swaps the video list for the
///     uploaded files instead of appending to it.
/// *   **`DELETE /api/ads/{id}`**: `204 No Content`.
/// *   **`POST /api/ads/{id}/click`**: `{ "clicks": n }` after the increment.
///
/// Any other method or sub-path answers the JSON 404.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .service(
            resource("")
                .route(get().to(list::process))
                .route(post().to(create::process))
                .default_service(route().to(fallback::not_found)),
        )
        .service(
            resource("/{id}")
                .route(put().to(update::process))
                .route(delete().to(delete::process))
                .default_service(route().to(fallback::not_found)),
        )
        .service(
            resource("/{id}/click")
                .route(post().to(click::process))
                .default_service(route().to(fallback::not_found)),
        )
        .default_service(route().to(fallback::not_found))
}

/// Checks submitted text fields against the ad form configuration.
fn validate(fields: &HashMap<String, String>, completeness: Completeness) -> Result<(), ApiError> {
    let errors = validate_fields(&ad_form_config(), fields, completeness);
    if errors.is_empty() {
        return Ok(());
    }
    let names: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    warn!("Rejected ad form, invalid fields: {}", names.join(", "));
    Err(ApiError::Validation(errors))
}

/// Trimmed value of a text field, when supplied.
fn text(fields: &HashMap<String, String>, field: &str) -> Option<String> {
    supplied(fields, field).map(str::to_string)
}

fn price(fields: &HashMap<String, String>) -> Option<f64> {
    supplied(fields, "price").and_then(parse_price)
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| {
        ApiError::Validation(vec![FieldError {
            field: field.to_string(),
            message: format!("{} is required", field),
        }])
    })
}

fn position(ads: &[Ad], id: &str) -> Result<usize, ApiError> {
    ads.iter().position(|ad| ad.id == id).ok_or_else(|| {
        warn!("Ad {} not found", id);
        ApiError::NotFound(id.to_string())
    })
}

/// Removes the files stored for `form` when the operation using them failed.
fn discard_on_error<T>(
    uploads: &UploadSettings,
    form: &ParsedForm,
    result: Result<T, ApiError>,
) -> Result<T, ApiError> {
    if result.is_err() && !form.files.is_empty() {
        uploads.discard(&form.files);
    }
    result
}
