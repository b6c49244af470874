use super::multipart::read_form;
use crate::error::ApiError;
use crate::state::AppState;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use common::requests::UploadResponse;
use log::{info, warn};

/// `POST /api/upload`: stores a single file and returns where it can be fetched.
///
/// - `200 OK` with an `UploadResponse`.
/// - `400 Bad Request` when the payload holds no file.
/// - `413 Payload Too Large` when the file exceeds the configured limit.
pub async fn process(state: web::Data<AppState>, payload: Multipart) -> Result<HttpResponse, ApiError> {
    let uploaded = upload_single(&state, payload).await?;
    Ok(HttpResponse::Ok().json(uploaded))
}

pub async fn upload_single(state: &AppState, payload: Multipart) -> Result<UploadResponse, ApiError> {
    let mut form = read_form(payload, &state.uploads).await?;
    if form.files.is_empty() {
        return Err(ApiError::BadRequest("No file uploaded".to_string()));
    }

    let file = form.files.remove(0);
    if !form.files.is_empty() {
        warn!("Single-file upload received {} extra files, discarding them", form.files.len());
        state.uploads.discard(&form.files);
    }

    info!("Uploaded {} as {}", file.original_name, file.filename);
    Ok(UploadResponse {
        filename: file.filename,
        original_name: file.original_name,
        size: file.size,
        url: file.url,
    })
}
