use super::{discard_on_error, position, price, text, validate};
use crate::error::ApiError;
use crate::services::uploads::multipart::{read_form, ParsedForm};
use crate::state::AppState;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use common::model::ad::Ad;
use common::validation::Completeness;
use log::info;

/// `PUT /api/ads/{id}`: updates the supplied fields of an existing ad.
///
/// - `200 OK` with the updated `Ad`.
/// - `400 Bad Request` when a supplied field is invalid.
/// - `404 Not Found` when no ad has this id.
pub async fn process(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let form = read_form(payload, &state.uploads).await?;
    let ad = update_ad(&state, &id, form).await?;
    Ok(HttpResponse::Ok().json(ad))
}

/// Applies `form` to the ad `id`.
///
/// Absent or blank fields keep their current value. Uploaded files are appended
/// to the video list, or replace it when `replaceVideos` is set. `id`, `clicks`
/// and `createdAt` never change.
pub async fn update_ad(state: &AppState, id: &str, form: ParsedForm) -> Result<Ad, ApiError> {
    let result = apply(state, id, &form).await;
    discard_on_error(&state.uploads, &form, result)
}

async fn apply(state: &AppState, id: &str, form: &ParsedForm) -> Result<Ad, ApiError> {
    validate(&form.fields, Completeness::SuppliedOnly)?;

    let _guard = state.write_gate.lock().await;
    let mut ads = state.store.read_all()?;
    let index = position(&ads, id)?;
    let ad = &mut ads[index];

    if let Some(title) = text(&form.fields, "title") {
        ad.title = title;
    }
    if let Some(publisher) = text(&form.fields, "publisher") {
        ad.publisher = publisher;
    }
    if let Some(content) = text(&form.fields, "content") {
        ad.content = content;
    }
    if let Some(landing_url) = text(&form.fields, "landingUrl") {
        ad.landing_url = landing_url;
    }
    if let Some(price) = price(&form.fields) {
        ad.price = price;
    }

    if !form.files.is_empty() {
        if replace_videos(form) {
            ad.video_urls = form.file_urls();
        } else {
            ad.video_urls.extend(form.file_urls());
        }
    }

    let updated = ad.clone();
    state.store.write_all(&ads)?;

    info!("Updated ad {}", updated.id);
    Ok(updated)
}

fn replace_videos(form: &ParsedForm) -> bool {
    form.fields
        .get("replaceVideos")
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1" | "on"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::{sample_ad, stored_file, temp_state};
    use std::collections::HashMap;
    use std::fs;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn seeded(state: &AppState) -> Ad {
        let mut ad = sample_ad("ad-1", 4.0, 7);
        ad.video_urls = vec!["/uploads/old.mp4".to_string()];
        ad.created_at = Some("2024-01-01T00:00:00+00:00".to_string());
        state.store.write_all(&[ad.clone(), sample_ad("ad-2", 1.0, 0)]).unwrap();
        ad
    }

    #[actix_web::test]
    async fn changes_only_supplied_fields() {
        let (_dir, state) = temp_state(1024);
        let original = seeded(&state);

        let form = ParsedForm {
            fields: fields(&[("price", "8"), ("title", "   "), ("publisher", "New Co")]),
            files: Vec::new(),
        };
        let updated = update_ad(&state, "ad-1", form).await.unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.clicks, 7);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.title, original.title);
        assert_eq!(updated.publisher, "New Co");
        assert_eq!(updated.price, 8.0);
        assert_eq!(updated.video_urls, original.video_urls);
        assert_eq!(state.store.read_all().unwrap()[0], updated);
    }

    #[actix_web::test]
    async fn uploaded_videos_are_appended() {
        let (_dir, state) = temp_state(1024);
        seeded(&state);

        let form = ParsedForm {
            fields: HashMap::new(),
            files: vec![stored_file(&state, "1-new.mp4", b"n")],
        };
        let updated = update_ad(&state, "ad-1", form).await.unwrap();
        assert_eq!(updated.video_urls, vec!["/uploads/old.mp4", "/uploads/1-new.mp4"]);
    }

    #[actix_web::test]
    async fn replace_videos_swaps_the_list() {
        let (_dir, state) = temp_state(1024);
        seeded(&state);

        let form = ParsedForm {
            fields: fields(&[("replaceVideos", "true")]),
            files: vec![stored_file(&state, "1-new.mp4", b"n")],
        };
        let updated = update_ad(&state, "ad-1", form).await.unwrap();
        assert_eq!(updated.video_urls, vec!["/uploads/1-new.mp4"]);
    }

    #[actix_web::test]
    async fn replace_without_files_keeps_videos() {
        let (_dir, state) = temp_state(1024);
        let original = seeded(&state);

        let form = ParsedForm {
            fields: fields(&[("replaceVideos", "true")]),
            files: Vec::new(),
        };
        let updated = update_ad(&state, "ad-1", form).await.unwrap();
        assert_eq!(updated.video_urls, original.video_urls);
    }

    #[actix_web::test]
    async fn unknown_id_leaves_everything_untouched() {
        let (dir, state) = temp_state(1024);
        seeded(&state);
        let before = fs::read_to_string(state.store.path()).unwrap();

        let form = ParsedForm {
            fields: fields(&[("title", "Whatever")]),
            files: vec![stored_file(&state, "1-new.mp4", b"n")],
        };
        let err = update_ad(&state, "missing", form).await.unwrap_err();

        assert!(matches!(err, ApiError::NotFound(ref id) if id == "missing"));
        assert_eq!(fs::read_to_string(state.store.path()).unwrap(), before);
        assert_eq!(fs::read_dir(dir.path().join("uploads")).unwrap().count(), 0);
    }

    #[actix_web::test]
    async fn invalid_supplied_field_is_rejected() {
        let (_dir, state) = temp_state(1024);
        let original = seeded(&state);

        let form = ParsedForm {
            fields: fields(&[("landingUrl", "nowhere")]),
            files: Vec::new(),
        };
        let err = update_ad(&state, "ad-1", form).await.unwrap_err();

        assert!(matches!(err, ApiError::Validation(ref d) if d.len() == 1 && d[0].field == "landingUrl"));
        assert_eq!(state.store.read_all().unwrap()[0], original);
    }
}
