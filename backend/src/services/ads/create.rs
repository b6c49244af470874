use super::{discard_on_error, price, required, text, validate};
use crate::error::ApiError;
use crate::services::uploads::multipart::{read_form, ParsedForm};
use crate::state::AppState;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use common::model::ad::Ad;
use common::validation::Completeness;
use log::info;
use uuid::Uuid;

/// `POST /api/ads`: creates an ad from a multipart form.
///
/// - `201 Created` with the stored `Ad`.
/// - `400 Bad Request` listing every missing or invalid field.
/// - `413 Payload Too Large` when a video exceeds the upload limit.
pub async fn process(state: web::Data<AppState>, payload: Multipart) -> Result<HttpResponse, ApiError> {
    let form = read_form(payload, &state.uploads).await?;
    let ad = create_ad(&state, form).await?;
    Ok(HttpResponse::Created().json(ad))
}

/// Validates `form`, appends the new ad and persists the collection.
/// On failure the collection is untouched and the files of `form` are removed.
pub async fn create_ad(state: &AppState, form: ParsedForm) -> Result<Ad, ApiError> {
    let result = insert(state, &form).await;
    discard_on_error(&state.uploads, &form, result)
}

async fn insert(state: &AppState, form: &ParsedForm) -> Result<Ad, ApiError> {
    validate(&form.fields, Completeness::AllRequired)?;

    let ad = Ad {
        id: Uuid::new_v4().to_string(),
        title: required(text(&form.fields, "title"), "title")?,
        publisher: required(text(&form.fields, "publisher"), "publisher")?,
        content: required(text(&form.fields, "content"), "content")?,
        landing_url: required(text(&form.fields, "landingUrl"), "landingUrl")?,
        price: required(price(&form.fields), "price")?,
        clicks: 0,
        video_urls: form.file_urls(),
        created_at: Some(Utc::now().to_rfc3339()),
    };

    let _guard = state.write_gate.lock().await;
    let mut ads = state.store.read_all()?;
    ads.push(ad.clone());
    state.store.write_all(&ads)?;

    info!("Created ad {} ({} videos)", ad.id, ad.video_urls.len());
    Ok(ad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::{sample_ad, stored_file, temp_state, valid_fields};
    use std::collections::HashSet;
    use std::fs;

    #[actix_web::test]
    async fn creates_with_fresh_id_and_zero_clicks() {
        let (_dir, state) = temp_state(1024);
        let files = vec![stored_file(&state, "1-a.mp4", b"a"), stored_file(&state, "2-b.mp4", b"b")];
        let form = ParsedForm {
            fields: valid_fields(),
            files,
        };

        let ad = create_ad(&state, form).await.unwrap();
        assert_eq!(ad.clicks, 0);
        assert_eq!(ad.price, 12.5);
        assert_eq!(ad.video_urls, vec!["/uploads/1-a.mp4", "/uploads/2-b.mp4"]);
        assert_eq!(state.store.read_all().unwrap(), vec![ad]);
    }

    #[actix_web::test]
    async fn ids_are_unique() {
        let (_dir, state) = temp_state(1024);
        let mut ids = HashSet::new();
        for _ in 0..20 {
            let form = ParsedForm {
                fields: valid_fields(),
                files: Vec::new(),
            };
            ids.insert(create_ad(&state, form).await.unwrap().id);
        }
        assert_eq!(ids.len(), 20);
    }

    #[actix_web::test]
    async fn values_are_trimmed() {
        let (_dir, state) = temp_state(1024);
        let mut fields = valid_fields();
        fields.insert("title".to_string(), "  Padded  ".to_string());

        let ad = create_ad(&state, ParsedForm { fields, files: Vec::new() }).await.unwrap();
        assert_eq!(ad.title, "Padded");
    }

    #[actix_web::test]
    async fn missing_field_leaves_collection_and_uploads_untouched() {
        let (dir, state) = temp_state(1024);
        state.store.write_all(&[sample_ad("existing", 1.0, 0)]).unwrap();
        let before = fs::read_to_string(state.store.path()).unwrap();

        let mut fields = valid_fields();
        fields.remove("publisher");
        let form = ParsedForm {
            fields,
            files: vec![stored_file(&state, "1-a.mp4", b"a")],
        };

        let err = create_ad(&state, form).await.unwrap_err();
        match err {
            ApiError::Validation(details) => {
                assert_eq!(details.len(), 1);
                assert_eq!(details[0].field, "publisher");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(fs::read_to_string(state.store.path()).unwrap(), before);
        assert_eq!(fs::read_dir(dir.path().join("uploads")).unwrap().count(), 0);
    }

    #[actix_web::test]
    async fn title_over_limit_is_rejected() {
        let (_dir, state) = temp_state(1024);
        let mut fields = valid_fields();
        fields.insert("title".to_string(), "x".repeat(101));

        let err = create_ad(&state, ParsedForm { fields, files: Vec::new() }).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(ref d) if d[0].field == "title"));
    }
}
