use super::storage::{StoredUpload, UploadSettings};
use crate::error::ApiError;
use actix_multipart::{Field, Multipart};
use futures_util::StreamExt;
use std::collections::HashMap;

/// Upper bound for a single text part.
const MAX_TEXT_FIELD_BYTES: usize = 64 * 1024;

/// A multipart request split into its text fields and its stored files.
#[derive(Debug, Default)]
pub struct ParsedForm {
    pub fields: HashMap<String, String>,
    pub files: Vec<StoredUpload>,
}

impl ParsedForm {
    pub fn file_urls(&self) -> Vec<String> {
        self.files.iter().map(|f| f.url.clone()).collect()
    }
}

/// Reads every part of a multipart payload.
///
/// Parts that declare a non-empty `filename` are streamed to the uploads
/// directory whatever their field name; parts with an empty `filename` (an
/// untouched file input) are skipped; the rest are read as UTF-8 text fields.
/// If any part fails, the files already stored for this request are removed.
pub async fn read_form(mut payload: Multipart, uploads: &UploadSettings) -> Result<ParsedForm, ApiError> {
    let mut form = ParsedForm::default();
    match collect_parts(&mut payload, uploads, &mut form).await {
        Ok(()) => Ok(form),
        Err(e) => {
            uploads.discard(&form.files);
            Err(e)
        }
    }
}

async fn collect_parts(
    payload: &mut Multipart,
    uploads: &UploadSettings,
    form: &mut ParsedForm,
) -> Result<(), ApiError> {
    while let Some(item) = payload.next().await {
        let mut field = item?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()))
            .unwrap_or_default();
        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()));

        match filename {
            Some(original) if !original.is_empty() => {
                let stored = uploads.store_stream(&original, &mut field).await?;
                form.files.push(stored);
            }
            Some(_) => drain(&mut field).await?,
            None => {
                let value = read_text(&mut field, &name).await?;
                form.fields.insert(name, value);
            }
        }
    }
    Ok(())
}

async fn read_text(field: &mut Field, name: &str) -> Result<String, ApiError> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        bytes.extend_from_slice(&chunk?);
        if bytes.len() > MAX_TEXT_FIELD_BYTES {
            return Err(ApiError::BadRequest(format!("Field '{}' is too long", name)));
        }
    }
    String::from_utf8(bytes)
        .map_err(|_| ApiError::BadRequest(format!("Field '{}' is not valid UTF-8", name)))
}

async fn drain(field: &mut Field) -> Result<(), ApiError> {
    while let Some(chunk) = field.next().await {
        chunk?;
    }
    Ok(())
}
