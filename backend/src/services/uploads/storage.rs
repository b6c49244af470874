//! Persists uploaded files into the uploads directory.
//!
//! Each file gets a fresh name `<millis>-<uuid>.<ext>`; the extension is kept from
//! the client's file name so browsers can still infer the media type. Bytes are
//! streamed into `<name>.part` (opened with create-new, so nothing existing is
//! ever overwritten) and renamed into place once complete. A file that grows
//! past the size limit is removed and the upload fails with `PayloadTooLarge`,
//! leaving the directory as it was.

use crate::config::Config;
use crate::error::ApiError;
use actix_web::web::Bytes;
use futures_util::{Stream, StreamExt};
use log::{debug, warn};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Mount point of the uploads directory.
pub const UPLOADS_ROUTE: &str = "/uploads";

const MAX_EXTENSION_LEN: usize = 16;

/// Where and how uploads are stored.
#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub dir: PathBuf,
    pub max_bytes: u64,
    /// Prefix for public URLs, without trailing slash. Empty for relative URLs.
    pub public_base_url: String,
}

/// A file that has been written to the uploads directory.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredUpload {
    pub filename: String,
    pub original_name: String,
    pub size: u64,
    pub url: String,
    pub path: PathBuf,
}

impl UploadSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            dir: config.uploads_dir.clone(),
            max_bytes: config.max_upload_bytes,
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn public_url(&self, filename: &str) -> String {
        format!("{}{}/{}", self.public_base_url, UPLOADS_ROUTE, filename)
    }

    /// Streams one file into the uploads directory.
    pub async fn store_stream<S, E>(
        &self,
        original_name: &str,
        mut stream: S,
    ) -> Result<StoredUpload, ApiError>
    where
        S: Stream<Item = Result<Bytes, E>> + Unpin,
        ApiError: From<E>,
    {
        fs::create_dir_all(&self.dir)?;

        let filename = unique_name(original_name);
        let final_path = self.dir.join(&filename);
        let part_path = self.dir.join(part_name(&filename));

        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&part_path)?;
        let mut writer = BufWriter::new(file);

        let written = match copy_limited(&mut stream, &mut writer, self.max_bytes).await {
            Ok(written) => written,
            Err(e) => {
                drop(writer);
                let _ = fs::remove_file(&part_path);
                return Err(e);
            }
        };

        let finished = writer
            .into_inner()
            .map_err(|e| e.into_error())
            .and_then(|file: File| file.sync_all())
            .and_then(|_| promote(&part_path, &final_path));
        if let Err(e) = finished {
            let _ = fs::remove_file(&part_path);
            return Err(e.into());
        }

        debug!("Stored upload {} as {} ({} bytes)", original_name, filename, written);
        Ok(StoredUpload {
            url: self.public_url(&filename),
            filename,
            original_name: original_name.to_string(),
            size: written,
            path: final_path,
        })
    }

    /// Removes files stored by a request that ended up failing.
    pub fn discard(&self, uploads: &[StoredUpload]) {
        for upload in uploads {
            if let Err(e) = fs::remove_file(&upload.path) {
                warn!("Could not remove discarded upload {}: {}", upload.path.display(), e);
            }
        }
    }
}

async fn copy_limited<S, E, W>(stream: &mut S, writer: &mut W, limit: u64) -> Result<u64, ApiError>
where
    S: Stream<Item = Result<Bytes, E>> + Unpin,
    ApiError: From<E>,
    W: Write,
{
    let mut written: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        written += chunk.len() as u64;
        if written > limit {
            return Err(ApiError::PayloadTooLarge { limit });
        }
        writer.write_all(&chunk)?;
    }
    writer.flush()?;
    Ok(written)
}

/// In-flight name of an upload. Dot files are never served by `/uploads`.
fn part_name(filename: &str) -> String {
    format!(".{}.part", filename)
}

fn promote(part_path: &Path, final_path: &Path) -> std::io::Result<()> {
    if final_path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("{} already exists", final_path.display()),
        ));
    }
    fs::rename(part_path, final_path)
}

/// `<millis>-<uuid>` plus the sanitised extension of `original_name`, if any.
fn unique_name(original_name: &str) -> String {
    let token = chrono::Utc::now().timestamp_millis();
    let suffix = Uuid::new_v4().simple();
    match extension_of(original_name) {
        Some(ext) => format!("{}-{}.{}", token, suffix, ext),
        None => format!("{}-{}", token, suffix),
    }
}

fn extension_of(original_name: &str) -> Option<String> {
    Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ext.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
                .to_ascii_lowercase()
        })
        .filter(|ext| !ext.is_empty() && ext.len() <= MAX_EXTENSION_LEN)
}
