//! Local-disk storage for collection media uploads.

use std::path::Path;

use sitecms_core::uploads::{stored_file_name, UploadTarget};

use crate::error::{AppError, AppResult};
use crate::form::UploadedFile;

/// Validate and write an uploaded file under `{upload_root}/{collection}/`.
///
/// Returns the public URL path to store on the row.
pub async fn save_upload(
    upload_root: &Path,
    target: UploadTarget,
    file: &UploadedFile,
) -> AppResult<String> {
    let ext = target.validate_extension(&file.file_name)?;

    let dir = target.dir(upload_root);
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;

    let stored_name = stored_file_name(&ext, chrono::Utc::now());
    tokio::fs::write(dir.join(&stored_name), &file.bytes)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to write upload: {e}")))?;

    tracing::debug!(
        collection = target.collection,
        file = %stored_name,
        size = file.bytes.len(),
        "Stored upload",
    );
    Ok(target.url_for(&stored_name))
}

/// Remove a previously stored upload, ignoring URLs that do not point into
/// this collection's upload directory. Failures are logged and swallowed.
pub async fn remove_upload(upload_root: &Path, target: UploadTarget, url: Option<&str>) {
    let Some(path) = url.and_then(|u| target.local_path_for_url(upload_root, u)) else {
        return;
    };
    if let Err(e) = tokio::fs::remove_file(&path).await {
        tracing::warn!(path = %path.display(), error = %e, "Failed to remove old upload");
    }
}

/// Remove `old` when a mutation replaced it with a different URL.
pub async fn remove_replaced(
    upload_root: &Path,
    target: UploadTarget,
    old: Option<&str>,
    new: Option<&str>,
) {
    if old.is_some() && old != new {
        remove_upload(upload_root, target, old).await;
    }
}

/// Pass `result` through, deleting a file stored earlier in the same
/// request when the mutation failed.
pub async fn discard_on_error<T>(
    upload_root: &Path,
    target: UploadTarget,
    uploaded: Option<&str>,
    result: AppResult<T>,
) -> AppResult<T> {
    if result.is_err() {
        remove_upload(upload_root, target, uploaded).await;
    }
    result
}
