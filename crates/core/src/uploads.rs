//! Upload naming and validation for collection media files.
//!
//! Files live on disk at `{upload_dir}/{collection}/{stored_name}` and rows
//! store only the public URL path `/uploads/{collection}/{stored_name}`.

use std::path::{Path, PathBuf};

use crate::error::CoreError;

/// URL prefix under which the upload directory is served.
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

/// Image extensions accepted for cover images, avatars, logos and thumbnails.
///
/// Raster formats only. Uploads are served from the API origin, so a
/// scriptable format such as SVG must never be stored.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// Upload target for one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTarget {
    /// Sub-directory and URL segment, e.g. `"blog"`.
    pub collection: &'static str,
    pub allowed_extensions: &'static [&'static str],
}

pub const BLOG_UPLOADS: UploadTarget = UploadTarget {
    collection: "blog",
    allowed_extensions: IMAGE_EXTENSIONS,
};

pub const TESTIMONIAL_UPLOADS: UploadTarget = UploadTarget {
    collection: "testimonials",
    allowed_extensions: IMAGE_EXTENSIONS,
};

pub const INTEGRATION_UPLOADS: UploadTarget = UploadTarget {
    collection: "integrations",
    allowed_extensions: IMAGE_EXTENSIONS,
};

pub const VIDEO_UPLOADS: UploadTarget = UploadTarget {
    collection: "videos",
    allowed_extensions: IMAGE_EXTENSIONS,
};

impl UploadTarget {
    /// Extract and validate the lowercase extension of an uploaded filename.
    pub fn validate_extension(&self, original_name: &str) -> Result<String, CoreError> {
        let ext = Path::new(original_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if ext.is_empty() || !self.allowed_extensions.contains(&ext.as_str()) {
            return Err(CoreError::Validation(format!(
                "Unsupported file type '.{ext}'. Allowed: {}",
                self.allowed_extensions.join(", ")
            )));
        }
        Ok(ext)
    }

    /// Directory on disk for this collection's files.
    pub fn dir(&self, upload_root: &Path) -> PathBuf {
        upload_root.join(self.collection)
    }

    /// Public URL path for a stored file name.
    pub fn url_for(&self, stored_name: &str) -> String {
        format!("{UPLOADS_URL_PREFIX}/{}/{stored_name}", self.collection)
    }

    /// Map a stored URL back to its file on disk.
    ///
    /// Returns `None` for URLs that do not belong to this collection's upload
    /// directory (external links, other collections) or that try to escape
    /// it.
    pub fn local_path_for_url(&self, upload_root: &Path, url: &str) -> Option<PathBuf> {
        let prefix = format!("{UPLOADS_URL_PREFIX}/{}/", self.collection);
        let name = url.strip_prefix(&prefix)?;
        if name.is_empty() || name.contains('/') || name.contains('\\') || name.starts_with('.') {
            return None;
        }
        Some(self.dir(upload_root).join(name))
    }
}

/// Generate a collision-resistant stored name: `{unix_millis}-{uuid_v4}.{ext}`.
pub fn stored_file_name(ext: &str, now: chrono::DateTime<chrono::Utc>) -> String {
    format!("{}-{}.{ext}", now.timestamp_millis(), uuid::Uuid::new_v4())
}
