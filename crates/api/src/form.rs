//! Request body extractor for admin mutations.
//!
//! Admin create/update endpoints accept either a JSON object or a
//! `multipart/form-data` body with an optional `file` part. [`ContentForm`]
//! normalizes both into a flat field map plus the uploaded file, so the
//! handlers read fields the same way regardless of encoding.
//!
//! Endpoints with a fixed request shape use [`AppJson`] instead, which is
//! `axum::Json` with rejections rendered as the API's `{error, code}` body.

use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use sitecms_core::error::CoreError;

use crate::error::{AppError, AppResult};

/// Multipart part name that carries the media file.
pub const FILE_FIELD: &str = "file";

/// A file received in the `file` multipart part.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client-supplied file name; only its extension is used.
    pub file_name: String,
    pub bytes: Bytes,
}

/// Normalized admin form body.
#[derive(Debug, Default)]
pub struct ContentForm {
    fields: Map<String, Value>,
    pub file: Option<UploadedFile>,
}

impl ContentForm {
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields, file: None }
    }

    /// Trimmed text value. Blank strings and nulls read as absent.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::String(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Boolean flag. Accepts JSON booleans and the form encodings
    /// `true/false`, `1/0`, `on/off`.
    pub fn flag(&self, key: &str) -> AppResult<Option<bool>> {
        if let Some(Value::Bool(b)) = self.fields.get(key) {
            return Ok(Some(*b));
        }
        let Some(raw) = self.text(key) else {
            return Ok(None);
        };
        match raw.to_ascii_lowercase().as_str() {
            "true" | "1" | "on" | "yes" => Ok(Some(true)),
            "false" | "0" | "off" | "no" => Ok(Some(false)),
            _ => Err(CoreError::Validation(format!("{key} must be a boolean")).into()),
        }
    }

    /// Integer field parsed into the column's width.
    pub fn number<T: std::str::FromStr>(&self, key: &str) -> AppResult<Option<T>> {
        match self.text(key) {
            None => Ok(None),
            Some(raw) => raw
                .parse::<T>()
                .map(Some)
                .map_err(|_| CoreError::Validation(format!("{key} must be a whole number")).into()),
        }
    }
}

/// Map a body rejection to an API error, keeping 413 for oversized bodies.
fn body_rejection(status: StatusCode, text: String) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(text)
    } else {
        AppError::BadRequest(text)
    }
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        // Well-formed JSON that does not fit the target type: missing or
        // mistyped fields.
        JsonRejection::JsonDataError(err) => CoreError::Validation(err.body_text()).into(),
        other => body_rejection(other.status(), other.body_text()),
    }
}

/// JSON body extractor for endpoints with a fixed request shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;
        Ok(Self(value))
    }
}

impl<S> FromRequest<S> for ContentForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| body_rejection(e.status(), e.body_text()))?;
            return read_multipart(multipart).await;
        }

        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(json_rejection)?;
        match body {
            Value::Object(fields) => Ok(Self::from_fields(fields)),
            _ => Err(AppError::BadRequest(
                "Request body must be a JSON object".into(),
            )),
        }
    }
}

async fn read_multipart(mut multipart: Multipart) -> AppResult<ContentForm> {
    let mut form = ContentForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| body_rejection(e.status(), e.body_text()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == FILE_FIELD {
            let file_name = field.file_name().unwrap_or("").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| body_rejection(e.status(), e.body_text()))?;
            // Browsers send an empty part when no file was chosen.
            if !file_name.is_empty() && !bytes.is_empty() {
                form.file = Some(UploadedFile { file_name, bytes });
            }
        } else if !name.is_empty() {
            let text = field
                .text()
                .await
                .map_err(|e| body_rejection(e.status(), e.body_text()))?;
            form.fields.insert(name, Value::String(text));
        }
    }

    Ok(form)
}
