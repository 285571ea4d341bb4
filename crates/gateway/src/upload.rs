//! Attachment upload wire format
//!
//! `POST /upload` takes a multipart form with a `base_filename`, one
//! `subdirN` hint per slot and the files as `file1`..`file3`. The response
//! lists one entry per stored file:
//!
//! ```json
//! { "files": [ { "file_number": 1, "full_url": "...", "file_path": "media/images/A1.png" } ] }
//! ```

use parts_admin_core::{AdminError, AdminResult};
use parts_admin_model::{AttachmentSlot, Attachments, UploadedPaths};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde_json::Value;

use crate::media::normalize_media_path;

/// Body of a successful upload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub files: Vec<UploadedFile>,
}

/// One stored file in an upload response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadedFile {
    /// Slot number, sent as a number or a numeric string
    #[serde(default)]
    pub file_number: Option<Value>,

    /// Multipart field name, used when `file_number` is absent
    #[serde(default)]
    pub field: Option<String>,

    #[serde(default)]
    pub full_url: Option<String>,

    #[serde(default)]
    pub file_path: Option<String>,
}

impl UploadedFile {
    /// Slot this entry belongs to
    pub fn slot(&self) -> Option<AttachmentSlot> {
        let number = match &self.file_number {
            Some(Value::Number(n)) => n.as_u64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        };
        if let Some(n) = number {
            return u8::try_from(n).ok().and_then(AttachmentSlot::from_number);
        }
        let field = self.field.as_deref()?;
        AttachmentSlot::ALL
            .into_iter()
            .find(|slot| slot.field_name() == field)
    }

    /// Stored location, preferring the full URL
    pub fn location(&self) -> Option<&str> {
        self.full_url
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or(self.file_path.as_deref())
    }
}

/// Build the multipart form for the picked attachments
pub fn build_form(base_name: &str, attachments: &Attachments) -> Form {
    let mut form = Form::new().text("base_filename", base_name.to_string());
    for slot in AttachmentSlot::ALL {
        form = form.text(slot.subdir_field(), slot.subdir());
    }
    for (slot, file) in attachments.iter() {
        let part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
        form = form.part(slot.field_name(), part);
    }
    form
}

/// Map an upload response to normalized paths for the requested slots
///
/// Every slot that was sent must come back with a location, otherwise the
/// record would be saved pointing at nothing.
pub fn resolve_paths(
    response: &UploadResponse,
    requested: &Attachments,
) -> AdminResult<UploadedPaths> {
    let mut paths = UploadedPaths::new();
    for (slot, file) in requested.iter() {
        let location = response
            .files
            .iter()
            .filter(|f| f.slot() == Some(slot))
            .find_map(UploadedFile::location)
            .and_then(normalize_media_path)
            .ok_or_else(|| {
                AdminError::format(format!(
                    "upload response has no path for {} ('{}')",
                    slot.field_name(),
                    file.file_name
                ))
            })?;
        paths.insert(slot, location);
    }
    Ok(paths)
}
