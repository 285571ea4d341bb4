//! File Operations for Parts Admin
//!
//! Native file pickers (via `rfd`) for the connector attachment slots.

use std::path::{Path, PathBuf};

use parts_admin_core::{AdminError, AdminResult};
use parts_admin_model::{Attachment, AttachmentSlot};
use rfd::AsyncFileDialog;

// ============================================================================
// File Dialog Functions
// ============================================================================

/// Open a file dialog filtered to the extensions `slot` accepts
///
/// Returns the selected file path, or None if the dialog was cancelled.
pub async fn show_attachment_dialog(slot: AttachmentSlot) -> Option<PathBuf> {
    let file = AsyncFileDialog::new()
        .set_title(format!("Choose {}", slot.label()))
        .add_filter(slot.label(), slot.extensions())
        .add_filter("All Files", &["*"])
        .pick_file()
        .await?;

    Some(file.path().to_path_buf())
}

/// Read a picked file into an attachment
pub async fn load_attachment(path: &Path) -> AdminResult<Attachment> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| AdminError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    Ok(Attachment::new(file_name(path), bytes))
}

/// Ask for a file and read it; `Ok(None)` when the dialog was cancelled
pub async fn pick_attachment(slot: AttachmentSlot) -> AdminResult<Option<Attachment>> {
    match show_attachment_dialog(slot).await {
        Some(path) => load_attachment(&path).await.map(Some),
        None => Ok(None),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "attachment".to_string())
}
