//! Local-file gateway
//!
//! Keeps every record in one JSON document:
//!
//! ```json
//! { "users": [ ... ], "connectors": [ ... ] }
//! ```
//!
//! Records are stored in the UI shape. Each operation reads the whole file,
//! applies the change and writes the whole file back. A missing or
//! unreadable file reads as empty. Uploaded attachments are copied into a
//! `media/` directory next to the data file.
//!
//! Writes are serialized inside one process; several processes sharing a
//! file are not coordinated.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use parts_admin_core::{AdminError, AdminResult, ConnectorId, Record, UserId};
use parts_admin_model::{Attachments, Connector, UploadedPaths, User, UserDraft};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::DataGateway;
use crate::media::normalize_media_path;

/// Directory, next to the data file, that receives uploaded attachments
pub const MEDIA_DIR: &str = "media";

// ============================================================================
// Data Document
// ============================================================================

/// Contents of the data file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataDocument {
    #[serde(default)]
    pub users: Vec<User>,

    #[serde(default)]
    pub connectors: Vec<Connector>,
}

impl DataDocument {
    /// Parse a document, giving ids to connectors stored without one
    pub fn from_json(json: &str) -> AdminResult<Self> {
        let mut doc: DataDocument = serde_json::from_str(json)?;
        let assigned = doc.assign_missing_ids();
        if assigned > 0 {
            debug!(assigned, "Assigned ids to connectors stored without one");
        }
        Ok(doc)
    }

    /// Give every connector without an id the next free one
    ///
    /// Returns how many ids were assigned. They are persisted on the next
    /// write.
    pub fn assign_missing_ids(&mut self) -> usize {
        let mut next = self.next_connector_id().0;
        let mut assigned = 0;
        for connector in self.connectors.iter_mut().filter(|c| c.id.is_none()) {
            connector.id = Some(ConnectorId(next));
            next += 1;
            assigned += 1;
        }
        assigned
    }

    /// One past the largest user id
    pub fn next_user_id(&self) -> UserId {
        UserId(self.users.iter().map(|u| u.id.0).max().unwrap_or(0) + 1)
    }

    /// One past the largest connector id
    pub fn next_connector_id(&self) -> ConnectorId {
        ConnectorId(
            self.connectors
                .iter()
                .filter_map(|c| c.id.map(|id| id.0))
                .max()
                .unwrap_or(0)
                + 1,
        )
    }

    fn ensure_unique_pn(&self, pn: &str, except: Option<ConnectorId>) -> AdminResult<()> {
        let taken = self
            .connectors
            .iter()
            .any(|c| c.yazaki_pn == pn && (except.is_none() || c.id != except));
        if taken {
            Err(AdminError::validation("Yazaki PN already exists"))
        } else {
            Ok(())
        }
    }

    fn user_index(&self, id: UserId) -> AdminResult<usize> {
        self.users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| AdminError::identity(format!("user {} not found", id)))
    }

    fn connector_index(&self, id: ConnectorId) -> AdminResult<usize> {
        self.connectors
            .iter()
            .position(|c| c.id() == Some(id))
            .ok_or_else(|| AdminError::identity(format!("connector {} not found", id)))
    }
}

// ============================================================================
// Gateway
// ============================================================================

/// Gateway backed by a JSON file on disk
#[derive(Debug)]
pub struct LocalFileGateway {
    path: PathBuf,
    lock: Mutex<()>,
}

impl LocalFileGateway {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory uploads are copied into
    pub fn media_root(&self) -> PathBuf {
        self.path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(MEDIA_DIR)
    }

    /// Read the document, degrading to empty when missing or corrupt
    async fn load(&self) -> DataDocument {
        let json = match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Data file unreadable, using empty data");
                return DataDocument::default();
            }
        };
        match DataDocument::from_json(&json) {
            Ok(doc) => doc,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Data file corrupt, using empty data");
                DataDocument::default()
            }
        }
    }

    async fn save(&self, doc: &DataDocument) -> AdminResult<()> {
        let json = serde_json::to_string_pretty(doc).map_err(|e| AdminError::FileWrite {
            path: self.path.clone(),
            message: format!("Failed to serialize data: {}", e),
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AdminError::FileWrite {
                    path: parent.to_path_buf(),
                    message: e.to_string(),
                })?;
        }

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| AdminError::FileWrite {
                path: self.path.clone(),
                message: e.to_string(),
            })
    }

    /// Load, change and write back while holding the write lock
    async fn modify<T>(
        &self,
        change: impl FnOnce(&mut DataDocument) -> AdminResult<T> + Send,
    ) -> AdminResult<T> {
        let _guard = self.lock.lock().await;
        let mut doc = self.load().await;
        let out = change(&mut doc)?;
        self.save(&doc).await?;
        Ok(out)
    }
}

#[async_trait]
impl DataGateway for LocalFileGateway {
    fn describe(&self) -> String {
        format!("local file {}", self.path.display())
    }

    async fn list_users(&self) -> AdminResult<Vec<User>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await.users)
    }

    async fn create_user(&self, draft: &UserDraft) -> AdminResult<User> {
        let draft = draft.normalized();
        let user = self
            .modify(move |doc| {
                let user = User {
                    id: doc.next_user_id(),
                    name: draft.name.clone(),
                    email: draft.email.clone(),
                    role: draft.effective_role(),
                    created_at: Utc::now(),
                };
                doc.users.push(user.clone());
                Ok(user)
            })
            .await?;
        info!(id = %user.id, "Created user in local file");
        Ok(user)
    }

    async fn update_user(&self, id: UserId, draft: &UserDraft) -> AdminResult<User> {
        let draft = draft.normalized();
        let user = self
            .modify(move |doc| {
                let idx = doc.user_index(id)?;
                let user = &mut doc.users[idx];
                user.name = draft.name.clone();
                user.email = draft.email.clone();
                if let Some(role) = draft.role {
                    user.role = role;
                }
                Ok(user.clone())
            })
            .await?;
        info!(%id, "Updated user in local file");
        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> AdminResult<()> {
        self.modify(move |doc| {
            let idx = doc.user_index(id)?;
            doc.users.remove(idx);
            Ok(())
        })
        .await?;
        info!(%id, "Deleted user from local file");
        Ok(())
    }

    async fn list_connectors(&self) -> AdminResult<Vec<Connector>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await.connectors)
    }

    async fn create_connector(&self, connector: &Connector) -> AdminResult<Connector> {
        let mut connector = connector.clone();
        let created = self
            .modify(move |doc| {
                doc.ensure_unique_pn(&connector.yazaki_pn, None)?;
                connector.id = Some(doc.next_connector_id());
                doc.connectors.push(connector.clone());
                Ok(connector)
            })
            .await?;
        info!(yazaki_pn = %created.yazaki_pn, "Created connector in local file");
        Ok(created)
    }

    async fn update_connector(
        &self,
        id: ConnectorId,
        connector: &Connector,
    ) -> AdminResult<Connector> {
        let mut connector = connector.clone();
        connector.id = Some(id);
        let updated = self
            .modify(move |doc| {
                let idx = doc.connector_index(id)?;
                doc.ensure_unique_pn(&connector.yazaki_pn, Some(id))?;
                doc.connectors[idx] = connector.clone();
                Ok(connector)
            })
            .await?;
        info!(%id, "Updated connector in local file");
        Ok(updated)
    }

    async fn delete_connector(&self, id: ConnectorId) -> AdminResult<()> {
        self.modify(move |doc| {
            let idx = doc.connector_index(id)?;
            doc.connectors.remove(idx);
            Ok(())
        })
        .await?;
        info!(%id, "Deleted connector from local file");
        Ok(())
    }

    async fn upload_attachments(
        &self,
        base_name: &str,
        attachments: &Attachments,
    ) -> AdminResult<UploadedPaths> {
        let root = self.media_root();
        let mut paths = UploadedPaths::new();

        for (slot, file) in attachments.iter() {
            let dir = root.join(slot.subdir());
            tokio::fs::create_dir_all(&dir)
                .await
                .map_err(|e| AdminError::FileWrite {
                    path: dir.clone(),
                    message: e.to_string(),
                })?;

            let file_name = match file.extension() {
                Some(ext) => format!("{}.{}", base_name, ext),
                None => base_name.to_string(),
            };
            let target = dir.join(&file_name);
            tokio::fs::write(&target, &file.bytes)
                .await
                .map_err(|e| AdminError::FileWrite {
                    path: target.clone(),
                    message: e.to_string(),
                })?;

            let stored = format!("{}/{}/{}", MEDIA_DIR, slot.subdir(), file_name);
            if let Some(path) = normalize_media_path(&stored) {
                paths.insert(slot, path);
            }
        }

        info!(base_name, count = paths.len(), "Copied attachments into local media");
        Ok(paths)
    }

    fn media_url(&self, path: &str) -> Option<String> {
        let path = normalize_media_path(path)?;
        if crate::media::is_absolute_url(&path) {
            return Some(path);
        }
        let full = self.media_root().join(path.trim_start_matches('/'));
        Some(format!("file://{}", full.display()))
    }
}

// ============================================================================
// Tests
// ============================================================================
