//! # Parts Admin Gateway
//!
//! Data access for Parts Admin.
//!
//! The [`DataGateway`] trait is the single seam between the dashboard and
//! wherever records live. Two implementations exist:
//!
//! - **HttpGateway**: the REST backend (`/users`, `/connectors`, `/upload`)
//! - **LocalFileGateway**: a JSON document on disk, for offline use
//!
//! Gateways never touch the entity store. [`AdminService`] runs an
//! operation and returns an [`Outcome`] that the caller applies to its
//! store once the backend has confirmed it.
//!

// ============================================================================
// Modules
// ============================================================================

pub mod config;
pub mod http;
pub mod local;
pub mod media;
pub mod service;
pub mod upload;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{DEFAULT_BACKEND_URL, GatewayConfig, GatewayMode};
pub use http::HttpGateway;
pub use local::{DataDocument, LocalFileGateway};
pub use media::{media_url, normalize_media_path};
pub use service::{AdminService, Outcome, Refresh};

use std::sync::Arc;

use async_trait::async_trait;
use parts_admin_core::{AdminResult, ConnectorId, UserId};
use parts_admin_model::{Attachments, Connector, UploadedPaths, User, UserDraft};
use tracing::info;

// ============================================================================
// DataGateway
// ============================================================================

/// Access to stored users and connectors
///
/// List operations return records in the order the source holds them.
/// Create and update return the canonical record as stored. Update and
/// delete address records by surrogate id only.
#[async_trait]
pub trait DataGateway: Send + Sync {
    /// Human-readable description of where records live
    fn describe(&self) -> String;

    async fn list_users(&self) -> AdminResult<Vec<User>>;

    /// Create a user; an absent role is stored as the baseline role
    async fn create_user(&self, draft: &UserDraft) -> AdminResult<User>;

    async fn update_user(&self, id: UserId, draft: &UserDraft) -> AdminResult<User>;

    async fn delete_user(&self, id: UserId) -> AdminResult<()>;

    async fn list_connectors(&self) -> AdminResult<Vec<Connector>>;

    /// Create a connector; a duplicate Yazaki PN is a validation error
    async fn create_connector(&self, connector: &Connector) -> AdminResult<Connector>;

    async fn update_connector(
        &self,
        id: ConnectorId,
        connector: &Connector,
    ) -> AdminResult<Connector>;

    async fn delete_connector(&self, id: ConnectorId) -> AdminResult<()>;

    /// Store attachments and return their normalized paths by slot
    async fn upload_attachments(
        &self,
        base_name: &str,
        attachments: &Attachments,
    ) -> AdminResult<UploadedPaths>;

    /// URL at which a stored media path can be displayed
    fn media_url(&self, path: &str) -> Option<String>;
}

/// Gateway handle shared between the UI, the CLI and background tasks
pub type SharedGateway = Arc<dyn DataGateway>;

/// Build the gateway selected by `config`
pub fn connect(config: &GatewayConfig) -> AdminResult<SharedGateway> {
    let gateway: SharedGateway = match &config.mode {
        GatewayMode::Http { origin } => Arc::new(HttpGateway::new(origin.clone(), config.timeout)?),
        GatewayMode::Local { path } => Arc::new(LocalFileGateway::new(path.clone())),
    };
    info!(source = %gateway.describe(), "Data gateway ready");
    Ok(gateway)
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Tests
// ============================================================================
