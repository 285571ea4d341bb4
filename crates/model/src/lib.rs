//! # Parts Admin Model
//!
//! Record shapes and client-side state for the Parts Admin dashboard.
//!
//! ## Core Concepts
//!
//! - **User / Connector**: Records in the shape the UI works with
//! - **Mapping**: The single place where UI field names meet backend names
//! - **EntityStore**: Snapshot of the last known records, reconciled after
//!   every successful gateway call
//! - **ListQuery / ListPage**: Search, filter and pagination over a snapshot
//! - **EditForm**: Create/edit draft with ticketed, one-at-a-time submits
//!

pub mod attachment;
pub mod connector;
pub mod form;
pub mod list_view;
pub mod mapping;
pub mod store;
pub mod user;

pub use attachment::{Attachment, AttachmentSlot, Attachments, UploadedPaths};
pub use connector::{Connector, ConnectorDraft, EMPTY_CELL, format_price};
pub use form::{Completion, Draftable, EditForm, SubmitTicket};
pub use list_view::{ListPage, ListQuery, PAGE_SIZE, distinct_values, page_window, view};
pub use mapping::{BackendConnector, BackendUser, BackendUserPayload};
pub use store::{Collection, EntityStore, Stored};
pub use user::{User, UserDraft, is_valid_email};

// Re-export core types that are commonly used with the model
pub use parts_admin_core::{
    AdminError, AdminResult, ConnectorId, EntityKind, Record, Role, UserId, Validatable,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Prelude Module
// ============================================================================

/// Convenient re-exports for common usage
pub mod prelude {
    pub use crate::{
        AdminError, AdminResult, Completion, Connector, ConnectorDraft, ConnectorId, EditForm,
        EntityStore, ListPage, ListQuery, Record, Role, User, UserDraft, UserId, Validatable,
    };
}
