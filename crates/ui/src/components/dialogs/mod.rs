//! # Dialog Components
//!
//! Modal dialogs for Parts Admin:
//! - **UserDialog**: create or edit a user
//! - **ConnectorDialog**: create or edit a connector, with attachments
//! - **ConfirmDeleteDialog**: confirm a delete
//!

pub mod confirm_delete;
pub mod connector_dialog;
pub mod user_dialog;

pub use confirm_delete::ConfirmDeleteDialog;
pub use connector_dialog::ConnectorDialog;
pub use user_dialog::UserDialog;
