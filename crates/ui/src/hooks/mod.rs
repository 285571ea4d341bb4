//! # UI Hooks
//!
//! Custom Dioxus hooks for the Parts Admin UI.
//!
//! This module provides reusable hooks for:
//! - Reaching the application state and the admin service from context
//! - Refreshing records
//! - Submitting forms and confirming deletes
//! - Picking attachment files

// ============================================================================
// Module Declarations
// ============================================================================

pub mod use_admin;

// ============================================================================
// Re-exports
// ============================================================================

pub use use_admin::{
    use_admin_service, use_app_state, use_delete, use_pick_attachment, use_refresh,
    use_submit_connector, use_submit_user,
};
