//! # Admin Hooks
//!
//! Hooks that run service calls for the dashboard.
//!
//! Every request is spawned on the root scope so that closing a dialog or
//! leaving a page does not abort it. The result is handed back to
//! [`AppState`], which checks the session token and the form's submit
//! ticket before reconciling anything.

use dioxus::prelude::*;
use parts_admin_gateway::AdminService;
use parts_admin_model::AttachmentSlot;
use tracing::debug;

use crate::file_ops;
use crate::state::{AppState, DeleteTarget};

// ============================================================================
// Context Access
// ============================================================================

/// Application state provided by the root component
pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

/// Service provided at launch
pub fn use_admin_service() -> AdminService {
    use_context::<AdminService>()
}

// ============================================================================
// Refresh
// ============================================================================

/// Reload both collections from the gateway
pub fn use_refresh() -> Callback<()> {
    let mut state = use_app_state();
    let service = use_admin_service();

    use_callback(move |_: ()| {
        if !state.write().begin_refresh() {
            return;
        }
        let token = state.read().session_token();
        let service = service.clone();
        spawn_forever(async move {
            let refresh = service.refresh().await;
            state.write().finish_refresh(token, refresh);
        });
    })
}

// ============================================================================
// Form Submits
// ============================================================================

/// Submit the user form
pub fn use_submit_user() -> Callback<()> {
    let mut state = use_app_state();
    let service = use_admin_service();

    use_callback(move |_: ()| {
        let (token, identity, started) = {
            let mut s = state.write();
            let started = s.user_form.begin_submit();
            (s.session_token(), s.user_form.identity(), started)
        };
        let (ticket, draft) = match started {
            Ok(started) => started,
            Err(e) => {
                debug!(error = %e, "User submit not started");
                return;
            }
        };

        let service = service.clone();
        spawn_forever(async move {
            let result = service.save_user(identity, &draft).await;
            state.write().finish_user_submit(token, ticket, result);
        });
    })
}

/// Submit the connector form, uploading picked attachments first
pub fn use_submit_connector() -> Callback<()> {
    let mut state = use_app_state();
    let service = use_admin_service();

    use_callback(move |_: ()| {
        let (token, original, started) = {
            let mut s = state.write();
            let started = s.connector_form.begin_submit();
            (
                s.session_token(),
                s.connector_form.original().cloned(),
                started,
            )
        };
        let (ticket, draft) = match started {
            Ok(started) => started,
            Err(e) => {
                debug!(error = %e, "Connector submit not started");
                return;
            }
        };

        let service = service.clone();
        spawn_forever(async move {
            let result = service.save_connector(original.as_ref(), &draft).await;
            state.write().finish_connector_submit(token, ticket, result);
        });
    })
}

// ============================================================================
// Delete
// ============================================================================

/// Delete the record the confirm dialog is showing
pub fn use_delete() -> Callback<DeleteTarget> {
    let mut state = use_app_state();
    let service = use_admin_service();

    use_callback(move |target: DeleteTarget| {
        if !state.write().begin_delete(&target) {
            return;
        }
        let token = state.read().session_token();
        let service = service.clone();
        spawn_forever(async move {
            let result = match &target {
                DeleteTarget::User(user) => service.delete_user(user).await,
                DeleteTarget::Connector(connector) => service.delete_connector(connector).await,
            };
            state.write().finish_delete(token, result);
        });
    })
}

// ============================================================================
// Attachments
// ============================================================================

/// Pick a file for one attachment slot of the open connector form
pub fn use_pick_attachment() -> Callback<AttachmentSlot> {
    let mut state = use_app_state();

    use_callback(move |slot: AttachmentSlot| {
        spawn(async move {
            match file_ops::pick_attachment(slot).await {
                Ok(Some(attachment)) => {
                    let mut s = state.write();
                    if s.connector_form.is_open() {
                        debug!(?slot, file = %attachment.file_name, "Attachment picked");
                        s.connector_form.draft_mut().attachments.set(slot, attachment);
                    }
                }
                Ok(None) => {}
                Err(e) => state.write().report("Could not read file", &e),
            }
        });
    })
}
