//! # Confirm Delete Dialog Component
//!
//! Asks before deleting a user or connector. The record stays in the list
//! until the backend confirms the delete; a failure is shown in the dialog
//! and the delete can be retried.
//!

use dioxus::prelude::*;

use crate::hooks::{use_app_state, use_delete};
use crate::state::DeleteTarget;

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDeleteDialogProps {
    /// The record to delete
    pub target: DeleteTarget,
}

// ============================================================================
// Main Component
// ============================================================================

/// Confirmation dialog for delete operations
#[component]
pub fn ConfirmDeleteDialog(props: ConfirmDeleteDialogProps) -> Element {
    let mut state = use_app_state();
    let delete = use_delete();

    let s = state.read();
    let deleting = s.delete.is_pending();
    let error = s.delete.error.clone();
    drop(s);

    let (title, item_name) = delete_info(&props.target);
    let target = props.target.clone();

    rsx! {
        div {
            class: "dialog-body confirm-delete-dialog",

            // Header with warning icon
            div {
                class: "flex items-start gap-4 mb-6",

                div {
                    class: "warning-icon",
                    span { "⚠️" }
                }

                div {
                    class: "flex-1",
                    h2 { class: "dialog-title text-red-400", "{title}" }
                    p {
                        class: "text-slate-300",
                        "This cannot be undone."
                    }
                }
            }

            div {
                class: "mb-4 p-3 item-box",
                span { class: "text-slate-400", "Item: " }
                span { class: "font-medium", "{item_name}" }
            }

            if let Some(message) = error {
                div { class: "alert alert-error mb-4", "{message}" }
            }

            div {
                class: "dialog-actions",

                button {
                    class: "btn btn-secondary",
                    disabled: deleting,
                    onclick: move |_| state.write().close_dialog(),
                    "Cancel"
                }

                button {
                    class: "btn btn-danger",
                    disabled: deleting,
                    onclick: move |_| delete.call(target.clone()),
                    if deleting { "Deleting..." } else { "Delete" }
                }
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Dialog title and the name of the item being deleted
fn delete_info(target: &DeleteTarget) -> (&'static str, String) {
    match target {
        DeleteTarget::User(user) => ("Delete User", format!("{} ({})", user.name, user.email)),
        DeleteTarget::Connector(connector) => {
            let name = match connector.name.as_deref() {
                Some(name) => format!("{} - {}", connector.yazaki_pn, name),
                None => connector.yazaki_pn.clone(),
            };
            ("Delete Connector", name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parts_admin_model::Connector;

    #[test]
    fn test_delete_info_connector() {
        let plain = Connector::new("A1", "C1", "S1", "Acme");
        assert_eq!(delete_info(&DeleteTarget::Connector(plain.clone())), ("Delete Connector", "A1".to_string()));

        let named = plain.with_name("Housing");
        let (_, item) = delete_info(&DeleteTarget::Connector(named));
        assert_eq!(item, "A1 - Housing");
    }
}
