//! # User Dialog Component
//!
//! Create or edit a user. The draft lives in [`AppState::user_form`], so a
//! failed save leaves everything the user typed in place.
//!
//! [`AppState::user_form`]: crate::state::AppState::user_form

use dioxus::prelude::*;
use parts_admin_core::Role;
use parts_admin_model::is_valid_email;

use crate::components::inputs::{Select, SelectOption, TextInput};
use crate::hooks::{use_app_state, use_submit_user};

/// Role dropdown options; the empty value leaves the role to the backend
fn role_options() -> Vec<SelectOption> {
    Role::ALL
        .iter()
        .map(|r| SelectOption::new(r.as_str(), r.display_name()))
        .collect()
}

/// Create/edit user dialog
#[component]
pub fn UserDialog() -> Element {
    let mut state = use_app_state();
    let submit = use_submit_user();

    let s = state.read();
    let form = &s.user_form;
    let draft = form.draft().clone();
    let editing = form.is_editing();
    let pending = form.is_pending();
    let can_submit = form.can_submit();
    let error = form.error().map(str::to_string);
    drop(s);

    let email_error = (!draft.email.trim().is_empty() && !is_valid_email(&draft.email))
        .then(|| "Enter a valid email address".to_string());
    let role_value = draft.role.map(|r| r.as_str().to_string()).unwrap_or_default();
    let title = if editing { "Edit User" } else { "Add User" };

    rsx! {
        form {
            class: "dialog-body",
            onsubmit: move |e| {
                e.prevent_default();
                submit.call(());
            },

            h2 { class: "dialog-title", "{title}" }

            if let Some(message) = error {
                div { class: "alert alert-error mb-4", "{message}" }
            }

            div {
                class: "space-y-4",

                TextInput {
                    label: "Full Name",
                    value: draft.name.clone(),
                    required: true,
                    disabled: pending,
                    on_change: move |v: String| state.write().user_form.draft_mut().name = v,
                }

                TextInput {
                    label: "Email",
                    input_type: "email",
                    value: draft.email.clone(),
                    required: true,
                    disabled: pending,
                    error: email_error,
                    on_change: move |v: String| state.write().user_form.draft_mut().email = v,
                }

                Select {
                    label: "Role",
                    value: role_value,
                    options: role_options(),
                    placeholder: format!("Default ({})", Role::BASELINE.display_name()),
                    disabled: pending,
                    on_change: move |v: String| {
                        state.write().user_form.draft_mut().role = v.parse::<Role>().ok();
                    },
                }
            }

            div {
                class: "dialog-actions",
                button {
                    r#type: "button",
                    class: "btn btn-secondary",
                    onclick: move |_| state.write().close_dialog(),
                    "Cancel"
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: !can_submit,
                    if pending { "Saving..." } else if editing { "Save Changes" } else { "Add User" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_options_cover_all_roles() {
        let options = role_options();
        assert_eq!(options.len(), Role::ALL.len());
        assert_eq!(options[0].value, "admin");
        assert_eq!(options[2].label, "User");
    }
}
