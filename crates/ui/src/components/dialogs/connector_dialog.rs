//! # Connector Dialog Component
//!
//! Create or edit a connector, with three optional attachment slots.
//!
//! While editing, the Yazaki PN is shown but cannot be changed. Picked files
//! are only read into the draft here; they are uploaded when the form is
//! submitted, before the record itself is saved.

use dioxus::prelude::*;
use parts_admin_model::{AttachmentSlot, ConnectorDraft};

use crate::components::inputs::TextInput;
use crate::hooks::{use_app_state, use_pick_attachment, use_submit_connector};

/// Stored path currently recorded for `slot`
fn stored_path(draft: &ConnectorDraft, slot: AttachmentSlot) -> &str {
    match slot {
        AttachmentSlot::Image => &draft.image_path,
        AttachmentSlot::Drawing2d => &draft.drawing_2d_path,
        AttachmentSlot::Model3d => &draft.model_3d_path,
    }
}

/// What the slot row says about the file that will be saved
fn slot_caption(draft: &ConnectorDraft, slot: AttachmentSlot) -> String {
    if let Some(picked) = draft.attachments.get(slot) {
        return format!("{} (will upload)", picked.file_name);
    }
    let path = stored_path(draft, slot);
    if path.trim().is_empty() {
        "No file".to_string()
    } else {
        path.to_string()
    }
}

/// Price field error, if the entered text is not a usable price
fn price_error(draft: &ConnectorDraft) -> Option<String> {
    draft.parsed_price().err().map(|e| e.to_string())
}

/// Create/edit connector dialog
#[component]
pub fn ConnectorDialog() -> Element {
    let mut state = use_app_state();
    let submit = use_submit_connector();
    let pick = use_pick_attachment();

    let s = state.read();
    let form = &s.connector_form;
    let draft = form.draft().clone();
    let editing = form.is_editing();
    let key_locked = form.is_key_locked();
    let pending = form.is_pending();
    let can_submit = form.can_submit();
    let error = form.error().map(str::to_string);
    drop(s);

    let title = if editing { "Edit Connector" } else { "Add Connector" };
    let price_error = price_error(&draft);
    let slots: Vec<(AttachmentSlot, String, String, bool)> = AttachmentSlot::ALL
        .into_iter()
        .map(|slot| {
            (
                slot,
                slot_caption(&draft, slot),
                stored_path(&draft, slot).to_string(),
                draft.attachments.get(slot).is_some(),
            )
        })
        .collect();

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
                class: "form-grid",

                TextInput {
                    label: "Yazaki PN",
                    value: draft.yazaki_pn.clone(),
                    required: true,
                    disabled: key_locked || pending,
                    help_text: if key_locked { Some("Part number cannot be changed".to_string()) } else { None },
                    on_change: move |v: String| state.write().connector_form.draft_mut().yazaki_pn = v,
                }

                TextInput {
                    label: "Customer PN",
                    value: draft.customer_pn.clone(),
                    required: true,
                    disabled: pending,
                    on_change: move |v: String| state.write().connector_form.draft_mut().customer_pn = v,
                }

                TextInput {
                    label: "Supplier PN",
                    value: draft.supplier_pn.clone(),
                    required: true,
                    disabled: pending,
                    on_change: move |v: String| state.write().connector_form.draft_mut().supplier_pn = v,
                }

                TextInput {
                    label: "Supplier Name",
                    value: draft.supplier_name.clone(),
                    required: true,
                    disabled: pending,
                    on_change: move |v: String| state.write().connector_form.draft_mut().supplier_name = v,
                }

                TextInput {
                    label: "Name",
                    value: draft.name.clone(),
                    placeholder: "Optional display name",
                    disabled: pending,
                    on_change: move |v: String| state.write().connector_form.draft_mut().name = v,
                }

                TextInput {
                    label: "Price",
                    value: draft.price.clone(),
                    prefix: "$",
                    placeholder: "Leave empty for no price",
                    disabled: pending,
                    error: price_error,
                    on_change: move |v: String| state.write().connector_form.draft_mut().price = v,
                }
            }

            // Attachments
            div {
                class: "mt-4 space-y-2",
                h3 { class: "text-sm font-medium text-slate-300", "Attachments" }

                for (slot, caption, stored, picked) in slots {
                    div {
                        key: "{slot}",
                        class: "attachment-row flex items-center gap-2",

                        span { class: "attachment-label", "{slot}" }
                        span {
                            class: "flex-1 text-sm text-slate-400 truncate",
                            title: "{stored}",
                            "{caption}"
                        }
                        button {
                            r#type: "button",
                            class: "btn btn-small btn-secondary",
                            disabled: pending,
                            onclick: move |_| pick.call(slot),
                            "Choose..."
                        }
                        if picked {
                            button {
                                r#type: "button",
                                class: "btn btn-small btn-ghost",
                                disabled: pending,
                                title: "Keep the stored file",
                                onclick: move |_| {
                                    state.write().connector_form.draft_mut().attachments.clear(slot);
                                },
                                "✕"
                            }
                        }
                    }
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
                    if pending { "Saving..." } else if editing { "Save Changes" } else { "Add Connector" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parts_admin_model::Attachment;

    #[test]
    fn test_slot_caption() {
        let mut draft = ConnectorDraft::default();
        draft.image_path = "/images/A1.png".to_string();
        assert_eq!(slot_caption(&draft, AttachmentSlot::Image), "/images/A1.png");
        assert_eq!(slot_caption(&draft, AttachmentSlot::Model3d), "No file");

        draft
            .attachments
            .set(AttachmentSlot::Image, Attachment::new("new.png", vec![1]));
        assert_eq!(
            slot_caption(&draft, AttachmentSlot::Image),
            "new.png (will upload)"
        );
    }

    #[test]
    fn test_price_error() {
        let mut draft = ConnectorDraft::default();
        assert_eq!(price_error(&draft), None);

        draft.price = "$12.50".to_string();
        assert_eq!(price_error(&draft), None);

        draft.price = "-3".to_string();
        assert!(price_error(&draft).is_some());

        draft.price = "abc".to_string();
        assert!(price_error(&draft).is_some());
    }
}
