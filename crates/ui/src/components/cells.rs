//! # Table Cell Components
//!
//! Small pieces shared by the users and connectors tables.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use parts_admin_core::Role;
use parts_admin_model::EMPTY_CELL;

/// Date as shown in tables, such as "Jan 5, 2024"
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn role_badge_class(role: Role) -> &'static str {
    match role {
        Role::Admin => "badge badge-admin",
        Role::Manager => "badge badge-manager",
        Role::User => "badge badge-user",
    }
}

/// Colored role label
#[component]
pub fn RoleBadge(role: Role) -> Element {
    let label = role.display_name();
    rsx! {
        span { class: role_badge_class(role), "{label}" }
    }
}

/// Image thumbnail, or the empty-cell marker when there is no image
#[component]
pub fn Thumbnail(url: Option<String>, alt: String) -> Element {
    match url {
        Some(url) => rsx! {
            img { class: "thumbnail", src: "{url}", alt: "{alt}" }
        },
        None => rsx! {
            span { class: "text-slate-500", "{EMPTY_CELL}" }
        },
    }
}

/// Edit and delete buttons at the end of a row
#[component]
pub fn RowActions(on_edit: EventHandler<()>, on_delete: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "flex items-center gap-2",
            button {
                class: "action-btn action-edit",
                onclick: move |_| on_edit.call(()),
                "✏️ Edit"
            }
            button {
                class: "action-btn action-delete",
                onclick: move |_| on_delete.call(()),
                "🗑️ Delete"
            }
        }
    }
}

/// Placeholder row spanning the whole table
#[component]
pub fn EmptyRow(colspan: usize, message: String) -> Element {
    rsx! {
        tr {
            td {
                class: "empty-row",
                colspan: "{colspan}",
                "{message}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2024, 1, 5, 13, 30, 0).unwrap();
        assert_eq!(format_date(&date), "Jan 5, 2024");
    }

    #[test]
    fn test_role_badge_class() {
        assert!(role_badge_class(Role::Admin).contains("badge-admin"));
        assert!(role_badge_class(Role::User).contains("badge-user"));
    }
}
