//! Users Page
//!
//! Searchable, role-filtered, paginated table of users with add, edit and
//! delete actions.

use dioxus::prelude::*;
use parts_admin_core::Role;

use crate::components::cells::format_date;
use crate::components::{
    EmptyRow, Pagination, RoleBadge, RowActions, SearchInput, Select, SelectOption,
};
use crate::hooks::use_app_state;
use crate::state::DeleteTarget;

const COLUMNS: [&str; 6] = ["ID", "Name", "Email", "Role", "Created", "Actions"];

/// Users page component
#[component]
pub fn UsersPage() -> Element {
    let mut state = use_app_state();

    let s = state.read();
    let page = s.user_page();
    let search = s.user_query.search().to_string();
    let filter = s.user_query.filter().unwrap_or_default().to_string();
    let total = s.store.users().len();
    let loading = s.loading;
    drop(s);

    let role_options: Vec<SelectOption> = Role::ALL
        .iter()
        .map(|r| SelectOption::new(r.as_str(), r.display_name()))
        .collect();
    let empty_message = if loading {
        "Loading users..."
    } else if total == 0 {
        "No users yet"
    } else {
        "No users match the current search"
    };
    let summary = page.summary();
    let page_numbers = page.page_numbers();
    let is_empty = page.is_empty();
    let (current, total_pages) = (page.page, page.total_pages);
    let records = page.records;

    rsx! {
        div {
            class: "page space-y-4",

            // Header
            div {
                class: "flex items-center justify-between",
                div {
                    h2 { class: "text-2xl font-bold", "Users" }
                    p { class: "text-sm text-slate-400", "{total} total" }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| state.write().open_user_form(None),
                    "＋ Add User"
                }
            }

            // Search and filter
            div {
                class: "list-toolbar",
                SearchInput {
                    value: search,
                    placeholder: "Search by name or email...",
                    on_change: move |v: String| state.write().user_query.set_search(v),
                }
                Select {
                    value: filter,
                    options: role_options,
                    placeholder: "All roles",
                    on_change: move |v: String| state.write().user_query.set_filter(Some(v)),
                }
            }

            // Table
            div {
                class: "table-card",
                table {
                    class: "data-table",
                    thead {
                        tr {
                            for column in COLUMNS {
                                th { key: "{column}", "{column}" }
                            }
                        }
                    }
                    tbody {
                        if is_empty {
                            EmptyRow { colspan: COLUMNS.len(), message: empty_message.to_string() }
                        }
                        for user in records {
                            tr {
                                key: "{user.id}",
                                td { "{user.id}" }
                                td { class: "font-medium", "{user.name}" }
                                td { "{user.email}" }
                                td { RoleBadge { role: user.role } }
                                td { {format_date(&user.created_at)} }
                                td {
                                    RowActions {
                                        on_edit: {
                                            let user = user.clone();
                                            move |_| state.write().open_user_form(Some(&user))
                                        },
                                        on_delete: {
                                            let user = user.clone();
                                            move |_| state.write().confirm_delete(DeleteTarget::User(user.clone()))
                                        },
                                    }
                                }
                            }
                        }
                    }
                }
            }

            Pagination {
                page: current,
                total_pages: total_pages,
                page_numbers: page_numbers,
                summary: summary,
                on_change: move |p: usize| state.write().user_query.set_page(p),
            }
        }
    }
}
