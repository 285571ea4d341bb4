//! Dashboard Page
//!
//! Landing page after login: record totals and shortcuts to the lists.

use dioxus::prelude::*;
use parts_admin_core::Role;

use crate::hooks::use_app_state;
use crate::state::{AppState, Page};

/// Numbers shown on the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_users: usize,
    pub total_connectors: usize,
    pub suppliers: usize,
    /// Users per role, in [`Role::ALL`] order
    pub users_by_role: Vec<(Role, usize)>,
}

impl DashboardStats {
    pub fn from_state(state: &AppState) -> Self {
        let users = state.store.users().records();
        Self {
            total_users: users.len(),
            total_connectors: state.store.connectors().len(),
            suppliers: state.supplier_options().len(),
            users_by_role: Role::ALL
                .iter()
                .map(|role| (*role, users.iter().filter(|u| u.role == *role).count()))
                .collect(),
        }
    }
}

/// Dashboard page component
#[component]
pub fn DashboardPage() -> Element {
    let mut state = use_app_state();
    let stats = DashboardStats::from_state(&state.read());

    rsx! {
        div {
            class: "page space-y-6",

            div {
                class: "card",
                h2 { class: "text-2xl font-bold mb-2", "Welcome to Yazaki Connector Manager" }
                p { class: "text-slate-400", "Manage your connectors and users efficiently from this dashboard." }
            }

            div {
                class: "stat-grid",

                StatCard {
                    icon: "👥",
                    value: stats.total_users,
                    label: "Total Users",
                    onclick: move |_| state.write().ui.navigate(Page::Users),
                }

                StatCard {
                    icon: "🔌",
                    value: stats.total_connectors,
                    label: "Total Connectors",
                    onclick: move |_| state.write().ui.navigate(Page::Connectors),
                }

                StatCard {
                    icon: "🏭",
                    value: stats.suppliers,
                    label: "Suppliers",
                    onclick: move |_| state.write().ui.navigate(Page::Connectors),
                }
            }

            div {
                class: "card",
                h3 { class: "font-medium mb-3", "Users by role" }
                div {
                    class: "flex items-center gap-6",
                    for (role, count) in stats.users_by_role.iter().copied() {
                        div {
                            key: "{role}",
                            span { class: "text-slate-400 mr-2", "{role}" }
                            span { class: "font-bold", "{count}" }
                        }
                    }
                }
            }
        }
    }
}

/// Clickable total card
#[component]
fn StatCard(
    icon: &'static str,
    value: usize,
    label: &'static str,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        button {
            class: "stat-card",
            onclick: move |e| onclick.call(e),
            span { class: "stat-icon", "{icon}" }
            div {
                class: "text-left",
                p { class: "text-3xl font-bold", "{value}" }
                p { class: "text-slate-400", "{label}" }
            }
        }
    }
}
