//! Main Application Component for Parts Admin
//!
//! The root component provides the application state and shows either the
//! login page or the shell: sidebar, top bar, the active page, the status
//! bar and the dialog overlay.

use dioxus::prelude::*;

use crate::components::dialogs::{ConfirmDeleteDialog, ConnectorDialog, UserDialog};
use crate::hooks::{use_admin_service, use_app_state, use_refresh};
use crate::pages::{ConnectorsPage, DashboardPage, LoginPage, UsersPage};
use crate::state::{AppState, Dialog, Page, StatusLevel};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    let state = use_context_provider(|| Signal::new(AppState::new()));

    use_effect(|| {
        tracing::info!("Parts Admin UI initialized");
    });

    let logged_in = state.read().is_logged_in();

    rsx! {
        if logged_in {
            Shell {}
        } else {
            LoginPage {}
        }
    }
}

/// Dashboard shell, mounted once per login
#[component]
fn Shell() -> Element {
    let refresh = use_refresh();

    // Load records once when the shell opens
    use_hook(move || refresh.call(()));

    rsx! {
        div {
            class: "app-container h-screen w-screen flex overflow-hidden",

            Sidebar {}

            div {
                class: "flex flex-col flex-1 overflow-hidden",
                TopBar {}
                MainContent {}
                StatusBar {}
            }

            DialogOverlay {}
        }
    }
}

// ============================================================================
// Top Bar Component
// ============================================================================

/// Page title, data source and refresh
#[component]
fn TopBar() -> Element {
    let state = use_app_state();
    let service = use_admin_service();
    let refresh = use_refresh();

    let s = state.read();
    let title = s.ui.active_page.display_name();
    let login = s.session.as_ref().map(|session| session.login.clone()).unwrap_or_default();
    let loading = s.loading;
    drop(s);

    let source = service.gateway().describe();

    rsx! {
        header {
            class: "top-bar flex items-center gap-4",

            h1 { class: "text-lg font-semibold", "{title}" }

            // Spacer
            div { class: "flex-1" }

            span { class: "text-xs text-slate-400", title: "Data source", "{source}" }

            button {
                class: "btn btn-small btn-secondary",
                disabled: loading,
                title: "Reload users and connectors",
                onclick: move |_| refresh.call(()),
                if loading { "Loading..." } else { "⟳ Refresh" }
            }

            span { class: "text-sm text-slate-300", "👤 {login}" }
        }
    }
}

// ============================================================================
// Sidebar Component
// ============================================================================

/// Left sidebar with navigation
#[component]
fn Sidebar() -> Element {
    let mut state = use_app_state();

    let s = state.read();
    let collapsed = s.ui.sidebar_collapsed;
    let current_page = s.ui.active_page;
    drop(s);

    rsx! {
        aside {
            class: "sidebar flex flex-col shrink-0",
            style: if collapsed { "width: 60px;" } else { "width: 220px;" },

            // Header with toggle button
            div {
                class: "sidebar-header flex items-center justify-between",

                if !collapsed {
                    span { class: "font-semibold", "Yazaki Admin" }
                }

                button {
                    class: "icon-button",
                    title: if collapsed { "Expand sidebar" } else { "Collapse sidebar" },
                    onclick: move |_| state.write().ui.toggle_sidebar(),
                    if collapsed { "☰" } else { "✕" }
                }
            }

            nav {
                class: "flex-1 py-4",
                for page in Page::ALL {
                    SidebarItem {
                        key: "{page:?}",
                        page: page,
                        current: current_page,
                        collapsed: collapsed,
                    }
                }
            }

            div {
                class: "sidebar-footer",
                button {
                    class: "sidebar-item",
                    title: "Logout",
                    onclick: move |_| state.write().logout(),
                    span { class: "sidebar-icon", "🚪" }
                    if !collapsed {
                        span { "Logout" }
                    }
                }
            }
        }
    }
}

/// Sidebar navigation item
#[component]
fn SidebarItem(page: Page, current: Page, collapsed: bool) -> Element {
    let mut state = use_app_state();
    let icon = page.icon();
    let name = page.display_name();
    let class = if page == current {
        "sidebar-item sidebar-item-active"
    } else {
        "sidebar-item"
    };

    rsx! {
        button {
            class: class,
            title: "{name}",
            onclick: move |_| state.write().ui.navigate(page),
            span { class: "sidebar-icon", "{icon}" }
            if !collapsed {
                span { "{name}" }
            }
        }
    }
}

// ============================================================================
// Main Content Component
// ============================================================================

/// Main content area that renders the active page
#[component]
fn MainContent() -> Element {
    let state = use_app_state();
    let current_page = state.read().ui.active_page;

    rsx! {
        main {
            class: "flex-1 overflow-auto",

            match current_page {
                Page::Dashboard => rsx! { DashboardPage {} },
                Page::Users => rsx! { UsersPage {} },
                Page::Connectors => rsx! { ConnectorsPage {} },
            }
        }
    }
}

// ============================================================================
// Status Bar Component
// ============================================================================

/// Bottom status bar
#[component]
fn StatusBar() -> Element {
    let state = use_app_state();

    let s = state.read();
    let status = s.ui.status_message.clone();
    let user_count = s.store.users().len();
    let connector_count = s.store.connectors().len();
    drop(s);

    rsx! {
        footer {
            class: "status-bar flex items-center text-xs",

            if let Some(msg) = status {
                span {
                    class: match msg.level {
                        StatusLevel::Info => "text-slate-400",
                        StatusLevel::Success => "text-green-400",
                        StatusLevel::Warning => "text-amber-400",
                        StatusLevel::Error => "text-red-400",
                    },
                    "{msg.text}"
                }
            } else {
                span { "Ready" }
            }

            // Spacer
            div { class: "flex-1" }

            div {
                class: "flex items-center gap-4 text-slate-400",
                span { "Users: {user_count}" }
                span { "Connectors: {connector_count}" }
            }
        }
    }
}

// ============================================================================
// Dialog Overlay Component
// ============================================================================

/// Modal dialog overlay
#[component]
fn DialogOverlay() -> Element {
    let mut state = use_app_state();
    let dialog = state.read().ui.active_dialog.clone();

    let Some(dialog) = dialog else {
        return rsx! {};
    };

    let width = match &dialog {
        Dialog::ConnectorForm => "dialog-wide",
        _ => "dialog-narrow",
    };

    rsx! {
        div {
            class: "dialog-overlay",

            // Backdrop
            div {
                class: "dialog-backdrop",
                onclick: move |_| state.write().close_dialog(),
            }

            // Dialog content
            div {
                class: "dialog {width}",
                onclick: move |e| e.stop_propagation(),

                match dialog {
                    Dialog::UserForm => rsx! { UserDialog {} },
                    Dialog::ConnectorForm => rsx! { ConnectorDialog {} },
                    Dialog::ConfirmDelete(target) => rsx! {
                        ConfirmDeleteDialog { target: target }
                    },
                }
            }
        }
    }
}
