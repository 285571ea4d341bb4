//! # Parts Admin UI
//!
//! Dioxus Desktop UI for Parts Admin.
//!
//! ## Features
//!
//! - Login gate in front of the dashboard
//! - Dashboard with record totals
//! - User and connector lists with search, filter and pagination
//! - Create/edit dialogs, including connector attachments
//!
//! The [`AdminService`] is handed to [`launch`] and reaches components as
//! context; the application state is provided by [`App`].
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod file_ops;
pub mod hooks;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

pub use app::App;
pub use hooks::{use_admin_service, use_app_state};
pub use state::{AppState, DeleteTarget, Dialog, Page, StatusLevel, StatusMessage, UiState};

use parts_admin_gateway::{AdminService, SharedGateway};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Parts Admin";

/// Application display title
pub const TITLE: &str = "Yazaki Connector Manager";

/// CSS styles for the application
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Parts Admin desktop application against `gateway`
///
/// # Example
///
/// ```rust,ignore
/// let gateway = parts_admin_gateway::connect(&GatewayConfig::from_env()?)?;
/// parts_admin_ui::launch(gateway);
/// ```
pub fn launch(gateway: SharedGateway) {
    tracing::info!(source = %gateway.describe(), "Starting {} v{}", NAME, VERSION);

    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 820.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(800.0, 600.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .with_context(AdminService::new(gateway))
        .launch(App);
}

/// Get the embedded CSS styles
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_styles_cover_shell() {
        let styles = get_styles();
        for class in [".sidebar", ".data-table", ".dialog-overlay", ".status-bar", ".badge-admin"] {
            assert!(styles.contains(class), "missing {}", class);
        }
    }
}
