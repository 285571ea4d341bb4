//! # UI Components
//!
//! Reusable Dioxus components for the Parts Admin dashboard.
//!
//! ## Component Hierarchy
//!
//! ```text
//! List pages
//! ├── SearchInput / Select (toolbar)
//! ├── RoleBadge, Thumbnail (table cells)
//! └── Pagination (footer)
//!
//! Dialogs
//! ├── UserDialog (create/edit users)
//! ├── ConnectorDialog (create/edit connectors, attachments)
//! └── ConfirmDeleteDialog (delete confirmation)
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod cells;
pub mod dialogs;
pub mod inputs;
pub mod pagination;

// ============================================================================
// Re-exports
// ============================================================================

pub use cells::{EmptyRow, RoleBadge, RowActions, Thumbnail};
pub use dialogs::{ConfirmDeleteDialog, ConnectorDialog, UserDialog};
pub use inputs::{SearchInput, Select, SelectOption, TextInput};
pub use pagination::Pagination;
