//! # Parts Admin Core
//!
//! Core types, traits, and error handling for Parts Admin.
//!
//! This crate provides the foundational building blocks used throughout
//! the workspace, including:
//!
//! - **Types**: Surrogate id newtypes, user roles, entity kinds
//! - **Traits**: `Record` (shared record behavior) and `Validatable`
//! - **Errors**: Unified error handling with `AdminError` and `AdminResult`
//! - **Auth**: The dashboard login gate
//!

pub mod auth;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use auth::{AdminCredentials, Session};
pub use error::{AdminError, AdminResult, excerpt};
pub use traits::{Record, Validatable};
pub use types::{ConnectorId, EntityKind, Role, UserId};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
