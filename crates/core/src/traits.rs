//! Core traits for Parts Admin
//!
//! This module defines the behaviors shared by both record types so that
//! the store, the list view and the edit form are written once.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::error::AdminResult;
use crate::types::EntityKind;

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Types implementing this trait can check their internal consistency
/// and return validation errors if the state is invalid.
///
/// # Example
///
/// ```rust,ignore
/// use parts_admin_core::{Validatable, AdminResult, AdminError};
///
/// struct Draft {
///     name: String,
/// }
///
/// impl Validatable for Draft {
///     fn validate(&self) -> AdminResult<()> {
///         if self.name.trim().is_empty() {
///             return Err(AdminError::InvalidDraft(vec!["Name is required".into()]));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or an `AdminError` describing the problem.
    fn validate(&self) -> AdminResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Get all validation errors (for types that can have multiple errors)
    fn validation_errors(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => vec![],
            Err(crate::AdminError::InvalidDraft(errors)) => errors,
            Err(e) => vec![e.to_string()],
        }
    }
}

// ============================================================================
// Record Trait
// ============================================================================

/// A stored record managed through the gateway
///
/// Implemented by both users and connectors. Identity is the backend
/// surrogate id; the natural key is for display only.
pub trait Record: Clone + PartialEq + Debug {
    /// Surrogate identifier type
    type Id: Copy + Eq + Hash + Debug + Display;

    /// Which record type this is
    const KIND: EntityKind;

    /// Surrogate id, if the backend has assigned one
    fn id(&self) -> Option<Self::Id>;

    /// User-meaningful key shown in tables and messages
    fn natural_key(&self) -> String;

    /// Text fields matched by the list search box
    fn search_fields(&self) -> Vec<&str>;

    /// Value compared against the list filter dropdown
    fn filter_value(&self) -> &str;
}
