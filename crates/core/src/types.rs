//! Core type definitions for Parts Admin
//!
//! This module contains the identifier newtypes, the user role enumeration
//! and the entity kind used to label records in logs, errors and the UI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AdminError;

// ============================================================================
// Identifier Types
// ============================================================================

/// Backend-assigned surrogate id of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

/// Backend-assigned surrogate id of a connector
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectorId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ConnectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(UserId)
            .map_err(|_| AdminError::identity(format!("'{}' is not a user id", s)))
    }
}

impl FromStr for ConnectorId {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(ConnectorId)
            .map_err(|_| AdminError::identity(format!("'{}' is not a connector id", s)))
    }
}

// ============================================================================
// Role
// ============================================================================

/// Role of a dashboard user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access
    Admin,
    /// Manages records
    Manager,
    /// Baseline role assigned when none is given
    #[default]
    User,
}

impl Role {
    /// All roles in display order
    pub const ALL: [Role; 3] = [Role::Admin, Role::Manager, Role::User];

    /// The role assigned when a record carries none
    pub const BASELINE: Role = Role::User;

    /// Wire representation (lowercase)
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::User => "user",
        }
    }

    /// Human-friendly name
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::User => "User",
        }
    }

    /// Resolve an optional, loosely-cased role string.
    ///
    /// Absent or blank values fall back to [`Role::BASELINE`].
    pub fn from_optional(value: Option<&str>) -> Result<Role, AdminError> {
        match value.map(str::trim) {
            None | Some("") => Ok(Role::BASELINE),
            Some(s) => s.parse(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "user" => Ok(Role::User),
            other => Err(AdminError::format(format!("unknown role '{}'", other))),
        }
    }
}

// ============================================================================
// Entity Kind
// ============================================================================

/// The two record types managed by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    User,
    Connector,
}

impl EntityKind {
    /// REST collection path segment
    pub fn collection(&self) -> &'static str {
        match self {
            EntityKind::User => "users",
            EntityKind::Connector => "connectors",
        }
    }

    /// Singular display label
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Connector => "connector",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Tests
// ============================================================================
