//! Backend wire shapes and the field mapping to UI shapes
//!
//! The backend speaks snake_case (`full_name`, `yazaki_pn`) while the UI
//! uses its own names (`name`, `yazakiPN`). Every rename lives here, once
//! per entity, so that create, update and list all convert the same way.
//!
//! | UI (`User`)  | Backend (`BackendUser`) |
//! |--------------|-------------------------|
//! | `id`         | `id`                    |
//! | `name`       | `full_name`             |
//! | `email`      | `email`                 |
//! | `role`       | `role`                  |
//! | `createdAt`  | `created_at`            |
//!
//! Connector renames: `yazakiPN`/`yazaki_pn`, `customerPN`/`customer_pn`,
//! `supplierPN`/`supplier_pn`, `supplierName`/`supplier_name`. All other
//! connector fields pass through with the same name.

use chrono::{DateTime, Utc};
use parts_admin_core::{AdminError, AdminResult, ConnectorId, Role, UserId};
use serde::{Deserialize, Serialize};

use crate::connector::Connector;
use crate::user::{User, UserDraft};

/// UI field name to backend field name, for users
pub const USER_FIELD_MAP: &[(&str, &str)] = &[
    ("id", "id"),
    ("name", "full_name"),
    ("email", "email"),
    ("role", "role"),
    ("createdAt", "created_at"),
];

/// UI field name to backend field name, for connectors
pub const CONNECTOR_FIELD_MAP: &[(&str, &str)] = &[
    ("id", "id"),
    ("yazakiPN", "yazaki_pn"),
    ("customerPN", "customer_pn"),
    ("supplierPN", "supplier_pn"),
    ("supplierName", "supplier_name"),
    ("name", "name"),
    ("price", "price"),
    ("drawing_2d_path", "drawing_2d_path"),
    ("model_3d_path", "model_3d_path"),
    ("image_path", "image_path"),
];

/// Translate a UI field name to its backend name
pub fn backend_field<'a>(map: &'a [(&'a str, &'a str)], ui_name: &str) -> Option<&'a str> {
    map.iter().find(|(ui, _)| *ui == ui_name).map(|(_, be)| *be)
}

/// Translate a backend field name to its UI name
pub fn ui_field<'a>(map: &'a [(&'a str, &'a str)], backend_name: &str) -> Option<&'a str> {
    map.iter().find(|(_, be)| *be == backend_name).map(|(ui, _)| *ui)
}

// ============================================================================
// Users
// ============================================================================

/// A user as the backend returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendUser {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of a user create or update request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendUserPayload {
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub role: Option<String>,
}

impl TryFrom<BackendUser> for User {
    type Error = AdminError;

    fn try_from(be: BackendUser) -> AdminResult<Self> {
        Ok(User {
            id: UserId(be.id),
            name: be.full_name,
            email: be.email,
            role: Role::from_optional(be.role.as_deref())?,
            created_at: be.created_at,
        })
    }
}

impl From<&User> for BackendUser {
    fn from(user: &User) -> Self {
        BackendUser {
            id: user.id.0,
            full_name: user.name.clone(),
            email: user.email.clone(),
            role: Some(user.role.as_str().to_string()),
            created_at: user.created_at,
        }
    }
}

impl From<&UserDraft> for BackendUserPayload {
    fn from(draft: &UserDraft) -> Self {
        let draft = draft.normalized();
        BackendUserPayload {
            full_name: draft.name,
            email: draft.email,
            role: draft.role.map(|r| r.as_str().to_string()),
        }
    }
}

// ============================================================================
// Connectors
// ============================================================================

/// A connector as the backend returns and accepts it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConnector {
    #[serde(default)]
    pub id: Option<i64>,
    pub yazaki_pn: String,
    pub customer_pn: String,
    pub supplier_pn: String,
    pub supplier_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub drawing_2d_path: Option<String>,
    #[serde(default)]
    pub model_3d_path: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
}

impl TryFrom<BackendConnector> for Connector {
    type Error = AdminError;

    fn try_from(be: BackendConnector) -> AdminResult<Self> {
        if let Some(price) = be.price.filter(|p| *p < 0.0) {
            return Err(AdminError::format(format!(
                "connector '{}' has negative price {}",
                be.yazaki_pn, price
            )));
        }

        Ok(Connector {
            id: be.id.map(ConnectorId),
            yazaki_pn: be.yazaki_pn,
            customer_pn: be.customer_pn,
            supplier_pn: be.supplier_pn,
            supplier_name: be.supplier_name,
            name: be.name,
            price: be.price,
            drawing_2d_path: be.drawing_2d_path,
            model_3d_path: be.model_3d_path,
            image_path: be.image_path,
        })
    }
}

impl From<&Connector> for BackendConnector {
    fn from(c: &Connector) -> Self {
        BackendConnector {
            id: c.id.map(|id| id.0),
            yazaki_pn: c.yazaki_pn.clone(),
            customer_pn: c.customer_pn.clone(),
            supplier_pn: c.supplier_pn.clone(),
            supplier_name: c.supplier_name.clone(),
            name: c.name.clone(),
            price: c.price,
            drawing_2d_path: c.drawing_2d_path.clone(),
            model_3d_path: c.model_3d_path.clone(),
            image_path: c.image_path.clone(),
        }
    }
}

/// Convert a list of backend rows, failing on the first bad row
pub fn users_from_backend(rows: Vec<BackendUser>) -> AdminResult<Vec<User>> {
    rows.into_iter().map(User::try_from).collect()
}

/// Convert a list of backend rows, failing on the first bad row
pub fn connectors_from_backend(rows: Vec<BackendConnector>) -> AdminResult<Vec<Connector>> {
    rows.into_iter().map(Connector::try_from).collect()
}

// ============================================================================
// Tests
// ============================================================================
