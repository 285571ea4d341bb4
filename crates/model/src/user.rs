//! User records
//!
//! The UI shape of a dashboard user plus the draft edited by the user form.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use parts_admin_core::{AdminError, AdminResult, EntityKind, Record, Role, UserId, Validatable};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::form::Draftable;

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

/// Check an email address against a permissive `local@domain.tld` shape
pub fn is_valid_email(email: &str) -> bool {
    match EMAIL_PATTERN.as_ref() {
        Some(re) => re.is_match(email.trim()),
        None => email.contains('@'),
    }
}

// ============================================================================
// User
// ============================================================================

/// A dashboard user as shown in the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend-assigned id
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Access role, baseline when the backend sends none
    #[serde(default)]
    pub role: Role,

    /// Creation timestamp assigned by the backend
    pub created_at: DateTime<Utc>,
}

impl Record for User {
    type Id = UserId;

    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> Option<UserId> {
        Some(self.id)
    }

    fn natural_key(&self) -> String {
        self.email.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }

    fn filter_value(&self) -> &str {
        self.role.as_str()
    }
}

// ============================================================================
// User Draft
// ============================================================================

/// Editable fields of a user, used for both create and update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,

    /// `None` lets the backend assign the baseline role
    #[serde(default)]
    pub role: Option<Role>,
}

impl UserDraft {
    /// Create a draft from name and email
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: None,
        }
    }

    /// Builder method to set the role
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Role that will be stored for this draft
    pub fn effective_role(&self) -> Role {
        self.role.unwrap_or(Role::BASELINE)
    }

    /// Draft with surrounding whitespace removed
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            role: self.role,
        }
    }
}

impl Validatable for UserDraft {
    fn validate(&self) -> AdminResult<()> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push("Name is required".to_string());
        }

        if self.email.trim().is_empty() {
            errors.push("Email is required".to_string());
        } else if !is_valid_email(&self.email) {
            errors.push(format!("'{}' is not a valid email", self.email.trim()));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AdminError::InvalidDraft(errors))
        }
    }
}

impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: Some(user.role),
        }
    }
}

impl Draftable for User {
    type Draft = UserDraft;

    fn to_draft(&self) -> UserDraft {
        UserDraft::from(self)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> User {
        User {
            id: UserId(3),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            role: Role::Manager,
            created_at: "2024-01-15T10:30:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_user_ui_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["name"], "Jane Doe");
        assert_eq!(json["role"], "manager");
        assert_eq!(json["createdAt"], "2024-01-15T10:30:00Z");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_missing_role_is_baseline() {
        let user: User = serde_json::from_str(
            r#"{"id":1,"name":"A","email":"a@b.co","createdAt":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn test_draft_validation() {
        assert!(UserDraft::new("Jane", "jane@example.com").is_valid());

        let errors = UserDraft::new("  ", "").validation_errors();
        assert_eq!(errors, vec!["Name is required", "Email is required"]);

        let errors = UserDraft::new("Jane", "not-an-email").validation_errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("not-an-email"));
    }

    #[test]
    fn test_draft_from_user() {
        let draft = sample().to_draft();
        assert_eq!(draft.name, "Jane Doe");
        assert_eq!(draft.role, Some(Role::Manager));
        assert_eq!(UserDraft::new("a", "b").effective_role(), Role::BASELINE);
    }

    #[test]
    fn test_record_fields() {
        let user = sample();
        assert_eq!(user.id(), Some(UserId(3)));
        assert_eq!(user.filter_value(), "manager");
        assert_eq!(user.search_fields(), vec!["Jane Doe", "jane@example.com"]);
    }
}
