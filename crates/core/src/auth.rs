//! Login gate for the dashboard
//!
//! A single hardcoded credential pair guards the shell. This is a
//! convenience gate, not a security boundary: the session token only lives
//! in memory for the lifetime of the process.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Credentials accepted by the login form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            email: "admin@yazaki.com".to_string(),
            password: "admin123".to_string(),
        }
    }
}

impl AdminCredentials {
    /// Check a username-or-email and password pair
    pub fn validate(&self, username_or_email: &str, password: &str) -> bool {
        let login = username_or_email.trim();
        (login == self.username || login.eq_ignore_ascii_case(&self.email))
            && password == self.password
    }

    /// Validate and open a session on success
    pub fn login(&self, username_or_email: &str, password: &str) -> Option<Session> {
        self.validate(username_or_email, password)
            .then(|| Session::new(username_or_email.trim()))
    }
}

/// An authenticated, in-memory session
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: Uuid,
    pub login: String,
    pub started_at: DateTime<Utc>,
}

impl Session {
    fn new(login: &str) -> Self {
        Self {
            token: Uuid::new_v4(),
            login: login.to_string(),
            started_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_or_email_accepted() {
        let creds = AdminCredentials::default();
        assert!(creds.validate("admin", "admin123"));
        assert!(creds.validate("admin@yazaki.com", "admin123"));
        assert!(creds.validate(" Admin@Yazaki.com ", "admin123"));
    }

    #[test]
    fn test_wrong_password_rejected() {
        let creds = AdminCredentials::default();
        assert!(!creds.validate("admin", "admin"));
        assert!(creds.login("someone", "admin123").is_none());
    }

    #[test]
    fn test_login_opens_distinct_sessions() {
        let creds = AdminCredentials::default();
        let a = creds.login("admin", "admin123").unwrap();
        let b = creds.login("admin", "admin123").unwrap();
        assert_eq!(a.login, "admin");
        assert_ne!(a.token, b.token);
    }
}
