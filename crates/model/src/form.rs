//! Create/edit form state
//!
//! An [`EditForm`] owns the draft of one record, whether it is creating or
//! editing, and the pending submit. Submits are ticketed: the caller takes a
//! [`SubmitTicket`] from [`EditForm::begin_submit`], runs the gateway call,
//! and hands the result back with the same ticket. A ticket issued before
//! the form was closed or reopened produces [`Completion::Stale`] and does
//! not touch the form.

use parts_admin_core::{AdminError, AdminResult, Record, Validatable};

/// A record type that can be edited through an [`EditForm`]
pub trait Draftable: Record {
    /// Editable representation of the record
    type Draft: Validatable + Clone + PartialEq + Default + std::fmt::Debug;

    /// Prefill a draft from a stored record
    fn to_draft(&self) -> Self::Draft;

    /// Undo edits to fields that are fixed once the record exists
    fn lock_key(&self, _draft: &mut Self::Draft) {}
}

/// Proof that a submit was started, tied to one form session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket {
    session: u64,
}

/// Outcome of handing a submit result back to the form
#[derive(Debug, Clone, PartialEq)]
pub enum Completion<T> {
    /// The backend accepted the draft; the form is closed
    Saved(T),
    /// The submit failed; the form stays open with the message shown
    Failed(String),
    /// The form was closed or reopened meanwhile; the result was ignored
    Stale,
}

// ============================================================================
// Edit Form
// ============================================================================

/// Form state for creating or editing one record
#[derive(Debug, Clone, PartialEq)]
pub struct EditForm<T: Draftable> {
    draft: T::Draft,
    original: Option<T>,
    session: u64,
    open: bool,
    pending: bool,
    error: Option<String>,
}

impl<T: Draftable> Default for EditForm<T> {
    fn default() -> Self {
        Self {
            draft: T::Draft::default(),
            original: None,
            session: 0,
            open: false,
            pending: false,
            error: None,
        }
    }
}

impl<T: Draftable> EditForm<T> {
    /// A closed form
    pub fn new() -> Self {
        Self::default()
    }

    /// An open form: create mode for `None`, edit mode prefilled otherwise
    pub fn open_for(record: Option<&T>) -> Self {
        let mut form = Self::new();
        form.reopen(record);
        form
    }

    /// Open the form again, invalidating any submit still in flight
    pub fn reopen(&mut self, record: Option<&T>) {
        self.session += 1;
        self.draft = record.map(T::to_draft).unwrap_or_default();
        self.original = record.cloned();
        self.open = true;
        self.pending = false;
        self.error = None;
    }

    /// Close the form, invalidating any submit still in flight
    pub fn close(&mut self) {
        self.session += 1;
        self.open = false;
        self.pending = false;
        self.error = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> &T::Draft {
        &self.draft
    }

    /// Mutable access for input handlers
    pub fn draft_mut(&mut self) -> &mut T::Draft {
        &mut self.draft
    }

    /// Record being edited, `None` in create mode
    pub fn original(&self) -> Option<&T> {
        self.original.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.original.is_some()
    }

    /// Whether the natural key input must be read-only
    pub fn is_key_locked(&self) -> bool {
        self.is_editing()
    }

    /// Surrogate id of the record being edited
    pub fn identity(&self) -> Option<T::Id> {
        self.original.as_ref().and_then(T::id)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Error shown at the top of the form
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the submit control should be enabled
    ///
    /// An invalid draft still submits so that [`begin_submit`](Self::begin_submit)
    /// can report what is missing.
    pub fn can_submit(&self) -> bool {
        self.open && !self.pending
    }

    /// Start a submit
    ///
    /// Fails with [`AdminError::SubmitInProgress`] while another submit is
    /// pending and with [`AdminError::InvalidDraft`] when the draft does not
    /// validate. On success the returned draft is the one to send.
    pub fn begin_submit(&mut self) -> AdminResult<(SubmitTicket, T::Draft)> {
        if !self.open {
            return Err(AdminError::internal("form is not open"));
        }
        if self.pending {
            return Err(AdminError::SubmitInProgress);
        }
        if let Some(original) = &self.original {
            original.lock_key(&mut self.draft);
        }
        if let Err(e) = self.draft.validate() {
            self.error = Some(e.to_string());
            return Err(e);
        }

        self.pending = true;
        self.error = None;
        Ok((
            SubmitTicket {
                session: self.session,
            },
            self.draft.clone(),
        ))
    }

    /// Hand back the result of the submit started with `ticket`
    pub fn finish(&mut self, ticket: SubmitTicket, result: AdminResult<T>) -> Completion<T> {
        if !self.open || ticket.session != self.session {
            return Completion::Stale;
        }

        self.pending = false;
        match result {
            Ok(record) => {
                self.close();
                Completion::Saved(record)
            }
            Err(e) => {
                let message = e.to_string();
                self.error = Some(message.clone());
                Completion::Failed(message)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::Connector;
    use crate::user::User;
    use parts_admin_core::{ConnectorId, Role, UserId};
    use pretty_assertions::assert_eq;

    fn acme() -> Connector {
        Connector::new("A1", "C1", "S1", "Acme").with_id(1)
    }

    #[test]
    fn test_create_mode_starts_empty() {
        let form = EditForm::<Connector>::open_for(None);
        assert!(form.is_open());
        assert!(!form.is_editing());
        assert!(!form.is_key_locked());
        assert_eq!(form.identity(), None);
        assert!(form.can_submit());
    }

    #[test]
    fn test_edit_mode_prefills_and_locks_key() {
        let mut form = EditForm::open_for(Some(&acme()));
        assert!(form.is_key_locked());
        assert_eq!(form.identity(), Some(ConnectorId(1)));
        assert_eq!(form.draft().supplier_name, "Acme");

        form.draft_mut().yazaki_pn = "OTHER".to_string();
        let (_, draft) = form.begin_submit().unwrap();
        assert_eq!(draft.yazaki_pn, "A1");
    }

    #[test]
    fn test_second_submit_rejected_while_pending() {
        let mut form = EditForm::open_for(Some(&acme()));
        let (ticket, _) = form.begin_submit().unwrap();
        assert!(form.is_pending());
        assert!(!form.can_submit());
        assert!(matches!(
            form.begin_submit(),
            Err(AdminError::SubmitInProgress)
        ));

        let saved = acme().with_price(5.0);
        assert_eq!(
            form.finish(ticket, Ok(saved.clone())),
            Completion::Saved(saved)
        );
        assert!(!form.is_open());
    }

    #[test]
    fn test_failure_keeps_form_open_with_message() {
        let mut form = EditForm::open_for(Some(&acme()));
        let (ticket, _) = form.begin_submit().unwrap();
        let completion = form.finish(
            ticket,
            Err(AdminError::validation("Yazaki PN already exists")),
        );

        assert_eq!(
            completion,
            Completion::Failed("Rejected by backend: Yazaki PN already exists".to_string())
        );
        assert!(form.is_open());
        assert!(!form.is_pending());
        assert_eq!(
            form.error(),
            Some("Rejected by backend: Yazaki PN already exists")
        );
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_result_after_close_is_stale() {
        let mut form = EditForm::open_for(Some(&acme()));
        let (ticket, _) = form.begin_submit().unwrap();
        form.close();
        assert_eq!(form.finish(ticket, Ok(acme())), Completion::Stale);
    }

    #[test]
    fn test_result_after_reopen_is_stale() {
        let mut form = EditForm::open_for(Some(&acme()));
        let (ticket, _) = form.begin_submit().unwrap();
        let other = Connector::new("B1", "C", "S", "Beta").with_id(2);
        form.reopen(Some(&other));

        assert_eq!(
            form.finish(ticket, Err(AdminError::transport("refused"))),
            Completion::Stale
        );
        assert_eq!(form.error(), None);
        assert_eq!(form.draft().yazaki_pn, "B1");
    }

    #[test]
    fn test_invalid_draft_sets_error() {
        let mut form = EditForm::<User>::open_for(None);
        assert!(form.can_submit());

        let err = form.begin_submit().unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            form.error(),
            Some("Invalid input: Name is required; Email is required")
        );
        assert!(!form.is_pending());
        assert!(form.can_submit());
    }

    #[test]
    fn test_user_form_round_trip() {
        let user = User {
            id: UserId(2),
            name: "Jane".to_string(),
            email: "jane@x.io".to_string(),
            role: Role::Admin,
            created_at: chrono::Utc::now(),
        };
        let mut form = EditForm::open_for(Some(&user));
        form.draft_mut().role = Some(Role::Manager);
        let (_, draft) = form.begin_submit().unwrap();
        assert_eq!(draft.role, Some(Role::Manager));
        assert_eq!(form.identity(), Some(UserId(2)));
    }
}
