//! Application State Management for Parts Admin
//!
//! One [`AppState`] value lives in a Dioxus `Signal` provided as context by
//! the root component. It owns the entity store, the list queries of both
//! pages, the two edit forms and the shell's UI state. Components read it
//! through [`crate::hooks::use_app_state`]; nothing is kept in a global.
//!
//! Async work follows one shape: take what the request needs out of the
//! state, run the service call in a spawned task, then hand the result back
//! to one of the `finish_*` methods here, which decide whether and how the
//! store is reconciled.

use parts_admin_core::{AdminCredentials, AdminError, AdminResult, Session};
use parts_admin_gateway::{Outcome, Refresh};
use parts_admin_model::{
    Completion, Connector, EditForm, EntityStore, ListPage, ListQuery, SubmitTicket, User,
    distinct_values, view,
};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

// ============================================================================
// Page Navigation
// ============================================================================

/// Application pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Totals overview
    #[default]
    Dashboard,
    /// User list
    Users,
    /// Connector list
    Connectors,
}

impl Page {
    /// Pages in sidebar order
    pub const ALL: [Page; 3] = [Page::Dashboard, Page::Users, Page::Connectors];

    /// Get the display name for this page
    pub fn display_name(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Users => "Users",
            Page::Connectors => "Connectors",
        }
    }

    /// Get the icon for this page
    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "📊",
            Page::Users => "👥",
            Page::Connectors => "🔌",
        }
    }
}

// ============================================================================
// UI State
// ============================================================================

/// Shell state (navigation, dialogs, status bar)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    /// Whether the sidebar is collapsed
    pub sidebar_collapsed: bool,
    /// Currently active page
    pub active_page: Page,
    /// Active dialog (if any)
    pub active_dialog: Option<Dialog>,
    /// Status bar message
    pub status_message: Option<StatusMessage>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigate to a page
    pub fn navigate(&mut self, page: Page) {
        self.active_page = page;
    }

    pub fn show_dialog(&mut self, dialog: Dialog) {
        self.active_dialog = Some(dialog);
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = None;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            level,
        });
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }
}

/// Modal dialogs
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    /// Create or edit a user; the form state lives in [`AppState::user_form`]
    UserForm,
    /// Create or edit a connector
    ConnectorForm,
    /// Confirm a delete
    ConfirmDelete(DeleteTarget),
}

/// Record a delete dialog is asking about
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteTarget {
    User(User),
    Connector(Connector),
}

impl DeleteTarget {
    /// Whether both point at the same stored record
    pub fn same_record(&self, other: &DeleteTarget) -> bool {
        match (self, other) {
            (DeleteTarget::User(a), DeleteTarget::User(b)) => a.id == b.id,
            (DeleteTarget::Connector(a), DeleteTarget::Connector(b)) => {
                a.id.is_some() && a.id == b.id
            }
            _ => false,
        }
    }
}

/// Status bar message
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// Status message severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

// ============================================================================
// Delete State
// ============================================================================

/// Progress of the delete dialog
///
/// Outlives the dialog: closing it while a request runs keeps the request
/// marked in flight so a second one cannot start.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteState {
    /// Record whose delete request is in flight
    pub in_flight: Option<DeleteTarget>,
    /// Message from the last failed attempt
    pub error: Option<String>,
}

impl DeleteState {
    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }
}

// ============================================================================
// App State
// ============================================================================

/// Complete application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Accepted login pair
    pub credentials: AdminCredentials,
    /// Open session, `None` shows the login screen
    pub session: Option<Session>,
    /// Message from the last failed login
    pub login_error: Option<String>,
    /// Last-known-good records
    pub store: EntityStore,
    /// Search, filter and page of the users page
    pub user_query: ListQuery,
    /// Search, filter and page of the connectors page
    pub connector_query: ListQuery,
    pub user_form: EditForm<User>,
    pub connector_form: EditForm<Connector>,
    pub delete: DeleteState,
    /// A refresh is in flight
    pub loading: bool,
    pub ui: UiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_credentials(AdminCredentials::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(credentials: AdminCredentials) -> Self {
        Self {
            credentials,
            session: None,
            login_error: None,
            store: EntityStore::new(),
            user_query: ListQuery::new(),
            connector_query: ListQuery::new(),
            user_form: EditForm::new(),
            connector_form: EditForm::new(),
            delete: DeleteState::default(),
            loading: false,
            ui: UiState::new(),
        }
    }

    // ------------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------------

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    /// Token of the open session, used to drop results that outlive a logout
    pub fn session_token(&self) -> Option<Uuid> {
        self.session.as_ref().map(|s| s.token)
    }

    /// Try to log in; returns whether the shell should open
    pub fn login(&mut self, username_or_email: &str, password: &str) -> bool {
        match self.credentials.login(username_or_email, password) {
            Some(session) => {
                info!(login = %session.login, "Logged in");
                self.session = Some(session);
                self.login_error = None;
                self.ui = UiState::new();
                true
            }
            None => {
                warn!("Rejected login attempt");
                self.login_error = Some("Invalid username/email or password".to_string());
                false
            }
        }
    }

    /// Close the session and forget everything loaded under it
    pub fn logout(&mut self) {
        info!("Logged out");
        *self = Self::with_credentials(self.credentials.clone());
    }

    // ------------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------------

    /// Visible page of the users list
    pub fn user_page(&self) -> ListPage<User> {
        view(self.store.users().records(), &self.user_query)
    }

    /// Visible page of the connectors list
    pub fn connector_page(&self) -> ListPage<Connector> {
        view(self.store.connectors().records(), &self.connector_query)
    }

    /// Supplier names for the connector filter dropdown
    pub fn supplier_options(&self) -> Vec<String> {
        distinct_values(self.store.connectors().records())
    }

    // ------------------------------------------------------------------------
    // Dialogs
    // ------------------------------------------------------------------------

    /// Open the user form, blank when `user` is `None`
    pub fn open_user_form(&mut self, user: Option<&User>) {
        self.user_form.reopen(user);
        self.ui.show_dialog(Dialog::UserForm);
    }

    /// Open the connector form, blank when `connector` is `None`
    pub fn open_connector_form(&mut self, connector: Option<&Connector>) {
        self.connector_form.reopen(connector);
        self.ui.show_dialog(Dialog::ConnectorForm);
    }

    pub fn confirm_delete(&mut self, target: DeleteTarget) {
        self.delete.error = None;
        self.ui.show_dialog(Dialog::ConfirmDelete(target));
    }

    /// Close whatever dialog is open
    ///
    /// Closing a form invalidates its pending submit ticket; the request
    /// keeps running but its result no longer reaches the form.
    pub fn close_dialog(&mut self) {
        match self.ui.active_dialog {
            Some(Dialog::UserForm) => self.user_form.close(),
            Some(Dialog::ConnectorForm) => self.connector_form.close(),
            Some(Dialog::ConfirmDelete(_)) => self.delete.error = None,
            None => {}
        }
        self.ui.close_dialog();
    }

    // ------------------------------------------------------------------------
    // Reconciliation
    // ------------------------------------------------------------------------

    /// Whether a result started under `token` may still be applied
    pub fn accepts(&self, token: Option<Uuid>) -> bool {
        token.is_some() && token == self.session_token()
    }

    /// Apply a confirmed outcome to the store
    ///
    /// Either the whole outcome lands or the store is left as it was and the
    /// failure is reported.
    pub fn reconcile(&mut self, outcome: Outcome) {
        let message = outcome.message();
        match outcome.apply(&mut self.store) {
            Ok(()) => {
                self.clamp_pages();
                info!(revision = self.store.revision(), "{}", message);
                self.ui.set_status(message, StatusLevel::Success);
            }
            Err(e) => self.report("Could not apply changes", &e),
        }
    }

    /// Show an error in the status bar
    pub fn report(&mut self, context: &str, err: &AdminError) {
        error!(error = %err, "{}", context);
        self.ui
            .set_status(format!("{}: {}", context, err), StatusLevel::Error);
    }

    /// Keep both lists on a page that still exists after records went away
    fn clamp_pages(&mut self) {
        let users = self.user_page().total_pages.max(1);
        if self.user_query.page() > users {
            self.user_query.set_page(users);
        }
        let connectors = self.connector_page().total_pages.max(1);
        if self.connector_query.page() > connectors {
            self.connector_query.set_page(connectors);
        }
    }

    /// Mark a refresh as started; `false` when one is already running
    pub fn begin_refresh(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.ui.set_status("Loading records...", StatusLevel::Info);
        true
    }

    /// Apply whatever a refresh loaded and report what it could not
    pub fn finish_refresh(&mut self, token: Option<Uuid>, refresh: Refresh) {
        if !self.accepts(token) {
            debug!("Dropping refresh result from a closed session");
            return;
        }
        self.loading = false;
        let (outcome, failures) = refresh.split();
        if let Some(outcome) = outcome {
            self.reconcile(outcome);
        }
        if failures.is_empty() {
            return;
        }
        let text = failures
            .iter()
            .map(|(what, e)| {
                error!(error = %e, "Could not load {}", what);
                format!("Could not load {}: {}", what, e)
            })
            .collect::<Vec<_>>()
            .join("; ");
        self.ui.set_status(text, StatusLevel::Error);
    }

    /// Hand back the result of a user form submit
    pub fn finish_user_submit(
        &mut self,
        token: Option<Uuid>,
        ticket: SubmitTicket,
        result: AdminResult<Outcome>,
    ) {
        if !self.accepts(token) {
            return;
        }
        let (record, outcome) = split(result, |o| match o {
            Outcome::UserCreated(u) | Outcome::UserUpdated(_, u) => Some(u.clone()),
            _ => None,
        });
        if let Some(outcome) = outcome {
            self.reconcile(outcome);
        }
        let completion = self.user_form.finish(ticket, record);
        self.settle_form(Dialog::UserForm, completion);
    }

    /// Hand back the result of a connector form submit
    pub fn finish_connector_submit(
        &mut self,
        token: Option<Uuid>,
        ticket: SubmitTicket,
        result: AdminResult<Outcome>,
    ) {
        if !self.accepts(token) {
            return;
        }
        let (record, outcome) = split(result, |o| match o {
            Outcome::ConnectorCreated(c) | Outcome::ConnectorUpdated(_, c) => Some(c.clone()),
            _ => None,
        });
        if let Some(outcome) = outcome {
            self.reconcile(outcome);
        }
        let completion = self.connector_form.finish(ticket, record);
        self.settle_form(Dialog::ConnectorForm, completion);
    }

    fn settle_form<T>(&mut self, dialog: Dialog, completion: Completion<T>) {
        match completion {
            Completion::Saved(_) => {
                if self.ui.active_dialog.as_ref() == Some(&dialog) {
                    self.ui.close_dialog();
                }
            }
            Completion::Failed(message) => {
                error!(error = %message, "Save failed");
            }
            Completion::Stale => debug!("Ignoring result for a closed form"),
        }
    }

    /// Mark a delete of `target` as started; `false` when one is already running
    pub fn begin_delete(&mut self, target: &DeleteTarget) -> bool {
        if self.delete.is_pending() {
            return false;
        }
        self.delete = DeleteState {
            in_flight: Some(target.clone()),
            error: None,
        };
        true
    }

    /// Hand back the result of the in-flight delete
    ///
    /// Only the confirm dialog for the deleted record is closed or shows the
    /// error; any other open dialog is left alone.
    pub fn finish_delete(&mut self, token: Option<Uuid>, result: AdminResult<Outcome>) {
        if !self.accepts(token) {
            return;
        }
        let target = self.delete.in_flight.take();
        let showing = match (&self.ui.active_dialog, &target) {
            (Some(Dialog::ConfirmDelete(open)), Some(target)) => open.same_record(target),
            _ => false,
        };
        match result {
            Ok(outcome) => {
                self.reconcile(outcome);
                if showing {
                    self.ui.close_dialog();
                    self.delete.error = None;
                }
            }
            Err(e) if showing => {
                error!(error = %e, "Delete failed");
                self.delete.error = Some(e.to_string());
            }
            Err(e) => self.report("Could not delete", &e),
        }
    }
}

/// Pull the saved record out of a submit result, keeping the outcome to apply
fn split<T>(
    result: AdminResult<Outcome>,
    pick: impl FnOnce(&Outcome) -> Option<T>,
) -> (AdminResult<T>, Option<Outcome>) {
    match result {
        Ok(outcome) => match pick(&outcome) {
            Some(record) => (Ok(record), Some(outcome)),
            None => (
                Err(AdminError::internal(format!(
                    "unexpected result: {}",
                    outcome.message()
                ))),
                None,
            ),
        },
        Err(e) => (Err(e), None),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use parts_admin_core::{Role, UserId};
    use parts_admin_model::UserDraft;

    fn user(id: i64, name: &str) -> User {
        User {
            id: UserId(id),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            role: Role::User,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn logged_in() -> AppState {
        let mut state = AppState::new();
        assert!(state.login("admin", "admin123"));
        state
    }

    fn loaded(users: Vec<User>, connectors: Vec<Connector>) -> AppState {
        let mut state = logged_in();
        state.reconcile(Outcome::loaded(users, connectors));
        state
    }

    fn refresh_of(users: Vec<User>, connectors: Vec<Connector>) -> Refresh {
        Refresh {
            users: Ok(users),
            connectors: Ok(connectors),
        }
    }

    #[test]
    fn test_ui_state() {
        let mut ui = UiState::new();
        assert_eq!(ui.active_page, Page::Dashboard);

        ui.navigate(Page::Connectors);
        assert_eq!(ui.active_page, Page::Connectors);

        ui.show_dialog(Dialog::UserForm);
        assert!(ui.active_dialog.is_some());

        ui.close_dialog();
        assert!(ui.active_dialog.is_none());
    }

    #[test]
    fn test_login_and_logout() {
        let mut state = AppState::new();
        assert!(!state.login("admin", "wrong"));
        assert!(state.login_error.is_some());
        assert!(!state.is_logged_in());

        assert!(state.login("admin@yazaki.com", "admin123"));
        assert!(state.is_logged_in());
        assert!(state.login_error.is_none());

        state.reconcile(Outcome::loaded(vec![user(1, "Ada")], vec![]));
        state.logout();
        assert!(!state.is_logged_in());
        assert!(state.store.users().is_empty());
    }

    #[test]
    fn test_refresh_from_closed_session_is_dropped() {
        let mut state = logged_in();
        let token = state.session_token();
        assert!(state.begin_refresh());
        assert!(!state.begin_refresh());

        state.logout();
        assert!(state.login("admin", "admin123"));
        state.finish_refresh(token, refresh_of(vec![user(1, "Ada")], vec![]));
        assert!(state.store.users().is_empty());
    }

    #[test]
    fn test_failed_refresh_keeps_store() {
        let mut state = loaded(vec![user(1, "Ada")], vec![]);
        let token = state.session_token();
        assert!(state.begin_refresh());
        state.finish_refresh(
            token,
            Refresh {
                users: Err(AdminError::transport("connection refused")),
                connectors: Err(AdminError::transport("connection refused")),
            },
        );

        assert!(!state.loading);
        assert_eq!(state.store.users().len(), 1);
        let status = state.ui.status_message.unwrap();
        assert_eq!(status.level, StatusLevel::Error);
        assert!(status.text.contains("Could not load users: "));
        assert!(status.text.contains("Could not load connectors: "));
        assert!(status.text.contains("connection refused"));
    }

    #[test]
    fn test_connectors_load_when_users_fail() {
        let mut state = loaded(vec![user(1, "Ada")], vec![]);
        let token = state.session_token();
        assert!(state.begin_refresh());
        state.finish_refresh(
            token,
            Refresh {
                users: Err(AdminError::protocol(500, "Internal Server Error", "down")),
                connectors: Ok(vec![Connector::new("A1", "C", "S", "Acme").with_id(1)]),
            },
        );

        assert!(!state.loading);
        assert_eq!(state.store.users().len(), 1);
        assert_eq!(state.store.connectors().len(), 1);
        let status = state.ui.status_message.unwrap();
        assert_eq!(status.level, StatusLevel::Error);
        assert!(status.text.starts_with("Could not load users"));
    }

    #[test]
    fn test_connector_created_after_refresh_already_listed_it() {
        let mut state = logged_in();
        let token = state.session_token();

        state.open_connector_form(None);
        {
            let draft = state.connector_form.draft_mut();
            draft.yazaki_pn = "A5".to_string();
            draft.customer_pn = "C5".to_string();
            draft.supplier_pn = "S5".to_string();
            draft.supplier_name = "Acme".to_string();
        }
        let (ticket, _draft) = state.connector_form.begin_submit().unwrap();

        // The backend stored it; a refresh finishes before the create reply
        let created = Connector::new("A5", "C5", "S5", "Acme").with_id(5);
        assert!(state.begin_refresh());
        state.finish_refresh(token, refresh_of(vec![], vec![created.clone()]));
        state.finish_connector_submit(token, ticket, Ok(Outcome::ConnectorCreated(created.clone())));

        assert_eq!(state.store.connectors().records(), &[created][..]);
        assert!(state.ui.active_dialog.is_none());
        assert!(!state.connector_form.is_open());
        let status = state.ui.status_message.unwrap();
        assert_eq!(status.level, StatusLevel::Success);
        assert_eq!(status.text, "Added connector A5");
    }

    #[test]
    fn test_user_submit_saved_closes_dialog() {
        let mut state = loaded(vec![user(1, "Ada")], vec![]);
        let token = state.session_token();

        state.open_user_form(None);
        *state.user_form.draft_mut() = UserDraft::new("Grace", "grace@example.com");
        let (ticket, _draft) = state.user_form.begin_submit().unwrap();
        assert!(state.user_form.is_pending());

        state.finish_user_submit(token, ticket, Ok(Outcome::UserCreated(user(2, "Grace"))));
        assert!(state.ui.active_dialog.is_none());
        assert!(!state.user_form.is_open());
        assert_eq!(state.store.users().len(), 2);
    }

    #[test]
    fn test_user_submit_failure_keeps_draft() {
        let mut state = logged_in();
        let token = state.session_token();

        state.open_user_form(None);
        *state.user_form.draft_mut() = UserDraft::new("Grace", "grace@example.com");
        let (ticket, _draft) = state.user_form.begin_submit().unwrap();
        state.finish_user_submit(
            token,
            ticket,
            Err(AdminError::validation("Email already registered")),
        );

        assert_eq!(state.ui.active_dialog, Some(Dialog::UserForm));
        assert_eq!(state.user_form.draft().name, "Grace");
        assert!(state.user_form.error().unwrap().contains("Email already registered"));
        assert!(state.store.users().is_empty());
    }

    #[test]
    fn test_result_after_close_still_reconciles_store() {
        let mut state = logged_in();
        let token = state.session_token();

        state.open_user_form(None);
        *state.user_form.draft_mut() = UserDraft::new("Grace", "grace@example.com");
        let (ticket, _draft) = state.user_form.begin_submit().unwrap();
        state.close_dialog();

        state.finish_user_submit(token, ticket, Ok(Outcome::UserCreated(user(2, "Grace"))));
        assert_eq!(state.store.users().len(), 1);
        assert!(!state.user_form.is_open());
        assert!(state.ui.active_dialog.is_none());
    }

    #[test]
    fn test_delete_clamps_page() {
        let users: Vec<User> = (1..=11).map(|i| user(i, &format!("U{}", i))).collect();
        let mut state = loaded(users, vec![]);
        let token = state.session_token();
        state.user_query.set_page(2);
        assert_eq!(state.user_page().records.len(), 1);

        let last = state.store.users().records()[10].clone();
        let target = DeleteTarget::User(last);
        state.confirm_delete(target.clone());
        assert!(state.begin_delete(&target));
        assert!(!state.begin_delete(&target));
        state.finish_delete(token, Ok(Outcome::UserDeleted(UserId(11))));

        assert_eq!(state.user_query.page(), 1);
        assert_eq!(state.user_page().records.len(), 10);
        assert!(state.ui.active_dialog.is_none());
    }

    #[test]
    fn test_delete_failure_stays_open() {
        let mut state = loaded(vec![user(1, "Ada")], vec![]);
        let token = state.session_token();
        let target = DeleteTarget::User(user(1, "Ada"));
        state.confirm_delete(target.clone());
        assert!(state.begin_delete(&target));
        state.finish_delete(token, Err(AdminError::protocol(500, "Internal Server Error", "boom")));

        assert!(matches!(state.ui.active_dialog, Some(Dialog::ConfirmDelete(_))));
        assert!(!state.delete.is_pending());
        assert!(state.delete.error.as_deref().unwrap().contains("500"));
        assert_eq!(state.store.users().len(), 1);
    }

    #[test]
    fn test_closing_dialog_keeps_delete_in_flight() {
        let mut state = loaded(vec![user(1, "Ada"), user(2, "Bob")], vec![]);
        let token = state.session_token();
        let ada = DeleteTarget::User(user(1, "Ada"));
        state.confirm_delete(ada.clone());
        assert!(state.begin_delete(&ada));

        state.close_dialog();
        state.confirm_delete(ada.clone());
        assert!(state.delete.is_pending());
        assert!(!state.begin_delete(&ada));

        state.finish_delete(token, Ok(Outcome::UserDeleted(UserId(1))));
        assert!(!state.delete.is_pending());
        assert!(state.ui.active_dialog.is_none());
        assert_eq!(state.store.users().len(), 1);
    }

    #[test]
    fn test_late_delete_leaves_other_confirm_open() {
        let mut state = loaded(vec![user(1, "Ada"), user(2, "Bob")], vec![]);
        let token = state.session_token();
        let ada = DeleteTarget::User(user(1, "Ada"));
        let bob = DeleteTarget::User(user(2, "Bob"));

        state.confirm_delete(ada.clone());
        assert!(state.begin_delete(&ada));
        state.close_dialog();
        state.confirm_delete(bob.clone());

        state.finish_delete(token, Ok(Outcome::UserDeleted(UserId(1))));
        assert_eq!(state.ui.active_dialog, Some(Dialog::ConfirmDelete(bob.clone())));
        assert!(state.begin_delete(&bob));

        state.finish_delete(token, Err(AdminError::transport("connection reset")));
        assert_eq!(state.ui.active_dialog, Some(Dialog::ConfirmDelete(bob)));
        assert!(state.delete.error.as_deref().unwrap().contains("connection reset"));
    }

    #[test]
    fn test_late_delete_failure_goes_to_status_bar() {
        let mut state = loaded(vec![user(1, "Ada")], vec![]);
        let token = state.session_token();
        let ada = DeleteTarget::User(user(1, "Ada"));
        state.confirm_delete(ada.clone());
        assert!(state.begin_delete(&ada));
        state.close_dialog();
        state.open_user_form(None);

        state.finish_delete(token, Err(AdminError::transport("connection reset")));
        assert_eq!(state.ui.active_dialog, Some(Dialog::UserForm));
        assert!(state.delete.error.is_none());
        let status = state.ui.status_message.unwrap();
        assert_eq!(status.level, StatusLevel::Error);
        assert!(status.text.starts_with("Could not delete"));
    }

    #[test]
    fn test_supplier_options() {
        let state = loaded(
            vec![],
            vec![
                Connector::new("B1", "c", "s", "Beta").with_id(1),
                Connector::new("A1", "c", "s", "Acme").with_id(2),
                Connector::new("A2", "c", "s", "Acme").with_id(3),
            ],
        );
        assert_eq!(state.supplier_options(), vec!["Acme", "Beta"]);
    }
}
