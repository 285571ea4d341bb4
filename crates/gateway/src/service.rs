//! Service orchestration
//!
//! [`AdminService`] drives one gateway call per user action and returns an
//! [`Outcome`] describing what the backend confirmed. Applying the outcome
//! to an [`EntityStore`] is a separate, synchronous step so that the UI can
//! await the call without holding its store borrowed, and so that nothing
//! is reconciled when the call fails.
//!
//! Identity is checked before any request: updating or deleting a record
//! that has no surrogate id fails with an identity error and never reaches
//! the gateway.

use parts_admin_core::{AdminError, AdminResult, ConnectorId, Record, UserId};
use parts_admin_model::{
    Connector, ConnectorDraft, EntityStore, Stored, User, UserDraft, Validatable,
};
use tracing::debug;

use crate::SharedGateway;

// ============================================================================
// Outcome
// ============================================================================

/// A backend-confirmed change, ready to be applied to a store
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Freshly fetched lists; `None` leaves that collection as stored
    Refreshed {
        users: Option<Vec<User>>,
        connectors: Option<Vec<Connector>>,
    },
    UserCreated(User),
    UserUpdated(UserId, User),
    UserDeleted(UserId),
    ConnectorCreated(Connector),
    ConnectorUpdated(ConnectorId, Connector),
    ConnectorDeleted(ConnectorId),
}

impl Outcome {
    /// Both collections loaded in full
    pub fn loaded(users: Vec<User>, connectors: Vec<Connector>) -> Self {
        Outcome::Refreshed {
            users: Some(users),
            connectors: Some(connectors),
        }
    }

    /// Reconcile the store with this outcome
    pub fn apply(self, store: &mut EntityStore) -> AdminResult<()> {
        match self {
            Outcome::Refreshed { users, connectors } => {
                // Validate both before swapping either in
                let mut next = store.clone();
                if let Some(users) = users {
                    next.reconcile_list(users)?;
                }
                if let Some(connectors) = connectors {
                    next.reconcile_list(connectors)?;
                }
                *store = next;
                Ok(())
            }
            Outcome::UserCreated(user) => store.reconcile_insert(user),
            Outcome::UserUpdated(id, user) => store.reconcile_replace(id, user),
            Outcome::UserDeleted(id) => store.reconcile_remove::<User>(id),
            Outcome::ConnectorCreated(c) => store.reconcile_insert(c),
            Outcome::ConnectorUpdated(id, c) => store.reconcile_replace(id, c),
            Outcome::ConnectorDeleted(id) => store.reconcile_remove::<Connector>(id),
        }
    }

    /// Status-bar message for this outcome
    pub fn message(&self) -> String {
        match self {
            Outcome::Refreshed { users, connectors } => match (users, connectors) {
                (Some(users), Some(connectors)) => format!(
                    "Loaded {} users and {} connectors",
                    users.len(),
                    connectors.len()
                ),
                (Some(users), None) => format!("Loaded {} users", users.len()),
                (None, Some(connectors)) => format!("Loaded {} connectors", connectors.len()),
                (None, None) => "Nothing loaded".to_string(),
            },
            Outcome::UserCreated(u) => format!("Added user {}", u.name),
            Outcome::UserUpdated(_, u) => format!("Saved user {}", u.name),
            Outcome::UserDeleted(id) => format!("Deleted user {}", id),
            Outcome::ConnectorCreated(c) => format!("Added connector {}", c.yazaki_pn),
            Outcome::ConnectorUpdated(_, c) => format!("Saved connector {}", c.yazaki_pn),
            Outcome::ConnectorDeleted(id) => format!("Deleted connector {}", id),
        }
    }
}

/// Both lists as fetched by [`AdminService::refresh`]
///
/// Each list is fetched on its own, so a failing endpoint does not keep
/// the other collection from loading.
#[derive(Debug)]
pub struct Refresh {
    pub users: AdminResult<Vec<User>>,
    pub connectors: AdminResult<Vec<Connector>>,
}

impl Refresh {
    /// Outcome for whatever loaded, plus the error of each list that did not
    ///
    /// The outcome is `None` when neither list loaded.
    pub fn split(self) -> (Option<Outcome>, Vec<(&'static str, AdminError)>) {
        let mut failures = Vec::new();
        let users = match self.users {
            Ok(users) => Some(users),
            Err(e) => {
                failures.push(("users", e));
                None
            }
        };
        let connectors = match self.connectors {
            Ok(connectors) => Some(connectors),
            Err(e) => {
                failures.push(("connectors", e));
                None
            }
        };
        let outcome = (users.is_some() || connectors.is_some())
            .then_some(Outcome::Refreshed { users, connectors });
        (outcome, failures)
    }

    /// Both lists, or the first error
    pub fn into_outcome(self) -> AdminResult<Outcome> {
        Ok(Outcome::loaded(self.users?, self.connectors?))
    }
}

fn require_id<T: Record>(record: &T) -> AdminResult<T::Id> {
    record.id().ok_or_else(|| {
        AdminError::identity(format!(
            "{} '{}' has no backend id",
            T::KIND,
            record.natural_key()
        ))
    })
}

// ============================================================================
// Admin Service
// ============================================================================

/// Runs dashboard operations against a gateway
#[derive(Clone)]
pub struct AdminService {
    gateway: SharedGateway,
}

impl std::fmt::Debug for AdminService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminService")
            .field("gateway", &self.gateway.describe())
            .finish()
    }
}

impl AdminService {
    pub fn new(gateway: SharedGateway) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &SharedGateway {
        &self.gateway
    }

    /// Fetch both collections, each independently of the other
    pub async fn refresh(&self) -> Refresh {
        debug!(source = %self.gateway.describe(), "Refreshing records");
        let (users, connectors) =
            tokio::join!(self.gateway.list_users(), self.gateway.list_connectors());
        Refresh { users, connectors }
    }

    /// Create the user, or update the one with `identity`
    pub async fn save_user(
        &self,
        identity: Option<UserId>,
        draft: &UserDraft,
    ) -> AdminResult<Outcome> {
        draft.validate()?;
        match identity {
            Some(id) => {
                let user = self.gateway.update_user(id, draft).await?;
                Ok(Outcome::UserUpdated(id, user))
            }
            None => Ok(Outcome::UserCreated(self.gateway.create_user(draft).await?)),
        }
    }

    pub async fn delete_user(&self, user: &User) -> AdminResult<Outcome> {
        let id = require_id(user)?;
        self.gateway.delete_user(id).await?;
        Ok(Outcome::UserDeleted(id))
    }

    /// Create a connector, or update `original` when editing
    ///
    /// Picked attachments are uploaded first and their paths written into
    /// the draft before the record is saved.
    pub async fn save_connector(
        &self,
        original: Option<&Connector>,
        draft: &ConnectorDraft,
    ) -> AdminResult<Outcome> {
        let identity = original.map(require_id).transpose()?;

        let mut draft = draft.clone();
        if let Some(original) = original {
            draft.yazaki_pn = original.yazaki_pn.clone();
        }
        draft.validate()?;

        if !draft.attachments.is_empty() {
            let uploaded = self
                .gateway
                .upload_attachments(&draft.upload_base_name(), &draft.attachments)
                .await?;
            draft.apply_uploaded(&uploaded);
        }

        let connector = draft.to_connector(identity)?;
        match identity {
            Some(id) => {
                let saved = self.gateway.update_connector(id, &connector).await?;
                Ok(Outcome::ConnectorUpdated(id, saved))
            }
            None => Ok(Outcome::ConnectorCreated(
                self.gateway.create_connector(&connector).await?,
            )),
        }
    }

    pub async fn delete_connector(&self, connector: &Connector) -> AdminResult<Outcome> {
        let id = require_id(connector)?;
        self.gateway.delete_connector(id).await?;
        Ok(Outcome::ConnectorDeleted(id))
    }

    /// Find a stored record by natural key, for callers that only know the key
    pub fn find<'a, T: Stored>(store: &'a EntityStore, key: &str) -> AdminResult<&'a T> {
        store
            .collection::<T>()
            .find_by_key(key)
            .ok_or_else(|| AdminError::identity(format!("no {} '{}'", T::KIND, key)))
    }
}

// ============================================================================
// Tests
// ============================================================================
