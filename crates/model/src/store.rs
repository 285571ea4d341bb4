//! In-memory entity store
//!
//! Holds the last known snapshot of users and connectors. Collections are
//! immutable `Arc<[T]>` snapshots: every change builds a new collection and
//! swaps it in, so a reader never sees a half-applied update. All
//! reconcile operations are all-or-nothing; on error the store is untouched.

use std::sync::Arc;

use parts_admin_core::{AdminError, AdminResult, Record};

use crate::connector::Connector;
use crate::user::User;

// ============================================================================
// Collection
// ============================================================================

/// An ordered, immutable snapshot of records of one type
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    records: Arc<[T]>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Arc::from(Vec::new()),
        }
    }
}

impl<T: Record> Collection<T> {
    /// Build a collection, rejecting duplicate ids
    pub fn new(records: Vec<T>) -> AdminResult<Self> {
        let mut seen = std::collections::HashSet::new();
        for record in &records {
            if let Some(id) = record.id().filter(|id| !seen.insert(*id)) {
                return Err(AdminError::identity(format!(
                    "duplicate {} id {}",
                    T::KIND,
                    id
                )));
            }
        }
        Ok(Self {
            records: Arc::from(records),
        })
    }

    /// Records in backend order
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Shared handle to the current snapshot
    pub fn snapshot(&self) -> Arc<[T]> {
        Arc::clone(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look a record up by surrogate id
    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.records.iter().find(|r| r.id() == Some(id))
    }

    fn position(&self, id: T::Id) -> Option<usize> {
        self.records.iter().position(|r| r.id() == Some(id))
    }

    /// Look a record up by its natural key
    pub fn find_by_key(&self, key: &str) -> Option<&T> {
        self.records.iter().find(|r| r.natural_key() == key)
    }

    /// Resolve the surrogate id of the record with `key`
    ///
    /// Fails with an identity error when no record has that key or the
    /// matching record carries no id.
    pub fn resolve(&self, key: &str) -> AdminResult<T::Id> {
        let record = self
            .find_by_key(key)
            .ok_or_else(|| AdminError::identity(format!("no {} '{}'", T::KIND, key)))?;
        record
            .id()
            .ok_or_else(|| AdminError::identity(format!("{} '{}' has no backend id", T::KIND, key)))
    }

    /// New collection with `record` appended
    ///
    /// A record whose id is already stored (a refresh got there first) is
    /// replaced in place with the created version.
    pub fn with_inserted(&self, record: T) -> AdminResult<Self> {
        let mut records = self.records.to_vec();
        match record.id().and_then(|id| self.position(id)) {
            Some(idx) => records[idx] = record,
            None => records.push(record),
        }
        Ok(Self {
            records: Arc::from(records),
        })
    }

    /// New collection with the record `id` replaced in place
    pub fn with_replaced(&self, id: T::Id, record: T) -> AdminResult<Self> {
        if record.id().is_some_and(|other| other != id) {
            return Err(AdminError::identity(format!(
                "replacement for {} {} carries a different id",
                T::KIND,
                id
            )));
        }
        let idx = self
            .position(id)
            .ok_or_else(|| AdminError::identity(format!("{} {} is not stored", T::KIND, id)))?;
        let mut records = self.records.to_vec();
        records[idx] = record;
        Ok(Self {
            records: Arc::from(records),
        })
    }

    /// New collection without the record `id`, order of the rest kept
    pub fn with_removed(&self, id: T::Id) -> AdminResult<Self> {
        let idx = self
            .position(id)
            .ok_or_else(|| AdminError::identity(format!("{} {} is not stored", T::KIND, id)))?;
        let mut records = self.records.to_vec();
        records.remove(idx);
        Ok(Self {
            records: Arc::from(records),
        })
    }
}

// ============================================================================
// Entity Store
// ============================================================================

/// Record types held by the [`EntityStore`]
pub trait Stored: Record {
    fn collection(store: &EntityStore) -> &Collection<Self>;
    fn collection_mut(store: &mut EntityStore) -> &mut Collection<Self>;
}

impl Stored for User {
    fn collection(store: &EntityStore) -> &Collection<Self> {
        &store.users
    }

    fn collection_mut(store: &mut EntityStore) -> &mut Collection<Self> {
        &mut store.users
    }
}

impl Stored for Connector {
    fn collection(store: &EntityStore) -> &Collection<Self> {
        &store.connectors
    }

    fn collection_mut(store: &mut EntityStore) -> &mut Collection<Self> {
        &mut store.connectors
    }
}

/// Last known state of every record type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityStore {
    users: Collection<User>,
    connectors: Collection<Connector>,
    revision: u64,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &Collection<User> {
        &self.users
    }

    pub fn connectors(&self) -> &Collection<Connector> {
        &self.connectors
    }

    /// Collection for record type `T`
    pub fn collection<T: Stored>(&self) -> &Collection<T> {
        T::collection(self)
    }

    /// Bumped on every successful reconcile
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn swap<T: Stored>(&mut self, next: Collection<T>) {
        *T::collection_mut(self) = next;
        self.revision += 1;
    }

    /// Replace a whole collection with a freshly fetched list
    pub fn reconcile_list<T: Stored>(&mut self, records: Vec<T>) -> AdminResult<()> {
        let next = Collection::new(records)?;
        self.swap(next);
        Ok(())
    }

    /// Add a record the backend just created
    pub fn reconcile_insert<T: Stored>(&mut self, record: T) -> AdminResult<()> {
        let next = self.collection::<T>().with_inserted(record)?;
        self.swap(next);
        Ok(())
    }

    /// Replace a record with the backend's canonical version
    pub fn reconcile_replace<T: Stored>(&mut self, id: T::Id, record: T) -> AdminResult<()> {
        let next = self.collection::<T>().with_replaced(id, record)?;
        self.swap(next);
        Ok(())
    }

    /// Drop a record the backend just deleted
    pub fn reconcile_remove<T: Stored>(&mut self, id: T::Id) -> AdminResult<()> {
        let next = self.collection::<T>().with_removed(id)?;
        self.swap(next);
        Ok(())
    }

    /// Resolve the surrogate id of the `T` record with natural key `key`
    pub fn resolve<T: Stored>(&self, key: &str) -> AdminResult<T::Id> {
        self.collection::<T>().resolve(key)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use parts_admin_core::{ConnectorId, Role, UserId};
    use pretty_assertions::assert_eq;

    fn connector(id: i64, pn: &str) -> Connector {
        Connector::new(pn, "C", "S", "Acme").with_id(id)
    }

    fn keys(store: &EntityStore) -> Vec<String> {
        store
            .connectors()
            .records()
            .iter()
            .map(|c| c.yazaki_pn.clone())
            .collect()
    }

    #[test]
    fn test_reconcile_list_replaces_collection() {
        let mut store = EntityStore::new();
        store
            .reconcile_list(vec![connector(1, "A1"), connector(2, "A2")])
            .unwrap();
        assert_eq!(keys(&store), vec!["A1", "A2"]);
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_duplicate_ids_rejected_without_change() {
        let mut store = EntityStore::new();
        store.reconcile_list(vec![connector(1, "A1")]).unwrap();

        let err = store
            .reconcile_list(vec![connector(2, "B1"), connector(2, "B2")])
            .unwrap_err();
        assert!(err.is_identity());
        assert_eq!(keys(&store), vec!["A1"]);
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut store = EntityStore::new();
        store
            .reconcile_list(vec![connector(1, "A1"), connector(2, "A2"), connector(3, "A3")])
            .unwrap();
        store.reconcile_remove::<Connector>(ConnectorId(2)).unwrap();
        assert_eq!(keys(&store), vec!["A1", "A3"]);
    }

    #[test]
    fn test_replace_in_place() {
        let mut store = EntityStore::new();
        store
            .reconcile_list(vec![connector(1, "A1"), connector(2, "A2")])
            .unwrap();
        let updated = connector(1, "A1").with_price(10.0);
        store
            .reconcile_replace(ConnectorId(1), updated.clone())
            .unwrap();
        assert_eq!(store.connectors().records()[0], updated);
        assert_eq!(store.connectors().len(), 2);
    }

    #[test]
    fn test_missing_id_leaves_store_untouched() {
        let mut store = EntityStore::new();
        store.reconcile_list(vec![connector(1, "A1")]).unwrap();
        let before = store.clone();

        assert!(store.reconcile_remove::<Connector>(ConnectorId(9)).is_err());
        assert!(
            store
                .reconcile_replace(ConnectorId(9), connector(9, "Z"))
                .is_err()
        );
        assert_eq!(store, before);
    }

    #[test]
    fn test_insert_after_refresh_replaces_stored_copy() {
        let mut store = EntityStore::new();
        let created = connector(5, "A5").with_price(1.5);
        store
            .reconcile_list(vec![connector(1, "A1"), created.clone()])
            .unwrap();

        store.reconcile_insert(created.clone()).unwrap();
        assert_eq!(keys(&store), vec!["A1", "A5"]);

        let newer = created.with_price(2.0);
        store.reconcile_insert(newer.clone()).unwrap();
        assert_eq!(store.connectors().len(), 2);
        assert_eq!(store.connectors().records()[1], newer);
    }

    #[test]
    fn test_snapshot_survives_later_writes() {
        let mut store = EntityStore::new();
        store.reconcile_list(vec![connector(1, "A1")]).unwrap();
        let snapshot = store.connectors().snapshot();

        store.reconcile_insert(connector(2, "A2")).unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.connectors().len(), 2);
    }

    #[test]
    fn test_resolve_by_natural_key() {
        let mut store = EntityStore::new();
        let legacy = Connector::new("OLD", "C", "S", "Acme");
        store
            .reconcile_list(vec![connector(5, "A1"), legacy])
            .unwrap();

        assert_eq!(store.resolve::<Connector>("A1").unwrap(), ConnectorId(5));
        assert!(store.resolve::<Connector>("OLD").unwrap_err().is_identity());
        assert!(store.resolve::<Connector>("NOPE").unwrap_err().is_identity());
    }

    #[test]
    fn test_users_collection() {
        let mut store = EntityStore::new();
        let user = User {
            id: UserId(1),
            name: "Jane".to_string(),
            email: "jane@x.io".to_string(),
            role: Role::User,
            created_at: chrono::Utc::now(),
        };
        store.reconcile_insert(user).unwrap();
        assert_eq!(store.resolve::<User>("jane@x.io").unwrap(), UserId(1));
        assert!(store.connectors().is_empty());
    }
}
