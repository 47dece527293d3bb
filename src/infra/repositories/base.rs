//! Base repository traits following Interface Segregation Principle (ISP).
//!
//! Every record type lives in a [`Table`]: an id-keyed map with its own
//! monotonic id counter. Read, write and delete capabilities are split
//! into separate traits and combined by [`CrudRepository`].

use std::collections::btree_map::{BTreeMap, Values};

use crate::domain::{Patch, RecordId};
use crate::errors::{AppResult, OptionExt};

/// Id-keyed record table.
///
/// Ids start at 1 and are never handed out twice, even after the record
/// holding them is deleted or the table is cleared.
#[derive(Debug, Clone)]
pub struct Table<T> {
    entity: &'static str,
    rows: BTreeMap<RecordId, T>,
    last_id: RecordId,
}

impl<T> Table<T> {
    /// Create an empty table; `entity` names the record type in errors
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }

    fn next_id(&mut self) -> RecordId {
        self.last_id += 1;
        self.last_id
    }
}

/// Read operations (Query) - Single Responsibility
pub trait ReadRepository<T: Clone> {
    /// Record type name used in NotFound errors
    fn entity(&self) -> &'static str;

    /// All records in ascending id order
    fn values(&self) -> Values<'_, RecordId, T>;

    /// Find record by id
    fn find_by_id(&self, id: RecordId) -> Option<&T>;

    /// Find record by id, failing with NotFound
    fn get(&self, id: RecordId) -> AppResult<T> {
        self.find_by_id(id).cloned().ok_or_not_found(self.entity())
    }

    /// Find all records
    fn find_all(&self) -> Vec<T> {
        self.values().cloned().collect()
    }

    /// Find all records matching a predicate
    fn find_where<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.values().filter(|row| predicate(row)).cloned().collect()
    }

    /// Find the first record matching a predicate
    fn find_first<P>(&self, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.values().find(|row| predicate(row))
    }

    /// Count all records
    fn count(&self) -> usize {
        self.values().len()
    }
}

/// Write operations (Command) - Single Responsibility
pub trait WriteRepository<T: Clone> {
    /// Insert a record built around the next id
    fn insert_with<F>(&mut self, build: F) -> T
    where
        F: FnOnce(RecordId) -> T;

    /// Mutable access to a record
    fn find_by_id_mut(&mut self, id: RecordId) -> Option<&mut T>;

    /// Shallow-merge a patch onto an existing record
    fn update<P>(&mut self, id: RecordId, patch: P) -> AppResult<T>
    where
        P: Patch<T>;
}

/// Delete operations - Single Responsibility
pub trait DeleteRepository {
    /// Delete record by id, returning whether it existed
    fn delete_by_id(&mut self, id: RecordId) -> bool;

    /// Remove every record; the id counter keeps counting
    fn clear(&mut self);
}

/// Full CRUD repository - Combines all operations
pub trait CrudRepository<T: Clone>: ReadRepository<T> + WriteRepository<T> + DeleteRepository {}

impl<R, T> CrudRepository<T> for R
where
    R: ReadRepository<T> + WriteRepository<T> + DeleteRepository,
    T: Clone,
{
}

impl<T: Clone> ReadRepository<T> for Table<T> {
    fn entity(&self) -> &'static str {
        self.entity
    }

    fn values(&self) -> Values<'_, RecordId, T> {
        self.rows.values()
    }

    fn find_by_id(&self, id: RecordId) -> Option<&T> {
        self.rows.get(&id)
    }
}

impl<T: Clone> WriteRepository<T> for Table<T> {
    fn insert_with<F>(&mut self, build: F) -> T
    where
        F: FnOnce(RecordId) -> T,
    {
        let id = self.next_id();
        let record = build(id);
        self.rows.insert(id, record.clone());
        record
    }

    fn find_by_id_mut(&mut self, id: RecordId) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    fn update<P>(&mut self, id: RecordId, patch: P) -> AppResult<T>
    where
        P: Patch<T>,
    {
        let entity = self.entity;
        let row = self.rows.get_mut(&id).ok_or_not_found(entity)?;
        patch.apply_to(row);
        Ok(row.clone())
    }
}

impl<T> DeleteRepository for Table<T> {
    fn delete_by_id(&mut self, id: RecordId) -> bool {
        self.rows.remove(&id).is_some()
    }

    fn clear(&mut self) {
        self.rows.clear();
    }
}
