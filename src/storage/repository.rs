//! Generic record repository backed by a JSON file
//!
//! One `Repository<T>` per entity kind. Every mutation is written through to
//! disk before it returns; if the write fails the in-memory change is undone,
//! so a mutation either fully applies or not at all.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::{AdminError, AdminResult};
use crate::models::{AuditLogEntryId, SnapshotId, UserId};

use super::file_io::{read_json, write_json_atomic};

/// Identifier of a stored record
pub trait RecordId: Copy + Ord + fmt::Display {
    fn from_value(value: i64) -> Self;
    fn value(&self) -> i64;

    /// `0` marks a record the store has not assigned an id to yet
    fn is_assigned(&self) -> bool {
        self.value() != 0
    }
}

macro_rules! impl_record_id {
    ($($name:ident),*) => {
        $(
            impl RecordId for $name {
                fn from_value(value: i64) -> Self {
                    $name::from(value)
                }

                fn value(&self) -> i64 {
                    $name::value(self)
                }
            }
        )*
    };
}

impl_record_id!(UserId, AuditLogEntryId, SnapshotId);

/// An entity that can live in a `Repository`
pub trait Record: Clone + Serialize + DeserializeOwned {
    type Id: RecordId;

    /// Name used in error messages
    const ENTITY_TYPE: &'static str;

    fn id(&self) -> Self::Id;
    fn set_id(&mut self, id: Self::Id);
}

/// On-disk layout of a collection
#[derive(Debug, Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
struct RecordFile<T> {
    #[serde(default)]
    next_id: i64,
    records: Vec<T>,
}

impl<T> Default for RecordFile<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            records: Vec::new(),
        }
    }
}

#[derive(Serialize)]
struct RecordFileRef<'a, T: Serialize> {
    next_id: i64,
    records: Vec<&'a T>,
}

struct Collection<T: Record> {
    records: BTreeMap<T::Id, T>,
    /// Never reused, so a deleted record's id keeps pointing at its history
    next_id: i64,
}

/// Repository for one entity kind
pub struct Repository<T: Record> {
    path: PathBuf,
    data: RwLock<Collection<T>>,
}

impl<T: Record> Repository<T> {
    /// Create an empty repository persisted at `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Collection {
                records: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Load records from disk, replacing what is in memory
    pub fn load(&self) -> AdminResult<()> {
        let file_data: RecordFile<T> = read_json(&self.path)?;
        let mut data = self.write()?;

        data.records.clear();
        for record in file_data.records {
            data.records.insert(record.id(), record);
        }

        let after_max = data
            .records
            .keys()
            .next_back()
            .map(|id| id.value() + 1)
            .unwrap_or(1);
        data.next_id = file_data.next_id.max(after_max).max(1);

        tracing::debug!(
            entity = T::ENTITY_TYPE,
            count = data.records.len(),
            path = %self.path.display(),
            "loaded records"
        );
        Ok(())
    }

    /// Save all records to disk
    pub fn save(&self) -> AdminResult<()> {
        let data = self.read()?;
        self.persist(&data)
    }

    /// All records, in id order
    pub fn get_all(&self) -> AdminResult<Vec<T>> {
        Ok(self.read()?.records.values().cloned().collect())
    }

    /// Records matching a predicate, in id order
    pub fn query<F>(&self, predicate: F) -> AdminResult<Vec<T>>
    where
        F: Fn(&T) -> bool,
    {
        Ok(self
            .read()?
            .records
            .values()
            .filter(|&r| predicate(r))
            .cloned()
            .collect())
    }

    /// First record matching a predicate
    pub fn find<F>(&self, predicate: F) -> AdminResult<Option<T>>
    where
        F: Fn(&T) -> bool,
    {
        Ok(self.read()?.records.values().find(|&r| predicate(r)).cloned())
    }

    /// Get a record by id
    pub fn get(&self, id: T::Id) -> AdminResult<Option<T>> {
        Ok(self.read()?.records.get(&id).cloned())
    }

    /// Count records
    pub fn count(&self) -> AdminResult<usize> {
        Ok(self.read()?.records.len())
    }

    /// Store a new record, assigning an id if it has none
    pub fn create(&self, mut record: T) -> AdminResult<T> {
        let mut data = self.write()?;

        if record.id().is_assigned() {
            if data.records.contains_key(&record.id()) {
                return Err(AdminError::Duplicate {
                    entity_type: T::ENTITY_TYPE,
                    identifier: record.id().to_string(),
                });
            }
        } else {
            record.set_id(T::Id::from_value(data.next_id));
        }

        let id = record.id();
        let previous_next_id = data.next_id;
        data.next_id = data.next_id.max(id.value() + 1);
        data.records.insert(id, record.clone());

        if let Err(e) = self.persist(&data) {
            tracing::warn!(entity = T::ENTITY_TYPE, %id, error = %e, "create rolled back");
            data.records.remove(&id);
            data.next_id = previous_next_id;
            return Err(e);
        }

        Ok(record)
    }

    /// Replace the stored record with the same id
    ///
    /// Fails with `NotFound` if no such record is stored.
    pub fn update(&self, record: T) -> AdminResult<()> {
        let mut data = self.write()?;
        let id = record.id();

        let previous = match data.records.get_mut(&id) {
            Some(slot) => std::mem::replace(slot, record),
            None => return Err(not_found::<T>(id)),
        };

        if let Err(e) = self.persist(&data) {
            tracing::warn!(entity = T::ENTITY_TYPE, %id, error = %e, "update rolled back");
            data.records.insert(id, previous);
            return Err(e);
        }

        Ok(())
    }

    /// Remove a record and return it
    ///
    /// Fails with `NotFound` if no such record is stored.
    pub fn delete(&self, id: T::Id) -> AdminResult<T> {
        let mut data = self.write()?;

        let removed = data.records.remove(&id).ok_or_else(|| not_found::<T>(id))?;

        if let Err(e) = self.persist(&data) {
            tracing::warn!(entity = T::ENTITY_TYPE, %id, error = %e, "delete rolled back");
            data.records.insert(id, removed);
            return Err(e);
        }

        Ok(removed)
    }

    fn persist(&self, data: &Collection<T>) -> AdminResult<()> {
        let file_data = RecordFileRef {
            next_id: data.next_id,
            records: data.records.values().collect(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    fn read(&self) -> AdminResult<RwLockReadGuard<'_, Collection<T>>> {
        self.data
            .read()
            .map_err(|e| AdminError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> AdminResult<RwLockWriteGuard<'_, Collection<T>>> {
        self.data
            .write()
            .map_err(|e| AdminError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}

fn not_found<T: Record>(id: T::Id) -> AdminError {
    AdminError::NotFound {
        entity_type: T::ENTITY_TYPE,
        identifier: id.to_string(),
    }
}
