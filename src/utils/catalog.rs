// crsp-service/src/utils/catalog.rs
use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, error};

use crate::models::ServiceError;
use crate::utils::Session;

// An entity that can live in a catalog
pub trait CatalogEntry: Clone {
    type Draft;

    fn id(&self) -> &str;

    // Validate the draft and build a full entry with a fresh id
    fn build(draft: Self::Draft) -> Result<Self, ServiceError>;
}

// Shared in-memory collection, newest entry first. One catalog per content
// page; state lives for the lifetime of the process and resets to the seed
// on restart.
#[derive(Clone)]
pub struct Catalog<T: CatalogEntry> {
    entries: Arc<Mutex<Vec<T>>>,
}

impl<T: CatalogEntry> Catalog<T> {
    pub fn seeded(seed: Vec<T>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(seed)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<T>>, ServiceError> {
        self.entries.lock().map_err(|_| {
            error!("❌ Catalog lock poisoned");
            ServiceError::InternalServerError
        })
    }

    // Snapshot of the whole collection, head-first
    pub fn list(&self) -> Result<Vec<T>, ServiceError> {
        Ok(self.lock()?.clone())
    }

    // Snapshot retaining only matching entries; relative order is preserved
    pub fn list_filtered<F>(&self, predicate: F) -> Result<Vec<T>, ServiceError>
    where
        F: Fn(&T) -> bool,
    {
        Ok(self
            .lock()?
            .iter()
            .filter(|entry| predicate(entry))
            .cloned()
            .collect())
    }

    // Validate the draft and prepend the new entry. Mutations check the
    // session capability here, not at the call site.
    pub fn insert(&self, draft: T::Draft, session: &Session) -> Result<T, ServiceError> {
        if !session.can_mutate() {
            return Err(ServiceError::Forbidden);
        }

        let entry = T::build(draft)?;
        let mut entries = self.lock()?;
        entries.insert(0, entry.clone());

        debug!("Catalog insert: id={}, size={}", entry.id(), entries.len());
        Ok(entry)
    }

    // Remove the entry with the given id. An absent id is a no-op and
    // reports false rather than an error.
    pub fn remove_by_id(&self, id: &str, session: &Session) -> Result<bool, ServiceError> {
        if !session.can_mutate() {
            return Err(ServiceError::Forbidden);
        }

        let mut entries = self.lock()?;
        let size_before = entries.len();
        entries.retain(|entry| entry.id() != id);

        Ok(entries.len() < size_before)
    }
}

// Partition entries into ordered groups by a derived key. Insertion order is
// kept within each group; groups are returned in descending key order (a
// plain string sort, which matches chronology for "YYYY-YYYY" mandates).
pub fn group_by_key<T, F>(entries: Vec<T>, key_fn: F) -> Vec<(String, Vec<T>)>
where
    F: Fn(&T) -> String,
{
    let mut groups: Vec<(String, Vec<T>)> = Vec::new();

    for entry in entries {
        let key = key_fn(&entry);
        match groups.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, group)) => group.push(entry),
            None => groups.push((key, vec![entry])),
        }
    }

    groups.sort_by(|(a, _), (b, _)| b.cmp(a));
    groups
}
