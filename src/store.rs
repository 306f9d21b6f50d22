use std::collections::{BTreeSet, HashMap, HashSet};

use dioxus::logger::tracing::{debug, info, warn};

use crate::{
    entity::{EntityKey, ProductEdits, ProductRecord, RecordId},
    error::StoreError,
};

/// Read side of the entity store, the flags a view can subscribe to.
pub trait EntitySelect {
    fn is_post_saving_locked(&self) -> bool;
    fn is_saving_entity_record(&self, kind: &str, name: &str, id: RecordId) -> bool;
}

/// Write side of the entity store. Persisting is fire and forget, the
/// outcome is only observable through [`EntitySelect`].
pub trait EntityDispatch {
    fn save_edited_entity_record(&mut self, kind: &str, name: &str, id: RecordId);
}

/// A save in flight: the record as it was sent and the edits it carries.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    pub key: EntityKey,
    pub record: ProductRecord,
    pub edits: ProductEdits,
}

#[derive(Debug, Default)]
pub struct EditorStore {
    records: HashMap<EntityKey, ProductRecord>,
    edits: HashMap<EntityKey, ProductEdits>,
    saving: HashSet<EntityKey>,
    save_errors: HashMap<EntityKey, String>,
    saving_locks: BTreeSet<String>,
}

impl EditorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn receive_record(&mut self, record: ProductRecord) {
        self.records.insert(record.key(), record);
    }

    pub fn edited_entity_record(&self, key: &EntityKey) -> Option<ProductRecord> {
        let record = self.records.get(key)?;
        Some(match self.edits.get(key) {
            Some(edits) => record.with_edits(edits),
            None => record.clone(),
        })
    }

    pub fn edit_entity_record(
        &mut self,
        key: &EntityKey,
        edits: ProductEdits,
    ) -> Result<(), StoreError> {
        let record = self
            .records
            .get(key)
            .ok_or_else(|| StoreError::RecordNotFound { key: key.clone() })?;
        let current = self.edits.entry(key.clone()).or_default();
        current.merge(edits);
        current.prune(record);
        if current.is_empty() {
            self.edits.remove(key);
        }
        Ok(())
    }

    pub fn has_edits_for_entity_record(&self, key: &EntityKey) -> bool {
        self.edits.get(key).is_some_and(|edits| !edits.is_empty())
    }

    pub fn discard_edits(&mut self, key: &EntityKey) {
        if self.edits.remove(key).is_some() {
            debug!("Discarded edits for {}", key);
        }
    }

    pub fn lock_post_saving<S: AsRef<str>>(&mut self, lock_name: S) {
        if self.saving_locks.insert(lock_name.as_ref().to_string()) {
            debug!("Saving locked by '{}'", lock_name.as_ref());
        }
    }

    pub fn unlock_post_saving<S: AsRef<str>>(&mut self, lock_name: S) {
        if self.saving_locks.remove(lock_name.as_ref()) {
            debug!("Saving unlocked by '{}'", lock_name.as_ref());
        }
    }

    pub fn last_entity_save_error(&self, key: &EntityKey) -> Option<&str> {
        self.save_errors.get(key).map(String::as_str)
    }

    /// Marks the record as saving and hands back what has to be persisted.
    /// Returns `None` when there is nothing to save or a save is already running.
    pub fn begin_save(&mut self, key: &EntityKey) -> Result<Option<SaveRequest>, StoreError> {
        let record = self
            .edited_entity_record(key)
            .ok_or_else(|| StoreError::RecordNotFound { key: key.clone() })?;
        if self.saving.contains(key) {
            debug!("{} is already saving", key);
            return Ok(None);
        }
        let Some(edits) = self.edits.get(key).filter(|e| !e.is_empty()).cloned() else {
            debug!("{} has no edits to save", key);
            return Ok(None);
        };

        self.saving.insert(key.clone());
        self.save_errors.remove(key);
        Ok(Some(SaveRequest {
            key: key.clone(),
            record,
            edits,
        }))
    }

    pub fn finish_save(
        &mut self,
        request: &SaveRequest,
        result: Result<ProductRecord, StoreError>,
    ) {
        let key = &request.key;
        self.saving.remove(key);
        match result {
            Ok(record) => {
                info!("Saved {}", key);
                if let Some(current) = self.edits.get_mut(key) {
                    current.forget_sent(&request.edits);
                    current.prune(&record);
                    if current.is_empty() {
                        self.edits.remove(key);
                    }
                }
                self.records.insert(key.clone(), record);
            }
            Err(e) => {
                warn!("Error saving {}: {}", key, e);
                self.save_errors.insert(key.clone(), e.to_string());
            }
        }
    }
}

impl EntitySelect for EditorStore {
    fn is_post_saving_locked(&self) -> bool {
        !self.saving_locks.is_empty()
    }

    fn is_saving_entity_record(&self, kind: &str, name: &str, id: RecordId) -> bool {
        self.saving.iter().any(|key| key.matches(kind, name, id))
    }
}
