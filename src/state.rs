use dioxus::{logger::tracing::warn, prelude::spawn_forever};
use dioxus_radio::hooks::{Radio, RadioChannel};

use crate::{
    entity::{EntityKey, ProductRecord, RecordId},
    error::StoreError,
    persistence::SharedBackend,
    store::{EditorStore, EntityDispatch},
};

#[derive(PartialEq, Eq, Clone, Debug, Copy, Hash)]
pub enum EditorChannel {
    Product,
}

impl RadioChannel<EditorStore> for EditorChannel {}

pub type StoreRadio = Radio<EditorStore, EditorChannel>;

/// Persists the record on a blocking worker. A worker that dies surfaces
/// as [`StoreError::Interrupted`].
pub async fn run_save(
    backend: SharedBackend,
    record: ProductRecord,
) -> Result<ProductRecord, StoreError> {
    tokio::task::spawn_blocking(move || backend.persist(&record))
        .await
        .unwrap_or_else(|e| Err(StoreError::Interrupted(e.to_string())))
}

/// Persists edits through the backend and reports back into the radio
/// station when done.
pub struct RadioDispatch {
    radio: StoreRadio,
    backend: SharedBackend,
}

impl RadioDispatch {
    pub fn new(radio: StoreRadio, backend: SharedBackend) -> Self {
        Self { radio, backend }
    }
}

impl EntityDispatch for RadioDispatch {
    fn save_edited_entity_record(&mut self, kind: &str, name: &str, id: RecordId) {
        let key = EntityKey::new(kind, name, id);
        let request = match self.radio.write().begin_save(&key) {
            Ok(Some(request)) => request,
            Ok(None) => return,
            Err(e) => {
                warn!("Can't save {}: {}", key, e);
                return;
            }
        };

        let backend = self.backend.clone();
        let mut radio = self.radio.clone();
        // Outlives the header so finish_save always runs
        spawn_forever(async move {
            let result = run_save(backend, request.record.clone()).await;
            radio.write().finish_save(&request, result);
        });
    }
}
