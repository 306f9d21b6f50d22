use std::{
    fs::{self, File},
    io::{Read, Write},
    path::{Path, PathBuf},
    sync::Arc,
};

use dioxus::logger::tracing::debug;

use crate::{
    entity::{EntityKey, ProductRecord, ProductStatus, RecordId},
    error::StoreError,
};

const RECORD_EXTENSION: &str = "toml";

/// Where product records live. Implementations block, callers are
/// expected to run them off the UI thread.
pub trait RecordBackend: Send + Sync {
    fn load(&self, id: RecordId) -> Result<ProductRecord, StoreError>;
    fn create_auto_draft(&self) -> Result<ProductRecord, StoreError>;
    fn persist(&self, record: &ProductRecord) -> Result<ProductRecord, StoreError>;
}

pub type SharedBackend = Arc<dyn RecordBackend>;

/// Keeps every product as `<id>.toml` in a directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    data_dir: PathBuf,
}

impl FileBackend {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self, StoreError> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    fn record_path(&self, id: RecordId) -> PathBuf {
        self.data_dir.join(format!("{}.{}", id, RECORD_EXTENSION))
    }

    fn read_record(path: &Path) -> Result<ProductRecord, StoreError> {
        let mut file = File::open(path)?;
        let mut toml = String::new();
        file.read_to_string(&mut toml)?;
        Ok(toml::from_str(&toml)?)
    }

    fn write_record(&self, record: &ProductRecord) -> Result<(), StoreError> {
        let toml = toml::to_string(record)?;
        let mut file = File::create(self.record_path(record.id))?;
        file.write_all(toml.as_bytes())?;
        Ok(())
    }

    fn record_ids(&self) -> Result<Vec<RecordId>, StoreError> {
        let mut ids = vec![];
        for entry in fs::read_dir(&self.data_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }
            if let Some(id) = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(|stem| stem.parse::<RecordId>().ok())
            {
                ids.push(id);
            }
        }
        ids.sort_unstable();
        Ok(ids)
    }
}

impl RecordBackend for FileBackend {
    fn load(&self, id: RecordId) -> Result<ProductRecord, StoreError> {
        let path = self.record_path(id);
        if !path.exists() {
            return Err(StoreError::RecordNotFound {
                key: EntityKey::product(id),
            });
        }
        Self::read_record(&path)
    }

    fn create_auto_draft(&self) -> Result<ProductRecord, StoreError> {
        let next_id = self.record_ids()?.last().map_or(1, |id| id + 1);
        let record = ProductRecord::auto_draft(next_id);
        self.write_record(&record)?;
        debug!("Created auto-draft product {}", next_id);
        Ok(record)
    }

    fn persist(&self, record: &ProductRecord) -> Result<ProductRecord, StoreError> {
        let mut record = record.clone();
        // The first save turns the placeholder into a real draft
        if record.status == ProductStatus::AutoDraft {
            record.status = ProductStatus::Draft;
        }
        self.write_record(&record)?;
        debug!("Persisted product {}", record.id);
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::AUTO_DRAFT_TITLE;

    #[test]
    fn auto_drafts_get_sequential_ids() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path()).unwrap();

        let first = backend.create_auto_draft().unwrap();
        let second = backend.create_auto_draft().unwrap();
        assert_eq!(1, first.id);
        assert_eq!(2, second.id);
        assert_eq!(AUTO_DRAFT_TITLE, second.title);
        assert_eq!(ProductStatus::AutoDraft, second.status);
    }

    #[test]
    fn persist_promotes_auto_draft() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path()).unwrap();
        let mut record = backend.create_auto_draft().unwrap();
        record.title = "My Shirt".to_string();

        let saved = backend.persist(&record).unwrap();
        assert_eq!(ProductStatus::Draft, saved.status);

        let loaded = backend.load(record.id).unwrap();
        assert_eq!(saved, loaded);
    }

    #[test]
    fn published_status_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path()).unwrap();
        let record = ProductRecord {
            id: 5,
            title: "Mug".to_string(),
            description: String::new(),
            status: ProductStatus::Publish,
        };
        assert_eq!(ProductStatus::Publish, backend.persist(&record).unwrap().status);
    }

    #[test]
    fn missing_record_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path()).unwrap();
        let result = backend.load(42);
        assert!(matches!(
            result,
            Err(StoreError::RecordNotFound { key }) if key == EntityKey::product(42)
        ));
    }

    #[test]
    fn foreign_files_dont_shift_ids() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path()).unwrap();
        backend.create_auto_draft().unwrap();
        fs::write(dir.path().join("40.txt"), "not a product").unwrap();
        fs::write(dir.path().join("draft.toml"), "id = 40").unwrap();

        assert_eq!(2, backend.create_auto_draft().unwrap().id);
    }

    #[test]
    fn corrupt_record_fails_to_decode() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path()).unwrap();
        fs::write(dir.path().join("3.toml"), "id = \"three\"").unwrap();
        assert!(matches!(backend.load(3), Err(StoreError::Deserialize(_))));
    }
}
