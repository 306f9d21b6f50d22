use thiserror::Error;

use crate::entity::EntityKey;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("No record found for {key}")]
    RecordNotFound { key: EntityKey },
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Encoding Error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Decoding Error: {0}")]
    Deserialize(#[from] toml::de::Error),
    #[error("Save interrupted: {0}")]
    Interrupted(String),
}
