use std::fmt::Display;

pub type RecordId = u64;

pub const POST_TYPE: &str = "postType";
pub const PRODUCT: &str = "product";

/// Title the host gives a product that has not been named yet.
pub const AUTO_DRAFT_TITLE: &str = "AUTO-DRAFT";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityKey {
    pub kind: String,
    pub name: String,
    pub id: RecordId,
}

impl EntityKey {
    pub fn new<K: AsRef<str>, N: AsRef<str>>(kind: K, name: N, id: RecordId) -> Self {
        Self {
            kind: kind.as_ref().to_string(),
            name: name.as_ref().to_string(),
            id,
        }
    }

    pub fn product(id: RecordId) -> Self {
        Self::new(POST_TYPE, PRODUCT, id)
    }

    pub fn matches(&self, kind: &str, name: &str, id: RecordId) -> bool {
        self.id == id && self.kind == kind && self.name == name
    }
}

impl Display for EntityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}#{}", self.kind, self.name, self.id)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductStatus {
    #[default]
    AutoDraft,
    Draft,
    Publish,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProductRecord {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: ProductStatus,
}

impl ProductRecord {
    pub fn auto_draft(id: RecordId) -> Self {
        Self {
            id,
            title: AUTO_DRAFT_TITLE.to_string(),
            description: String::new(),
            status: ProductStatus::AutoDraft,
        }
    }

    pub fn key(&self) -> EntityKey {
        EntityKey::product(self.id)
    }

    pub fn with_edits(&self, edits: &ProductEdits) -> Self {
        let mut record = self.clone();
        if let Some(title) = &edits.title {
            record.title = title.clone();
        }
        if let Some(description) = &edits.description {
            record.description = description.clone();
        }
        record
    }
}

/// Field edits that have not been persisted yet.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProductEdits {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl ProductEdits {
    pub fn title<S: AsRef<str>>(title: S) -> Self {
        Self {
            title: Some(title.as_ref().to_string()),
            ..Default::default()
        }
    }

    pub fn description<S: AsRef<str>>(description: S) -> Self {
        Self {
            description: Some(description.as_ref().to_string()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }

    /// Later edits win field by field.
    pub fn merge(&mut self, other: ProductEdits) {
        if other.title.is_some() {
            self.title = other.title;
        }
        if other.description.is_some() {
            self.description = other.description;
        }
    }

    /// Drops the edits that don't change anything on `record`.
    pub fn prune(&mut self, record: &ProductRecord) {
        if self.title.as_deref() == Some(record.title.as_str()) {
            self.title = None;
        }
        if self.description.as_deref() == Some(record.description.as_str()) {
            self.description = None;
        }
    }

    /// Drops the edits that are still the same as the ones in `sent`.
    pub fn forget_sent(&mut self, sent: &ProductEdits) {
        if self.title.is_some() && self.title == sent.title {
            self.title = None;
        }
        if self.description.is_some() && self.description == sent.description {
            self.description = None;
        }
    }
}
