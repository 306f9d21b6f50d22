use std::{
    collections::HashMap,
    fs::File,
    io::Read,
    path::Path,
    sync::Arc,
};

use dioxus::logger::tracing::debug;

use crate::error::StoreError;

pub const TEXT_DOMAIN: &str = "woocommerce";

pub trait Translate {
    fn translate(&self, text: &str, domain: &str) -> String;
}

/// Translated messages grouped by text domain.
///
/// Catalog files are TOML, one table per domain:
///
/// ```toml
/// [woocommerce]
/// "Save" = "Guardar"
/// "Add new product" = "Añadir nuevo producto"
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    domains: Arc<HashMap<String, HashMap<String, String>>>,
}

impl Catalog {
    pub fn from_toml<S: AsRef<str>>(toml: S) -> Result<Self, StoreError> {
        let domains: HashMap<String, HashMap<String, String>> = toml::from_str(toml.as_ref())?;
        Ok(Self {
            domains: Arc::new(domains),
        })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let mut file = File::open(path.as_ref())?;
        let mut toml = String::new();
        file.read_to_string(&mut toml)?;
        let catalog = Self::from_toml(toml)?;
        debug!(
            "Loaded {} translation domains from {}",
            catalog.domains.len(),
            path.as_ref().display()
        );
        Ok(catalog)
    }
}

impl Translate for Catalog {
    fn translate(&self, text: &str, domain: &str) -> String {
        self.domains
            .get(domain)
            .and_then(|messages| messages.get(text))
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }
}
