mod product_editor;

use std::sync::Arc;

use dioxus::{
    logger::tracing::{error, info},
    prelude::*,
};
use dioxus_radio::hooks::use_init_radio_station;

use crate::{
    entity::ProductRecord,
    error::StoreError,
    i18n::Catalog,
    persistence::{FileBackend, RecordBackend, SharedBackend},
    settings::AppSettings,
    state::EditorChannel,
    store::EditorStore,
};

pub use product_editor::{initial_store, ProductEditor};

// Urls are relative to your Cargo.toml file
const STYLE: Asset = asset!("/assets/main.css");

/// Everything the editor needs before the first render.
#[derive(Clone)]
pub struct Workspace {
    pub backend: SharedBackend,
    pub catalog: Catalog,
    pub product: ProductRecord,
}

impl PartialEq for Workspace {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.backend, &other.backend)
            && self.catalog == other.catalog
            && self.product == other.product
    }
}

/// Opens the configured product, or a fresh auto-draft the first time.
pub fn open_workspace(settings: &mut AppSettings) -> anyhow::Result<Workspace> {
    let backend = FileBackend::new(settings.get_data_dir()?)?;
    let catalog = match &settings.translations {
        Some(path) => Catalog::load(path)?,
        None => Catalog::default(),
    };
    let product = open_product(&backend, settings)?;
    Ok(Workspace {
        backend: Arc::new(backend),
        catalog,
        product,
    })
}

fn open_product(
    backend: &dyn RecordBackend,
    settings: &mut AppSettings,
) -> anyhow::Result<ProductRecord> {
    if let Some(product_id) = settings.product_id {
        match backend.load(product_id) {
            Ok(product) => return Ok(product),
            Err(StoreError::RecordNotFound { key }) => info!("{} is gone, starting a new one", key),
            Err(e) => return Err(e.into()),
        }
    }
    let product = backend.create_auto_draft()?;
    settings.set_product(product.id);
    Ok(product)
}

fn load_workspace() -> anyhow::Result<Workspace> {
    let mut settings = AppSettings::load_from_disk()?;
    let workspace = open_workspace(&mut settings)?;
    settings.save_to_disk()?;
    Ok(workspace)
}

#[allow(non_snake_case)]
pub fn App() -> Element {
    let workspace = use_hook(|| {
        load_workspace().map_err(|e| {
            error!("Error opening the workspace: {}", e);
            e.to_string()
        })
    });

    rsx! {
        document::Link { rel: "stylesheet", href: STYLE }
        {
            match workspace {
                Ok(workspace) => rsx! {
                    EditorRoot { workspace }
                },
                Err(message) => rsx! {
                    div { class: "editor-error",
                        div { class: "title", "Can't open the product editor" }
                        div { class: "message", "{message}" }
                    }
                },
            }
        }
    }
}

#[component]
fn EditorRoot(workspace: Workspace) -> Element {
    let product = workspace.product.clone();
    use_init_radio_station::<EditorStore, EditorChannel>(move || initial_store(product));
    let backend = workspace.backend.clone();
    use_context_provider(move || backend);
    let catalog = workspace.catalog.clone();
    use_context_provider(move || catalog);

    rsx! {
        ProductEditor { product_id: workspace.product.id }
    }
}
