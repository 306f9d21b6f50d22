use dioxus::{logger::tracing::warn, prelude::*};
use dioxus_radio::hooks::use_radio;

use crate::{
    components::{
        header::Header,
        more_menu::{MoreMenuFills, MoreMenuItem},
    },
    entity::{EntityKey, ProductEdits, ProductRecord, RecordId},
    i18n::{Catalog, Translate, TEXT_DOMAIN},
    state::EditorChannel,
    store::EditorStore,
};

const TITLE_REQUIRED_LOCK: &str = "product-title-required";
const DISCARD_LABEL: &str = "Discard changes";

/// Saving stays locked while the product has no name.
fn sync_title_lock(store: &mut EditorStore, key: &EntityKey) {
    let blank = store
        .edited_entity_record(key)
        .is_some_and(|record| record.title.trim().is_empty());
    if blank {
        store.lock_post_saving(TITLE_REQUIRED_LOCK);
    } else {
        store.unlock_post_saving(TITLE_REQUIRED_LOCK);
    }
}

/// Store for a freshly opened product, with its locks already in place.
pub fn initial_store(product: ProductRecord) -> EditorStore {
    let key = product.key();
    let mut store = EditorStore::new();
    store.receive_record(product);
    sync_title_lock(&mut store, &key);
    store
}

fn apply_edits(store: &mut EditorStore, key: &EntityKey, edits: ProductEdits) {
    if let Err(e) = store.edit_entity_record(key, edits) {
        warn!("Can't edit {}: {}", key, e);
    }
    sync_title_lock(store, key);
}

#[component]
pub fn ProductEditor(product_id: ReadOnlySignal<RecordId>) -> Element {
    let radio = use_radio::<EditorStore, EditorChannel>(EditorChannel::Product);
    let catalog: Catalog = use_context();

    let mut discard_radio = radio.clone();
    use_context_provider(move || {
        MoreMenuFills(vec![MoreMenuItem {
            label: catalog.translate(DISCARD_LABEL, TEXT_DOMAIN),
            on_select: Callback::new(move |_: ()| {
                let key = EntityKey::product(product_id());
                let mut store = discard_radio.write();
                store.discard_edits(&key);
                sync_title_lock(&mut store, &key);
            }),
        }])
    });

    let key = EntityKey::product(product_id());
    let Some(product) = radio.read().edited_entity_record(&key) else {
        return rsx! {
            div { class: "editor-empty",
                div { class: "message", "Product {key} is not loaded." }
            }
        };
    };
    let save_error = radio
        .read()
        .last_entity_save_error(&key)
        .map(str::to_string);
    let dirty = radio.read().has_edits_for_entity_record(&key);
    let title_key = key.clone();
    let description_key = key.clone();
    let mut title_radio = radio.clone();
    let mut description_radio = radio.clone();

    rsx! {
        div { class: "woocommerce-product-editor",
            Header { product_id, title: product.title.clone() }
            div {
                class: if !dirty { "status-indicator" } else { "status-indicator unsaved" },
                id: "saveStatus",
            }
            if let Some(message) = save_error {
                div { class: "components-notice is-error", role: "alert", "{message}" }
            }
            div { class: "woocommerce-product-editor__fields",
                input {
                    class: "woocommerce-product-editor__title",
                    r#type: "text",
                    value: "{product.title}",
                    oninput: move |e: FormEvent| {
                        apply_edits(
                            &mut title_radio.write(),
                            &title_key,
                            ProductEdits::title(e.value()),
                        );
                    },
                }
                textarea {
                    class: "woocommerce-product-editor__description",
                    value: "{product.description}",
                    oninput: move |e: FormEvent| {
                        apply_edits(
                            &mut description_radio.write(),
                            &description_key,
                            ProductEdits::description(e.value()),
                        );
                    },
                }
            }
        }
    }
}
