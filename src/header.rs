//! What the product header shows, derived from its props and the store flags.
//!
//! The Dioxus component in [`crate::components::header`] only maps this onto
//! markup, so everything the header decides can be checked with fake stores.

use dioxus::logger::tracing::debug;

use crate::{
    entity::{RecordId, AUTO_DRAFT_TITLE, POST_TYPE, PRODUCT},
    i18n::{Translate, TEXT_DOMAIN},
    store::{EntityDispatch, EntitySelect},
};

pub const REGION_LABEL: &str = "Product Editor top bar.";
pub const NEW_PRODUCT_LABEL: &str = "Add new product";
pub const SAVE_LABEL: &str = "Save";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeaderState {
    pub is_product_locked: bool,
    pub is_saving: bool,
}

impl HeaderState {
    pub fn is_disabled(&self) -> bool {
        self.is_product_locked || self.is_saving
    }
}

pub fn select_header_state<S: EntitySelect + ?Sized>(
    select: &S,
    product_id: RecordId,
) -> HeaderState {
    HeaderState {
        is_product_locked: select.is_post_saving_locked(),
        is_saving: select.is_saving_entity_record(POST_TYPE, PRODUCT, product_id),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub region_label: String,
    pub heading: String,
    pub save_label: String,
    pub busy: bool,
    pub disabled: bool,
}

impl HeaderView {
    pub fn new<T: Translate + ?Sized>(title: &str, state: HeaderState, translator: &T) -> Self {
        let heading = if title == AUTO_DRAFT_TITLE {
            translator.translate(NEW_PRODUCT_LABEL, TEXT_DOMAIN)
        } else {
            title.to_string()
        };
        Self {
            region_label: translator.translate(REGION_LABEL, TEXT_DOMAIN),
            heading,
            save_label: translator.translate(SAVE_LABEL, TEXT_DOMAIN),
            busy: state.is_saving,
            disabled: state.is_disabled(),
        }
    }
}

/// Asks the store to persist the product. Does nothing while the header is disabled.
pub fn handle_save<D: EntityDispatch + ?Sized>(
    state: HeaderState,
    dispatch: &mut D,
    product_id: RecordId,
) -> bool {
    if state.is_disabled() {
        debug!("Save of product {} ignored, header is disabled", product_id);
        return false;
    }
    dispatch.save_edited_entity_record(POST_TYPE, PRODUCT, product_id);
    true
}
