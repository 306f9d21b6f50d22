use dioxus::prelude::*;
use dioxus_radio::hooks::use_radio;

use crate::{
    entity::RecordId,
    header::{handle_save, select_header_state, HeaderView},
    i18n::Catalog,
    persistence::SharedBackend,
    state::{EditorChannel, RadioDispatch},
    store::EditorStore,
};

use super::{
    button::{Button, ButtonVariant},
    more_menu::MoreMenu,
};

#[component]
pub fn Header(product_id: ReadOnlySignal<RecordId>, title: ReadOnlySignal<String>) -> Element {
    let radio = use_radio::<EditorStore, EditorChannel>(EditorChannel::Product);
    let catalog: Catalog = use_context();
    let backend: SharedBackend = use_context();

    // Queried on every render so flags never leak from a previous product
    let state = select_header_state(&*radio.read(), product_id());
    let view = HeaderView::new(title.read().as_str(), state, &catalog);

    rsx! {
        div {
            class: "woocommerce-product-header",
            role: "region",
            aria_label: "{view.region_label}",
            tabindex: "-1",
            h1 { class: "woocommerce-product-header__title", "{view.heading}" }
            div { class: "woocommerce-product-header__actions",
                Button {
                    title: view.save_label.clone(),
                    variant: ButtonVariant::Primary,
                    busy: view.busy,
                    disabled: view.disabled,
                    action: move |_| {
                        let mut dispatch = RadioDispatch::new(radio.clone(), backend.clone());
                        handle_save(state, &mut dispatch, product_id());
                    },
                }
                MoreMenu {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use dioxus_radio::hooks::use_init_radio_station;

    use super::*;
    use crate::{
        entity::{EntityKey, ProductEdits, ProductRecord},
        error::StoreError,
        persistence::RecordBackend,
    };

    struct NoBackend;

    impl RecordBackend for NoBackend {
        fn load(&self, id: RecordId) -> Result<ProductRecord, StoreError> {
            Err(StoreError::RecordNotFound {
                key: EntityKey::product(id),
            })
        }

        fn create_auto_draft(&self) -> Result<ProductRecord, StoreError> {
            Err(StoreError::Interrupted("read only".to_string()))
        }

        fn persist(&self, _record: &ProductRecord) -> Result<ProductRecord, StoreError> {
            Err(StoreError::Interrupted("read only".to_string()))
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Scenario {
        /// Product 42, nothing going on
        Idle,
        /// Product 42 is being saved
        Saving,
        /// Product 7, saving locked
        Locked,
    }

    impl Scenario {
        fn store(self) -> EditorStore {
            let mut store = EditorStore::new();
            match self {
                Scenario::Idle => store.receive_record(ProductRecord::auto_draft(42)),
                Scenario::Saving => {
                    let key = EntityKey::product(42);
                    store.receive_record(ProductRecord::auto_draft(42));
                    store
                        .edit_entity_record(&key, ProductEdits::title("My Shirt"))
                        .unwrap();
                    store.begin_save(&key).unwrap().unwrap();
                }
                Scenario::Locked => {
                    store.receive_record(ProductRecord::auto_draft(7));
                    store.lock_post_saving("product-title-required");
                }
            }
            store
        }
    }

    #[derive(Props, Clone, PartialEq)]
    struct HarnessProps {
        scenario: Scenario,
        catalog: Catalog,
        product_id: RecordId,
        title: String,
    }

    #[allow(non_snake_case)]
    fn Harness(props: HarnessProps) -> Element {
        let scenario = props.scenario;
        use_init_radio_station::<EditorStore, EditorChannel>(move || scenario.store());
        let catalog = props.catalog.clone();
        use_context_provider(move || catalog);
        use_context_provider(|| -> SharedBackend { Arc::new(NoBackend) });

        rsx! {
            Header { product_id: props.product_id, title: props.title.clone() }
        }
    }

    fn render_with(
        catalog: Catalog,
        scenario: Scenario,
        product_id: RecordId,
        title: &str,
    ) -> String {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                scenario,
                catalog,
                product_id,
                title: title.to_string(),
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn render(scenario: Scenario, product_id: RecordId, title: &str) -> String {
        render_with(Catalog::default(), scenario, product_id, title)
    }

    // Only the save button can end up disabled in the header
    fn save_disabled(html: &str) -> bool {
        html.contains("disabled=true") || html.contains("disabled=\"true\"")
    }

    #[test]
    fn renders_the_landmark_region() {
        let html = render(Scenario::Idle, 42, "My Shirt");

        assert!(html.contains("class=\"woocommerce-product-header\""));
        assert!(html.contains("role=\"region\""));
        assert!(html.contains("aria-label=\"Product Editor top bar.\""));
        assert!(html.contains("tabindex=\"-1\""));
        assert!(html.contains("<h1 class=\"woocommerce-product-header__title\""));
    }

    #[test]
    fn actions_hold_save_button_then_menu() {
        let html = render(Scenario::Idle, 42, "My Shirt");

        let actions = html.find("woocommerce-product-header__actions").unwrap();
        let save = html.find("is-primary").unwrap();
        let menu = html.find("woocommerce-product-header__more-menu").unwrap();
        assert!(actions < save);
        assert!(save < menu);
        assert!(html.contains("Save"));
        assert!(html.contains("aria-label=\"Options\""));
    }

    #[test]
    fn labels_come_from_the_catalog() {
        let catalog = Catalog::from_toml(
            r#"
[woocommerce]
"Product Editor top bar." = "Barra superior del editor."
"Add new product" = "Nuevo producto"
"Save" = "Guardar"
"#,
        )
        .unwrap();
        let html = render_with(catalog, Scenario::Idle, 42, "AUTO-DRAFT");

        assert!(html.contains("aria-label=\"Barra superior del editor.\""));
        assert!(html.contains("Nuevo producto"));
        assert!(html.contains("Guardar"));
    }

    #[test]
    fn new_draft_renders_enabled_save() {
        let html = render(Scenario::Idle, 42, "AUTO-DRAFT");

        assert!(html.contains("Add new product"));
        assert!(!html.contains("AUTO-DRAFT"));
        assert!(!html.contains("is-busy"));
        assert!(!html.contains("aria-busy"));
        assert!(!save_disabled(&html));
    }

    #[test]
    fn saving_product_renders_busy_disabled_save() {
        let html = render(Scenario::Saving, 42, "My Shirt");

        assert!(html.contains("My Shirt"));
        assert!(!html.contains("Add new product"));
        assert!(html.contains("is-busy"));
        assert!(html.contains("aria-busy=\"true\""));
        assert!(save_disabled(&html));
    }

    #[test]
    fn locked_draft_renders_disabled_but_not_busy() {
        let html = render(Scenario::Locked, 7, "AUTO-DRAFT");

        assert!(html.contains("Add new product"));
        assert!(save_disabled(&html));
        assert!(!html.contains("is-busy"));
        assert!(!html.contains("aria-busy"));
    }

    #[test]
    fn saving_flag_belongs_to_its_product() {
        let html = render(Scenario::Saving, 7, "My Shirt");

        assert!(!html.contains("is-busy"));
        assert!(!save_disabled(&html));
    }
}
