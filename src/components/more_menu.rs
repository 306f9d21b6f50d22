use dioxus::prelude::*;

use crate::i18n::{Catalog, Translate, TEXT_DOMAIN};

use super::button::{Button, ButtonVariant};

pub const OPTIONS_LABEL: &str = "Options";

#[derive(Clone, PartialEq)]
pub struct MoreMenuItem {
    pub label: String,
    pub on_select: Callback<()>,
}

/// Entries other parts of the editor plug into the header menu.
#[derive(Clone, Default, PartialEq)]
pub struct MoreMenuFills(pub Vec<MoreMenuItem>);

#[component]
pub fn MoreMenu() -> Element {
    let catalog: Catalog = use_context();
    let fills = try_use_context::<MoreMenuFills>().unwrap_or_default();
    let mut open = use_signal(|| false);
    let is_open = *open.read();

    rsx! {
        div { class: "woocommerce-product-header__more-menu",
            Button {
                title: "⋮".to_string(),
                variant: ButtonVariant::Tertiary,
                label: catalog.translate(OPTIONS_LABEL, TEXT_DOMAIN),
                expanded: is_open,
                action: move |_| {
                    let showing = *open.read();
                    open.set(!showing);
                },
            }
            if is_open {
                div { class: "components-dropdown-menu__menu", role: "menu",
                    for item in fills.0.iter().cloned() {
                        button {
                            key: "{item.label}",
                            class: "components-menu-item__button",
                            role: "menuitem",
                            onclick: move |_| {
                                open.set(false);
                                item.on_select.call(());
                            },
                            "{item.label}"
                        }
                    }
                }
            }
        }
    }
}
