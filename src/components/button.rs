use std::fmt::Display;

use dioxus::prelude::*;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Tertiary,
}

impl Display for ButtonVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ButtonVariant::Primary => "is-primary",
                ButtonVariant::Tertiary => "is-tertiary",
            }
        )
    }
}

pub fn button_class(variant: &ButtonVariant, busy: bool) -> String {
    if busy {
        format!("components-button {} is-busy", variant)
    } else {
        format!("components-button {}", variant)
    }
}

/// Runs `action` unless the button is disabled. Returns whether it ran.
pub fn press<E>(disabled: bool, event: E, action: impl FnOnce(E)) -> bool {
    if disabled {
        return false;
    }
    action(event);
    true
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    pub title: String,
    #[props(default)]
    pub variant: ButtonVariant,
    pub action: Callback<MouseEvent>,
    #[props(default)]
    pub disabled: bool,
    #[props(default)]
    pub busy: bool,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub expanded: Option<bool>,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = button_class(&props.variant, props.busy);
    let disabled = props.disabled;
    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: move |e| {
                press(disabled, e, |e| props.action.call(e));
            },
            disabled,
            aria_busy: props.busy.then_some("true"),
            aria_label: props.label.clone(),
            aria_expanded: props.expanded.map(|expanded| expanded.to_string()),
            "{props.title}"
        }
    }
}
