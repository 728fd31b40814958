use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Ghost,
    Soft,
}

#[derive(Clone, PartialEq)]
pub enum ButtonSize {
    Small,
    Pill,
    Icon,
}

#[component]
pub fn Button(
    variant: Option<ButtonVariant>,
    size: Option<ButtonSize>,
    #[props(default)] class: String,
    #[props(default)] aria_label: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant = variant.unwrap_or(ButtonVariant::Primary);
    let size = size.unwrap_or(ButtonSize::Small);

    let variant_class = match variant {
        ButtonVariant::Primary => "c-button--primary",
        ButtonVariant::Ghost => "c-button--ghost",
        ButtonVariant::Soft => "c-button--soft",
    };
    let size_class = match size {
        ButtonSize::Small => "c-button--sm",
        ButtonSize::Pill => "c-button--pill",
        ButtonSize::Icon => "c-button--icon",
    };

    rsx! {
        button {
            class: "c-button {variant_class} {size_class} {class}",
            aria_label: "{aria_label}",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
