use dioxus::prelude::*;

use crate::shared::hooks::use_notifier;

// Reusable Loading Component (BEM: c-loading)
#[component]
pub fn LoadingText(message: String) -> Element {
    rsx! {
        div { class: "c-loading",
            div { class: "c-loading__spinner" }
            p { class: "c-loading__text", "{message}" }
        }
    }
}

/// Round avatar: image when available, otherwise the fallback initial
#[component]
pub fn Avatar(#[props(!optional)] avatar_url: Option<String>, initial: String) -> Element {
    rsx! {
        span { class: "c-avatar",
            if let Some(url) = avatar_url {
                img { class: "c-avatar__image", src: "{url}", alt: "Profile" }
            } else {
                span { class: "c-avatar__fallback", "{initial}" }
            }
        }
    }
}

/// Renders the toast queue from context
#[component]
pub fn ToastHost() -> Element {
    let notifier = use_notifier();
    let toasts = notifier.toasts();

    let items = toasts.read().clone().into_iter().map(move |toast| {
        let kind_class = format!("c-toast c-toast--{}", toast.kind.as_str());
        let id = toast.id.clone();
        rsx! {
            div {
                key: "{toast.id}",
                class: "{kind_class}",
                role: "status",
                onclick: move |_| notifier.dismiss(&id),
                "{toast.message}"
            }
        }
    });

    rsx! {
        div { class: "c-toast-host", {items} }
    }
}
