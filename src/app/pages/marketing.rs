use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "c-hero",
            h1 { class: "c-hero__title", "Your work, in the spotlight" }
            p { class: "c-hero__subtitle", "Build a portfolio site from your profile in minutes." }
        }
    }
}

#[component]
pub fn Features() -> Element {
    rsx! { section { class: "c-page", h2 { class: "c-page__title", "Features" } } }
}

#[component]
pub fn Examples() -> Element {
    rsx! { section { class: "c-page", h2 { class: "c-page__title", "Examples" } } }
}

#[component]
pub fn Pricing() -> Element {
    rsx! { section { class: "c-page", h2 { class: "c-page__title", "Pricing" } } }
}

/// Login lives with the auth provider; this page only hosts it.
#[component]
pub fn Auth() -> Element {
    rsx! {
        section { class: "c-page c-page--auth",
            h2 { class: "c-page__title", "Sign in" }
            p { class: "c-page__blurb", "Continue with your account provider." }
        }
    }
}

#[component]
pub fn Portfolio(user_id: String) -> Element {
    rsx! {
        section { class: "c-page",
            h2 { class: "c-page__title", "Portfolio" }
            p { class: "c-page__blurb", "Public portfolio for {user_id}" }
        }
    }
}
