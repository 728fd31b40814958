// Dashboard pages. Their content lives outside the shell; each one only
// names its section so the frame has something to route to.
use dioxus::prelude::*;

#[component]
fn Section(title: String, blurb: String) -> Element {
    rsx! {
        section { class: "c-page",
            h2 { class: "c-page__title", "{title}" }
            p { class: "c-page__blurb", "{blurb}" }
        }
    }
}

#[component]
pub fn Overview() -> Element {
    rsx! { Section { title: "Overview", blurb: "Your portfolio at a glance." } }
}

#[component]
pub fn Profile() -> Element {
    rsx! { Section { title: "Profile", blurb: "Name, headline and contact details." } }
}

#[component]
pub fn Projects() -> Element {
    rsx! { Section { title: "Projects", blurb: "Work you want to show off." } }
}

#[component]
pub fn Education() -> Element {
    rsx! { Section { title: "Education", blurb: "Schools, degrees and courses." } }
}

#[component]
pub fn Experience() -> Element {
    rsx! { Section { title: "Experience", blurb: "Roles and responsibilities." } }
}

#[component]
pub fn Templates() -> Element {
    rsx! { Section { title: "Templates", blurb: "Pick how your portfolio looks." } }
}
