use dioxus::prelude::*;

use crate::app::components::{Button, ButtonSize, ButtonVariant, LoadingText};
use crate::app::pages::Route;
use crate::config::ShellConfig;
use crate::domain::models::RenderMode;
use crate::domain::services::{DashboardShell, Navigate};
use crate::shared::hooks::{use_auth, use_navigation, use_sign_out, use_viewport_class};

/// Authenticated dashboard frame: sidebar, route highlighting, sign-out.
///
/// Renders nothing but the loading placeholder until the session is known,
/// and nothing at all while the redirect to login is in flight.
#[component]
pub fn DashboardLayout() -> Element {
    let config = use_context::<ShellConfig>();
    let auth = use_auth();
    let router = use_navigation();
    let on_sign_out = use_sign_out();
    let route = use_route::<Route>();
    let viewport = use_viewport_class(config.breakpoint_px);

    let mount_config = config.clone();
    let mut shell = use_signal(move || DashboardShell::mount(&mount_config, *viewport.peek()));

    use_effect(move || {
        let class = viewport();
        shell.write().on_viewport_change(class);
    });

    let session = auth.session;
    use_effect(move || {
        let snapshot = session();
        let redirect = shell.write().on_session(&snapshot);
        if let Some(target) = redirect {
            router.navigate(&target);
        }
    });

    let path = route.to_string();
    let frame = shell.read().frame(&path);

    match frame.mode {
        RenderMode::LoadingPlaceholder => rsx! {
            div { class: "c-dashboard c-dashboard--loading",
                LoadingText { message: "Loading your dashboard..." }
            }
        },
        RenderMode::RedirectToLogin => rsx! {},
        RenderMode::RenderShell => {
            let sidebar_class = format!("c-sidebar {}", frame.sidebar_transition.css_class());
            let main_class = if frame.sidebar_open {
                "c-dashboard__main c-dashboard__main--shifted"
            } else {
                "c-dashboard__main"
            };
            let content_class = format!("c-dashboard__content {}", frame.content_transition.css_class());

            let items = frame.items.into_iter().map(move |item| {
                let item_class = if item.active {
                    "c-sidebar__item c-sidebar__item--active"
                } else {
                    "c-sidebar__item"
                };
                let target = item.destination.path;
                let glyph = item.destination.icon.glyph();
                let label = item.destination.label;
                rsx! {
                    li {
                        key: "{target}",
                        class: "{item_class}",
                        style: "transition-delay: {item.delay_ms}ms",
                        button {
                            class: "c-sidebar__link",
                            onclick: move |_| shell.write().navigate(target, &router),
                            span { class: "c-sidebar__icon", "{glyph}" }
                            "{label}"
                            if item.active {
                                span { class: "c-sidebar__indicator" }
                            }
                        }
                    }
                }
            });

            rsx! {
                div { class: "c-dashboard",
                    // Mobile sidebar toggle
                    Button {
                        variant: ButtonVariant::Soft,
                        size: ButtonSize::Icon,
                        class: "c-dashboard__toggle",
                        aria_label: "Toggle sidebar",
                        onclick: move |_| shell.write().toggle_sidebar(),
                        "☰"
                    }

                    if frame.sidebar_open {
                        aside { class: "{sidebar_class}",
                            div { class: "c-sidebar__header",
                                h1 { class: "c-sidebar__title",
                                    span { class: "c-sidebar__mark", "✦" }
                                    "Dashboard"
                                }
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    size: ButtonSize::Icon,
                                    class: "c-sidebar__collapse",
                                    aria_label: "Close sidebar",
                                    onclick: move |_| shell.write().close_sidebar(),
                                    "‹"
                                }
                            }
                            nav { class: "c-sidebar__nav",
                                ul { {items} }
                            }
                            div { class: "c-sidebar__footer",
                                Button {
                                    variant: ButtonVariant::Soft,
                                    class: "c-sidebar__logout",
                                    onclick: move |_| on_sign_out.call(()),
                                    "Logout"
                                }
                            }
                        }
                    }

                    main { class: "{main_class}",
                        div { class: "{content_class}", "data-route": "{frame.content_key}",
                            Outlet::<Route> {}
                        }
                    }
                }
            }
        }
    }
}
