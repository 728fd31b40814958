use dioxus::prelude::*;

use crate::app::components::{Avatar, Button, ButtonSize, ButtonVariant};
use crate::app::pages::Route;
use crate::config::ShellConfig;
use crate::domain::services::{AccountAction, AccountView, HeaderShell, Navigate};
use crate::shared::hooks::{use_auth, use_navigation, use_sign_out, use_viewport_class};

/// Public pages: site header above the routed page
#[component]
pub fn MarketingLayout() -> Element {
    rsx! {
        div { class: "c-site",
            SiteHeader {}
            main { class: "c-site__main",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
pub fn SiteHeader() -> Element {
    let config = use_context::<ShellConfig>();
    let auth = use_auth();
    let router = use_navigation();
    let on_sign_out = use_sign_out();
    let route = use_route::<Route>();
    let viewport = use_viewport_class(config.breakpoint_px);

    let mount_config = config.clone();
    let mut header = use_signal(move || HeaderShell::mount(&mount_config, *viewport.peek()));
    // Dropdown open state is local to the avatar menu, not shell state
    let mut account_menu_open = use_signal(|| false);

    let path = route.to_string();
    let session = auth.session;
    let frame = header.read().frame(&path, &session.read());

    let header_class = format!("c-header {}", frame.header_transition.css_class());
    let menu_class = format!("c-header__mobile-menu {}", frame.mobile_menu_transition.css_class());

    let desktop_links = frame.items.clone().into_iter().map(|item| {
        let link_class = if item.active {
            "c-header__link c-header__link--active"
        } else {
            "c-header__link"
        };
        rsx! {
            li { key: "{item.destination.path}",
                Link { to: item.destination.path.to_string(), class: "{link_class}", "{item.destination.label}" }
            }
        }
    });

    let mobile_links = frame.items.into_iter().map(move |item| {
        let target = item.destination.path;
        rsx! {
            li {
                key: "{target}",
                class: "c-header__mobile-item",
                style: "transition-delay: {item.delay_ms}ms",
                button {
                    class: "c-header__mobile-link",
                    onclick: move |_| header.write().navigate_from_mobile_menu(target, &router),
                    "{item.destination.label}"
                }
            }
        }
    });

    let account = match frame.account {
        AccountView::SignedIn {
            portfolio_path,
            avatar_url,
            initial,
            display_name,
            email,
            menu,
        } => {
            let menu_items = menu.into_iter().map(move |action| match action {
                AccountAction::Navigate { label, path } => rsx! {
                    li { key: "{label}",
                        button {
                            class: "c-account-menu__item",
                            onclick: move |_| {
                                account_menu_open.set(false);
                                router.navigate(&path);
                            },
                            "{label}"
                        }
                    }
                },
                AccountAction::SignOut { label } => rsx! {
                    li { key: "{label}", class: "c-account-menu__separated",
                        button {
                            class: "c-account-menu__item",
                            onclick: move |_| {
                                account_menu_open.set(false);
                                on_sign_out.call(());
                            },
                            "{label}"
                        }
                    }
                },
            });

            rsx! {
                Button {
                    variant: ButtonVariant::Soft,
                    size: ButtonSize::Pill,
                    class: "c-header__portfolio",
                    onclick: move |_| router.navigate(&portfolio_path),
                    "↗ View Portfolio"
                }
                div { class: "c-account-menu",
                    button {
                        class: "c-account-menu__trigger",
                        aria_label: "Account menu",
                        onclick: move |_| {
                            let open = account_menu_open();
                            account_menu_open.set(!open);
                        },
                        Avatar { avatar_url, initial }
                    }
                    if account_menu_open() {
                        div { class: "c-account-menu__content",
                            div { class: "c-account-menu__label",
                                p { class: "c-account-menu__name", "{display_name}" }
                                p { class: "c-account-menu__email", "{email}" }
                            }
                            ul { {menu_items} }
                        }
                    }
                }
            }
        }
        AccountView::SignedOut { log_in, sign_up } => {
            let log_in_path = action_path(&log_in);
            let sign_up_path = action_path(&sign_up);
            rsx! {
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Pill,
                    class: "c-header__login",
                    onclick: move |_| router.navigate(&log_in_path),
                    "Log in"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Pill,
                    class: "c-header__signup",
                    onclick: move |_| router.navigate(&sign_up_path),
                    "Sign up"
                }
            }
        }
    };

    rsx! {
        header { class: "{header_class}",
            div { class: "c-header__inner",
                div { class: "c-header__brand-group",
                    Link { to: Route::Home {}, class: "c-header__brand",
                        span { class: "c-header__mark", "✦" }
                        span { class: "c-header__name", "Spotlight" }
                    }
                    nav { class: "c-header__nav",
                        ul { {desktop_links} }
                    }
                }

                // Mobile menu button
                button {
                    class: "c-header__menu-toggle",
                    aria_label: "Toggle menu",
                    onclick: move |_| header.write().toggle_mobile_menu(),
                    "☰"
                }

                if frame.mobile_menu_open {
                    div { class: "{menu_class}",
                        ul { {mobile_links} }
                    }
                }

                div { class: "c-header__account", {account} }
            }
        }
    }
}

fn action_path(action: &AccountAction) -> String {
    match action {
        AccountAction::Navigate { path, .. } => path.clone(),
        AccountAction::SignOut { .. } => String::new(),
    }
}
