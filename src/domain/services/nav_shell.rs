//! Headless shells
//!
//! [`DashboardShell`] and [`HeaderShell`] wire the viewport class, the
//! visibility controller, the auth gate and the route highlighter together.
//! Their `frame` methods are pure: same inputs, same frame. The Dioxus layouts
//! only render frames and forward user actions back here.

use crate::config::ShellConfig;
use crate::domain::models::{
    NavigationDestination, RenderMode, SessionSnapshot, ViewportClass, DASHBOARD_DESTINATIONS,
    MARKETING_DESTINATIONS,
};
use crate::domain::services::account::{account_view, AccountView};
use crate::domain::services::auth_gate::AuthGate;
use crate::domain::services::route_highlighter::{active_destination, is_active};
use crate::domain::services::traits::Navigate;
use crate::domain::services::transition::TransitionDescriptor;
use crate::domain::services::visibility::ShellVisibilityController;
use crate::shared::logging::log_navigation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItemView {
    pub destination: NavigationDestination,
    pub active: bool,
    /// Stagger delay for this item under the current container transition
    pub delay_ms: u32,
}

fn nav_items(
    path: &str,
    destinations: &[NavigationDestination],
    transition: &TransitionDescriptor,
) -> Vec<NavItemView> {
    let count = destinations.len();
    destinations
        .iter()
        .enumerate()
        .map(|(index, destination)| NavItemView {
            destination: *destination,
            active: is_active(path, destination),
            delay_ms: transition.child_delay_ms(index, count),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardFrame {
    pub mode: RenderMode,
    pub sidebar_open: bool,
    pub items: Vec<NavItemView>,
    pub active: Option<NavigationDestination>,
    pub sidebar_transition: TransitionDescriptor,
    pub content_transition: TransitionDescriptor,
    /// Changes with the route so the content area re-runs its transition
    pub content_key: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardShell {
    destinations: &'static [NavigationDestination],
    class: ViewportClass,
    visibility: ShellVisibilityController,
    gate: AuthGate,
}

impl DashboardShell {
    pub fn mount(config: &ShellConfig, class: ViewportClass) -> Self {
        Self {
            destinations: DASHBOARD_DESTINATIONS,
            class,
            visibility: ShellVisibilityController::mount(class, config.resize_policy),
            gate: AuthGate::new(config.login_path.clone()),
        }
    }

    pub fn viewport_class(&self) -> ViewportClass {
        self.class
    }

    pub fn mode(&self) -> RenderMode {
        self.gate.mode()
    }

    pub fn sidebar_open(&self) -> bool {
        self.visibility.sidebar_open()
    }

    pub fn on_viewport_change(&mut self, class: ViewportClass) {
        self.class = class;
        self.visibility.on_viewport_change(class);
    }

    /// Feed a session update. Returns the redirect to issue, if any.
    pub fn on_session(&mut self, session: &SessionSnapshot) -> Option<String> {
        self.gate.observe(session).redirect
    }

    pub fn toggle_sidebar(&mut self) {
        self.visibility.toggle_sidebar();
    }

    pub fn close_sidebar(&mut self) {
        self.visibility.close_sidebar();
    }

    /// Sidebar navigation: go to `path`, then auto-collapse on compact screens.
    pub fn navigate(&mut self, path: &str, router: &dyn Navigate) {
        log_navigation(path);
        router.navigate(path);
        self.visibility.on_navigate(self.class);
    }

    pub fn frame(&self, path: &str) -> DashboardFrame {
        let sidebar_open = self.visibility.sidebar_open();
        let sidebar_transition = TransitionDescriptor::sidebar(sidebar_open);
        DashboardFrame {
            mode: self.gate.mode(),
            sidebar_open,
            items: nav_items(path, self.destinations, &sidebar_transition),
            active: active_destination(path, self.destinations).copied(),
            sidebar_transition,
            content_transition: TransitionDescriptor::ROUTE_CONTENT,
            content_key: path.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderFrame {
    pub items: Vec<NavItemView>,
    pub mobile_menu_open: bool,
    pub mobile_menu_transition: TransitionDescriptor,
    pub header_transition: TransitionDescriptor,
    pub account: AccountView,
}

/// Public site header: marketing links, mobile menu, account affordances
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderShell {
    destinations: &'static [NavigationDestination],
    visibility: ShellVisibilityController,
    login_path: String,
}

impl HeaderShell {
    pub fn mount(config: &ShellConfig, class: ViewportClass) -> Self {
        Self {
            destinations: MARKETING_DESTINATIONS,
            visibility: ShellVisibilityController::mount(class, config.resize_policy),
            login_path: config.login_path.clone(),
        }
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.visibility.toggle_mobile_menu();
    }

    /// Link taken from the mobile menu: navigate and close the menu.
    pub fn navigate_from_mobile_menu(&mut self, path: &str, router: &dyn Navigate) {
        log_navigation(path);
        router.navigate(path);
        self.visibility.on_mobile_menu_navigate();
    }

    pub fn frame(&self, path: &str, session: &SessionSnapshot) -> HeaderFrame {
        let mobile_menu_open = self.visibility.mobile_menu_open();
        let mobile_menu_transition = TransitionDescriptor::mobile_menu(mobile_menu_open);
        HeaderFrame {
            items: nav_items(path, self.destinations, &mobile_menu_transition),
            mobile_menu_open,
            mobile_menu_transition,
            header_transition: TransitionDescriptor::HEADER_FADE_IN,
            account: account_view(session, &self.login_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Identity;
    use crate::domain::services::viewport::ViewportClassifier;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingRouter {
        paths: RefCell<Vec<String>>,
    }

    impl Navigate for RecordingRouter {
        fn navigate(&self, path: &str) {
            self.paths.borrow_mut().push(path.to_string());
        }
    }

    fn present() -> SessionSnapshot {
        SessionSnapshot::signed_in(Identity {
            id: "7".to_string(),
            email: "lin@example.com".to_string(),
            display_name: Some("Lin".to_string()),
            avatar_url: None,
        })
    }

    fn mount_at(width: u32) -> DashboardShell {
        let config = ShellConfig::default();
        let class = ViewportClassifier::new(width, config.breakpoint_px).current();
        DashboardShell::mount(&config, class)
    }

    #[test]
    fn test_desktop_signed_in_profile_route() {
        let mut shell = mount_at(1024);
        assert_eq!(shell.on_session(&present()), None);

        let frame = shell.frame("/dashboard/profile");
        assert_eq!(frame.mode, RenderMode::RenderShell);
        assert!(frame.sidebar_open);
        assert_eq!(frame.active.map(|d| d.label), Some("Profile"));
        assert_eq!(frame.items.iter().filter(|item| item.active).count(), 1);
        assert_eq!(frame.content_key, "/dashboard/profile");
        assert_eq!(frame.sidebar_transition, TransitionDescriptor::SIDEBAR_OPEN);
    }

    #[test]
    fn test_mobile_loading_shows_placeholder() {
        let mut shell = mount_at(400);
        assert_eq!(shell.mode(), RenderMode::LoadingPlaceholder);
        assert_eq!(shell.on_session(&SessionSnapshot::loading()), None);

        let frame = shell.frame("/dashboard");
        assert_eq!(frame.mode, RenderMode::LoadingPlaceholder);
        assert!(!frame.sidebar_open);
    }

    #[test]
    fn test_signed_out_redirects_once() {
        let mut shell = mount_at(1024);
        assert_eq!(shell.on_session(&SessionSnapshot::signed_out()).as_deref(), Some("/auth"));
        assert_eq!(shell.on_session(&SessionSnapshot::signed_out()), None);
        assert_eq!(shell.frame("/dashboard").mode, RenderMode::RedirectToLogin);
    }

    #[test]
    fn test_compact_navigation_collapses_sidebar() {
        let router = RecordingRouter::default();
        let mut shell = mount_at(400);
        shell.on_session(&present());
        shell.toggle_sidebar();
        assert!(shell.sidebar_open());

        shell.navigate("/dashboard/projects", &router);

        assert!(!shell.sidebar_open());
        assert_eq!(*router.paths.borrow(), vec!["/dashboard/projects".to_string()]);
    }

    #[test]
    fn test_regular_navigation_keeps_sidebar_and_resize_is_ignored() {
        let router = RecordingRouter::default();
        let mut shell = mount_at(1280);
        shell.navigate("/dashboard/templates", &router);
        assert!(shell.sidebar_open());

        shell.on_viewport_change(ViewportClass::Compact);
        assert!(shell.sidebar_open());
        assert_eq!(shell.viewport_class(), ViewportClass::Compact);

        // Now compact: the next navigation collapses
        shell.navigate("/dashboard", &router);
        assert!(!shell.sidebar_open());
    }

    #[test]
    fn test_frame_is_deterministic() {
        let mut shell = mount_at(1024);
        shell.on_session(&present());
        assert_eq!(shell.frame("/dashboard/education"), shell.frame("/dashboard/education"));
        assert!(shell.frame("/dashboard/education/2020").active.is_none());
    }

    #[test]
    fn test_header_mobile_menu_flow() {
        let router = RecordingRouter::default();
        let mut header = HeaderShell::mount(&ShellConfig::default(), ViewportClass::Compact);
        let session = SessionSnapshot::signed_out();

        assert!(!header.frame("/", &session).mobile_menu_open);
        header.toggle_mobile_menu();
        let frame = header.frame("/", &session);
        assert!(frame.mobile_menu_open);
        assert_eq!(frame.mobile_menu_transition, TransitionDescriptor::MOBILE_MENU_VISIBLE);
        assert_eq!(frame.items.iter().map(|i| i.delay_ms).collect::<Vec<_>>(), vec![0, 50, 100]);

        header.navigate_from_mobile_menu("/pricing", &router);
        let frame = header.frame("/pricing", &session);
        assert!(!frame.mobile_menu_open);
        assert_eq!(frame.items.iter().find(|i| i.active).map(|i| i.destination.label), Some("Pricing"));
        assert_eq!(*router.paths.borrow(), vec!["/pricing".to_string()]);
        assert!(matches!(frame.account, AccountView::SignedOut { .. }));
    }

    #[test]
    fn test_header_account_for_signed_in_user() {
        let header = HeaderShell::mount(&ShellConfig::default(), ViewportClass::Regular);
        let frame = header.frame("/features", &present());
        match frame.account {
            AccountView::SignedIn { portfolio_path, initial, .. } => {
                assert_eq!(portfolio_path, "/portfolio/7");
                assert_eq!(initial, "L");
            }
            other => panic!("expected signed-in view, got {:?}", other),
        }
    }
}
