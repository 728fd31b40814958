use crate::domain::models::{ResizePolicy, ShellVisibilityState, ViewportClass};
use crate::shared::logging::log_visibility;

/// Sole owner of the sidebar / mobile menu flags for one shell instance
#[derive(Debug, Clone, PartialEq)]
pub struct ShellVisibilityController {
    state: ShellVisibilityState,
    policy: ResizePolicy,
}

impl ShellVisibilityController {
    /// Seed from the class sampled at mount: sidebar open on regular
    /// viewports, mobile menu always closed.
    pub fn mount(class: ViewportClass, policy: ResizePolicy) -> Self {
        Self {
            state: ShellVisibilityState {
                sidebar_open: class == ViewportClass::Regular,
                mobile_menu_open: false,
            },
            policy,
        }
    }

    pub fn state(&self) -> ShellVisibilityState {
        self.state
    }

    pub fn sidebar_open(&self) -> bool {
        self.state.sidebar_open
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.state.mobile_menu_open
    }

    pub fn policy(&self) -> ResizePolicy {
        self.policy
    }

    pub fn on_viewport_change(&mut self, class: ViewportClass) {
        match self.policy {
            ResizePolicy::MountOnly => {}
            ResizePolicy::Follow => {
                self.state.sidebar_open = class == ViewportClass::Regular;
                self.log("viewport_follow");
            }
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.state.sidebar_open = !self.state.sidebar_open;
        self.log("toggle_sidebar");
    }

    pub fn close_sidebar(&mut self) {
        self.state.sidebar_open = false;
        self.log("close_sidebar");
    }

    /// Collapse after a sidebar navigation on small screens
    pub fn on_navigate(&mut self, class: ViewportClass) {
        if class.is_compact() {
            self.state.sidebar_open = false;
            self.log("navigate_compact");
        }
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.state.mobile_menu_open = !self.state.mobile_menu_open;
        self.log("toggle_mobile_menu");
    }

    pub fn on_mobile_menu_navigate(&mut self) {
        self.state.mobile_menu_open = false;
        self.log("mobile_menu_navigate");
    }

    fn log(&self, action: &str) {
        log_visibility(action, self.state.sidebar_open, self.state.mobile_menu_open);
    }
}
