//! Structured logging for the navigation shell
//!
//! Every shell transition worth tracing goes through one of these helpers so
//! field names stay consistent across the dashboard and the site header.

use crate::domain::models::{RenderMode, ViewportClass};

/// Operation names attached to every shell log line
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Viewport,
    Visibility,
    AuthGate,
    SignOut,
    Navigation,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Viewport => "viewport",
            LogOperation::Visibility => "visibility",
            LogOperation::AuthGate => "auth_gate",
            LogOperation::SignOut => "sign_out",
            LogOperation::Navigation => "navigation",
        }
    }
}

/// Log a density class change
pub fn log_viewport_change(width: u32, class: ViewportClass) {
    tracing::debug!(
        operation = LogOperation::Viewport.as_str(),
        width = width,
        class = class.as_str(),
        "Viewport class changed"
    );
}

pub fn log_visibility(action: &str, sidebar_open: bool, mobile_menu_open: bool) {
    tracing::trace!(
        operation = LogOperation::Visibility.as_str(),
        action = action,
        sidebar_open = sidebar_open,
        mobile_menu_open = mobile_menu_open,
        "Shell visibility updated"
    );
}

/// Log an auth gate transition (only called when the mode actually changes)
pub fn log_gate_transition(from: RenderMode, to: RenderMode) {
    tracing::debug!(
        operation = LogOperation::AuthGate.as_str(),
        from = from.as_str(),
        to = to.as_str(),
        "Auth gate transition"
    );
}

pub fn log_gate_redirect(target: &str) {
    tracing::info!(
        operation = LogOperation::AuthGate.as_str(),
        target = target,
        "No session, redirecting to login"
    );
}

pub fn log_sign_out_start() {
    tracing::debug!(
        operation = LogOperation::SignOut.as_str(),
        "Signing out"
    );
}

pub fn log_sign_out_success(target: &str) {
    tracing::info!(
        operation = LogOperation::SignOut.as_str(),
        target = target,
        "Signed out"
    );
}

pub fn log_sign_out_error(error: &str) {
    tracing::error!(
        operation = LogOperation::SignOut.as_str(),
        error = error,
        "Failed to sign out"
    );
}

pub fn log_navigation(path: &str) {
    tracing::debug!(
        operation = LogOperation::Navigation.as_str(),
        path = path,
        "Navigating"
    );
}

/// Log a navigation target the router could not resolve
pub fn log_navigation_rejected(path: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::Navigation.as_str(),
        path = path,
        error = error,
        "Ignoring unknown navigation target"
    );
}
