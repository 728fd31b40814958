use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Density class derived from the window width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Compact,
    Regular,
}

impl ViewportClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewportClass::Compact => "compact",
            ViewportClass::Regular => "regular",
        }
    }

    pub fn is_compact(&self) -> bool {
        matches!(self, ViewportClass::Compact)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShellVisibilityState {
    pub sidebar_open: bool,
    pub mobile_menu_open: bool,
}

/// How the sidebar reacts to viewport changes after mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizePolicy {
    /// Only the mount-time class decides the default; later resizes leave the
    /// sidebar to the user.
    #[default]
    MountOnly,
    /// Every class change re-applies the default (open on regular, closed on
    /// compact).
    Follow,
}

impl FromStr for ResizePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mount-only" | "mount_only" | "mountonly" => Ok(ResizePolicy::MountOnly),
            "follow" => Ok(ResizePolicy::Follow),
            _ => Err(format!("Unknown resize policy: {}", s)),
        }
    }
}

/// What a protected shell renders for the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    LoadingPlaceholder,
    RedirectToLogin,
    RenderShell,
}

impl RenderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::LoadingPlaceholder => "loading_placeholder",
            RenderMode::RedirectToLogin => "redirect_to_login",
            RenderMode::RenderShell => "render_shell",
        }
    }
}
