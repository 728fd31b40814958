use dioxus::prelude::*;

use crate::shared::services::DioxusNavigate;

/// Router handle for the shell core. Must be called below `Router`.
pub fn use_navigation() -> DioxusNavigate {
    DioxusNavigate::new(use_navigator())
}
