use dioxus::router::Navigator;

use crate::app::pages::Route;
use crate::domain::services::Navigate;
use crate::shared::logging::log_navigation_rejected;

/// Bridges plain paths from the shell core to the typed app router
#[derive(Clone, Copy)]
pub struct DioxusNavigate {
    navigator: Navigator,
}

impl DioxusNavigate {
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }
}

impl Navigate for DioxusNavigate {
    fn navigate(&self, path: &str) {
        match path.parse::<Route>() {
            Ok(route) => {
                self.navigator.push(route);
            }
            Err(e) => log_navigation_rejected(path, &e.to_string()),
        }
    }
}
