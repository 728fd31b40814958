use dioxus::prelude::*;

use crate::app::components::ToastHost;
use crate::app::layouts::{DashboardLayout, MarketingLayout};
use crate::app::pages::dashboard::{Education, Experience, Overview, Profile, Projects, Templates};
use crate::app::pages::marketing::{Auth, Examples, Features, Home, Portfolio, Pricing};
use crate::config::ShellConfig;
use crate::domain::models::SessionSnapshot;
use crate::shared::hooks::{use_auth_provider, use_toast_provider};

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(MarketingLayout)]
        #[route("/")]
        Home {},
        #[route("/features")]
        Features {},
        #[route("/examples")]
        Examples {},
        #[route("/pricing")]
        Pricing {},
        #[route("/auth")]
        Auth {},
        #[route("/portfolio/:user_id")]
        Portfolio { user_id: String },
    #[end_layout]

    #[layout(DashboardLayout)]
        #[route("/dashboard")]
        Overview {},
        #[route("/dashboard/profile")]
        Profile {},
        #[route("/dashboard/projects")]
        Projects {},
        #[route("/dashboard/education")]
        Education {},
        #[route("/dashboard/experience")]
        Experience {},
        #[route("/dashboard/templates")]
        Templates {},
}

#[component]
pub fn App() -> Element {
    // Use asset!() macro to ensure CSS is bundled and served correctly
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let config = use_context_provider(load_config);
    use_auth_provider(SessionSnapshot::signed_out());
    use_toast_provider(config.toast_dismiss_ms);

    use_effect(|| {
        tracing::info!("Spotlight shell initialized");
    });

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        Router::<Route> {}
        ToastHost {}
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> ShellConfig {
    match ShellConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid shell configuration, using defaults: {}", e);
            ShellConfig::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> ShellConfig {
    ShellConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{DASHBOARD_DESTINATIONS, MARKETING_DESTINATIONS};

    #[test]
    fn test_every_manifest_path_is_routable() {
        for destination in DASHBOARD_DESTINATIONS.iter().chain(MARKETING_DESTINATIONS) {
            let route: Route = destination.path.parse().unwrap();
            assert_eq!(route.to_string(), destination.path);
        }
    }

    #[test]
    fn test_login_and_portfolio_routes() {
        assert_eq!("/auth".parse::<Route>().unwrap(), Route::Auth {});
        assert_eq!(
            "/portfolio/42".parse::<Route>().unwrap(),
            Route::Portfolio { user_id: "42".to_string() }
        );
    }
}
