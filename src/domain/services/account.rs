use crate::domain::models::SessionSnapshot;
use crate::shared::constants::{DASHBOARD_PATH, PROFILE_SETTINGS_PATH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountAction {
    Navigate { label: &'static str, path: String },
    SignOut { label: &'static str },
}

/// What the site header offers on its account side
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountView {
    SignedIn {
        portfolio_path: String,
        avatar_url: Option<String>,
        initial: String,
        display_name: String,
        email: String,
        menu: Vec<AccountAction>,
    },
    SignedOut {
        log_in: AccountAction,
        sign_up: AccountAction,
    },
}

/// Still-loading sessions get the signed-out affordances.
pub fn account_view(session: &SessionSnapshot, login_path: &str) -> AccountView {
    let Some(identity) = session.resolved_identity() else {
        return AccountView::SignedOut {
            log_in: AccountAction::Navigate {
                label: "Log in",
                path: login_path.to_string(),
            },
            sign_up: AccountAction::Navigate {
                label: "Sign up",
                path: login_path.to_string(),
            },
        };
    };

    let display_name = identity
        .display_name
        .as_deref()
        .filter(|name| !name.is_empty());

    AccountView::SignedIn {
        portfolio_path: format!("/portfolio/{}", identity.id),
        avatar_url: identity.avatar_url.clone().filter(|url| !url.is_empty()),
        initial: avatar_initial(display_name, &identity.email),
        display_name: display_name.unwrap_or("User").to_string(),
        email: identity.email.clone(),
        menu: vec![
            AccountAction::Navigate {
                label: "Dashboard",
                path: DASHBOARD_PATH.to_string(),
            },
            AccountAction::Navigate {
                label: "Profile Settings",
                path: PROFILE_SETTINGS_PATH.to_string(),
            },
            AccountAction::SignOut { label: "Sign out" },
        ],
    }
}

// Display name keeps its case; the email fallback is upper-cased.
fn avatar_initial(display_name: Option<&str>, email: &str) -> String {
    if let Some(first) = display_name.and_then(|name| name.chars().next()) {
        return first.to_string();
    }
    email
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
