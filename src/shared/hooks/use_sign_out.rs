use std::rc::Rc;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::config::ShellConfig;
use crate::domain::services::SignOutFlow;
use crate::shared::hooks::{use_auth, use_navigation, use_notifier};

/// Sign-out action for buttons and menu items.
///
/// Every call starts an independent flow that runs to completion even if the
/// calling shell unmounts meanwhile. Nothing in the shell changes until the
/// provider answers.
pub fn use_sign_out() -> Callback<()> {
    let config = use_context::<ShellConfig>();
    let auth = use_auth();
    let notifier = use_notifier();
    let router = use_navigation();

    use_callback(move |()| {
        let flow = SignOutFlow::new(
            auth.provider.clone(),
            Rc::new(router),
            Rc::new(notifier),
            config.login_path.clone(),
        );
        spawn_forever(async move {
            // Failures are already reported through the notifier
            let _ = flow.run().await;
        });
    })
}
