use std::rc::Rc;

use dioxus::prelude::*;

use crate::domain::models::SessionSnapshot;
use crate::shared::services::{AuthContext, LocalAuthProvider};

/// Provide the session stream for the whole app, backed by the local provider
pub fn use_auth_provider(initial: SessionSnapshot) -> AuthContext {
    let session = use_signal(move || initial);
    use_context_provider(move || AuthContext {
        session,
        provider: Rc::new(LocalAuthProvider::new(session)),
    })
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}
