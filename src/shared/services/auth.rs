use std::rc::Rc;

use async_trait::async_trait;
use dioxus::prelude::*;

use crate::domain::models::SessionSnapshot;
use crate::domain::services::AuthProvider;

/// Session stream plus the provider that owns it, shared through context
#[derive(Clone)]
pub struct AuthContext {
    pub session: Signal<SessionSnapshot>,
    pub provider: Rc<dyn AuthProvider>,
}

/// In-process provider used when no external identity service is wired in.
/// Signing out drops the identity from the session it owns.
#[derive(Clone, Copy)]
pub struct LocalAuthProvider {
    session: Signal<SessionSnapshot>,
}

impl LocalAuthProvider {
    pub fn new(session: Signal<SessionSnapshot>) -> Self {
        Self { session }
    }
}

#[async_trait(?Send)]
impl AuthProvider for LocalAuthProvider {
    async fn sign_out(&self) -> Result<(), String> {
        let mut session = self.session;
        session.set(SessionSnapshot::signed_out());
        Ok(())
    }
}
