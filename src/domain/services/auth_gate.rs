//! Auth gate for protected shells
//!
//! Three modes: loading, redirect, render. The redirect side effect is handed
//! back to the caller exactly once per entry into `RedirectToLogin`; observing
//! the same unauthenticated session again yields nothing.

use crate::domain::models::{RenderMode, SessionSnapshot};
use crate::shared::logging::{log_gate_redirect, log_gate_transition};

/// Pure decision over the two session flags
pub fn decide(loading: bool, present: bool) -> RenderMode {
    if loading {
        RenderMode::LoadingPlaceholder
    } else if !present {
        RenderMode::RedirectToLogin
    } else {
        RenderMode::RenderShell
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateOutcome {
    pub mode: RenderMode,
    /// Navigation to issue now, if this observation entered the redirect state
    pub redirect: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthGate {
    login_path: String,
    mode: RenderMode,
}

impl AuthGate {
    /// Starts in `LoadingPlaceholder` until the first session is observed.
    pub fn new(login_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
            mode: RenderMode::LoadingPlaceholder,
        }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn observe(&mut self, session: &SessionSnapshot) -> GateOutcome {
        let next = decide(session.loading, session.identity.is_some());
        let previous = self.mode;
        self.mode = next;

        if previous != next {
            log_gate_transition(previous, next);
        }

        let redirect = if next == RenderMode::RedirectToLogin && previous != RenderMode::RedirectToLogin {
            log_gate_redirect(&self.login_path);
            Some(self.login_path.clone())
        } else {
            None
        };

        GateOutcome { mode: next, redirect }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Identity;

    fn identity() -> Identity {
        Identity {
            id: "u-1".to_string(),
            email: "ada@example.com".to_string(),
            display_name: Some("Ada".to_string()),
            avatar_url: None,
        }
    }

    #[test]
    fn test_decide_table() {
        assert_eq!(decide(true, false), RenderMode::LoadingPlaceholder);
        assert_eq!(decide(true, true), RenderMode::LoadingPlaceholder);
        assert_eq!(decide(false, false), RenderMode::RedirectToLogin);
        assert_eq!(decide(false, true), RenderMode::RenderShell);
    }

    #[test]
    fn test_loading_wins_even_with_identity() {
        let mut gate = AuthGate::new("/auth");
        let session = SessionSnapshot {
            loading: true,
            identity: Some(identity()),
        };
        let outcome = gate.observe(&session);
        assert_eq!(outcome.mode, RenderMode::LoadingPlaceholder);
        assert_eq!(outcome.redirect, None);
    }

    #[test]
    fn test_redirect_fires_once_per_entry() {
        let mut gate = AuthGate::new("/auth");
        let signed_out = SessionSnapshot::signed_out();

        let first = gate.observe(&signed_out);
        assert_eq!(first.mode, RenderMode::RedirectToLogin);
        assert_eq!(first.redirect.as_deref(), Some("/auth"));

        // Re-renders with the same session must not redirect again
        for _ in 0..3 {
            assert_eq!(gate.observe(&signed_out).redirect, None);
        }

        // A session refresh re-enters the state and fires again
        gate.observe(&SessionSnapshot::loading());
        assert_eq!(gate.observe(&signed_out).redirect.as_deref(), Some("/auth"));
    }

    #[test]
    fn test_render_and_back_to_loading() {
        let mut gate = AuthGate::new("/auth");
        let outcome = gate.observe(&SessionSnapshot::signed_in(identity()));
        assert_eq!(outcome.mode, RenderMode::RenderShell);
        assert_eq!(outcome.redirect, None);

        assert_eq!(gate.observe(&SessionSnapshot::loading()).mode, RenderMode::LoadingPlaceholder);
        assert_eq!(gate.observe(&SessionSnapshot::signed_in(identity())).mode, RenderMode::RenderShell);
    }

    #[test]
    fn test_new_gate_is_loading() {
        assert_eq!(AuthGate::new("/login").mode(), RenderMode::LoadingPlaceholder);
    }
}
