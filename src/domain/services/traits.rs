//! Collaborator traits the shell consumes
//!
//! The shell never owns the session, the router or the toast surface; it talks
//! to them through these seams. Futures are `?Send`: the browser runtime is
//! single threaded.

use async_trait::async_trait;

/// External authentication provider
#[async_trait(?Send)]
pub trait AuthProvider {
    /// End the current session. `Err` carries a human-readable reason.
    async fn sign_out(&self) -> Result<(), String>;
}

/// Router handle. Fire-and-forget: the visible route updates eventually.
pub trait Navigate {
    fn navigate(&self, path: &str);
}

/// Toast surface. Fire-and-forget, no acknowledgment.
pub trait Notifier {
    fn notify_success(&self, message: &str);
    fn notify_error(&self, message: &str);
}
