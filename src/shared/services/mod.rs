// Dioxus-side collaborators for the shell core
pub mod auth;
pub mod router;
pub mod toasts;

pub use auth::{AuthContext, LocalAuthProvider};
pub use router::DioxusNavigate;
pub use toasts::{Toast, ToastKind, ToastNotifier};
