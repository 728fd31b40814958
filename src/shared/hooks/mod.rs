// Custom Dioxus hooks
pub mod use_auth;
pub mod use_navigation;
pub mod use_sign_out;
pub mod use_toasts;
pub mod use_viewport;

pub use use_auth::{use_auth, use_auth_provider};
pub use use_navigation::use_navigation;
pub use use_sign_out::use_sign_out;
pub use use_toasts::{use_notifier, use_toast_provider};
pub use use_viewport::use_viewport_class;
