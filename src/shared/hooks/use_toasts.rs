use dioxus::prelude::*;

use crate::shared::services::{Toast, ToastNotifier};

/// Provide the toast queue. Call once, above every component that notifies.
pub fn use_toast_provider(dismiss_ms: u32) -> ToastNotifier {
    let toasts = use_signal(Vec::<Toast>::new);
    use_context_provider(move || ToastNotifier::new(toasts, dismiss_ms))
}

pub fn use_notifier() -> ToastNotifier {
    use_context::<ToastNotifier>()
}
