use dioxus::prelude::*;
use uuid::Uuid;

use crate::domain::services::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
}

/// Toast queue backed by a signal; each toast removes itself after
/// `dismiss_ms` in the browser.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: Signal<Vec<Toast>>,
    dismiss_ms: u32,
}

impl ToastNotifier {
    pub fn new(toasts: Signal<Vec<Toast>>, dismiss_ms: u32) -> Self {
        Self { toasts, dismiss_ms }
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts
    }

    pub fn push(&self, kind: ToastKind, message: &str) -> String {
        let id = Uuid::new_v4().to_string();
        let mut toasts = self.toasts;
        toasts.write().push(Toast {
            id: id.clone(),
            kind,
            message: message.to_string(),
        });
        self.schedule_dismiss(id.clone());
        id
    }

    pub fn dismiss(&self, id: &str) {
        let mut toasts = self.toasts;
        toasts.write().retain(|toast| toast.id != id);
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: String) {
        let notifier = *self;
        // Root scope: the toast must outlive the shell that raised it
        spawn_forever(async move {
            gloo_timers::future::TimeoutFuture::new(notifier.dismiss_ms).await;
            notifier.dismiss(&id);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: String) {
        // No timers during server rendering
    }
}

impl Notifier for ToastNotifier {
    fn notify_success(&self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    fn notify_error(&self, message: &str) {
        self.push(ToastKind::Error, message);
    }
}
