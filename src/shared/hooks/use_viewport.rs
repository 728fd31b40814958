use dioxus::prelude::*;

use crate::domain::models::ViewportClass;
use crate::domain::services::classify;
#[cfg(not(target_arch = "wasm32"))]
use crate::shared::constants::SERVER_RENDER_WIDTH;

/// Current density class, sampled at mount and kept up to date from window
/// resize events. The resize listener is removed when the component drops.
pub fn use_viewport_class(breakpoint_px: u32) -> Signal<ViewportClass> {
    let class = use_signal(move || classify(sample_width(), breakpoint_px));

    #[cfg(target_arch = "wasm32")]
    {
        let listener = use_hook(move || resize::ResizeListener::attach(breakpoint_px, class));
        use_drop(move || listener.detach());
    }

    class
}

#[cfg(target_arch = "wasm32")]
fn sample_width() -> u32 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(|width| width as u32)
        .unwrap_or(crate::shared::constants::SERVER_RENDER_WIDTH)
}

#[cfg(not(target_arch = "wasm32"))]
fn sample_width() -> u32 {
    SERVER_RENDER_WIDTH
}

#[cfg(target_arch = "wasm32")]
mod resize {
    use std::cell::RefCell;
    use std::rc::Rc;

    use dioxus::prelude::*;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use super::sample_width;
    use crate::domain::models::ViewportClass;
    use crate::domain::services::{SubscriptionId, ViewportClassifier};

    struct Inner {
        classifier: Rc<RefCell<ViewportClassifier>>,
        subscription: SubscriptionId,
        callback: Closure<dyn FnMut(web_sys::Event)>,
    }

    #[derive(Clone)]
    pub(super) struct ResizeListener {
        inner: Rc<Inner>,
    }

    impl ResizeListener {
        pub(super) fn attach(breakpoint_px: u32, class: Signal<ViewportClass>) -> Self {
            let classifier = Rc::new(RefCell::new(ViewportClassifier::new(sample_width(), breakpoint_px)));

            let mut class_signal = class;
            let subscription = classifier
                .borrow_mut()
                .subscribe(move |next| class_signal.set(next));

            let for_callback = classifier.clone();
            let callback = Closure::wrap(Box::new(move |_: web_sys::Event| {
                for_callback.borrow_mut().on_resize(sample_width());
            }) as Box<dyn FnMut(_)>);

            if let Some(window) = web_sys::window() {
                if let Err(e) = window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref()) {
                    tracing::error!("Failed to register resize listener: {:?}", e);
                }
            }

            Self {
                inner: Rc::new(Inner {
                    classifier,
                    subscription,
                    callback,
                }),
            }
        }

        pub(super) fn detach(&self) {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .remove_event_listener_with_callback("resize", self.inner.callback.as_ref().unchecked_ref());
            }
            self.inner.classifier.borrow_mut().unsubscribe(self.inner.subscription);
        }
    }
}
