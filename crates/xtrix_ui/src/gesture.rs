//! Window-scoped pointer listeners for an in-progress drag.
//!
//! Listeners are attached when a gesture starts so moves keep tracking after
//! the pointer leaves the widget, and are removed on pointer-up, pointer-cancel,
//! and owner teardown.

use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::*;

#[derive(Clone, Copy)]
pub(crate) struct WindowGesture {
    listeners: StoredValue<Option<Vec<WindowListenerHandle>>>,
}

impl WindowGesture {
    /// Creates an idle gesture bound to the current reactive owner.
    pub(crate) fn new() -> Self {
        let gesture = Self {
            listeners: store_value(None),
        };
        on_cleanup(move || gesture.release());
        gesture
    }

    /// Subscribes move/up/cancel on the window, replacing any previous subscription.
    pub(crate) fn attach(
        &self,
        on_move: impl Fn(web_sys::PointerEvent) + 'static,
        on_up: impl Fn(web_sys::PointerEvent) + 'static,
        on_cancel: impl Fn(web_sys::PointerEvent) + 'static,
    ) {
        self.release();
        let handles = vec![
            window_event_listener(ev::pointermove, on_move),
            window_event_listener(ev::pointerup, on_up),
            window_event_listener(ev::pointercancel, on_cancel),
        ];
        self.listeners.set_value(Some(handles));
    }

    /// Removes the window listeners if any are attached.
    pub(crate) fn release(&self) {
        let Some(Some(handles)) = self.listeners.try_update_value(Option::take) else {
            return;
        };
        for handle in handles {
            handle.remove();
        }
    }
}
