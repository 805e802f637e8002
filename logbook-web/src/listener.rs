//! Event listeners tied to Rust ownership
//!
//! A `Closure` handed to `addEventListener` must outlive the registration.
//! Rather than `Closure::forget()`, the closure is stored next to its target
//! and the listener is removed when the owner is dropped:
//!
//! ```ignore
//! let listener = EventListener::new(&button, "click", move |_| toggle());
//! // ...
//! drop(listener); // removeEventListener
//! ```

use wasm_bindgen_x::prelude::*;
use wasm_bindgen_x::JsCast;
use web_sys_x::{Event, EventTarget};

/// An event listener that removes itself when dropped.
pub struct EventListener {
    target: EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Attaches `callback` to `target` for `event_name`.
    pub fn new(
        target: &EventTarget,
        event_name: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(Event)> = Closure::wrap(Box::new(callback));

        target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            target: target.clone(),
            event_name,
            callback,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
