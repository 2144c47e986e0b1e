//! Owned DOM event listener registrations.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget};

/// A listener attached to a DOM target, removed again on drop.
///
/// Holding the closure here keeps it alive for as long as the listener is
/// registered; dropping the binding detaches the listener before the closure
/// is freed.
pub struct EventBinding {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventBinding {
    /// Attach `handler` to `target` for the named event.
    pub fn attach(
        target: &EventTarget,
        event: &'static str,
        handler: Box<dyn FnMut(Event)>,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
