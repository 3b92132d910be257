//! Scoped DOM event listeners.
//!
//! An [`EventListener`] registers on creation and unregisters on drop.
//! Components keep theirs in a `StoredValue::new_local`, so every listener
//! goes away with the component's reactive owner.

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "csr")]
pub struct EventListener {
    target: web_sys::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(feature = "csr")]
impl EventListener {
    /// Listen for `event` on `target`, handing the handler events already
    /// cast to `E`. Events of any other type are skipped.
    ///
    /// Set `passive` to `false` only when the handler may call
    /// `preventDefault` (touch scrolling, pull-to-refresh).
    pub fn new<E, F>(target: &web_sys::EventTarget, event: &'static str, passive: bool, mut handler: F) -> Option<Self>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |ev: web_sys::Event| {
            if let Ok(typed) = ev.dyn_into::<E>() {
                handler(typed);
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;

        Some(Self { target: target.clone(), event, callback })
    }

    pub fn on_window<E, F>(event: &'static str, passive: bool, handler: F) -> Option<Self>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let window = web_sys::window()?;
        Self::new(window.as_ref(), event, passive, handler)
    }

    pub fn on_document<E, F>(event: &'static str, passive: bool, handler: F) -> Option<Self>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let document = web_sys::window()?.document()?;
        Self::new(document.as_ref(), event, passive, handler)
    }
}

#[cfg(feature = "csr")]
impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
