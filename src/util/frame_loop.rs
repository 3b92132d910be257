//! `requestAnimationFrame` loop owned by an RAII handle.
//!
//! The loop re-arms itself after every tick and stops when the
//! [`FrameLoop`] is dropped: the pending frame is cancelled and the closure
//! released. The closure only holds a weak reference back to its own state,
//! so there is no `Rc` cycle to leak.

#[cfg(feature = "csr")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "csr")]
struct FrameState {
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    pending: Cell<Option<i32>>,
}

#[cfg(feature = "csr")]
pub struct FrameLoop {
    state: Rc<FrameState>,
}

#[cfg(feature = "csr")]
impl FrameLoop {
    /// Start calling `tick` once per display refresh with the frame timestamp.
    pub fn start(mut tick: impl FnMut(f64) + 'static) -> Option<Self> {
        web_sys::window()?;
        let state = Rc::new(FrameState { callback: RefCell::new(None), pending: Cell::new(None) });

        let weak = Rc::downgrade(&state);
        let cb = Closure::wrap(Box::new(move |ts: f64| {
            tick(ts);
            if let Some(state) = weak.upgrade() {
                schedule(&state);
            }
        }) as Box<dyn FnMut(f64)>);

        *state.callback.borrow_mut() = Some(cb);
        schedule(&state);
        Some(Self { state })
    }
}

#[cfg(feature = "csr")]
fn schedule(state: &FrameState) {
    let Some(window) = web_sys::window() else {
        state.pending.set(None);
        return;
    };
    let next = state
        .callback
        .borrow()
        .as_ref()
        .and_then(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    state.pending.set(next);
}

#[cfg(feature = "csr")]
impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(window)) = (self.state.pending.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(id);
        }
        self.state.callback.borrow_mut().take();
    }
}
