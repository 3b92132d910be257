//! Custom cursor: an inner dot pinned to the pointer and a ring that trails it.
//!
//! ARCHITECTURE
//! ============
//! Smoothing lives in `motion::follower`. This component feeds it window
//! pointer events, advances it once per animation frame, and writes the two
//! smoothed positions into signals. Hover detection is delegated to a single
//! document `mouseover` listener, so routed content can change freely.

use leptos::prelude::*;
use motion::device::DeviceProfile;
use motion::follower::CursorFlags;
use motion::geom::Point;

fn transform(p: Point) -> String {
    format!("translate3d({}px, {}px, 0) translate(-50%, -50%)", p.x, p.y)
}

/// Cursor overlay. Renders nothing on devices without a fine pointer.
#[component]
pub fn SmoothFollower() -> impl IntoView {
    let device = expect_context::<DeviceProfile>();
    let flags = RwSignal::new(CursorFlags::default());
    let dot = RwSignal::new(Point::default());
    let ring = RwSignal::new(Point::default());

    #[cfg(feature = "csr")]
    {
        if device.fine_pointer {
            install(flags, dot, ring);
        }
    }

    device.fine_pointer.then(move || {
        view! {
            <div class=move || flags.get().container_class() aria-hidden="true">
                <div class=move || flags.get().dot_class() style:transform=move || transform(dot.get())></div>
                <div class=move || flags.get().ring_class() style:transform=move || transform(ring.get())></div>
            </div>
        }
    })
}

#[cfg(feature = "csr")]
fn install(flags: RwSignal<CursorFlags>, dot: RwSignal<Point>, ring: RwSignal<Point>) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use motion::consts::INTERACTIVE_SELECTOR;
    use motion::follower::{Follower, FollowerConfig};

    use crate::util::dom::closest_matches;
    use crate::util::frame_loop::FrameLoop;
    use crate::util::listener::EventListener;

    let follower = Rc::new(RefCell::new(Follower::new(FollowerConfig::default())));

    let frames = {
        let follower = Rc::clone(&follower);
        FrameLoop::start(move |_ts| {
            let frame = follower.borrow_mut().tick();
            if dot.get_untracked() != frame.dot {
                dot.set(frame.dot);
            }
            if ring.get_untracked() != frame.ring {
                ring.set(frame.ring);
            }
        })
    };

    let moved = EventListener::on_window("mousemove", true, move |ev: web_sys::MouseEvent| {
        follower
            .borrow_mut()
            .set_target(Point::new(f64::from(ev.client_x()), f64::from(ev.client_y())));
        if !flags.get_untracked().visible {
            flags.update(CursorFlags::pointer_moved);
        }
    });

    let down = EventListener::on_window("mousedown", true, move |_: web_sys::MouseEvent| {
        flags.update(CursorFlags::button_down);
    });
    let up = EventListener::on_window("mouseup", true, move |_: web_sys::MouseEvent| {
        flags.update(CursorFlags::button_up);
    });

    let over = EventListener::on_document("mouseover", true, move |ev: web_sys::MouseEvent| {
        let interactive = closest_matches(ev.target(), INTERACTIVE_SELECTOR);
        let current = flags.get_untracked();
        if !current.visible || current.hovering != interactive {
            flags.update(|f| f.pointer_over(interactive));
        }
    });

    let out = EventListener::on_document("mouseout", true, move |ev: web_sys::MouseEvent| {
        if ev.related_target().is_none() {
            flags.update(CursorFlags::pointer_left_document);
        }
    });

    StoredValue::new_local(frames);
    StoredValue::new_local([moved, down, up, over, out]);
}
