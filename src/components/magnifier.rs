//! Project preview image with a zoom lens.
//!
//! ARCHITECTURE
//! ============
//! `motion::magnifier::Magnifier` owns the gesture state and the lens
//! geometry. Mouse events go through ordinary view handlers. Touch listeners
//! are attached directly to the container as non-passive so an active lens
//! can stop the page from scrolling underneath the finger.

use leptos::prelude::*;
use motion::geom::{Point, Rect, Size};
use motion::magnifier::{Magnifier, MagnifierConfig};

/// Container position in viewport coordinates, if mounted.
fn measure(container: NodeRef<leptos::html::Div>) -> Option<Rect> {
    #[cfg(feature = "csr")]
    {
        let el = container.get_untracked()?;
        Some(crate::util::dom::to_rect(&el.get_bounding_client_rect()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = container;
        None
    }
}

/// Convert a viewport point into image-local coordinates plus the image size.
fn locate(container: NodeRef<leptos::html::Div>, client_x: i32, client_y: i32) -> Option<(Point, Size)> {
    let rect = measure(container)?;
    let local = rect.to_local(Point::new(f64::from(client_x), f64::from(client_y)));
    Some((local, rect.size()))
}

#[component]
pub fn ImageMagnifier(#[prop(into)] src: String, #[prop(into)] alt: String) -> impl IntoView {
    let magnifier = RwSignal::new(Magnifier::new(MagnifierConfig::default()));
    let container = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    install_touch(magnifier, container);

    let on_enter = move |_: leptos::ev::MouseEvent| magnifier.update(Magnifier::pointer_enter);
    let on_leave = move |_: leptos::ev::MouseEvent| magnifier.update(Magnifier::pointer_leave);
    let on_move = move |ev: leptos::ev::MouseEvent| {
        if let Some((local, size)) = locate(container, ev.client_x(), ev.client_y()) {
            magnifier.update(|m| m.pointer_move(local, size));
        }
    };

    let background = format!("background-image: url('{src}');");

    view! {
        <div
            class="magnifier-container"
            node_ref=container
            on:mouseenter=on_enter
            on:mouseleave=on_leave
            on:mousemove=on_move
            on:contextmenu=|ev| ev.prevent_default()
        >
            <img class="magnifier-image" src=src alt=alt draggable="false"/>
            {move || {
                magnifier
                    .with(Magnifier::lens)
                    .map(|lens| {
                        let style = format!("{background} {}", lens.style());
                        view! { <div class="magnifier-lens" style=style></div> }
                    })
            }}
        </div>
    }
}

#[cfg(feature = "csr")]
fn install_touch(magnifier: RwSignal<Magnifier>, container: NodeRef<leptos::html::Div>) {
    use gloo_timers::callback::Timeout;
    use motion::magnifier::TouchMove;

    use crate::util::listener::EventListener;

    let long_press = StoredValue::new_local(None::<Timeout>);
    let listeners = StoredValue::new_local(Vec::<EventListener>::new());

    let first_touch = |ev: &web_sys::TouchEvent| ev.touches().get(0).map(|t| (t.client_x(), t.client_y()));

    Effect::new(move |_| {
        let Some(el) = container.get() else {
            return;
        };

        let start = EventListener::new(&el, "touchstart", true, move |ev: web_sys::TouchEvent| {
            let Some((x, y)) = first_touch(&ev) else {
                return;
            };
            let Some((local, size)) = locate(container, x, y) else {
                return;
            };
            let Some(ticket) = magnifier.try_update(|m| m.touch_start(local, size)) else {
                return;
            };
            let delay = magnifier.with_untracked(|m| m.config().long_press_ms);
            long_press.set_value(Some(Timeout::new(delay, move || {
                magnifier.update(|m| {
                    m.long_press_elapsed(ticket);
                });
            })));
        });

        let moved = EventListener::new(&el, "touchmove", false, move |ev: web_sys::TouchEvent| {
            let Some((x, y)) = first_touch(&ev) else {
                return;
            };
            let Some((local, size)) = locate(container, x, y) else {
                return;
            };
            match magnifier.try_update(|m| m.touch_move(local, size)) {
                Some(TouchMove::Tracked { prevent_scroll: true }) => ev.prevent_default(),
                Some(TouchMove::Cancelled) => long_press.set_value(None),
                _ => {}
            }
        });

        let end = move |_: web_sys::TouchEvent| {
            long_press.set_value(None);
            magnifier.update(Magnifier::touch_end);
        };
        let ended = EventListener::new(&el, "touchend", true, end);
        let cancelled = EventListener::new(&el, "touchcancel", true, end);

        listeners.set_value([start, moved, ended, cancelled].into_iter().flatten().collect());
    });
}
