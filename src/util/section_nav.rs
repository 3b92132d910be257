//! Hook that wires a page into boundary wheel/swipe navigation.
//!
//! The decision logic lives in `motion::navigator`; this module only feeds it
//! window events and carries out the granted transition: set the exit class,
//! wait, scroll to the top, route.

use leptos::prelude::*;
use motion::navigator::Direction;

use crate::state::nav::Section;
use crate::util::dom::set_body_class;

/// Mount-scoped setup for `section`.
///
/// Tags `<body>` with the section's class for the lifetime of the page and,
/// for sections with neighbours, listens for boundary gestures. The returned
/// signal holds the direction of the running exit transition.
pub fn use_section_navigator(section: Section) -> ReadSignal<Option<Direction>> {
    let transition = RwSignal::new(None::<Direction>);

    set_body_class(section.body_class(), true);
    on_cleanup(move || set_body_class(section.body_class(), false));

    #[cfg(feature = "csr")]
    {
        if let Some(links) = section.navigation_links() {
            install(links, transition);
        }
    }

    transition.read_only()
}

#[cfg(feature = "csr")]
fn install(links: motion::navigator::SectionLinks<Section>, transition: RwSignal<Option<Direction>>) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use leptos_router::NavigateOptions;
    use leptos_router::hooks::use_navigate;
    use motion::navigator::{NavigatorConfig, SectionNavigator, Transition};

    use crate::util::dom::{scroll_metrics, scroll_to_top};
    use crate::util::listener::EventListener;

    let navigator = Rc::new(RefCell::new(SectionNavigator::new(NavigatorConfig::default(), links)));
    let pending = StoredValue::new_local(None::<Timeout>);
    let navigate = use_navigate();

    let begin = move |t: Transition<Section>| {
        leptos::logging::log!("section transition {:?} -> {}", t.direction, t.destination.path());
        transition.set(Some(t.direction));
        let navigate = navigate.clone();
        pending.set_value(Some(Timeout::new(t.delay_ms, move || {
            scroll_to_top();
            navigate(t.destination.path(), NavigateOptions::default());
        })));
    };

    let wheel = {
        let navigator = Rc::clone(&navigator);
        let begin = begin.clone();
        EventListener::on_window("wheel", true, move |ev: web_sys::WheelEvent| {
            let granted = navigator.borrow_mut().wheel(ev.delta_y(), scroll_metrics());
            if let Some(t) = granted {
                begin(t);
            }
        })
    };

    let touch_start = {
        let navigator = Rc::clone(&navigator);
        EventListener::on_window("touchstart", true, move |ev: web_sys::TouchEvent| {
            if let Some(touch) = ev.touches().get(0) {
                navigator.borrow_mut().touch_start(f64::from(touch.client_y()));
            }
        })
    };

    let touch_end = EventListener::on_window("touchend", true, move |ev: web_sys::TouchEvent| {
        let Some(touch) = ev.changed_touches().get(0) else {
            return;
        };
        let granted = navigator.borrow_mut().touch_end(f64::from(touch.client_y()), scroll_metrics());
        if let Some(t) = granted {
            begin(t);
        }
    });

    StoredValue::new_local([wheel, touch_start, touch_end]);
}
