//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{loading::LoadingOverlay, navbar::Navbar, smooth_follower::SmoothFollower};
use crate::pages::{about::AboutPage, contact::ContactPage, home::HomePage, project::ProjectPage};
use crate::util::device;

/// Root application component.
///
/// Classifies the device once and provides the profile to every component,
/// then lays the cursor, loading overlay and navbar over the routed pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(device::detect());

    #[cfg(feature = "csr")]
    install_pull_to_refresh_guard();

    view! {
        <Title text="Jetsadakorn | Portfolio"/>
        <Meta name="description" content="Portfolio of Jetsadakorn Muangwichit, Computer Science student."/>

        <Router>
            <SmoothFollower/>
            <LoadingOverlay/>
            <Navbar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=StaticSegment("project") view=ProjectPage/>
                <Route path=StaticSegment("contact") view=ContactPage/>
            </Routes>
        </Router>
    }
}

/// Stop iOS Safari's pull-to-refresh when the page is already at the top.
#[cfg(feature = "csr")]
fn install_pull_to_refresh_guard() {
    use std::cell::Cell;
    use std::rc::Rc;

    use motion::navigator::blocks_pull_to_refresh;

    use crate::util::listener::EventListener;

    let first_y = |ev: &web_sys::TouchEvent| ev.touches().get(0).map(|t| f64::from(t.client_y()));
    let last_y = Rc::new(Cell::new(0.0));

    let start = {
        let last_y = Rc::clone(&last_y);
        EventListener::on_document("touchstart", true, move |ev: web_sys::TouchEvent| {
            if let Some(y) = first_y(&ev) {
                last_y.set(y);
            }
        })
    };

    let moved = EventListener::on_document("touchmove", false, move |ev: web_sys::TouchEvent| {
        let Some(y) = first_y(&ev) else {
            return;
        };
        let scroll_top = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
        if blocks_pull_to_refresh(scroll_top, last_y.get(), y) {
            ev.prevent_default();
        }
    });

    StoredValue::new_local([start, moved]);
}
