//! Startup overlay shown until the app has been on screen long enough.

use leptos::prelude::*;
use motion::consts::LOADING_STAR_COUNT;
use motion::device::DeviceProfile;

use crate::components::starfield::Starfield;
use crate::state::loading::LoadingScreen;
use crate::util::dom::now_ms;

/// Full-screen star-field with the hero logo. Fades out after the minimum
/// display time, then unmounts its content.
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let device = expect_context::<DeviceProfile>();
    let screen = RwSignal::new(LoadingScreen::new(now_ms()));
    let logo = device.hero_asset("/assets/img/hero.svg", "/assets/img/hero.png");

    #[cfg(feature = "csr")]
    install(screen);

    view! {
        <Show when=move || screen.get().is_mounted()>
            <div class=move || screen.get().class() role="status" aria-label="Loading">
                <Starfield class="loading-stars" count=LOADING_STAR_COUNT/>
                <div class="loading-content">
                    <img class="loading-logo" src=logo alt=""/>
                </div>
            </div>
        </Show>
    }
}

#[cfg(feature = "csr")]
fn install(screen: RwSignal<LoadingScreen>) {
    use gloo_timers::callback::Timeout;

    use crate::state::loading::FADE_OUT_MS;
    use crate::util::listener::EventListener;

    let min_timer = StoredValue::new_local(None::<Timeout>);
    let fade_timer = StoredValue::new_local(None::<Timeout>);

    let arm_fade = move || {
        leptos::logging::log!("loading screen fading out");
        fade_timer.set_value(Some(Timeout::new(FADE_OUT_MS, move || {
            screen.update(LoadingScreen::finish);
        })));
    };

    let remaining = screen.with_untracked(|s| s.remaining_ms(now_ms()));
    min_timer.set_value(Some(Timeout::new(remaining, move || {
        if screen.try_update(LoadingScreen::start_fade).unwrap_or(false) {
            arm_fade();
        }
    })));

    // Background tabs throttle timers; catch up when the tab comes back.
    let visibility = EventListener::on_document("visibilitychange", true, move |_: web_sys::Event| {
        let visible = web_sys::window()
            .and_then(|w| w.document())
            .is_some_and(|d| d.visibility_state() == web_sys::VisibilityState::Visible);
        if visible && screen.try_update(|s| s.visibility_restored(now_ms())).unwrap_or(false) {
            arm_fade();
        }
    });
    StoredValue::new_local(visibility);
}
