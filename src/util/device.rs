//! Browser probe feeding `motion::device::classify`.

use motion::device::{DeviceProfile, classify};

/// Read user agent, touch points, and pointer precision once. Outside the
/// browser everything reads as a plain desktop without a fine pointer.
pub fn detect() -> DeviceProfile {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return DeviceProfile::default();
        };
        let navigator = window.navigator();
        let user_agent = navigator.user_agent().unwrap_or_default();
        let touch_points = u32::try_from(navigator.max_touch_points()).unwrap_or(0);
        let fine_pointer = window
            .match_media("(pointer: fine)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches());
        let profile = classify(&user_agent, touch_points, fine_pointer);
        leptos::logging::log!("device profile: {profile:?}");
        profile
    }
    #[cfg(not(feature = "csr"))]
    {
        classify("", 0, false)
    }
}
