//! Host device classification.
//!
//! The browser layer collects three raw signals once at mount (user agent,
//! `navigator.maxTouchPoints`, and the `(pointer: fine)` media query) and
//! turns them into a [`DeviceProfile`] here. Components branch on the
//! profile instead of sniffing the user agent themselves.

#[cfg(test)]
#[path = "device_test.rs"]
mod device_test;

/// Capability tags for the current device.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceProfile {
    /// A mouse or trackpad is available; enables the cursor follower.
    pub fine_pointer: bool,
    /// iPhone, iPad, iPod or Mac; gets raster assets instead of SVG.
    pub apple: bool,
    /// iPad, including iPadOS reporting itself as a Mac; gets the full-screen
    /// menu instead of the desktop navbar.
    pub tablet: bool,
}

impl DeviceProfile {
    /// Pick between a vector asset and its raster fallback.
    #[must_use]
    pub fn hero_asset<'a>(&self, vector: &'a str, raster: &'a str) -> &'a str {
        if self.apple { raster } else { vector }
    }
}

/// iPadOS 13+ presents a desktop Safari user agent; the only tell is that a
/// "Mac" reports more than one touch point.
fn is_tablet(user_agent: &str, max_touch_points: u32) -> bool {
    user_agent.contains("iPad") || (user_agent.contains("Macintosh") && max_touch_points > 1)
}

fn is_apple(user_agent: &str) -> bool {
    ["iPhone", "iPad", "iPod", "Macintosh"].iter().any(|tag| user_agent.contains(tag))
}

#[must_use]
pub fn classify(user_agent: &str, max_touch_points: u32, fine_pointer: bool) -> DeviceProfile {
    DeviceProfile {
        fine_pointer,
        apple: is_apple(user_agent),
        tablet: is_tablet(user_agent, max_touch_points),
    }
}
