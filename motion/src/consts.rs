//! Shared numeric constants for the motion crate.

// ── Cursor follower ─────────────────────────────────────────────

/// Lerp factor for the inner dot; 1.0 snaps to the pointer every frame.
pub const DOT_SMOOTHING: f64 = 1.0;

/// Lerp factor for the outer ring; lower values trail further behind.
pub const RING_SMOOTHING: f64 = 0.15;

/// Elements that switch the follower ring into its hover style.
pub const INTERACTIVE_SELECTOR: &str = r#"a, button, img, input, textarea, select, [role="button"]"#;

// ── Magnifier ───────────────────────────────────────────────────

/// Lens edge length in CSS pixels.
pub const LENS_SIZE_PX: f64 = 120.0;

/// Magnification applied to the sampled background.
pub const LENS_ZOOM: f64 = 2.0;

/// Vertical lens shift for touch input so the finger does not cover it.
pub const TOUCH_LENS_OFFSET_Y_PX: f64 = -70.0;

/// Hold time before a touch activates the lens.
pub const LONG_PRESS_MS: u32 = 300;

// ── Section navigator ───────────────────────────────────────────

/// Minimum wheel `deltaY` magnitude that counts as a section change.
pub const WHEEL_THRESHOLD_PX: f64 = 80.0;

/// Minimum vertical swipe distance that counts as a section change.
pub const SWIPE_THRESHOLD_PX: f64 = 100.0;

/// Scroll offset at or below which the page is considered at its top.
pub const TOP_EPSILON_PX: f64 = 5.0;

/// Distance from the end of the content within which the page is at its bottom.
pub const BOTTOM_EPSILON_PX: f64 = 10.0;

/// Exit animation time before the route actually changes.
pub const TRANSITION_DELAY_MS: u32 = 600;

// ── Navbar indicator ────────────────────────────────────────────

/// Fixed width of the active-link indicator pill.
pub const INDICATOR_WIDTH_PX: f64 = 65.0;

/// Delay before the first measurement after mount.
pub const INDICATOR_MOUNT_DELAY_MS: u32 = 100;

/// Delay before re-measuring after a route change.
pub const INDICATOR_ROUTE_DELAY_MS: u32 = 50;

/// Extra settle time for fonts and layout before reading bounding boxes.
pub const INDICATOR_SETTLE_MS: u32 = 150;

// ── Star-fields ─────────────────────────────────────────────────

/// Stars on the loading screen.
pub const LOADING_STAR_COUNT: usize = 300;

/// Stars on each content page.
pub const PAGE_STAR_COUNT: usize = 250;

/// Shortest twinkle cycle in seconds.
pub const STAR_MIN_DURATION_S: f64 = 4.0;

/// Random span added on top of [`STAR_MIN_DURATION_S`].
pub const STAR_DURATION_SPAN_S: f64 = 6.0;

/// Upper bound of the random animation start delay in seconds.
pub const STAR_MAX_DELAY_S: f64 = 5.0;
