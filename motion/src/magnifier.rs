//! Image magnifier: lens placement, zoomed background offset, and the touch
//! long-press gesture.
//!
//! Pointer input shows the lens immediately. Touch input goes through a small
//! state machine so that a normal scroll swipe over the image never opens the
//! lens:
//!
//! ```text
//! Idle --touch_start--> Pending --(long press elapsed)--> Active
//!                          |                                 |
//!                      touch_move                      touch_end/cancel
//!                          v                                 v
//!                        Idle                              Idle
//! ```
//!
//! Each `touch_start` hands out a ticket. The host arms a timer with it and
//! reports back through [`Magnifier::long_press_elapsed`]; a stale ticket
//! from an earlier gesture is ignored.

#[cfg(test)]
#[path = "magnifier_test.rs"]
mod magnifier_test;

use crate::consts::{LENS_SIZE_PX, LENS_ZOOM, LONG_PRESS_MS, TOUCH_LENS_OFFSET_Y_PX};
use crate::geom::{Point, Size, clamp_to_extent};

/// Fixed lens parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnifierConfig {
    /// Lens edge length in CSS pixels.
    pub lens_size: f64,
    /// Background magnification.
    pub zoom: f64,
    /// Vertical lens shift applied only to touch input.
    pub touch_offset_y: f64,
    /// Hold time before a touch activates the lens.
    pub long_press_ms: u32,
}

impl Default for MagnifierConfig {
    fn default() -> Self {
        Self {
            lens_size: LENS_SIZE_PX,
            zoom: LENS_ZOOM,
            touch_offset_y: TOUCH_LENS_OFFSET_Y_PX,
            long_press_ms: LONG_PRESS_MS,
        }
    }
}

/// Which device produced the latest position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum InputKind {
    #[default]
    Pointer,
    Touch,
}

/// Touch gesture progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TouchPhase {
    /// No touch in progress, or the pending press was cancelled by movement.
    #[default]
    Idle,
    /// Finger down; waiting for the long-press timer with this ticket.
    Pending { ticket: u64 },
    /// Lens is showing and following the finger.
    Active,
}

/// What the host should do with a `touchmove` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchMove {
    /// The finger moved before the long press fired; the gesture is abandoned.
    Cancelled,
    /// The lens followed the finger. When `prevent_scroll` is set the host
    /// must call `preventDefault` so the page does not scroll underneath.
    Tracked { prevent_scroll: bool },
}

/// Resolved lens layout, all values in CSS pixels relative to the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensGeometry {
    pub left: f64,
    pub top: f64,
    pub size: f64,
    /// The clamped sample point in image coordinates.
    pub sample: Point,
    pub background_x: f64,
    pub background_y: f64,
    pub background_width: f64,
    pub background_height: f64,
}

impl LensGeometry {
    /// Inline style for the lens element (`background-image` excluded).
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left: {}px; top: {}px; width: {}px; height: {}px; background-size: {}px {}px; background-position: {}px {}px;",
            self.left,
            self.top,
            self.size,
            self.size,
            self.background_width,
            self.background_height,
            self.background_x,
            self.background_y,
        )
    }
}

/// Magnifier state for one preview image.
#[derive(Debug, Clone, Default)]
pub struct Magnifier {
    config: MagnifierConfig,
    position: Point,
    image: Size,
    input: InputKind,
    visible: bool,
    touch: TouchPhase,
    next_ticket: u64,
}

impl Magnifier {
    #[must_use]
    pub fn new(config: MagnifierConfig) -> Self {
        Self { config, ..Self::default() }
    }

    #[must_use]
    pub fn config(&self) -> MagnifierConfig {
        self.config
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn touch_phase(&self) -> TouchPhase {
        self.touch
    }

    // --- Pointer ---

    pub fn pointer_enter(&mut self) {
        self.visible = true;
    }

    pub fn pointer_leave(&mut self) {
        self.visible = false;
    }

    /// `local` is the pointer position relative to the image origin.
    pub fn pointer_move(&mut self, local: Point, image: Size) {
        self.position = local;
        self.image = image;
        self.input = InputKind::Pointer;
    }

    // --- Touch ---

    /// Start a press. Returns the ticket the host must pass back once
    /// `long_press_ms` has elapsed.
    pub fn touch_start(&mut self, local: Point, image: Size) -> u64 {
        self.position = local;
        self.image = image;
        self.input = InputKind::Touch;
        self.next_ticket = self.next_ticket.wrapping_add(1);
        self.touch = TouchPhase::Pending { ticket: self.next_ticket };
        self.next_ticket
    }

    /// Long-press timer fired. Returns `true` if this activated the lens.
    pub fn long_press_elapsed(&mut self, ticket: u64) -> bool {
        if self.touch != (TouchPhase::Pending { ticket }) {
            return false;
        }
        self.touch = TouchPhase::Active;
        self.visible = true;
        log::debug!("magnifier activated by long press");
        true
    }

    pub fn touch_move(&mut self, local: Point, image: Size) -> TouchMove {
        match self.touch {
            TouchPhase::Pending { .. } => {
                self.touch = TouchPhase::Idle;
                TouchMove::Cancelled
            }
            TouchPhase::Active => {
                self.position = local;
                self.image = image;
                TouchMove::Tracked { prevent_scroll: true }
            }
            TouchPhase::Idle => {
                self.position = local;
                self.image = image;
                TouchMove::Tracked { prevent_scroll: false }
            }
        }
    }

    /// Finger lifted or the touch was cancelled by the browser.
    pub fn touch_end(&mut self) {
        self.touch = TouchPhase::Idle;
        self.visible = false;
        self.input = InputKind::Pointer;
    }

    // --- Geometry ---

    /// Lens layout if the lens is showing.
    #[must_use]
    pub fn lens(&self) -> Option<LensGeometry> {
        self.visible.then(|| self.geometry())
    }

    /// Lens layout for the current position regardless of visibility.
    ///
    /// The lens is centered on the input point, lifted by the touch offset for
    /// touch input. The zoomed background samples the lens center (not the raw
    /// input point), clamped to the image so the sample never leaves it.
    #[must_use]
    pub fn geometry(&self) -> LensGeometry {
        let half = self.config.lens_size / 2.0;
        let lift = match self.input {
            InputKind::Touch => self.config.touch_offset_y,
            InputKind::Pointer => 0.0,
        };
        let left = self.position.x - half;
        let top = self.position.y - half + lift;

        let sample = Point::new(
            clamp_to_extent(left + half, self.image.width),
            clamp_to_extent(top + half, self.image.height),
        );

        LensGeometry {
            left,
            top,
            size: self.config.lens_size,
            sample,
            background_x: -(sample.x * self.config.zoom - half),
            background_y: -(sample.y * self.config.zoom - half),
            background_width: self.image.width * self.config.zoom,
            background_height: self.image.height * self.config.zoom,
        }
    }
}
