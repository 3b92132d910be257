//! Cursor follower: a snapping dot and a trailing ring.
//!
//! Input handlers only ever write the [`Follower::set_target`] point. The
//! animation loop calls [`Follower::tick`] once per display refresh, which
//! moves each marker a fixed fraction of the remaining distance. The dot uses
//! a factor of 1.0 and lands on the pointer every frame; the ring uses 0.15
//! and trails behind, which is what produces the elastic look.

#[cfg(test)]
#[path = "follower_test.rs"]
mod follower_test;

use crate::consts::{DOT_SMOOTHING, RING_SMOOTHING};
use crate::geom::Point;

/// Damping factors for the two markers. Each must lie in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowerConfig {
    pub dot_factor: f64,
    pub ring_factor: f64,
}

impl Default for FollowerConfig {
    fn default() -> Self {
        Self { dot_factor: DOT_SMOOTHING, ring_factor: RING_SMOOTHING }
    }
}

/// Positions produced by one animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowerFrame {
    pub dot: Point,
    pub ring: Point,
}

/// Smoothed marker positions chasing the latest pointer position.
#[derive(Debug, Clone, Default)]
pub struct Follower {
    config: FollowerConfig,
    target: Point,
    dot: Point,
    ring: Point,
}

impl Follower {
    #[must_use]
    pub fn new(config: FollowerConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// Record the raw pointer position. Markers catch up on the next tick.
    pub fn set_target(&mut self, target: Point) {
        self.target = target;
    }

    /// Advance both markers by one frame.
    pub fn tick(&mut self) -> FollowerFrame {
        self.dot = self.dot.lerp_toward(self.target, self.config.dot_factor);
        self.ring = self.ring.lerp_toward(self.target, self.config.ring_factor);
        FollowerFrame { dot: self.dot, ring: self.ring }
    }

    #[must_use]
    pub fn target(&self) -> Point {
        self.target
    }

    #[must_use]
    pub fn dot(&self) -> Point {
        self.dot
    }

    #[must_use]
    pub fn ring(&self) -> Point {
        self.ring
    }
}

/// Presentation flags for the follower markers.
///
/// Hover is decided by the caller through delegation: a document-level
/// `mouseover` reports whether its target sits inside an interactive element
/// (see [`crate::consts::INTERACTIVE_SELECTOR`]), so swapping routed content
/// never requires re-binding listeners.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorFlags {
    pub visible: bool,
    pub hovering: bool,
    pub clicking: bool,
}

impl CursorFlags {
    /// Pointer moved anywhere in the window.
    pub fn pointer_moved(&mut self) {
        self.visible = true;
    }

    /// Pointer entered an element; `interactive` is the delegation result.
    pub fn pointer_over(&mut self, interactive: bool) {
        self.visible = true;
        self.hovering = interactive;
    }

    /// Pointer left the document entirely (no related target).
    pub fn pointer_left_document(&mut self) {
        self.visible = false;
        self.hovering = false;
    }

    pub fn button_down(&mut self) {
        self.clicking = true;
    }

    pub fn button_up(&mut self) {
        self.clicking = false;
    }

    /// CSS class list for the container element.
    #[must_use]
    pub fn container_class(&self) -> &'static str {
        if self.visible { "cursor-container visible" } else { "cursor-container" }
    }

    /// CSS class list for the inner dot.
    #[must_use]
    pub fn dot_class(&self) -> &'static str {
        if self.clicking { "cursor-dot clicking" } else { "cursor-dot" }
    }

    /// CSS class list for the outer ring.
    #[must_use]
    pub fn ring_class(&self) -> &'static str {
        match (self.hovering, self.clicking) {
            (true, true) => "cursor-ring hovering clicking",
            (true, false) => "cursor-ring hovering",
            (false, true) => "cursor-ring clicking",
            (false, false) => "cursor-ring",
        }
    }
}
