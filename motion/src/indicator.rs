//! Navbar active-indicator placement.

#[cfg(test)]
#[path = "indicator_test.rs"]
mod indicator_test;

use crate::consts::INDICATOR_WIDTH_PX;
use crate::geom::Rect;

const ANIMATED_TRANSITION: &str = "left 0.4s cubic-bezier(0.4, 0, 0.2, 1)";

/// Left offset that centers an indicator of `indicator_width` under `link`,
/// measured from the left edge of `container`. Never negative.
#[must_use]
pub fn indicator_left(link: Rect, container: Rect, indicator_width: f64) -> f64 {
    (link.center_x() - container.left - indicator_width / 2.0).max(0.0)
}

/// One resolved placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub left: f64,
    /// `false` only for the very first placement, which must jump into place.
    pub animate: bool,
}

impl Placement {
    #[must_use]
    pub fn transition(&self) -> &'static str {
        if self.animate { ANIMATED_TRANSITION } else { "none" }
    }

    #[must_use]
    pub fn style(&self) -> String {
        format!("left: {}px; transition: {};", self.left, self.transition())
    }
}

/// Tracks whether the indicator has been placed before.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorState {
    width: f64,
    placed: Option<Placement>,
}

impl Default for IndicatorState {
    fn default() -> Self {
        Self::new(INDICATOR_WIDTH_PX)
    }
}

impl IndicatorState {
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self { width, placed: None }
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.placed.is_some()
    }

    #[must_use]
    pub fn current(&self) -> Option<Placement> {
        self.placed
    }

    /// Record a fresh measurement and return where the indicator goes.
    pub fn place(&mut self, link: Rect, container: Rect) -> Placement {
        let placement = Placement {
            left: indicator_left(link, container, self.width),
            animate: self.is_initialized(),
        };
        self.placed = Some(placement);
        placement
    }
}
