//! Scroll/swipe section navigator.
//!
//! A page that participates in section navigation owns one
//! [`SectionNavigator`]. Wheel and swipe gestures that push past the top or
//! bottom edge of the page request a transition to the neighbouring section.
//!
//! LATCH
//! =====
//! The first qualifying gesture moves the navigator from `Idle` to
//! `Transitioning` and returns a [`Transition`]. Every later gesture is
//! ignored until the page is torn down, so a burst of wheel events (trackpads
//! emit dozens per flick) produces exactly one navigation.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use crate::consts::{
    BOTTOM_EPSILON_PX, SWIPE_THRESHOLD_PX, TOP_EPSILON_PX, TRANSITION_DELAY_MS, WHEEL_THRESHOLD_PX,
};

/// Gesture direction, named after where the page content is heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// CSS class applied to the page while the transition plays.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Up => "transitioning-up",
            Self::Down => "transitioning-down",
        }
    }
}

/// Snapshot of the document scroll state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub content_height: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub fn new(scroll_top: f64, viewport_height: f64, content_height: f64) -> Self {
        Self { scroll_top, viewport_height, content_height }
    }
}

/// Gesture thresholds and timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigatorConfig {
    /// Minimum `|deltaY|` of a single wheel event.
    pub wheel_threshold: f64,
    /// Minimum vertical travel of a swipe.
    pub swipe_threshold: f64,
    /// `scroll_top` at or below this counts as the top.
    pub top_epsilon: f64,
    /// Distance from the end of the content that still counts as the bottom.
    pub bottom_epsilon: f64,
    /// Delay between the trigger and the actual route change.
    pub transition_delay_ms: u32,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            wheel_threshold: WHEEL_THRESHOLD_PX,
            swipe_threshold: SWIPE_THRESHOLD_PX,
            top_epsilon: TOP_EPSILON_PX,
            bottom_epsilon: BOTTOM_EPSILON_PX,
            transition_delay_ms: TRANSITION_DELAY_MS,
        }
    }
}

impl NavigatorConfig {
    #[must_use]
    pub fn at_top(&self, m: ScrollMetrics) -> bool {
        m.scroll_top <= self.top_epsilon
    }

    #[must_use]
    pub fn at_bottom(&self, m: ScrollMetrics) -> bool {
        m.scroll_top + m.viewport_height >= m.content_height - self.bottom_epsilon
    }
}

/// Neighbouring destinations of a page. `None` disables that direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLinks<D> {
    pub up: Option<D>,
    pub down: Option<D>,
}

impl<D: Copy> SectionLinks<D> {
    #[must_use]
    pub fn get(&self, direction: Direction) -> Option<D> {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }
}

/// A granted navigation request. The host applies `direction.class()`,
/// waits `delay_ms`, scrolls to the origin, then routes to `destination`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition<D> {
    pub direction: Direction,
    pub destination: D,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavPhase {
    #[default]
    Idle,
    Transitioning,
}

#[derive(Debug, Clone)]
pub struct SectionNavigator<D> {
    config: NavigatorConfig,
    links: SectionLinks<D>,
    phase: NavPhase,
    touch_start_y: Option<f64>,
}

impl<D: Copy> SectionNavigator<D> {
    #[must_use]
    pub fn new(config: NavigatorConfig, links: SectionLinks<D>) -> Self {
        Self { config, links, phase: NavPhase::Idle, touch_start_y: None }
    }

    #[must_use]
    pub fn phase(&self) -> NavPhase {
        self.phase
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.phase == NavPhase::Transitioning
    }

    /// Handle one wheel event.
    pub fn wheel(&mut self, delta_y: f64, metrics: ScrollMetrics) -> Option<Transition<D>> {
        let direction = if delta_y < -self.config.wheel_threshold && self.config.at_top(metrics) {
            Direction::Up
        } else if delta_y > self.config.wheel_threshold && self.config.at_bottom(metrics) {
            Direction::Down
        } else {
            return None;
        };
        self.trigger(direction)
    }

    pub fn touch_start(&mut self, y: f64) {
        self.touch_start_y = Some(y);
    }

    /// Handle the end of a swipe. `delta = start − end`, so a finger moving up
    /// the screen gives a positive delta.
    ///
    /// At the top only, a long enough swipe goes up; at the bottom only, it
    /// goes down. A page short enough to be at both edges uses the sign.
    pub fn touch_end(&mut self, y: f64, metrics: ScrollMetrics) -> Option<Transition<D>> {
        let start = self.touch_start_y.take()?;
        let delta = start - y;
        if delta.abs() <= self.config.swipe_threshold {
            return None;
        }
        // Resting at one edge picks that edge's direction whatever the sign,
        // so a long drag that leaves the page pinned at the top still routes up.
        let direction = match (self.config.at_top(metrics), self.config.at_bottom(metrics)) {
            (true, true) if delta > 0.0 => Direction::Down,
            (true, _) => Direction::Up,
            (false, true) => Direction::Down,
            (false, false) => return None,
        };
        self.trigger(direction)
    }

    fn trigger(&mut self, direction: Direction) -> Option<Transition<D>> {
        if self.is_transitioning() {
            return None;
        }
        let destination = self.links.get(direction)?;
        self.phase = NavPhase::Transitioning;
        log::debug!("section navigator triggered {direction:?}");
        Some(Transition { direction, destination, delay_ms: self.config.transition_delay_ms })
    }
}

/// Whether a document-level `touchmove` should be cancelled to stop the
/// browser's pull-to-refresh: the page is at the top and the finger is
/// moving down.
#[must_use]
pub fn blocks_pull_to_refresh(scroll_top: f64, last_touch_y: f64, touch_y: f64) -> bool {
    scroll_top <= 0.0 && touch_y > last_touch_y
}
