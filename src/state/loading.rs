//! Startup loading screen timing.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

/// The loading screen never disappears sooner than this after startup.
pub const MIN_DISPLAY_MS: f64 = 2_500.0;

/// Length of the fade-out before the screen unmounts.
pub const FADE_OUT_MS: u32 = 1_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadingPhase {
    #[default]
    Visible,
    FadingOut,
    Done,
}

#[derive(Clone, Copy, Debug)]
pub struct LoadingScreen {
    started_ms: f64,
    phase: LoadingPhase,
}

impl LoadingScreen {
    /// `now_ms` is a monotonic-enough wall clock (`Date.now()` in the browser).
    #[must_use]
    pub fn new(now_ms: f64) -> Self {
        Self { started_ms: now_ms, phase: LoadingPhase::Visible }
    }

    #[must_use]
    pub fn phase(&self) -> LoadingPhase {
        self.phase
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.phase != LoadingPhase::Done
    }

    /// Milliseconds left until the minimum display time is met.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn remaining_ms(&self, now_ms: f64) -> u32 {
        // Clamped to [0, MIN_DISPLAY_MS], so the cast is lossless.
        (MIN_DISPLAY_MS - (now_ms - self.started_ms)).clamp(0.0, MIN_DISPLAY_MS).ceil() as u32
    }

    /// Begin the fade. Returns `false` if it already started.
    pub fn start_fade(&mut self) -> bool {
        if self.phase != LoadingPhase::Visible {
            return false;
        }
        self.phase = LoadingPhase::FadingOut;
        true
    }

    pub fn finish(&mut self) {
        if self.phase == LoadingPhase::FadingOut {
            self.phase = LoadingPhase::Done;
        }
    }

    /// The tab became visible again. Mobile browsers throttle timers in
    /// background tabs, so if the minimum time has passed the fade starts
    /// right away instead of waiting on a stalled timer.
    pub fn visibility_restored(&mut self, now_ms: f64) -> bool {
        if now_ms - self.started_ms < MIN_DISPLAY_MS {
            return false;
        }
        self.start_fade()
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.phase {
            LoadingPhase::Visible => "deep-space",
            LoadingPhase::FadingOut | LoadingPhase::Done => "deep-space fade-out",
        }
    }
}
