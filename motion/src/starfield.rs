//! Randomized decorative star-fields.
//!
//! Every draw is independent and uniform. A mount generates its set once and
//! keeps it until unmount, so stars never jump while the page is visible.

#[cfg(test)]
#[path = "starfield_test.rs"]
mod starfield_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::consts::{PAGE_STAR_COUNT, STAR_DURATION_SPAN_S, STAR_MAX_DELAY_S, STAR_MIN_DURATION_S};

/// Draw above which a star is the largest size.
const LARGE_STAR_CUTOFF: f64 = 0.98;
/// Second draw above which a star is medium size.
const MEDIUM_STAR_CUTOFF: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarfieldConfig {
    pub count: usize,
    pub min_duration_s: f64,
    pub duration_span_s: f64,
    pub max_delay_s: f64,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: PAGE_STAR_COUNT,
            min_duration_s: STAR_MIN_DURATION_S,
            duration_span_s: STAR_DURATION_SPAN_S,
            max_delay_s: STAR_MAX_DELAY_S,
        }
    }
}

impl StarfieldConfig {
    #[must_use]
    pub fn with_count(count: usize) -> Self {
        Self { count, ..Self::default() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub id: usize,
    /// Horizontal position as a percentage of the container, in `[0, 100)`.
    pub left_pct: f64,
    /// Vertical position as a percentage of the container, in `[0, 100)`.
    pub top_pct: f64,
    /// 1, 2 or 3 pixels; most stars are the smallest.
    pub size_px: u8,
    /// Twinkle cycle length.
    pub duration_s: f64,
    /// Animation start offset.
    pub delay_s: f64,
}

impl Star {
    /// Inline style for the star element.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left: {}%; top: {}%; width: {}px; height: {}px; animation-duration: {}s; animation-delay: {}s;",
            self.left_pct, self.top_pct, self.size_px, self.size_px, self.duration_s, self.delay_s
        )
    }
}

fn draw_size<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    if rng.random::<f64>() > LARGE_STAR_CUTOFF {
        3
    } else if rng.random::<f64>() > MEDIUM_STAR_CUTOFF {
        2
    } else {
        1
    }
}

/// Generate `config.count` stars from `rng`.
pub fn generate<R: Rng + ?Sized>(config: &StarfieldConfig, rng: &mut R) -> Vec<Star> {
    (0..config.count)
        .map(|id| Star {
            id,
            left_pct: rng.random::<f64>() * 100.0,
            top_pct: rng.random::<f64>() * 100.0,
            size_px: draw_size(rng),
            duration_s: config.min_duration_s + rng.random::<f64>() * config.duration_span_s,
            delay_s: rng.random::<f64>() * config.max_delay_s,
        })
        .collect()
}

/// Generate a star set from a 64-bit seed.
#[must_use]
pub fn generate_seeded(config: &StarfieldConfig, seed: u64) -> Vec<Star> {
    let mut rng = SmallRng::seed_from_u64(seed);
    generate(config, &mut rng)
}
