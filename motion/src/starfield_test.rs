#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Config
// =============================================================

#[test]
fn default_config_is_page_field() {
    let c = StarfieldConfig::default();
    assert_eq!(c.count, 250);
    assert!((c.min_duration_s - 4.0).abs() < f64::EPSILON);
    assert!((c.duration_span_s - 6.0).abs() < f64::EPSILON);
    assert!((c.max_delay_s - 5.0).abs() < f64::EPSILON);
}

#[test]
fn with_count_keeps_timing() {
    let c = StarfieldConfig::with_count(300);
    assert_eq!(c.count, 300);
    assert_eq!(c.min_duration_s, StarfieldConfig::default().min_duration_s);
}

// =============================================================
// generate
// =============================================================

#[test]
fn generates_configured_count() {
    for count in [0, 1, 250, 300] {
        let stars = generate_seeded(&StarfieldConfig::with_count(count), 7);
        assert_eq!(stars.len(), count);
    }
}

#[test]
fn ids_are_sequential() {
    let stars = generate_seeded(&StarfieldConfig::with_count(50), 1);
    for (i, star) in stars.iter().enumerate() {
        assert_eq!(star.id, i);
    }
}

#[test]
fn positions_are_percentages() {
    for seed in 0..20 {
        for star in generate_seeded(&StarfieldConfig::default(), seed) {
            assert!((0.0..=100.0).contains(&star.left_pct));
            assert!((0.0..=100.0).contains(&star.top_pct));
        }
    }
}

#[test]
fn timing_within_bounds() {
    for star in generate_seeded(&StarfieldConfig::with_count(1000), 42) {
        assert!((4.0..10.0).contains(&star.duration_s), "duration {}", star.duration_s);
        assert!((0.0..5.0).contains(&star.delay_s), "delay {}", star.delay_s);
    }
}

#[test]
fn sizes_are_one_two_or_three() {
    let stars = generate_seeded(&StarfieldConfig::with_count(2000), 3);
    assert!(stars.iter().all(|s| (1..=3).contains(&s.size_px)));
}

#[test]
fn small_stars_dominate() {
    let stars = generate_seeded(&StarfieldConfig::with_count(2000), 11);
    let small = stars.iter().filter(|s| s.size_px == 1).count();
    // Expected share is 0.98 * 0.9 = 88%.
    assert!(small > 1500, "only {small} small stars");
}

#[test]
fn same_seed_same_field() {
    let a = generate_seeded(&StarfieldConfig::default(), 99);
    let b = generate_seeded(&StarfieldConfig::default(), 99);
    assert_eq!(a, b);
}

#[test]
fn different_seeds_differ() {
    let a = generate_seeded(&StarfieldConfig::default(), 1);
    let b = generate_seeded(&StarfieldConfig::default(), 2);
    assert_ne!(a, b);
}

#[test]
fn generic_rng_is_accepted() {
    let mut rng = SmallRng::seed_from_u64(5);
    let stars = generate(&StarfieldConfig::with_count(3), &mut rng);
    assert_eq!(stars.len(), 3);
}

// =============================================================
// Style
// =============================================================

#[test]
fn style_uses_percent_and_seconds() {
    let star = Star { id: 0, left_pct: 12.5, top_pct: 50.0, size_px: 2, duration_s: 6.5, delay_s: 1.25 };
    assert_eq!(
        star.style(),
        "left: 12.5%; top: 50%; width: 2px; height: 2px; animation-duration: 6.5s; animation-delay: 1.25s;"
    );
}
