//! Browser-free motion, gesture, and layout logic for the portfolio site.
//!
//! This crate owns every piece of interactive behavior that can be expressed
//! without touching the DOM: smoothing the cursor follower, computing the
//! magnifier lens, deciding when a wheel or swipe should change sections,
//! placing the navbar indicator, generating star-fields, and classifying the
//! host device. The Leptos app feeds it raw event coordinates and layout
//! measurements and applies the results to elements.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geom`] | `Point`, `Size`, `Rect` and linear interpolation |
//! | [`follower`] | Two-speed cursor follower and hover/click flags |
//! | [`magnifier`] | Lens geometry and the touch long-press state machine |
//! | [`navigator`] | Boundary wheel/swipe detection with a one-shot latch |
//! | [`indicator`] | Navbar indicator offset and first-placement tracking |
//! | [`starfield`] | Randomized decorative star sets |
//! | [`device`] | User-agent and pointer capability classification |
//! | [`consts`] | Tuning constants behind the `Default` configs |

pub mod consts;
pub mod device;
pub mod follower;
pub mod geom;
pub mod indicator;
pub mod magnifier;
pub mod navigator;
pub mod starfield;
