//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the decorative layers and shared chrome around the
//! routed pages. Animation and gesture math lives in the `motion` crate;
//! these modules bind it to DOM events and signals.

pub mod loading;
pub mod magnifier;
pub mod navbar;
pub mod optimized_image;
pub mod smooth_follower;
pub mod starfield;
