//! UI-local state models.
//!
//! DESIGN
//! ======
//! Each model is a plain struct or enum with pure transition methods. Pages
//! and components wrap them in `RwSignal`s; timers and DOM events only ever
//! call the transition methods, so every lifecycle is testable natively.

pub mod contact;
pub mod image;
pub mod loading;
pub mod nav;
