//! Browser helpers shared by pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules keep `web_sys` plumbing out of the views. Each helper
//! compiles natively as a no-op so state and page logic stay testable off
//! the browser.

pub mod device;
pub mod dom;
pub mod frame_loop;
pub mod listener;
pub mod preload;
pub mod section_nav;
