//! Top-level routed page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page owns its decorative layers and registers itself with
//! `util::section_nav`, which tags `<body>` and wires boundary navigation for
//! the sections that have neighbours.

pub mod about;
pub mod contact;
pub mod home;
pub mod project;
