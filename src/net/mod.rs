//! Outbound network calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site has exactly one: relaying the contact form through the EmailJS
//! REST API. `email` owns the payload shape, the transport seam, and the
//! error type.

pub mod email;
