//! Browser environment helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps web-sys glue out of the card model and components so both stay
//! testable without a browser.

pub mod shadow;
