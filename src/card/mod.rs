//! Recipe card rendering core.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser-independent model of the `<recipe-card>` element. Leptos components
//! and hydrate glue in `components`/`util` only serialise what lives here.

pub mod data;
pub mod element;
pub mod markup;
pub mod stars;
pub mod style;
