//! Leptos components embedding the `<recipe-card>` element.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components own element instances and re-serialise them when their signals
//! change; all card markup comes from `crate::card`.

pub mod recipe_card;
pub mod recipe_card_list;
