//! # recipe-card
//!
//! The `<recipe-card>` custom element: a recipe summary (image, linked title,
//! organization, star rating, duration, ingredients) rendered inside an open
//! shadow root so its styles neither leak out nor get overridden.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`card`] | Payload type, element model, markup and scoped stylesheet |
//! | [`registry`] | Tag-name registry used to create elements by name |
//! | [`components`] | Leptos components embedding the element |
//! | [`util`] | Browser glue (hydrate feature only) |
//! | [`error`] | Decoding and registry errors |

pub mod card;
pub mod components;
pub mod error;
pub mod registry;
pub mod util;

pub use card::data::RecipeCardData;
pub use card::element::{CardState, RecipeCardElement};
pub use error::{DataError, RegistryError};
pub use registry::{ElementRegistry, RECIPE_CARD_TAG};

/// Browser entry point: installs the panic hook and console logger.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn init_browser() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("recipe-card: console logger already installed: {err}");
    }
    log::info!("recipe-card: <{RECIPE_CARD_TAG}> ready");
}
