//! Custom element registry: tag name to element factory.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosts create cards either from markup (`<recipe-card>`) or by name through
//! [`ElementRegistry::create_element`]. Both paths resolve the tag here, so
//! the element has exactly one registered name.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::HashMap;

use crate::card::element::RecipeCardElement;
use crate::error::RegistryError;

/// Tag name of the recipe card element.
pub const RECIPE_CARD_TAG: &str = "recipe-card";

/// Names the HTML standard reserves even though they contain a hyphen.
const RESERVED_NAMES: [&str; 8] = [
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

/// Factory invoked for each new element.
pub type ElementFactory<E> = fn() -> E;

/// Maps custom element names to factories.
#[derive(Debug)]
pub struct ElementRegistry<E = RecipeCardElement> {
    definitions: HashMap<String, ElementFactory<E>>,
}

impl<E> Default for ElementRegistry<E> {
    fn default() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }
}

impl ElementRegistry<RecipeCardElement> {
    /// A registry with `recipe-card` already defined.
    pub fn with_recipe_card() -> Self {
        let mut registry = Self::default();
        registry
            .definitions
            .insert(RECIPE_CARD_TAG.to_owned(), RecipeCardElement::new);
        registry
    }
}

impl<E> ElementRegistry<E> {
    /// Define `name` with `factory`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::InvalidName`] if `name` is not a valid custom element
    /// name, [`RegistryError::AlreadyDefined`] if it is already taken.
    pub fn define(&mut self, name: &str, factory: ElementFactory<E>) -> Result<(), RegistryError> {
        if !is_valid_custom_element_name(name) {
            leptos::logging::warn!("custom element registry: rejected name {name:?}");
            return Err(RegistryError::InvalidName(name.to_owned()));
        }
        if self.definitions.contains_key(name) {
            leptos::logging::warn!("custom element registry: {name:?} defined twice");
            return Err(RegistryError::AlreadyDefined(name.to_owned()));
        }
        self.definitions.insert(name.to_owned(), factory);
        Ok(())
    }

    /// Whether `name` has a definition. Matched like [`Self::create_element`].
    pub fn is_defined(&self, name: &str) -> bool {
        self.definitions.contains_key(&lookup_key(name))
    }

    /// Construct a new element by tag name.
    ///
    /// Names are matched ASCII case-insensitively, as HTML parsers lowercase
    /// tag names.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotDefined`] if nothing is registered under `name`.
    pub fn create_element(&self, name: &str) -> Result<E, RegistryError> {
        let factory = self
            .definitions
            .get(&lookup_key(name))
            .ok_or_else(|| RegistryError::NotDefined(name.to_owned()))?;
        Ok(factory())
    }

    /// Defined names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names = self.definitions.keys().map(String::as_str).collect::<Vec<_>>();
        names.sort_unstable();
        names
    }
}

/// HTML parsers lowercase tag names, so lookups do too.
fn lookup_key(name: &str) -> String {
    name.to_ascii_lowercase()
}

/// Whether `name` is a valid custom element name: starts with a lowercase
/// ASCII letter, contains a hyphen, has no ASCII uppercase, whitespace or
/// markup-significant characters, and is not one of the reserved names.
pub fn is_valid_custom_element_name(name: &str) -> bool {
    let Some(first) = name.chars().next() else {
        return false;
    };
    if !first.is_ascii_lowercase() || !name.contains('-') {
        return false;
    }
    if RESERVED_NAMES.contains(&name) {
        return false;
    }
    name.chars().all(|ch| {
        !ch.is_ascii_uppercase()
            && !ch.is_whitespace()
            && !matches!(ch, '<' | '>' | '/' | '"' | '\'' | '=' | '&')
            && !ch.is_control()
    })
}
