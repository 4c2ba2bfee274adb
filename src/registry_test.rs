use super::*;
use crate::card::data::RecipeCardData;
use crate::card::element::CardState;

// =============================================================
// Default registry
// =============================================================

#[test]
fn with_recipe_card_defines_the_card_tag() {
    let registry = ElementRegistry::with_recipe_card();
    assert!(registry.is_defined("recipe-card"));
    assert_eq!(registry.names(), vec!["recipe-card"]);
}

#[test]
fn create_element_returns_a_fresh_empty_card() {
    let registry = ElementRegistry::with_recipe_card();
    let card = registry.create_element(RECIPE_CARD_TAG).expect("card should be defined");
    assert_eq!(card.state(), CardState::Empty);
}

#[test]
fn create_element_matches_tag_case_insensitively() {
    let registry = ElementRegistry::with_recipe_card();
    assert!(registry.create_element("RECIPE-CARD").is_ok());
}

#[test]
fn is_defined_matches_tag_case_insensitively() {
    let registry = ElementRegistry::with_recipe_card();
    assert!(registry.is_defined("RECIPE-CARD"));
    assert!(registry.is_defined("Recipe-Card"));
    assert_eq!(registry.is_defined("RECIPE-CARD"), registry.create_element("RECIPE-CARD").is_ok());
}

#[test]
fn created_elements_do_not_share_state() {
    let registry = ElementRegistry::with_recipe_card();
    let mut first = registry.create_element(RECIPE_CARD_TAG).expect("card should be defined");
    let second = registry.create_element(RECIPE_CARD_TAG).expect("card should be defined");
    first.set_data(Some(&RecipeCardData::default()));
    assert_eq!(first.state(), CardState::Populated);
    assert_eq!(second.state(), CardState::Empty);
}

#[test]
fn create_element_rejects_unknown_tag() {
    let registry = ElementRegistry::with_recipe_card();
    let err = registry.create_element("recipe-list").expect_err("tag is not defined");
    assert_eq!(err, RegistryError::NotDefined("recipe-list".to_owned()));
}

// =============================================================
// define
// =============================================================

#[test]
fn define_rejects_redefinition() {
    let mut registry = ElementRegistry::with_recipe_card();
    let err = registry
        .define(RECIPE_CARD_TAG, RecipeCardElement::new)
        .expect_err("second definition should fail");
    assert_eq!(err, RegistryError::AlreadyDefined("recipe-card".to_owned()));
}

#[test]
fn define_rejects_invalid_names() {
    let mut registry = ElementRegistry::<RecipeCardElement>::default();
    for name in ["recipecard", "Recipe-card", "1-card", "", "font-face"] {
        let err = registry
            .define(name, RecipeCardElement::new)
            .expect_err("invalid name should fail");
        assert_eq!(err, RegistryError::InvalidName(name.to_owned()));
    }
    assert!(registry.names().is_empty());
}

#[test]
fn define_accepts_new_names() {
    let mut registry = ElementRegistry::<RecipeCardElement>::default();
    registry
        .define("featured-recipe", RecipeCardElement::new)
        .expect("valid name should be accepted");
    assert!(registry.is_defined("featured-recipe"));
    assert!(!registry.is_defined("recipe-card"));
}

// =============================================================
// is_valid_custom_element_name
// =============================================================

#[test]
fn valid_names_need_lowercase_start_and_hyphen() {
    assert!(is_valid_custom_element_name("recipe-card"));
    assert!(is_valid_custom_element_name("x-1"));
    assert!(is_valid_custom_element_name("my-élément"));
    assert!(!is_valid_custom_element_name("recipe"));
    assert!(!is_valid_custom_element_name("-card"));
    assert!(!is_valid_custom_element_name("recipe-Card"));
}

#[test]
fn valid_names_exclude_markup_characters_and_reserved_names() {
    assert!(!is_valid_custom_element_name("recipe card-x"));
    assert!(!is_valid_custom_element_name("recipe-<card>"));
    assert!(!is_valid_custom_element_name("annotation-xml"));
    assert!(!is_valid_custom_element_name("missing-glyph"));
}
