//! A column of independent recipe cards.

use leptos::prelude::*;

use crate::card::data::RecipeCardData;
use crate::components::recipe_card::RecipeCard;

/// Renders one `<recipe-card>` per recipe, in input order.
#[component]
pub fn RecipeCardList(#[prop(into)] recipes: Signal<Vec<RecipeCardData>>) -> impl IntoView {
    view! {
        <section class="recipe-card-list">
            {move || {
                recipes
                    .get()
                    .into_iter()
                    .map(|recipe| view! { <RecipeCard data=Signal::stored(Some(recipe))/> })
                    .collect::<Vec<_>>()
            }}
        </section>
    }
}
