//! Card content nodes and their HTML serialisation.
//!
//! DESIGN
//! ======
//! Content is built as typed nodes first and serialised second, through Leptos
//! `view!` and server-side `to_html`. Payload strings land in text and
//! attribute positions that Leptos escapes, so a title containing `<script>`
//! renders as text instead of markup.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml as _;

use super::data::RecipeCardData;
use super::stars::StarRating;

/// One child of the card's content container, in render order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardPart {
    /// `<img src alt>`.
    Image { src: String, alt: String },
    /// `<p class="title"><a href>text</a></p>`.
    Title { href: String, text: String },
    /// `<p class="organization">`.
    Organization(String),
    /// `<div class="rating">` holding the glyph run and the count, separated by
    /// a space so the text reads `★★★☆☆ (42)`.
    Rating(StarRating),
    /// `<time>`.
    Duration(String),
    /// `<p class="ingredients">`.
    Ingredients(String),
}

/// Build the content nodes for `data` in their fixed order.
pub fn card_parts(data: &RecipeCardData) -> Vec<CardPart> {
    vec![
        CardPart::Image {
            src: data.img_src.clone(),
            alt: data.img_alt.clone(),
        },
        CardPart::Title {
            href: data.title_lnk.clone(),
            text: data.title_txt.clone(),
        },
        CardPart::Organization(data.organization.clone()),
        CardPart::Rating(StarRating::new(data.rating, data.num_ratings)),
        CardPart::Duration(data.length_time.clone()),
        CardPart::Ingredients(data.ingredients.clone()),
    ]
}

/// Serialise content nodes to the container's inner HTML.
pub fn render_parts(parts: &[CardPart]) -> String {
    parts.iter().map(render_part).collect()
}

fn render_part(part: &CardPart) -> String {
    match part.clone() {
        CardPart::Image { src, alt } => view! { <img src=src alt=alt/> }.to_html(),
        CardPart::Title { href, text } => view! {
            <p class="title">
                <a href=href>{text}</a>
            </p>
        }
        .to_html(),
        CardPart::Organization(name) => view! { <p class="organization">{name}</p> }.to_html(),
        CardPart::Rating(rating) => view! {
            <div class="rating">
                <span>{rating.glyphs()}</span>
                " "
                <span>{rating.count_label()}</span>
            </div>
        }
        .to_html(),
        CardPart::Duration(text) => view! { <time>{text}</time> }.to_html(),
        CardPart::Ingredients(text) => view! { <p class="ingredients">{text}</p> }.to_html(),
    }
}
