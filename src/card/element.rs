//! The `<recipe-card>` element: a shadow root holding one stylesheet and one
//! content container, repopulated on every data assignment.
//!
//! DESIGN
//! ======
//! The element is modelled without a browser so the rendering contract can be
//! exercised anywhere. The Leptos component and the hydrate glue serialise it
//! with [`RecipeCardElement::outer_html`] / [`RecipeCardElement::shadow_html`];
//! they never build card markup themselves.
//!
//! The container is created once, in [`RecipeCardElement::new`], and only its
//! children are swapped afterwards. There is no code path that adds a second
//! container or nests one inside another.

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

use super::data::RecipeCardData;
use super::markup::{CardPart, card_parts, render_parts};
use super::style::CARD_STYLE;
use crate::registry::RECIPE_CARD_TAG;

/// Observable lifecycle of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardState {
    /// Constructed, no payload accepted yet.
    #[default]
    Empty,
    /// At least one payload has been rendered.
    Populated,
}

/// The single content container (`<article>`) inside the shadow root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Article {
    children: Vec<CardPart>,
}

impl Article {
    /// Content nodes in render order.
    pub fn children(&self) -> &[CardPart] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Serialised children, without the `<article>` tags.
    pub fn inner_html(&self) -> String {
        render_parts(&self.children)
    }

    fn replace_children(&mut self, children: Vec<CardPart>) {
        self.children = children;
    }
}

/// Open shadow root: style first, container second, nothing else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShadowRoot {
    style: &'static str,
    article: Article,
}

impl ShadowRoot {
    fn new() -> Self {
        Self {
            style: CARD_STYLE,
            article: Article::default(),
        }
    }

    /// Text of the root's only `<style>` block.
    pub fn style(&self) -> &str {
        self.style
    }

    /// The root's only content container.
    pub fn article(&self) -> &Article {
        &self.article
    }

    /// Serialised root contents.
    pub fn inner_html(&self) -> String {
        format!("<style>{}</style><article>{}</article>", self.style, self.article.inner_html())
    }
}

/// A `<recipe-card>` instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecipeCardElement {
    shadow: ShadowRoot,
    state: CardState,
}

impl Default for RecipeCardElement {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeCardElement {
    /// Tag name the element is registered under.
    pub const TAG_NAME: &'static str = RECIPE_CARD_TAG;

    /// Construct an empty card with its shadow root already attached.
    pub fn new() -> Self {
        Self {
            shadow: ShadowRoot::new(),
            state: CardState::Empty,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> CardState {
        self.state
    }

    /// The open shadow root.
    pub fn shadow_root(&self) -> &ShadowRoot {
        &self.shadow
    }

    /// Assign the card's data.
    ///
    /// `None` leaves the card exactly as it was. `Some` replaces the whole
    /// container content with a fresh rendering of the payload; nothing from
    /// an earlier payload survives.
    pub fn set_data(&mut self, data: Option<&RecipeCardData>) {
        let Some(data) = data else {
            return;
        };
        self.shadow.article.replace_children(card_parts(data));
        self.state = CardState::Populated;
    }

    /// Serialised shadow root contents (style block and container).
    pub fn shadow_html(&self) -> String {
        self.shadow.inner_html()
    }

    /// Serialised host element with a declarative open shadow root, suitable
    /// for server-rendered HTML.
    pub fn outer_html(&self) -> String {
        format!(
            r#"<{tag}><template shadowrootmode="open">{root}</template></{tag}>"#,
            tag = Self::TAG_NAME,
            root = self.shadow_html()
        )
    }
}
