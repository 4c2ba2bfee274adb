//! Leptos wrapper around the `<recipe-card>` element.
//!
//! DESIGN
//! ======
//! Each component instance owns one [`RecipeCardElement`] for its whole
//! lifetime. Every change of `data` goes through
//! [`RecipeCardElement::set_data`], so a `None` payload keeps whatever the card
//! showed last. Server output carries a declarative shadow root; once
//! hydrated, the browser's real shadow root is kept in sync from the same
//! element.

use leptos::prelude::*;

use crate::card::data::RecipeCardData;
use crate::card::element::RecipeCardElement;

/// A recipe card bound to a reactive payload.
#[component]
pub fn RecipeCard(#[prop(into)] data: Signal<Option<RecipeCardData>>) -> impl IntoView {
    let element = StoredValue::new(RecipeCardElement::new());
    let markup = Memo::new(move |_| {
        let payload = data.get();
        element.update_value(|card| card.set_data(payload.as_ref()));
        element.with_value(RecipeCardElement::outer_html)
    });
    let mount_ref = NodeRef::<leptos::html::Div>::new();

    // `inner_html` swaps the host whenever `markup` changes, so the shadow
    // root is written a frame later, against whichever host is current then.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        markup.track();
        crate::util::shadow::after_next_frame(move || {
            // The component may be gone by the time the frame fires.
            let Some(Some(mount)) = mount_ref.try_get_untracked() else {
                return;
            };
            let Some(root_html) = element.try_with_value(RecipeCardElement::shadow_html) else {
                return;
            };
            crate::util::shadow::sync_shadow_root(&mount, &root_html);
        });
    });

    view! {
        <div class="recipe-card-mount" node_ref=mount_ref inner_html=move || markup.get()></div>
    }
}
