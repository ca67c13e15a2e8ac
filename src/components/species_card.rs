//! Species Card Component
//!
//! One card per species record: heading plus a grid of lazily loaded field
//! photos. A photo that fails to load hides its own slot.

use leptos::*;

use crate::state::global::SpeciesRecord;

/// Species card component
#[component]
pub fn SpeciesCard(record: SpeciesRecord) -> impl IntoView {
    let heading = record.heading();
    let alt = record.display_name().to_string();
    let sources = record.image_sources();

    view! {
        <div class="species-card">
            <h2 class="species-heading">{heading}</h2>

            <div class="image-grid">
                {sources.into_iter().map(|src| view! {
                    <CardImage src=src alt=alt.clone() />
                }).collect_view()}
            </div>
        </div>
    }
}

/// A single photo slot, hidden if its asset is missing
#[component]
fn CardImage(
    #[prop(into)]
    src: String,
    #[prop(into)]
    alt: String,
) -> impl IntoView {
    let (visible, set_visible) = create_signal(true);

    view! {
        <img
            src=src
            alt=alt
            loading="lazy"
            class="card-photo"
            class:hidden=move || !visible.get()
            on:error=move |_| set_visible.set(false)
        />
    }
}
