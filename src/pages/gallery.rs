//! Gallery Page
//!
//! The single page of the site: loads the species document on mount and
//! renders one card per record, most sighted first.

use leptos::*;

use crate::api;
use crate::components::{GallerySkeleton, SpeciesCard};
use crate::state::global::{sort_by_sightings, GlobalState};

/// Message shown in the gallery when the species document cannot be loaded
const LOAD_ERROR_MESSAGE: &str = "Error loading spider data. Please try again later.";

/// Gallery page component
#[component]
pub fn Gallery() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch the species document on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);

            match api::fetch_species().await {
                Ok(mut records) => {
                    sort_by_sightings(&mut records);
                    state.species.set(records);
                    state.load_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load spider data: {}", e).into(),
                    );
                    state.load_error.set(Some(e.clone()));
                    state.show_error(&e);
                }
            }

            state.loading.set(false);
        });
    });

    view! {
        <div class="gallery">
            // Page header
            <div class="gallery-header">
                <h1>"Jumping Spiders of Ontario"</h1>
                <p class="gallery-subtitle">"Every recorded species, most sighted first"</p>
            </div>

            // Render target: skeletons, one error message, or the cards
            <section id="spiders" class="species-list">
                {move || {
                    if state.loading.get() {
                        view! { <GallerySkeleton /> }.into_view()
                    } else if state.load_error.get().is_some() {
                        view! {
                            <p class="load-error">{LOAD_ERROR_MESSAGE}</p>
                        }.into_view()
                    } else {
                        state.species.get()
                            .into_iter()
                            .map(|record| view! { <SpeciesCard record=record /> })
                            .collect_view()
                    }
                }}
            </section>
        </div>
    }
}
