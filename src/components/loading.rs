//! Loading Component
//!
//! Skeleton states shown while the species document loads.

use leptos::*;

use crate::state::global::IMAGES_PER_CARD;

/// Skeleton loader for a single species card
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="species-card skeleton">
            <div class="skeleton-line" />
            <div class="image-grid">
                {(0..IMAGES_PER_CARD).map(|_| view! {
                    <div class="skeleton-block" />
                }).collect_view()}
            </div>
        </div>
    }
}

/// Gallery placeholder shown while the fetch is in flight
#[component]
pub fn GallerySkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="species-list-skeleton">
            {(0..count).map(|_| view! { <CardSkeleton /> }).collect_view()}
        </div>
    }
}
