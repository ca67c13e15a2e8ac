//! Theme Toggle Component
//!
//! Fixed-position control flipping the persisted dark mode preference.

use leptos::*;

use crate::state::global::GlobalState;
use crate::state::theme;

/// Dark mode toggle button
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let dark_mode = state.dark_mode;
    let toggle = move |_| {
        let enabled = !dark_mode.get();
        dark_mode.set(enabled);
        theme::apply_to_body(enabled);
        theme::store_preference(enabled);
    };

    view! {
        <button
            class="theme-toggle"
            on:click=toggle
            title=move || {
                if dark_mode.get() {
                    "Switch to Light Mode"
                } else {
                    "Switch to Dark Mode"
                }
            }
        >
            "Toggle Dark Mode"
        </button>
    }
}
