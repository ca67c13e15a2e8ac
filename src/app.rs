//! App Root Component
//!
//! Main application component composing the shell around the gallery.

use leptos::*;

use crate::components::{Nav, ThemeToggle, Toast};
use crate::pages::Gallery;
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <div class="page">
            // Navigation header
            <Nav />

            // Fixed dark mode control
            <ThemeToggle />

            // Main content area
            <main class="content">
                <Gallery />
            </main>

            // Footer summarizing the loaded data set
            <Footer />

            // Toast notifications
            <Toast />
        </div>
    }
}

/// Footer component showing data set totals
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="site-footer">
            {move || {
                if state.species_count() == 0 {
                    view! {
                        <span class="footer-note">"No species loaded"</span>
                    }.into_view()
                } else {
                    view! {
                        <span class="footer-note">
                            {format!(
                                "{} species, {} sightings recorded",
                                state.species_count(),
                                state.total_sightings(),
                            )}
                        </span>
                    }.into_view()
                }
            }}
        </footer>
    }
}
