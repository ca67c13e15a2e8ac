//! Toast Notification Component
//!
//! Shows transient error messages.

use leptos::*;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="toast-region">
            {move || {
                state.error.get().map(|msg| view! {
                    <ToastMessage message=msg />
                })
            }}
        </div>
    }
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="toast toast-error">
            <span class="toast-icon">"✕"</span>
            <span class="toast-text">{message}</span>
        </div>
    }
}
