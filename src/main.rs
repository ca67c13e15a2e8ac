//! Salticid Gallery
//!
//! Jumping spider sighting gallery built with Leptos (WASM).
//!
//! # Features
//!
//! - Species cards sorted by sighting count
//! - Lazy-loaded field photos with per-image fallback
//! - Persisted dark mode preference
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It loads its species document from a static path relative
//! to the page; there is no backing server.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
