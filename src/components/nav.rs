//! Navigation Component
//!
//! Header navigation bar with a toggled links panel. A document-level click
//! outside both the toggle and the panel closes it.

use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);

    let toggle_ref = create_node_ref::<html::Button>();
    let panel_ref = create_node_ref::<html::Div>();

    // Close the menu on any click that lands outside the toggle and panel
    create_effect(move |_| {
        let (Some(toggle), Some(panel)) = (toggle_ref.get(), panel_ref.get()) else {
            return;
        };
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let on_document_click = Closure::wrap(Box::new(move |ev: web_sys::MouseEvent| {
            let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            let inside_toggle = toggle.contains(target.as_ref());
            let inside_panel = panel.contains(target.as_ref());
            if !inside_toggle && !inside_panel {
                set_menu_open.set(false);
            }
        }) as Box<dyn FnMut(_)>);

        let _ = document.add_event_listener_with_callback(
            "click",
            on_document_click.as_ref().unchecked_ref(),
        );

        // The listener lives as long as the page
        on_document_click.forget();
    });

    view! {
        <nav class="site-nav">
            <div class="nav-inner">
                // Logo and brand
                <a href="index.html" class="brand">
                    <span class="brand-mark">"🕷"</span>
                    <span class="brand-name">"Salticid Gallery"</span>
                </a>

                // Menu toggle control
                <button
                    node_ref=toggle_ref
                    class="menu-toggle"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    "Menu"
                </button>

                // Links panel
                <div
                    node_ref=panel_ref
                    class="menu-links"
                    class:visible=move || menu_open.get()
                    class:invisible=move || !menu_open.get()
                >
                    <NavLink href="index.html" label="Home" />
                    <NavLink href="most-common.html" label="Most Common" />
                    <NavLink href="about.html" label="About" />
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <a href=href class="menu-link">
            {label}
        </a>
    }
}
