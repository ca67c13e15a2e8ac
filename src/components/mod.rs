//! UI Components
//!
//! Reusable Leptos components for the gallery.

pub mod loading;
pub mod nav;
pub mod species_card;
pub mod theme_toggle;
pub mod toast;

pub use loading::GallerySkeleton;
pub use nav::Nav;
pub use species_card::SpeciesCard;
pub use theme_toggle::ThemeToggle;
pub use toast::Toast;
