//! API Client
//!
//! Loading of the static species document.

pub mod client;

pub use client::{fetch_species, SPECIES_DATA_PATH};
