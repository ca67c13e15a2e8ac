//! State Management
//!
//! Global application state and the persisted theme preference.

pub mod global;
pub mod theme;

pub use global::{provide_global_state, GlobalState, SpeciesRecord};
