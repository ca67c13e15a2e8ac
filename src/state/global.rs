//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the species record
//! model the gallery renders from.

use leptos::*;

use crate::state::theme;

/// Number of image slots rendered per species card
pub const IMAGES_PER_CARD: usize = 4;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Species records, sorted by sighting count descending
    pub species: RwSignal<Vec<SpeciesRecord>>,
    /// Whether the species document is still being fetched
    pub loading: RwSignal<bool>,
    /// Failure that replaced the gallery contents
    pub load_error: RwSignal<Option<String>>,
    /// Transient error message (for toasts)
    pub error: RwSignal<Option<String>>,
    /// Dark mode preference
    pub dark_mode: RwSignal<bool>,
}

/// One entry of the species document
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct SpeciesRecord {
    pub scientific_name: String,
    #[serde(default)]
    pub regular_name: Option<String>,
    #[serde(default)]
    pub sightings: u32,
}

impl SpeciesRecord {
    /// Common name shown on the card, or a fixed fallback when the record
    /// has none (blank counts as none)
    pub fn display_name(&self) -> &str {
        match self.regular_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => "No common name",
        }
    }

    /// Card heading text
    pub fn heading(&self) -> String {
        format!(
            "{} - {} ({} sightings)",
            self.scientific_name,
            self.display_name(),
            self.sightings
        )
    }

    /// File stem of this species' photos: scientific name with the first
    /// letter lowercased and spaces replaced by underscores
    pub fn image_slug(&self) -> String {
        let mut chars = self.scientific_name.chars();
        let stem: String = match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        };
        stem.replace(' ', "_")
    }

    /// Path of the n-th photo for this species, 1-based
    pub fn image_source(&self, index: usize) -> String {
        format!("media/{}_{}.jpg", self.image_slug(), index)
    }

    /// Photo paths for every slot on the card
    pub fn image_sources(&self) -> Vec<String> {
        (1..=IMAGES_PER_CARD).map(|i| self.image_source(i)).collect()
    }
}

/// Sort records by sighting count, most sighted first. Ties keep their
/// input order (`sort_by` is stable).
pub fn sort_by_sightings(records: &mut [SpeciesRecord]) {
    records.sort_by(|a, b| b.sightings.cmp(&a.sightings));
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    // Apply the saved theme before the first render of the toggle
    let dark_mode = theme::load_preference();
    theme::apply_to_body(dark_mode);

    let state = GlobalState {
        species: create_rw_signal(Vec::new()),
        loading: create_rw_signal(false),
        load_error: create_rw_signal(None),
        error: create_rw_signal(None),
        dark_mode: create_rw_signal(dark_mode),
    };

    provide_context(state);
}

impl GlobalState {
    /// Number of species currently loaded
    pub fn species_count(&self) -> usize {
        self.species.get().len()
    }

    /// Sum of sighting counts across the loaded records
    pub fn total_sightings(&self) -> u64 {
        self.species
            .get()
            .iter()
            .map(|s| u64::from(s.sightings))
            .sum()
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(scientific: &str, regular: Option<&str>, sightings: u32) -> SpeciesRecord {
        SpeciesRecord {
            scientific_name: scientific.to_string(),
            regular_name: regular.map(str::to_string),
            sightings,
        }
    }

    #[test]
    fn heading_without_common_name() {
        let rec = record("Salticus Scenicus", None, 5);
        assert_eq!(
            rec.heading(),
            "Salticus Scenicus - No common name (5 sightings)"
        );
    }

    #[test]
    fn heading_with_common_name() {
        let rec = record("Phidippus audax", Some("Bold jumping spider"), 42);
        assert_eq!(
            rec.heading(),
            "Phidippus audax - Bold jumping spider (42 sightings)"
        );
    }

    #[test]
    fn blank_common_name_falls_back() {
        let rec = record("Eris militaris", Some("   "), 7);
        assert_eq!(rec.display_name(), "No common name");
    }

    #[test]
    fn image_sources_cover_four_slots() {
        let rec = record("Salticus Scenicus", None, 5);
        let sources = rec.image_sources();
        assert_eq!(sources.len(), IMAGES_PER_CARD);
        assert_eq!(sources[0], "media/salticus_Scenicus_1.jpg");
        assert_eq!(sources[3], "media/salticus_Scenicus_4.jpg");
    }

    #[test]
    fn missing_fields_deserialize_with_defaults() {
        let rec: SpeciesRecord =
            serde_json::from_str(r#"{"scientific_name":"Naphrys pulex"}"#).unwrap();
        assert_eq!(rec.sightings, 0);
        assert_eq!(rec.regular_name, None);
    }

    #[test]
    fn sort_is_descending_and_stable() {
        let mut records = vec![
            record("Eris militaris", None, 3),
            record("Phidippus audax", None, 9),
            record("Naphrys pulex", None, 3),
            record("Salticus scenicus", None, 0),
        ];
        sort_by_sightings(&mut records);

        let counts: Vec<u32> = records.iter().map(|r| r.sightings).collect();
        assert!(counts.windows(2).all(|w| w[0] >= w[1]));
        // Equal counts keep document order
        assert_eq!(records[1].scientific_name, "Eris militaris");
        assert_eq!(records[2].scientific_name, "Naphrys pulex");
    }

    #[test]
    fn record_with_no_sightings_field_sorts_last() {
        let mut records = vec![
            record("Salticus scenicus", None, 0),
            record("Phidippus audax", None, 1),
        ];
        sort_by_sightings(&mut records);
        assert_eq!(records[0].scientific_name, "Phidippus audax");
    }
}
