//! HTTP Client
//!
//! Fetches the species document served next to the page.

use gloo_net::http::Request;

use crate::state::global::SpeciesRecord;

/// Relative path of the species document
pub const SPECIES_DATA_PATH: &str = "data/jumping_spider_list.json";

/// Fetch the species list
pub async fn fetch_species() -> Result<Vec<SpeciesRecord>, String> {
    let response = Request::get(SPECIES_DATA_PATH)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed with status {}", response.status()));
    }

    let records: Vec<SpeciesRecord> = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(records)
}
