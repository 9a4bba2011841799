use std::collections::HashSet;

use crate::{domain::AmphibianRecord, error::DecodeError};

/// Path of the listing endpoint, relative to the service base URL.
pub const AMPHIBIANS_PATH: &str = "amphibians";

/// Decodes a listing response body. Any bad record rejects the whole body.
pub fn decode_amphibians(body: &[u8]) -> Result<Vec<AmphibianRecord>, DecodeError> {
    Ok(serde_json::from_slice(body)?)
}

/// Names that occur more than once, in order of their second occurrence.
pub fn duplicate_names(records: &[AmphibianRecord]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for record in records {
        if !seen.insert(record.name.as_str()) && !duplicates.contains(&record.name.as_str()) {
            duplicates.push(record.name.as_str());
        }
    }
    duplicates
}
