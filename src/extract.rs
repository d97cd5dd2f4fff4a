// src/extract.rs
use tracing::{debug, warn};

use crate::core::sanitize::canonicalize;
use crate::value::{normalize, Value};

/// One `label | value` table row → one field.
///
/// The label always goes through `canonicalize`, even when it looks numeric,
/// so "52 Week High" stays a name. The value goes through the full
/// `normalize` cascade. Rows without exactly two cells, or where either side
/// normalizes to nothing, produce no field.
pub fn extract_row<S: AsRef<str>>(cells: &[S]) -> Option<(String, Value)> {
    let [name, value] = cells else {
        warn!("Row does not contain only two cells!");
        debug!("Row cells: {:?}", cells.iter().map(|c| c.as_ref()).collect::<Vec<&str>>());
        return None;
    };

    let name = canonicalize(name.as_ref());
    let value = normalize(value.as_ref());
    if name.is_empty() || value.is_empty() {
        return None;
    }

    debug!("Scraped row {name}: {value:?}.");
    Some((name, value))
}
