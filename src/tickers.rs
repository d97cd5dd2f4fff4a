// src/tickers.rs

use std::{fs, path::Path};

use tracing::{info, info_span, warn};

use crate::config::consts::DEFAULT_TICKERS;
use crate::{file, store::RecordStore, Error, Result};

/// Read the watchlist, writing the default sample list first if the file
/// doesn't exist. One symbol per line, trimmed; blank lines are ignored.
/// Order and duplicates are kept.
pub fn load_or_init(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        file::ensure_parent(path)?;
        fs::write(path, DEFAULT_TICKERS.join("\n")).map_err(|e| Error::io(path, e))?;
        info!("Created {} with sample tickers.", path.display());
    }
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(parse(&text))
}

fn parse(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

/// Watchlist minus what today's store already holds, in watchlist order.
///
/// Each stored record removes the *first* remaining occurrence of its symbol,
/// so a symbol listed twice but stored once is still scraped once more.
/// Stored symbols that aren't on the watchlist are ignored.
pub fn pending(mut watchlist: Vec<String>, store: &RecordStore) -> Vec<String> {
    let _span = info_span!("remove_scraped").entered();

    let before = watchlist.len();
    for scraped in store.scraped_symbols() {
        if let Some(i) = watchlist.iter().position(|t| t == scraped) {
            watchlist.remove(i);
        }
    }

    let removed = before - watchlist.len();
    if removed > 0 {
        warn!("Skipping {removed} tickers already scraped at {}!", store.path().display());
    }
    watchlist
}
