// src/runner.rs
//
// One pass over the watchlist:
//
//   watchlist ─ stored symbols → pending
//   per symbol: fetch page → tbody rows → fields → record → append
//
// Strictly sequential. Each record is appended before the next symbol is
// fetched, so records land in pending order and an abort loses at most the
// symbol in flight.

use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::{info, info_span, warn};

use crate::{
    config::options::RunOptions,
    core::{html, net::{Page, PageFetcher}},
    extract::extract_row,
    file,
    progress::Progress,
    record::Record,
    store::RecordStore,
    tickers,
    Result,
};

/// What a run did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub store_path: PathBuf,
    /// Symbols on the watchlist, duplicates included.
    pub listed: usize,
    /// Symbols left after removing what was already stored.
    pub pending: usize,
    /// Records written by this run.
    pub appended: usize,
}

/// Scrape every pending symbol into today's store.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &RunOptions,
    fetcher: &dyn PageFetcher,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let _span = info_span!("scrape_pages").entered();

    file::ensure_directory(&opts.data_dir)?;
    let store_path = opts.data_path();
    // Fails on a corrupt store before anything is fetched
    let mut store = RecordStore::open(&store_path)?;

    let watchlist = tickers::load_or_init(&opts.tickers_path)?;
    let listed = watchlist.len();
    let pending = tickers::pending(watchlist, &store);
    info!("Using {} tickers found in {}.", pending.len(), opts.tickers_path.display());

    if let Some(p) = progress.as_deref_mut() {
        p.begin(pending.len());
        if pending.len() < listed {
            p.log(&format!("{} of {listed} tickers already in {}", listed - pending.len(), store_path.display()));
        }
    }

    let mut appended = 0;
    for symbol in &pending {
        let record = scrape_page(symbol, fetcher, opts.date)?;
        store.append(&record)?;
        appended += 1;

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(symbol, record.fields().len());
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    info!("Appended {appended} records to {}.", store_path.display());

    Ok(RunSummary { store_path, listed, pending: pending.len(), appended })
}

/// Fetch one symbol's page and fold its rows into a record.
/// A symbol without a page still yields a record, with no fields and no date.
pub fn scrape_page(symbol: &str, fetcher: &dyn PageFetcher, date: NaiveDate) -> Result<Record> {
    let _span = info_span!("scrape_page").entered();

    let rows = get_page_rows(symbol, fetcher)?;
    let record = rows
        .iter()
        .filter_map(|cells| info_span!("scrape_row").in_scope(|| extract_row(cells.as_slice())))
        .fold(Record::builder(symbol), |b, (name, value)| b.field(name, value))
        .build(date);
    Ok(record)
}

fn get_page_rows(symbol: &str, fetcher: &dyn PageFetcher) -> Result<Vec<Vec<String>>> {
    let _span = info_span!("get_page_rows").entered();

    match fetcher.fetch(symbol)? {
        Page::Missing => {
            warn!("No page exists for ticker {symbol}!");
            Ok(Vec::new())
        }
        Page::Found(body) => {
            let rows = html::table_rows(&body);
            info!("Found {} rows for ticker {symbol}.", rows.len());
            Ok(rows)
        }
    }
}
