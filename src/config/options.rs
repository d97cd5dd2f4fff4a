// src/config/options.rs
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use super::consts::*;

/// Everything one run needs to know about where things live and which day it is.
///
/// The date is fixed when the options are built and never re-read from the
/// clock, so a run that crosses midnight keeps writing to the same store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub tickers_path: PathBuf,
    pub data_dir: PathBuf,
    pub logs_dir: PathBuf,
    pub date: NaiveDate,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::rooted(".", Local::now().date_naive())
    }
}

impl RunOptions {
    /// All paths under `root`, with an explicit run date.
    pub fn rooted(root: impl AsRef<Path>, date: NaiveDate) -> Self {
        let root = root.as_ref();
        Self {
            tickers_path: root.join(TICKERS_FILE),
            data_dir: root.join(DATA_DIR),
            logs_dir: root.join(LOGS_DIR),
            date,
        }
    }

    /// `data/<YYYY-MM-DD>.json`
    pub fn data_path(&self) -> PathBuf {
        self.data_dir.join(join!(self.date_stem(), DATA_EXT))
    }

    /// `logs/<YYYY-MM-DD>.log`
    pub fn log_path(&self) -> PathBuf {
        self.logs_dir.join(join!(self.date_stem(), LOG_EXT))
    }

    fn date_stem(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
