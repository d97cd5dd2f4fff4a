// src/cli.rs
use std::env;

use tracing::error;

use crate::{
    config::options::RunOptions,
    core::net::HttpFetcher,
    file,
    progress::Progress,
    runner::{self, RunSummary},
    Result,
};

/// Prints one line per symbol to stderr.
struct StderrProgress {
    total: usize,
    done: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Scraping {total} tickers…");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, symbol: &str, fields: usize) {
        self.done += 1;
        if fields == 0 {
            eprintln!("[{}/{}] {symbol}: no data", self.done, self.total);
        } else {
            eprintln!("[{}/{}] {symbol}: {fields} fields", self.done, self.total);
        }
    }
}

pub enum Command {
    Help,
    Scrape,
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> std::result::Result<Command, String> {
    let mut cmd = Command::Scrape;
    for a in args {
        match a.as_str() {
            "-h" | "--help" => cmd = Command::Help,
            _ => return Err(format!("Unknown arg: {a}")),
        }
    }
    Ok(cmd)
}

pub fn help() -> &'static str {
    include_str!("cli_help.txt")
}

/// Bootstrap directories and logging, then run one pass with today's date.
pub fn run() -> Result<RunSummary> {
    let opts = RunOptions::default();

    file::ensure_directory(&opts.data_dir)?;
    file::ensure_directory(&opts.logs_dir)?;
    crate::log::init(&opts.log_path())?;

    let fetcher = HttpFetcher::new()?;
    let mut progress = StderrProgress { total: 0, done: 0 };
    runner::run(&opts, &fetcher, Some(&mut progress)).inspect_err(|e| error!("Run aborted: {e}"))
}

/// Collects the process arguments, skipping the program name.
pub fn args() -> impl Iterator<Item = String> {
    env::args().skip(1)
}
