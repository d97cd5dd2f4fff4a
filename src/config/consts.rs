// src/config/consts.rs

// Net config
pub const URL_TEMPLATE: &str = "https://finance.yahoo.com/quote/{symbol}/key-statistics?p={symbol}";
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) ks_scrape/0.1";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Local files
pub const TICKERS_FILE: &str = "tickers.txt";
pub const DATA_DIR: &str = "data";
pub const LOGS_DIR: &str = "logs";
pub const DATA_EXT: &str = ".json";
pub const LOG_EXT: &str = ".log";

// Written to TICKERS_FILE when it doesn't exist yet
pub const DEFAULT_TICKERS: &[&str] = &["X", "LOL", "GM"];
