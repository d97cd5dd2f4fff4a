// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub mod extract;
pub mod file;
pub mod log;
pub mod progress;
pub mod record;
pub mod runner;
pub mod store;
pub mod tickers;
pub mod value;

pub use error::{Error, Result};
pub use record::Record;
pub use value::Value;
