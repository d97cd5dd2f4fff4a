// src/bin/cli.rs
use color_eyre::eyre::{eyre, Result};
use ks_scrape::cli::{self, Command};

fn main() -> Result<()> {
    color_eyre::install()?;

    match cli::parse_args(cli::args()).map_err(|e| eyre!(e))? {
        Command::Help => {
            eprintln!("{}", cli::help());
            Ok(())
        }
        Command::Scrape => {
            let summary = cli::run()?;
            eprintln!(
                "Appended {} records to {} ({} already stored)",
                summary.appended,
                summary.store_path.display(),
                summary.listed - summary.pending
            );
            Ok(())
        }
    }
}
