// src/core/net.rs
//
// Blocking HTTPS GET for one statistics page.
// Redirects are followed; landing anywhere other than the requested URL means
// the site has no page for that symbol (it bounces unknown symbols to a
// lookup page instead of returning 404).

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, URL_TEMPLATE, USER_AGENT};
use crate::Result;

/// Outcome of fetching one symbol's page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Found(String),
    Missing,
}

/// Source of statistics pages. The pipeline only sees this trait, so tests
/// can serve canned HTML.
pub trait PageFetcher {
    fn fetch(&self, symbol: &str) -> Result<Page>;
}

pub fn page_url(symbol: &str) -> String {
    URL_TEMPLATE.replace("{symbol}", symbol)
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, symbol: &str) -> Result<Page> {
        let url = page_url(symbol);
        let request = self.client.get(&url).build()?;
        let requested = request.url().clone();

        let resp = self.client.execute(request)?;
        if resp.url() != &requested {
            debug!("No content at requested URL: {url} (landed on {})", resp.url());
            return Ok(Page::Missing);
        }

        debug!("Page exists for ticker {symbol} (HTTP {}).", resp.status());
        Ok(Page::Found(resp.text()?))
    }
}
