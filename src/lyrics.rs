use crate::api::OvhClient;
use crate::scrape::LyricsComScraper;
use anyhow::{Context, Result};
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Resolves a title/artist pair to lyrics text.
///
/// One shared HTTP client backs both sources; the scraper is only attached
/// when the fallback is enabled.
pub struct Fetcher {
    api: OvhClient,
    scraper: Option<LyricsComScraper>,
}

impl Fetcher {
    pub fn new(timeout: Duration, use_fallback: bool) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("getlyr/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            api: OvhClient::new(client.clone()),
            scraper: use_fallback.then(|| LyricsComScraper::new(client)),
        })
    }

    /// Fetch lyrics from the available sources.
    ///
    /// Network errors, timeouts, bad statuses, and unusable responses all
    /// collapse to None here; no error crosses this boundary. The fallback
    /// scraper only runs when the API yields nothing.
    pub async fn fetch(&self, title: &str, artist: &str) -> Option<String> {
        match self.api.get_lyrics(title, artist).await {
            Ok(Some(lyrics)) => return Some(lyrics),
            Ok(None) => {
                tracing::debug!("API has no lyrics for: {} - {}", artist, title);
            }
            Err(e) => {
                tracing::warn!("lyrics.ovh request failed: {}", e);
            }
        }

        let scraper = self.scraper.as_ref()?;

        match scraper.get_lyrics(title, artist).await {
            Ok(lyrics) => lyrics,
            Err(e) => {
                tracing::warn!("lyrics.com scrape failed: {}", e);
                None
            }
        }
    }
}
