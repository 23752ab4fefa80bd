use crate::error::FetchError;
use reqwest::StatusCode;
use scraper::{Html, Selector};

const SEARCH_BASE_URL: &str = "https://www.lyrics.com/lyrics/";
const SITE_BASE_URL: &str = "https://www.lyrics.com";

/// Fallback source scraping lyrics.com search results.
///
/// This depends on the site's markup structure and is only consulted when
/// the API source comes up empty.
pub struct LyricsComScraper {
    client: reqwest::Client,
}

impl LyricsComScraper {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Scrape lyrics via two sequential requests: the search results page,
    /// then the first matching song page.
    /// Returns None when either page lacks the expected markup.
    pub async fn get_lyrics(
        &self,
        title: &str,
        artist: &str,
    ) -> Result<Option<String>, FetchError> {
        let query = format!("{} {}", title, artist);
        let search_url = format!("{}{}", SEARCH_BASE_URL, urlencoding::encode(&query));

        tracing::debug!("Searching lyrics.com: {}", search_url);
        let search_html = self.fetch_page(&search_url).await?;

        let Some(path) = first_result_path(&search_html) else {
            tracing::debug!("No search results for: {} - {}", artist, title);
            return Ok(None);
        };

        let song_url = format!("{}{}", SITE_BASE_URL, path);
        tracing::debug!("Fetching song page: {}", song_url);
        let song_html = self.fetch_page(&song_url).await?;

        Ok(lyrics_body(&song_html))
    }

    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        match response.status() {
            StatusCode::OK => Ok(response.text().await?),
            status => Err(FetchError::Status(status)),
        }
    }
}

/// Pull the first song link out of a search results page.
/// Links live in the title cell of the results table; query strings are
/// dropped so the path resolves to the canonical song page.
fn first_result_path(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("td.tal.qx strong a").ok()?;

    document
        .select(&selector)
        .filter_map(|anchor| anchor.value().attr("href"))
        .find(|href| href.starts_with("/lyric/"))
        .map(|href| href.split('?').next().unwrap_or(href).to_string())
}

/// Extract the lyrics block from a song page, entities decoded.
fn lyrics_body(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("pre#lyric-body-text").ok()?;

    let block = document.select(&selector).next()?;
    let text = block.text().collect::<String>().trim().to_string();

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
