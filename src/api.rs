use crate::error::FetchError;
use reqwest::StatusCode;
use serde::Deserialize;

const OVH_BASE_URL: &str = "https://api.lyrics.ovh/v1";

#[derive(Debug, Deserialize)]
struct LyricsResponse {
    lyrics: Option<String>,
}

pub struct OvhClient {
    client: reqwest::Client,
}

impl OvhClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetch lyrics from the lyrics.ovh API
    /// Returns None if the song is unknown (404) or the response carries no lyrics
    pub async fn get_lyrics(
        &self,
        title: &str,
        artist: &str,
    ) -> Result<Option<String>, FetchError> {
        let url = request_url(title, artist);

        tracing::debug!("Fetching lyrics: {}", url);

        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await?;
                Ok(parse_body(&body))
            }
            StatusCode::NOT_FOUND => {
                tracing::debug!("Lyrics not found for: {} - {}", artist, title);
                Ok(None)
            }
            status => Err(FetchError::Status(status)),
        }
    }
}

fn request_url(title: &str, artist: &str) -> String {
    format!(
        "{}/{}/{}",
        OVH_BASE_URL,
        urlencoding::encode(artist),
        urlencoding::encode(title)
    )
}

/// Extract the lyrics field from a response body.
/// A body that is not valid JSON, has no `lyrics` field, or carries an
/// empty string all count as "no lyrics".
fn parse_body(body: &str) -> Option<String> {
    let response: LyricsResponse = serde_json::from_str(body).ok()?;
    response.lyrics.filter(|lyrics| !lyrics.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_encodes_path_segments() {
        let url = request_url("Back in Black", "AC/DC");
        assert_eq!(url, "https://api.lyrics.ovh/v1/AC%2FDC/Back%20in%20Black");
    }

    #[test]
    fn test_parse_body_extracts_lyrics() {
        let body = r#"{"lyrics": "Imagine there's no heaven\nIt's easy if you try"}"#;
        assert_eq!(
            parse_body(body),
            Some("Imagine there's no heaven\nIt's easy if you try".to_string())
        );
    }

    #[test]
    fn test_parse_body_missing_field() {
        assert_eq!(parse_body(r#"{"error": "No lyrics found"}"#), None);
    }

    #[test]
    fn test_parse_body_malformed_json() {
        assert_eq!(parse_body("<html>Bad Gateway</html>"), None);
        assert_eq!(parse_body(""), None);
    }

    #[test]
    fn test_parse_body_empty_lyrics() {
        assert_eq!(parse_body(r#"{"lyrics": ""}"#), None);
        assert_eq!(parse_body(r#"{"lyrics": "  \n  "}"#), None);
    }
}
