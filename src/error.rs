use thiserror::Error;

/// Failures while talking to a lyrics source.
///
/// Callers of the retriever never see these; they exist so the fetch layer
/// can log what actually went wrong before collapsing to "no lyrics".
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status code: {0}")]
    Status(reqwest::StatusCode),
}
