#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("failed to reach the problem archive: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("archive rejected the request: {0}")]
    BadStatus(String),
    #[error("malformed archive response")]
    Malformed,
}
