#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("Twilio not connected: {0}")]
    NotConnected(String),

    #[error("connector request failed: {0}")]
    Http(#[from] reqwest::Error),
}
