use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("browser error: {0}")]
    Browser(#[from] chromiumoxide::error::CdpError),

    #[error("failed to configure browser launch: {reason}")]
    Launch { reason: String },

    #[error("timed out after {timeout_secs}s waiting for element {selector}")]
    ElementTimeout { selector: String, timeout_secs: u64 },

    #[error("navigation to {url} failed: {source}")]
    Navigation {
        url: String,
        #[source]
        source: chromiumoxide::error::CdpError,
    },

    #[error("popup {selector} has no text content")]
    EmptyPopup { selector: String },

    #[error("malformed popup text: {reason}")]
    MalformedPopup { reason: String },
}
