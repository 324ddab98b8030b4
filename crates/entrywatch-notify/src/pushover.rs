//! Pushover push notification client.
//!
//! One form-encoded POST to `/1/messages.json` per send; the Pushover API
//! answers 200 with `{"status": 1}` on acceptance and carries an `errors`
//! array otherwise. There is no retry here: the caller decides what a
//! failed delivery means (for a check run: log it and finish cleanly).
//!
//! API reference: <https://pushover.net/api>

use std::time::Duration;

use serde::Deserialize;

use crate::error::NotifyError;

pub const DEFAULT_API_BASE: &str = "https://api.pushover.net";

/// Notification title used when the watch file does not set one.
pub const DEFAULT_TITLE: &str = "Global Entry Appointment";

/// Pushover sound identifier used when the watch file does not set one.
pub const DEFAULT_SOUND: &str = "pushover";

pub struct PushoverClient {
    client: reqwest::Client,
    api_base: String,
    token: String,
    user: String,
}

/// Acceptance envelope returned by the messages endpoint.
#[derive(Debug, Deserialize)]
struct PushoverResponse {
    /// `1` when the message was accepted.
    status: i32,
    /// Human-readable rejection reasons; empty on acceptance.
    #[serde(default)]
    errors: Vec<String>,
}

impl PushoverClient {
    /// Creates a client for the public Pushover API with a configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(token: &str, user: &str, timeout_secs: u64) -> Result<Self, NotifyError> {
        Self::with_api_base(token, user, timeout_secs, DEFAULT_API_BASE)
    }

    /// Creates a client against a specific API base URL (tests point this
    /// at a local mock server).
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_api_base(
        token: &str,
        user: &str,
        timeout_secs: u64,
        api_base: &str,
    ) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            token: token.to_string(),
            user: user.to_string(),
        })
    }

    /// Submit one message. At most one delivery attempt; no retry.
    ///
    /// # Errors
    ///
    /// - [`NotifyError::Http`] — network or TLS failure.
    /// - [`NotifyError::UnexpectedStatus`] — non-2xx response.
    /// - [`NotifyError::Rejected`] — 2xx response with Pushover `status != 1`.
    /// - [`NotifyError::Deserialize`] — 2xx body that is not the expected envelope.
    pub async fn send(&self, message: &str, title: &str, sound: &str) -> Result<(), NotifyError> {
        let url = format!("{}/1/messages.json", self.api_base);
        let params = [
            ("token", self.token.as_str()),
            ("user", self.user.as_str()),
            ("message", message),
            ("title", title),
            ("sound", sound),
        ];

        let response = self.client.post(&url).form(&params).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), body, "pushover delivery failed");
            return Err(NotifyError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let envelope: PushoverResponse =
            serde_json::from_str(&body).map_err(|source| NotifyError::Deserialize {
                context: format!("response from {url}"),
                source,
            })?;

        if envelope.status != 1 {
            return Err(NotifyError::Rejected {
                errors: envelope.errors.join("; "),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "pushover_test.rs"]
mod tests;
