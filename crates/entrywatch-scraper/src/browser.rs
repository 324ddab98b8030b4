//! Scoped Chromium session for a single extraction run.
//!
//! Unlike long-lived scraper deployments that share one browser across
//! requests, each check launches its own headless Chromium and terminates
//! it before the run's result is inspected. [`BrowserSession::shutdown`]
//! must be called on every exit path; the extractor owns that sequencing.

use std::path::Path;
use std::time::Duration;

use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tokio::task::JoinHandle;

use crate::error::ScrapeError;

pub struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
}

impl BrowserSession {
    /// Launch a headless Chromium process and attach to it over CDP.
    ///
    /// `request_timeout` bounds every CDP request issued through this
    /// session, including navigation.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Launch`] if the launch configuration is
    /// invalid and [`ScrapeError::Browser`] if the process cannot be
    /// spawned or attached.
    pub async fn launch(
        request_timeout: Duration,
        chrome_executable: Option<&Path>,
    ) -> Result<Self, ScrapeError> {
        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .request_timeout(request_timeout)
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage");

        if let Some(path) = chrome_executable {
            builder = builder.chrome_executable(path);
        }

        let config = builder
            .build()
            .map_err(|reason| ScrapeError::Launch { reason })?;

        let (browser, mut handler) = Browser::launch(config).await?;

        // The CDP websocket stalls unless its event stream is drained.
        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        Ok(Self { browser, handler })
    }

    /// Open a new tab and navigate it to `url`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Navigation`] if the page load fails.
    pub async fn open(&self, url: &str) -> Result<Page, ScrapeError> {
        let page = self.browser.new_page("about:blank").await?;
        page.goto(url)
            .await
            .map_err(|source| ScrapeError::Navigation {
                url: url.to_string(),
                source,
            })?;
        Ok(page)
    }

    /// Close the browser and reap its process.
    ///
    /// Failures here are logged, not returned; teardown runs after the
    /// drive has already produced its outcome.
    pub async fn shutdown(mut self) {
        if let Err(e) = self.browser.close().await {
            tracing::warn!(error = %e, "browser did not close cleanly");
        }
        if let Err(e) = self.browser.wait().await {
            tracing::warn!(error = %e, "failed to reap browser process");
        }
        self.handler.abort();
    }
}
