//! Drives the scheduler page and produces an [`AvailabilityReport`].
//!
//! The whole drive is linear: navigate, click the center's details link,
//! wait out the popup animation, read the popover text, parse. Any step
//! failing fails the run; there is no retry edge anywhere.

use std::path::PathBuf;
use std::time::Duration;

use chromiumoxide::{Element, Page};
use chrono::{DateTime, Local};

use entrywatch_core::AvailabilityReport;

use crate::browser::BrowserSession;
use crate::error::ScrapeError;
use crate::parse::parse_popup_text;
use crate::selectors;

/// How often [`wait_for_element`] re-queries the DOM.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Knobs for one extraction run, resolved from `AppConfig` by the caller.
#[derive(Debug, Clone)]
pub struct ExtractSettings {
    /// Upper bound on each element wait.
    pub wait_timeout: Duration,
    /// Unconditional pause between the click and the popup wait.
    pub settle_delay: Duration,
    /// Bound on CDP requests, including navigation.
    pub nav_timeout: Duration,
    /// Explicit Chromium binary; autodetected when `None`.
    pub chrome_executable: Option<PathBuf>,
}

/// Check one enrollment center and build its availability report.
///
/// Launches a browser, drives the popup open, extracts and parses its
/// text. The browser process is terminated on every exit path before the
/// outcome is propagated. `accessed_at` is the run-start timestamp the
/// report carries; callers capture it once and thread it through.
///
/// # Errors
///
/// Any [`ScrapeError`]: launch or CDP failure, element wait timeout,
/// empty popover, or malformed popup text. No partial report is produced.
pub async fn extract_availability(
    location: u32,
    url: &str,
    accessed_at: DateTime<Local>,
    settings: &ExtractSettings,
) -> Result<AvailabilityReport, ScrapeError> {
    let session =
        BrowserSession::launch(settings.nav_timeout, settings.chrome_executable.as_deref()).await?;

    let outcome = drive_popup(&session, location, url, settings).await;
    session.shutdown().await;
    let popup_text = outcome?;

    let parsed = parse_popup_text(&popup_text)?;
    tracing::debug!(
        location,
        status = ?parsed.status,
        "parsed popup for {}",
        parsed.location_name
    );

    Ok(AvailabilityReport {
        status: parsed.status,
        availability_window: parsed.availability_window,
        location_name: parsed.location_name,
        accessed_at,
        source_url: url.to_string(),
    })
}

/// Navigate to the scheduler and pull the raw popover text for `location`.
async fn drive_popup(
    session: &BrowserSession,
    location: u32,
    url: &str,
    settings: &ExtractSettings,
) -> Result<String, ScrapeError> {
    let page = session.open(url).await?;

    let link = wait_for_element(
        &page,
        &selectors::center_details_link(location),
        settings.wait_timeout,
    )
    .await?;
    link.click().await?;

    // The popover animates in; its nodes are not queryable immediately
    // after the click.
    tokio::time::sleep(settings.settle_delay).await;

    wait_for_element(
        &page,
        &selectors::popover_marker(location),
        settings.wait_timeout,
    )
    .await?;

    let container_selector = selectors::popover_container(location);
    let container = page.find_element(container_selector.as_str()).await?;
    container
        .inner_text()
        .await?
        .ok_or(ScrapeError::EmptyPopup {
            selector: container_selector,
        })
}

/// Poll the DOM until `selector` resolves or `timeout` elapses.
///
/// CDP has no equivalent of a driver-side explicit wait, so presence is
/// polled at [`POLL_INTERVAL`] with a hard deadline.
async fn wait_for_element(
    page: &Page,
    selector: &str,
    timeout: Duration,
) -> Result<Element, ScrapeError> {
    let deadline = tokio::time::Instant::now() + timeout;

    loop {
        match page.find_element(selector).await {
            Ok(element) => return Ok(element),
            Err(_) if tokio::time::Instant::now() < deadline => {
                tokio::time::sleep(POLL_INTERVAL).await;
            }
            Err(_) => {
                return Err(ScrapeError::ElementTimeout {
                    selector: selector.to_string(),
                    timeout_secs: timeout.as_secs(),
                })
            }
        }
    }
}
