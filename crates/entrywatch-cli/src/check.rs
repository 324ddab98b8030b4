//! The single check-and-notify run.
//!
//! Extraction failures are fatal and propagate to `main` as a non-zero
//! exit. Notification delivery failures are logged and swallowed: once a
//! report exists, the run finishes cleanly whether or not the push got
//! through.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;

use entrywatch_core::{AppConfig, PushoverSettings};
use entrywatch_notify::{PushoverClient, DEFAULT_SOUND, DEFAULT_TITLE};
use entrywatch_scraper::{extract_availability, ExtractSettings};

pub(crate) async fn run_check(
    config: &AppConfig,
    watch_file_override: Option<&Path>,
    location_override: Option<u32>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let watch_path = watch_file_override.unwrap_or(&config.watch_path);
    let watch = entrywatch_core::load_watch_file(watch_path)
        .with_context(|| format!("failed to load watch file {}", watch_path.display()))?;
    let location = location_override.unwrap_or(watch.location.id);

    // The report carries the run-start timestamp, not the moment the
    // popup finally rendered.
    let accessed_at = chrono::Local::now();

    let settings = ExtractSettings {
        wait_timeout: Duration::from_secs(config.wait_timeout_secs),
        settle_delay: Duration::from_millis(config.settle_delay_ms),
        nav_timeout: Duration::from_secs(config.nav_timeout_secs),
        chrome_executable: config.chrome_executable.clone(),
    };

    tracing::info!(location, url = %config.scheduler_url, "checking appointment availability");
    let report = extract_availability(location, &config.scheduler_url, accessed_at, &settings)
        .await
        .context("availability extraction failed")?;

    println!("{report}");

    if dry_run {
        println!("dry-run: skipping notification");
        return Ok(());
    }

    match PushoverClient::new(
        &watch.pushover.token,
        &watch.pushover.user,
        config.notify_timeout_secs,
    ) {
        Ok(client) => dispatch_notification(&client, &watch.pushover, &report.to_string()).await,
        Err(e) => {
            tracing::error!(error = %e, "failed to build Pushover client");
            eprintln!("error: failed to build Pushover client: {e}");
        }
    }

    Ok(())
}

/// Send the report text. Delivery failures are logged, not propagated.
async fn dispatch_notification(
    client: &PushoverClient,
    pushover: &PushoverSettings,
    message: &str,
) {
    let title = pushover.title.as_deref().unwrap_or(DEFAULT_TITLE);
    let sound = pushover.sound.as_deref().unwrap_or(DEFAULT_SOUND);

    match client.send(message, title, sound).await {
        Ok(()) => println!("Pushover notification sent"),
        Err(e) => {
            tracing::error!(error = %e, "failed to send Pushover notification");
            eprintln!("error: failed to send Pushover notification: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn settings() -> PushoverSettings {
        PushoverSettings {
            token: "app-token".to_string(),
            user: "user-key".to_string(),
            title: None,
            sound: None,
        }
    }

    #[tokio::test]
    async fn missing_watch_file_fails_before_any_notification() {
        let config = AppConfig {
            watch_path: "/nonexistent/watch.yaml".into(),
            log_level: "info".to_string(),
            scheduler_url: "http://localhost:1/unused".to_string(),
            wait_timeout_secs: 1,
            settle_delay_ms: 0,
            nav_timeout_secs: 1,
            notify_timeout_secs: 1,
            chrome_executable: None,
        };

        let result = run_check(&config, None, None, false).await;
        assert!(result.is_err(), "expected Err, got: {result:?}");
    }

    #[tokio::test]
    async fn delivery_failure_is_swallowed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/1/messages.json"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = PushoverClient::with_api_base("app-token", "user-key", 5, &server.uri())
            .expect("client construction should not fail");

        // Returns unit on both success and failure; a failed push must
        // not bubble out of the run.
        dispatch_notification(&client, &settings(), "No Appointments").await;
    }

    #[tokio::test]
    async fn successful_delivery_completes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/1/messages.json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": 1})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = PushoverClient::with_api_base("app-token", "user-key", 5, &server.uri())
            .expect("client construction should not fail");

        dispatch_notification(&client, &settings(), "Appointments Available!").await;
    }
}
