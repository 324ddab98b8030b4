use std::path::PathBuf;

/// The scheduler page for Trusted Traveler Program interview locations.
/// This is the page the extractor drives; `ENTRYWATCH_SCHEDULER_URL` can
/// point a run at a mirror or a local fixture instead.
pub const DEFAULT_SCHEDULER_URL: &str =
    "https://ttp.cbp.dhs.gov/schedulerui/schedule-interview/location?lang=en&vo=true&returnUrl=ttp-external&service=up";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub watch_path: PathBuf,
    pub log_level: String,
    pub scheduler_url: String,
    pub wait_timeout_secs: u64,
    pub settle_delay_ms: u64,
    pub nav_timeout_secs: u64,
    pub notify_timeout_secs: u64,
    pub chrome_executable: Option<PathBuf>,
}
