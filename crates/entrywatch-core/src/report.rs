//! The availability report produced by one check run.
//!
//! A report is built once per run from the parsed popup text and is
//! immutable afterwards. Its rendered form is the exact text block sent
//! as the notification body.

use chrono::{DateTime, Local};

/// Classification of the popup's free-text appointment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityStatus {
    /// The popup did not flag the center as full.
    Available,
    /// The popup text says the center is currently full.
    None,
}

impl AvailabilityStatus {
    /// The first line of the rendered report.
    #[must_use]
    pub fn headline(self) -> &'static str {
        match self {
            AvailabilityStatus::Available => "Appointments Available!",
            AvailabilityStatus::None => "No Appointments",
        }
    }
}

/// Result of checking one enrollment center.
#[derive(Debug, Clone)]
pub struct AvailabilityReport {
    pub status: AvailabilityStatus,
    /// Short excerpt of the popup's status text, at most six tokens.
    pub availability_window: String,
    /// First line of the popup text, verbatim.
    pub location_name: String,
    /// Captured once at run start, before the browser launches.
    pub accessed_at: DateTime<Local>,
    pub source_url: String,
}

/// Renders the report as exactly five newline-joined lines:
/// status, availability excerpt, access timestamp, location name, URL.
impl std::fmt::Display for AvailabilityReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}\nAccessed: {}\nLocation: {}\n{}",
            self.status.headline(),
            self.availability_window,
            self.accessed_at.format("%Y-%m-%dT%H:%M:%S"),
            self.location_name,
            self.source_url
        )
    }
}
