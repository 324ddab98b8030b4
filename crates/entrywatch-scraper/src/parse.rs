//! Parser for the scheduler popup text.
//!
//! ## Observed popup shape (live scheduler page)
//!
//! The popover's inner text is a small multi-line blob:
//!
//! ```text
//! Chicago Enrollment Center
//! 610 S Canal St Chicago, IL 60607
//! Google Map Currently full, check back later today
//! ```
//!
//! - The first line is always the center name.
//! - A `Google Map` link label precedes the free-text status; the status
//!   segment follows the **last** occurrence of that label.
//! - A center with no open slots says "full" somewhere in the status
//!   text (lowercase, observed verbatim); anything else means slots are
//!   bookable.

use entrywatch_core::AvailabilityStatus;

use crate::error::ScrapeError;

/// Label of the map link that precedes the status text.
pub(crate) const MAP_LINK_MARKER: &str = "Google Map";

/// Case-sensitive keyword marking a center with no open slots.
pub(crate) const FULL_KEYWORD: &str = "full";

/// Number of space-separated fields kept in the availability excerpt.
/// The field boundary at the marker itself counts as the first one, so
/// the excerpt carries at most five words of status text.
const WINDOW_FIELDS: usize = 6;

/// Structured contents of one popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPopup {
    pub location_name: String,
    pub availability_window: String,
    pub status: AvailabilityStatus,
}

/// Parse the popover's inner text into a [`ParsedPopup`].
///
/// # Errors
///
/// Returns [`ScrapeError::MalformedPopup`] if the text has no line break,
/// an empty first line, or no map link marker. Malformed popups fail the
/// run; they are never reported as a (mis-parsed) availability status.
pub fn parse_popup_text(text: &str) -> Result<ParsedPopup, ScrapeError> {
    let Some((first_line, _)) = text.split_once('\n') else {
        return Err(malformed("no line break after the location name line"));
    };
    if first_line.trim().is_empty() {
        return Err(malformed("location name line is empty"));
    }

    let flattened = text.replace('\n', " ");
    let Some(marker_pos) = flattened.rfind(MAP_LINK_MARKER) else {
        return Err(malformed("map link marker not found"));
    };
    let remainder = &flattened[marker_pos + MAP_LINK_MARKER.len()..];

    let window_fields: Vec<&str> = remainder.split(' ').take(WINDOW_FIELDS).collect();
    let availability_window = window_fields.join(" ").trim().to_string();

    let status = if availability_window.contains(FULL_KEYWORD) {
        AvailabilityStatus::None
    } else {
        AvailabilityStatus::Available
    };

    Ok(ParsedPopup {
        location_name: first_line.to_string(),
        availability_window,
        status,
    })
}

fn malformed(reason: &str) -> ScrapeError {
    ScrapeError::MalformedPopup {
        reason: reason.to_string(),
    }
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
