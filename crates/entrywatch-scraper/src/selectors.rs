//! CSS selectors for the scheduler page DOM.
//!
//! Each enrollment center renders a details link with the DOM id
//! `centerDetailsUS{id}`; clicking it opens a popover with the DOM id
//! `popoverUS{id}` containing the center's free-text status.

/// The clickable span inside a center's details link.
pub(crate) fn center_details_link(location: u32) -> String {
    format!("#centerDetailsUS{location} > strong > span")
}

/// The nested strong element that signals the popover has rendered.
pub(crate) fn popover_marker(location: u32) -> String {
    format!("#popoverUS{location} > div > div > div > strong")
}

/// The popover container whose full inner text is extracted.
pub(crate) fn popover_container(location: u32) -> String {
    format!("#popoverUS{location}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_details_link_embeds_location_id() {
        assert_eq!(
            center_details_link(5140),
            "#centerDetailsUS5140 > strong > span"
        );
    }

    #[test]
    fn popover_marker_embeds_location_id() {
        assert_eq!(
            popover_marker(5140),
            "#popoverUS5140 > div > div > div > strong"
        );
    }

    #[test]
    fn popover_container_embeds_location_id() {
        assert_eq!(popover_container(7820), "#popoverUS7820");
    }
}
