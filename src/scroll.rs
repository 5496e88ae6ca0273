use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scrolls the page to the element with the given id. Nav links
/// point at section anchors on the home page, so a missing target just
/// means the section isn't mounted; we log and do nothing.
pub fn scroll_to_anchor(id: &str) {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));

    match target {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => {
            log::warn!("scroll target #{} not found, ignoring", id);
        }
    }
}
