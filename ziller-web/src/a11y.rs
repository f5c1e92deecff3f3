// Accessibility helpers

use crate::dom;
use ziller_core::TextSize;
use ziller_core::text_size::{TEXT_SIZE_CLASSES, TEXT_SIZE_STORAGE_KEY};

/// Id of the main landmark the skip link jumps to.
pub const MAIN_CONTENT_ID: &str = "main-content";

/// Id of the polite live region used for form announcements.
pub const STATUS_REGION_ID: &str = "form-status";

/// Critical CSS injected before the stylesheet loads: focus ring, screen
/// reader helper class, skip link that only appears while focused, and the
/// three text-size steps on `<html>`.
#[must_use]
pub const fn critical_css() -> &'static str {
    ":focus{outline:3px solid #E2001A;outline-offset:2px} \
.sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;} \
.skip-link{position:absolute;top:-40px;left:0;z-index:100;padding:8px;background:#000;color:#fff} \
.skip-link:focus{top:0} \
html.text-size-normal{font-size:100%} html.text-size-large{font-size:112.5%} html.text-size-xlarge{font-size:125%}"
}

/// Announce `msg` to assistive technology through the status live region.
pub fn set_status(msg: &str) {
    if let Some(node) = dom::document().and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID)) {
        node.set_text_content(Some(msg));
    }
}

/// Text size remembered from an earlier visit, `Normal` when nothing usable is stored.
#[must_use]
pub fn saved_text_size() -> TextSize {
    let stored = dom::local_storage().and_then(|storage| storage.get_item(TEXT_SIZE_STORAGE_KEY).ok().flatten());
    TextSize::from_stored(stored.as_deref())
}

/// Put exactly one text-size class on `<html>`.
pub fn apply_text_size(size: TextSize) {
    let Some(root) = dom::document().and_then(|doc| doc.document_element()) else {
        return;
    };
    let classes = root.class_list();
    for class in TEXT_SIZE_CLASSES {
        let _ = classes.remove_1(class);
    }
    if let Err(err) = classes.add_1(size.css_class()) {
        dom::console_error(&dom::js_error_message(&err));
    }
}

/// Remember the chosen text size for later visits.
pub fn store_text_size(size: TextSize) {
    if let Some(storage) = dom::local_storage()
        && let Err(err) = storage.set_item(TEXT_SIZE_STORAGE_KEY, &size.stored_value())
    {
        log::warn!("could not persist text size: {}", dom::js_error_message(&err));
    }
}

/// Apply and persist in one step, as the text-size button does.
pub fn set_text_size(size: TextSize) {
    apply_text_size(size);
    store_text_size(size);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn critical_css_covers_every_text_size() {
        let css = critical_css();
        for class in TEXT_SIZE_CLASSES {
            assert!(css.contains(class), "{class} missing");
        }
        assert!(css.contains(".skip-link:focus"));
    }

    #[test]
    fn text_size_defaults_to_normal_without_storage() {
        assert_eq!(saved_text_size(), TextSize::Normal);
        set_text_size(TextSize::Large);
        assert_eq!(saved_text_size(), TextSize::Normal);
    }
}
