//! Caption overlays on thumbnails and read-more toggles

use crate::dom::{self, write_caption};
use crate::listener::EventListener;
use logbook_common::sections::read_more_label;
use logbook_common::{CaptionPolicy, LogbookError};
use web_sys_x::{Document, Element};

/// Append a hover caption below every captioned thumbnail.
pub fn add_caption_overlays(document: &Document, policy: CaptionPolicy) -> Result<(), LogbookError> {
    for item in dom::query_all(document, ".media-item") {
        let Some(caption) = item
            .query_selector("img, video")
            .map_err(dom::js_error)?
            .and_then(|media| media.get_attribute("data-caption"))
            .filter(|caption| !caption.is_empty())
        else {
            continue;
        };

        let overlay = document.create_element("div").map_err(dom::js_error)?;
        overlay.set_class_name("media-caption-overlay");
        write_caption(&overlay, &caption, policy);
        item.append_child(&overlay).map_err(dom::js_error)?;
    }
    Ok(())
}

fn toggle_read_more(button: &Element) {
    let Some(collapsible) = button.next_element_sibling() else {
        return;
    };
    let Ok(expanded) = collapsible.class_list().toggle("expanded") else {
        return;
    };
    let _ = button.class_list().toggle_with_force("expanded", expanded);
    if let Some(label) = button.first_child() {
        label.set_text_content(Some(read_more_label(expanded)));
    }
}

pub fn install_read_more(document: &Document) -> Vec<EventListener> {
    dom::query_all(document, ".read-more-btn")
        .into_iter()
        .map(|button| {
            let target = button.clone();
            EventListener::new(&button, "click", move |_| toggle_read_more(&target))
        })
        .collect()
}
