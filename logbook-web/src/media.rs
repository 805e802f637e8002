//! Thumbnails and content containers as seen in the DOM

use crate::dom;
use logbook_common::{video_source, GroupScope, MediaKind, MediaSource};
use tracing::debug;
use wasm_bindgen_x::JsCast;
use web_sys_x::{Element, HtmlImageElement};

/// Thumbnails that open the lightbox.
pub const THUMBNAIL_SELECTOR: &str = ".media-item img, .media-item video";

/// Container whose thumbnails form one group.
pub const CONTENT_SELECTOR: &str = ".content";

/// A thumbnail `img` or `video` element. Equality is node identity.
#[derive(Debug, Clone, PartialEq)]
pub struct DomMedia(pub Element);

impl MediaSource for DomMedia {
    fn kind(&self) -> MediaKind {
        if self.0.tag_name().eq_ignore_ascii_case("video") {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }

    fn source_url(&self) -> Option<String> {
        match self.kind() {
            MediaKind::Video => {
                let nested = self
                    .0
                    .query_selector("source")
                    .ok()
                    .flatten()
                    .and_then(|source| source.get_attribute("src"));
                let source = video_source(nested, self.0.get_attribute("src"));
                if source.is_none() {
                    debug!("Video thumbnail has no source");
                }
                source
            }
            MediaKind::Image => self
                .0
                .dyn_ref::<HtmlImageElement>()
                .map(|img| img.src()),
        }
    }

    fn caption_attr(&self) -> Option<String> {
        self.0.get_attribute("data-caption")
    }

    fn alt_text(&self) -> Option<String> {
        self.0.get_attribute("alt")
    }
}

/// A `.content` element.
pub struct ContentScope(Element);

impl GroupScope for ContentScope {
    type Media = DomMedia;

    fn enclosing(media: &DomMedia) -> Option<Self> {
        media.0.closest(CONTENT_SELECTOR).ok().flatten().map(ContentScope)
    }

    fn members(&self) -> Vec<DomMedia> {
        dom::query_all_in(&self.0, THUMBNAIL_SELECTOR)
            .into_iter()
            .map(DomMedia)
            .collect()
    }
}
