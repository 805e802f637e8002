//! logbook-web - Browser entry point for the travel journal page
//!
//! Attaches the lightbox, scroll chrome, lazy videos and content toggles to
//! the statically authored page. Each feature installs on its own; one
//! missing piece of markup only disables that feature.

pub mod content;
pub mod dom;
pub mod lazy_video;
pub mod lightbox;
pub mod listener;
pub mod media;
pub mod scroll;

use lazy_video::LazyVideos;
use listener::EventListener;
use logbook_common::{LogbookError, PageConfig};
use std::cell::RefCell;
use tracing::{error, info, warn, Level};
use web_sys_x::{Document, Window};

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
    /// Pending `DOMContentLoaded` listener while the document is still loading
    static READY: RefCell<Option<EventListener>> = const { RefCell::new(None) };
}

/// Everything attached to the page. Dropping it detaches all listeners.
pub struct Page {
    _listeners: Vec<EventListener>,
    _lazy_videos: Option<LazyVideos>,
}

impl Page {
    pub fn attach(window: &Window, document: &Document) -> Self {
        let config = load_config(document);
        let mut listeners = Vec::new();

        match scroll::install(window, document, &config.sections) {
            Ok(attached) => listeners.extend(attached),
            Err(e) => warn!("Scroll chrome disabled: {}", e),
        }

        let lazy_videos = lazy_video::install(document, &config.lazy_video).unwrap_or_else(|e| {
            warn!("Lazy video loading disabled: {}", e);
            None
        });

        match lightbox::install(document, &config.lightbox) {
            Ok(attached) => listeners.extend(attached),
            Err(e) => warn!("Lightbox disabled: {}", e),
        }

        if let Err(e) = content::add_caption_overlays(document, config.lightbox.caption_policy) {
            warn!("Caption overlays incomplete: {}", e);
        }
        listeners.extend(content::install_read_more(document));

        info!("Page attached with {} listeners", listeners.len());
        Self {
            _listeners: listeners,
            _lazy_videos: lazy_videos,
        }
    }
}

/// Read the optional JSON config block, falling back to defaults.
fn load_config(document: &Document) -> PageConfig {
    let Some(json) = document
        .get_element_by_id(PageConfig::ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return PageConfig::default();
    };

    PageConfig::from_json(&json).unwrap_or_else(|e| {
        warn!("Ignoring page config: {}", e);
        PageConfig::default()
    })
}

fn attach_page() -> Result<(), LogbookError> {
    let window = web_sys_x::window().ok_or_else(|| LogbookError::MissingElement("window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| LogbookError::MissingElement("document".into()))?;

    let page = Page::attach(&window, &document);
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    Ok(())
}

/// Attach everything to the current page. Called once from the binary's `main`.
pub fn start() {
    console_error_panic_hook::set_once();
    // a second init on hot reload is harmless
    let _ = dioxus_logger::init(Level::INFO);

    let Some(document) = web_sys_x::window().and_then(|w| w.document()) else {
        error!("No document to attach to");
        return;
    };

    if document.ready_state() != "loading" {
        if let Err(e) = attach_page() {
            error!("Failed to attach page: {}", e);
        }
        return;
    }

    let ready = EventListener::new(&document, "DOMContentLoaded", |_| {
        if let Err(e) = attach_page() {
            error!("Failed to attach page: {}", e);
        }
    });
    READY.with(|slot| *slot.borrow_mut() = Some(ready));
}
