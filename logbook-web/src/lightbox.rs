//! Lightbox overlay wired to the page
//!
//! Thumbnails, the navigation buttons, the overlay background and the
//! keyboard all route into one shared [`Lightbox`] controller. Deferred
//! transition steps are spawned as local futures.

use crate::dom::{self, set_display, write_caption};
use crate::listener::EventListener;
use crate::media::{ContentScope, DomMedia, THUMBNAIL_SELECTOR};
use logbook_common::{
    derive_group, CaptionPolicy, Lightbox, LightboxConfig, LightboxKey, LightboxSurface,
    LogbookError, MediaFrame, MediaKind, MediaSource, Transition,
};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::info;
use wasm_bindgen_x::JsCast;
use web_sys_x::{
    Document, Element, EventTarget, HtmlElement, HtmlImageElement, HtmlMediaElement,
    KeyboardEvent,
};

const SHOWN_CLASS: &str = "show";

/// The `#lightbox` overlay and its parts.
pub struct DomOverlay {
    root: HtmlElement,
    image: HtmlImageElement,
    video: HtmlMediaElement,
    caption: Element,
    previous: HtmlElement,
    next: HtmlElement,
    caption_policy: CaptionPolicy,
}

impl DomOverlay {
    pub fn find(document: &Document, caption_policy: CaptionPolicy) -> Result<Self, LogbookError> {
        Ok(Self {
            root: dom::by_id(document, "lightbox")?,
            image: dom::by_id(document, "lightbox-img")?,
            video: dom::by_id(document, "lightbox-video")?,
            caption: dom::by_id(document, "lightbox-caption")?,
            previous: dom::by_id(document, "prev-btn")?,
            next: dom::by_id(document, "next-btn")?,
            caption_policy,
        })
    }
}

impl LightboxSurface for DomOverlay {
    fn set_displayed(&mut self, displayed: bool) {
        set_display(&self.root, if displayed { "flex" } else { "none" });
    }

    fn set_shown(&mut self, shown: bool) {
        let classes = self.root.class_list();
        let _ = if shown {
            classes.add_1(SHOWN_CLASS)
        } else {
            classes.remove_1(SHOWN_CLASS)
        };
    }

    fn present(&mut self, frame: &MediaFrame) {
        match frame.kind {
            MediaKind::Video => {
                set_display(&self.image, "none");
                set_display(&self.video, "block");
                self.video.set_src(&frame.source);
            }
            MediaKind::Image => {
                set_display(&self.video, "none");
                set_display(&self.image, "block");
                self.image.set_src(&frame.source);
            }
        }

        write_caption(&self.caption, &frame.caption, self.caption_policy);

        set_display(&self.previous, if frame.show_previous { "block" } else { "none" });
        set_display(&self.next, if frame.show_next { "block" } else { "none" });
    }

    fn clear(&mut self) {
        let _ = self.video.pause();
        self.image.set_src("");
        self.video.set_src("");
    }
}

/// Controller handle shared by every listener.
#[derive(Clone)]
struct SharedLightbox {
    inner: Rc<RefCell<Lightbox<DomOverlay, DomMedia>>>,
    config: Rc<LightboxConfig>,
}

impl SharedLightbox {
    fn open(&self, media: &DomMedia) {
        let group = derive_group::<ContentScope>(media);
        let transition = self.inner.borrow_mut().open(media, group);
        self.schedule(transition);
    }

    fn close(&self) {
        let transition = self.inner.borrow_mut().close();
        self.schedule(transition);
    }

    fn next(&self) {
        self.inner.borrow_mut().next();
    }

    fn previous(&self) {
        self.inner.borrow_mut().previous();
    }

    fn key(&self, key: LightboxKey) {
        let transition = self.inner.borrow_mut().handle_key(key);
        if let Some(transition) = transition {
            self.schedule(transition);
        }
    }

    /// Complete `transition` once its delay has elapsed. Never cancelled.
    fn schedule(&self, transition: Transition) {
        let delay = transition.delay_ms(&self.config);
        let inner = self.inner.clone();
        wasm_bindgen_futures_x::spawn_local(async move {
            sleep_ms(delay).await;
            inner.borrow_mut().complete(transition);
        });
    }
}

async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

/// Attach the lightbox to the page.
///
/// Fails if the overlay markup is incomplete; the rest of the page works
/// without it.
pub fn install(
    document: &Document,
    config: &LightboxConfig,
) -> Result<Vec<EventListener>, LogbookError> {
    let overlay = DomOverlay::find(document, config.caption_policy)?;
    let close_button: Element = dom::query(document, ".close-btn")?;
    let root: EventTarget = overlay.root.clone().into();
    let previous: EventTarget = overlay.previous.clone().into();
    let next: EventTarget = overlay.next.clone().into();

    let lightbox = SharedLightbox {
        inner: Rc::new(RefCell::new(Lightbox::new(overlay))),
        config: Rc::new(config.clone()),
    };
    let mut listeners = Vec::new();

    let thumbnails = dom::query_all(document, THUMBNAIL_SELECTOR);
    for thumbnail in &thumbnails {
        let media = DomMedia(thumbnail.clone());
        let is_video = media.kind() == MediaKind::Video;
        let lightbox = lightbox.clone();
        listeners.push(EventListener::new(thumbnail, "click", move |event| {
            // keep the thumbnail from toggling inline playback
            if is_video {
                event.prevent_default();
            }
            lightbox.open(&media);
        }));
    }

    {
        let lightbox = lightbox.clone();
        listeners.push(EventListener::new(&previous, "click", move |event| {
            event.stop_propagation();
            lightbox.previous();
        }));
    }
    {
        let lightbox = lightbox.clone();
        listeners.push(EventListener::new(&next, "click", move |event| {
            event.stop_propagation();
            lightbox.next();
        }));
    }
    {
        let lightbox = lightbox.clone();
        listeners.push(EventListener::new(&close_button, "click", move |_| {
            lightbox.close();
        }));
    }
    {
        let lightbox = lightbox.clone();
        let background = root.clone();
        listeners.push(EventListener::new(&root, "click", move |event| {
            if event.target().is_some_and(|target| target == background) {
                lightbox.close();
            }
        }));
    }
    listeners.push(EventListener::new(document, "keydown", move |event| {
        let Some(key) = event
            .dyn_ref::<KeyboardEvent>()
            .and_then(|event| LightboxKey::from_key(&event.key()))
        else {
            return;
        };
        lightbox.key(key);
    }));

    info!("Lightbox attached to {} thumbnails", thumbnails.len());
    Ok(listeners)
}
