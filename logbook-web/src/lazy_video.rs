//! Deferred loading for `video[preload="none"]`
//!
//! Each video starts loading shortly before it scrolls into view and is then
//! dropped from observation.

use crate::dom::{self, js_error};
use logbook_common::{LazyVideoConfig, LogbookError};
use tracing::info;
use wasm_bindgen_x::prelude::*;
use wasm_bindgen_x::JsCast;
use web_sys_x::{
    Document, HtmlMediaElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

type ObserverCallback = Closure<dyn FnMut(js_sys_x::Array, IntersectionObserver)>;

/// Observer for lazy videos. Disconnects when dropped.
pub struct LazyVideos {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for LazyVideos {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn start_loading(video: &HtmlMediaElement) {
    video.set_preload("auto");
    video.load();
    if let Ok(promise) = video.play() {
        // autoplay may be refused; that is fine
        wasm_bindgen_futures_x::spawn_local(async move {
            let _ = wasm_bindgen_futures_x::JsFuture::from(promise).await;
        });
    }
}

pub fn install(
    document: &Document,
    config: &LazyVideoConfig,
) -> Result<Option<LazyVideos>, LogbookError> {
    let videos = dom::query_all(document, r#"video[preload="none"]"#);
    if videos.is_empty() {
        return Ok(None);
    }

    let callback: ObserverCallback = Closure::wrap(Box::new(
        |entries: js_sys_x::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(video) = target.dyn_ref::<HtmlMediaElement>() {
                    start_loading(video);
                }
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys_x::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&config.root_margin);
    options.set_threshold(&JsValue::from_f64(config.threshold));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(js_error)?;
    for video in &videos {
        observer.observe(video);
    }

    info!("Observing {} lazy videos", videos.len());
    Ok(Some(LazyVideos {
        observer,
        _callback: callback,
    }))
}
