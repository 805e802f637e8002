//! Scroll-driven page chrome: the color theme and the dot navigator
//!
//! Scroll events are coalesced to one update per animation frame.

use crate::dom;
use crate::listener::EventListener;
use logbook_common::palette::{palette_at, scroll_progress};
use logbook_common::sections::{dot_nav_visible, SectionLayout};
use logbook_common::{LogbookError, SectionConfig};
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, info};
use wasm_bindgen_x::prelude::*;
use wasm_bindgen_x::JsCast;
use web_sys_x::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Window,
};

struct ScrollChrome {
    window: Window,
    root: HtmlElement,
    header: Option<Element>,
    dot_nav: Option<Element>,
    dots: Vec<Element>,
    sections: Vec<Element>,
    config: SectionConfig,
}

impl ScrollChrome {
    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn update_colors(&self) {
        let scroll_top = self.window.scroll_y().unwrap_or(0.0);
        let progress = scroll_progress(
            scroll_top,
            self.root.scroll_height() as f64,
            self.viewport_height(),
        );

        let style = self.root.style();
        for (name, value) in palette_at(progress).css_properties() {
            let _ = style.set_property(name, &value);
        }
    }

    fn update_sections(&self) {
        let tops: Vec<f64> = self
            .sections
            .iter()
            .map(|section| section.get_bounding_client_rect().top())
            .collect();
        let layout = SectionLayout::measure(&tops, self.viewport_height(), &self.config);

        for &i in &layout.revealed {
            let _ = self.sections[i].class_list().add_1("visible");
        }

        for (i, dot) in self.dots.iter().enumerate() {
            let classes = dot.class_list();
            let _ = classes.remove_2("active", "passed");
            if let Some(class) = layout.dot_state(i).class() {
                let _ = classes.add_1(class);
            }
        }
    }

    fn update_dot_nav(&self) {
        let (Some(header), Some(dot_nav)) = (&self.header, &self.dot_nav) else {
            return;
        };
        let bottom = header.get_bounding_client_rect().bottom();
        let _ = dot_nav
            .class_list()
            .toggle_with_force("visible", dot_nav_visible(bottom, &self.config));
    }

    fn update(&self) {
        self.update_sections();
        self.update_dot_nav();
        self.update_colors();
    }
}

fn scroll_to_section(document: &Document, dot: &Element) {
    let Some(target) = dot
        .get_attribute("data-section")
        .and_then(|id| document.get_element_by_id(&id))
    else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Apply the theme and dot state now and on every scroll frame.
pub fn install(
    window: &Window,
    document: &Document,
    config: &SectionConfig,
) -> Result<Vec<EventListener>, LogbookError> {
    let root = document
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| LogbookError::MissingElement("html".to_string()))?;

    let chrome = Rc::new(ScrollChrome {
        window: window.clone(),
        root,
        header: dom::query(document, "header").ok(),
        dot_nav: dom::query(document, ".dot-nav").ok(),
        dots: dom::query_all(document, ".dot-nav .dot"),
        sections: dom::query_all(document, ".timeline .container"),
        config: config.clone(),
    });
    chrome.update();

    let mut listeners = Vec::new();

    for dot in &chrome.dots {
        let document = document.clone();
        let target = dot.clone();
        listeners.push(EventListener::new(dot, "click", move |_| {
            scroll_to_section(&document, &target);
        }));
    }

    let ticking = Rc::new(Cell::new(false));
    // one frame callback, reused for every coalesced scroll
    let frame: Closure<dyn FnMut()> = {
        let chrome = chrome.clone();
        let ticking = ticking.clone();
        Closure::wrap(Box::new(move || {
            chrome.update();
            ticking.set(false);
        }) as Box<dyn FnMut()>)
    };
    {
        let frame_window = window.clone();
        listeners.push(EventListener::new(window, "scroll", move |_| {
            if ticking.replace(true) {
                return;
            }
            if frame_window
                .request_animation_frame(frame.as_ref().unchecked_ref())
                .is_err()
            {
                debug!("requestAnimationFrame unavailable, skipping scroll frame");
                ticking.set(false);
            }
        }));
    }

    info!(
        "Scroll chrome tracking {} sections with {} dots",
        chrome.sections.len(),
        chrome.dots.len()
    );
    Ok(listeners)
}
