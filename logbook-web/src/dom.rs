//! Small lookups over the page's DOM

use logbook_common::{CaptionPolicy, LogbookError};
use wasm_bindgen_x::{JsCast, JsValue};
use web_sys_x::{Document, Element, HtmlElement, NodeList};

pub fn js_error(value: JsValue) -> LogbookError {
    LogbookError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// Element with `id`, cast to `T`.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, LogbookError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| LogbookError::MissingElement(format!("#{id}")))
}

/// First match for `selector`, cast to `T`.
pub fn query<T: JsCast>(document: &Document, selector: &str) -> Result<T, LogbookError> {
    document
        .query_selector(selector)
        .map_err(js_error)?
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| LogbookError::MissingElement(selector.to_string()))
}

/// Every match for `selector` in the document, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

/// Every match for `selector` below `root`, in document order.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_display(element: &HtmlElement, value: &str) {
    let _ = element.style().set_property("display", value);
}

/// Write a caption, honoring whether authored markup is trusted.
pub fn write_caption(element: &Element, caption: &str, policy: CaptionPolicy) {
    element.set_inner_html(&policy.to_html(caption));
}
