use pagekit_core::{content_height, css_pixels};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::DomError;

/// Retrieve the global `window` object.
///
/// # Errors
/// Returns [`DomError::NoWindow`] outside of a browser context.
pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// Retrieve the document object for DOM interactions.
///
/// # Errors
/// Returns an error when the window or its document is unavailable.
pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// The `<html>` element.
///
/// # Errors
/// Returns [`DomError::NoRootElement`] for an empty document.
pub fn root_element() -> Result<Element, DomError> {
    document()?
        .document_element()
        .ok_or(DomError::NoRootElement)
}

/// Look up an element by id.
///
/// # Errors
/// Returns [`DomError::MissingElement`] when nothing carries the id.
pub fn element_by_id(id: &str) -> Result<Element, DomError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::missing(id))
}

/// Look up an HTML element by id.
///
/// # Errors
/// Returns an error when the element is missing or is not an HTML element
/// (for example an SVG node).
pub fn html_element_by_id(id: &str) -> Result<HtmlElement, DomError> {
    element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::NotHtmlElement { id: id.to_string() })
}

/// First element matching `selector`, if any.
///
/// # Errors
/// Returns [`DomError::InvalidSelector`] when the browser rejects the selector.
pub fn query_one(selector: &str) -> Result<Option<Element>, DomError> {
    document()?
        .query_selector(selector)
        .map_err(|err| invalid_selector(selector, &err))
}

/// Every element matching `selector`, in document order.
///
/// # Errors
/// Returns [`DomError::InvalidSelector`] when the browser rejects the selector.
pub fn query_all(selector: &str) -> Result<Vec<Element>, DomError> {
    let nodes = document()?
        .query_selector_all(selector)
        .map_err(|err| invalid_selector(selector, &err))?;
    Ok((0..nodes.length())
        .filter_map(|idx| nodes.get(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn invalid_selector(selector: &str, err: &JsValue) -> DomError {
    DomError::InvalidSelector {
        selector: selector.to_string(),
        message: js_error_message(err),
    }
}

/// Distance in pixels from the top of the document to the top of `element`.
///
/// # Errors
/// Returns an error if the current scroll offset cannot be read.
pub fn document_top(element: &Element) -> Result<f64, DomError> {
    let scroll_y = window()?.scroll_y().map_err(|err| DomError::from_js(&err))?;
    Ok(element.get_bounding_client_rect().top() + scroll_y)
}

/// Height of `element`'s content box in pixels, excluding padding, border
/// and horizontal scrollbar.
///
/// # Errors
/// Returns an error if the computed style cannot be read.
pub fn content_box_height(element: &Element) -> Result<f64, DomError> {
    let style = window()?
        .get_computed_style(element)
        .map_err(|err| DomError::from_js(&err))?;
    let (padding_top, padding_bottom) = style.map_or((0.0, 0.0), |style| {
        (
            css_pixels(&style.get_property_value("padding-top").unwrap_or_default()),
            css_pixels(&style.get_property_value("padding-bottom").unwrap_or_default()),
        )
    });
    Ok(content_height(
        f64::from(element.client_height()),
        padding_top,
        padding_bottom,
    ))
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// An event listener that stays registered for as long as the value lives.
///
/// Dropping it removes the listener from its target.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Register `handler` for `event` on `target`.
    ///
    /// # Errors
    /// Returns an error if the browser refuses the registration.
    pub fn attach<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, DomError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| DomError::from_js(&err))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    #[must_use]
    pub const fn event(&self) -> &'static str {
        self.event
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
