//! Browser glue shared by the component shells.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every component looks elements up, subscribes to events, and reports
//! rejected browser calls the same way. Keeping that here lets the component
//! modules read as behavior rather than `web-sys` plumbing.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, MediaQueryList, Window};

use crate::error::SiteError;

/// The browser window.
///
/// # Errors
///
/// Returns [`SiteError::NoWindow`] outside a browser document.
pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

/// The current document.
///
/// # Errors
///
/// Returns [`SiteError::NoWindow`] when there is no window or document.
pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::NoWindow)
}

/// The `<html>` element as an `HtmlElement`.
pub fn root(document: &Document) -> Option<HtmlElement> {
    document.document_element().and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// All elements matching `selector`, in document order.
///
/// # Errors
///
/// Returns [`SiteError::Js`] when the selector is rejected.
pub fn query_all(root: &impl AsRef<web_sys::Node>, selector: &str) -> Result<Vec<Element>, SiteError> {
    let node: &web_sys::Node = root.as_ref();
    let list = if let Some(doc) = node.dyn_ref::<Document>() {
        doc.query_selector_all(selector)?
    } else if let Some(el) = node.dyn_ref::<Element>() {
        el.query_selector_all(selector)?
    } else {
        return Ok(Vec::new());
    };
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// First element matching `selector`, treating a rejected selector as absent.
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            warn_js("querySelector", &err.into());
            None
        }
    }
}

/// Look up a matched media query such as `(prefers-color-scheme: dark)`.
pub fn media_query(window: &Window, query: &str) -> Option<MediaQueryList> {
    match window.match_media(query) {
        Ok(list) => list,
        Err(err) => {
            warn_js("matchMedia", &err.into());
            None
        }
    }
}

/// Log a rejected browser call. Handlers never propagate past this point.
pub fn warn_js(context: &str, err: &SiteError) {
    log::warn!("{context}: {err}");
}

/// Log a failed result, if any.
pub fn report<T>(context: &str, result: Result<T, SiteError>) {
    if let Err(err) = result {
        warn_js(context, &err);
    }
}

/// An event subscription that detaches itself on drop.
///
/// Controllers hold these for as long as the page lives; dropping the
/// controller is the unsubscribe point.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Subscribe `handler` to `event` on `target`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Js`] when the browser rejects the registration.
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, SiteError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            warn_js("removeEventListener", &err.into());
        }
    }
}
