//! Transient toast notifications.
//!
//! A toast is a clone of the first element inside `<template id="toast-template">`
//! with its `<p>` text replaced. Only one toast is on screen at a time:
//! showing a new one removes the previous toast and cancels its timer, and a
//! timer that fires for a toast that was already replaced does nothing.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Handle for one shown toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastTicket {
    pub id: u64,
    /// Toast that must leave the screen now, if one was still showing.
    pub replaces: Option<u64>,
}

/// Bookkeeping for the single active toast.
#[derive(Debug, Default)]
pub struct ToastSlot {
    next_id: u64,
    active: Option<u64>,
}

impl ToastSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new toast, displacing any active one.
    pub fn show(&mut self) -> ToastTicket {
        self.next_id += 1;
        let id = self.next_id;
        ToastTicket { id, replaces: self.active.replace(id) }
    }

    /// A removal timer fired. Returns `true` when `id` is still the active
    /// toast and should be removed.
    pub fn expire(&mut self, id: u64) -> bool {
        if self.active == Some(id) {
            self.active = None;
            true
        } else {
            false
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::Toaster;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlElement, HtmlTemplateElement};

    use super::ToastSlot;
    use crate::consts::{TOAST_TEMPLATE_ID, TOAST_TEXT_SELECTOR};
    use crate::dom;
    use crate::error::SiteError;

    struct ActiveToast {
        element: Element,
        _timeout: Timeout,
    }

    #[derive(Default)]
    struct ToastState {
        slot: ToastSlot,
        shown: Option<ActiveToast>,
    }

    /// Shows toasts cloned from the page template. Cheap to clone; clones
    /// share the active toast.
    #[derive(Clone)]
    pub struct Toaster {
        template: Option<HtmlTemplateElement>,
        body: Option<HtmlElement>,
        duration_ms: u32,
        state: Rc<RefCell<ToastState>>,
    }

    impl Toaster {
        #[must_use]
        pub fn mount(document: &Document, duration_ms: u32) -> Self {
            let template = document
                .get_element_by_id(TOAST_TEMPLATE_ID)
                .and_then(|el| el.dyn_into::<HtmlTemplateElement>().ok());
            Self { template, body: document.body(), duration_ms, state: Rc::default() }
        }

        /// Show `message`. Silently does nothing without a usable template.
        pub fn show(&self, message: &str) {
            dom::report("toast", self.try_show(message));
        }

        fn build(&self, message: &str) -> Result<Option<Element>, SiteError> {
            let Some(first) = self.template.as_ref().and_then(|t| t.content().first_element_child()) else {
                return Ok(None);
            };
            let Ok(toast) = first.clone_node_with_deep(true)?.dyn_into::<Element>() else {
                return Ok(None);
            };
            let Some(text) = toast.query_selector(TOAST_TEXT_SELECTOR)? else {
                return Ok(None);
            };
            text.set_text_content(Some(message));
            Ok(Some(toast))
        }

        fn try_show(&self, message: &str) -> Result<(), SiteError> {
            let Some(body) = &self.body else {
                return Ok(());
            };
            let Some(toast) = self.build(message)? else {
                return Ok(());
            };
            body.append_child(&toast)?;

            let mut state = self.state.borrow_mut();
            let ticket = state.slot.show();
            if ticket.replaces.is_some() {
                if let Some(previous) = state.shown.take() {
                    previous.element.remove();
                }
            }

            let id = ticket.id;
            let shared = Rc::clone(&self.state);
            let timeout = Timeout::new(self.duration_ms, move || {
                let mut state = shared.borrow_mut();
                if state.slot.expire(id) {
                    if let Some(expired) = state.shown.take() {
                        expired.element.remove();
                    }
                }
            });
            state.shown = Some(ActiveToast { element: toast, _timeout: timeout });
            log::debug!("toast {id} shown");
            Ok(())
        }
    }
}
