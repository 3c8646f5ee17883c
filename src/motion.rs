//! Reduced-motion accommodation.
//!
//! Mirrors `(prefers-reduced-motion: reduce)` onto a class on `<html>` so the
//! stylesheet can turn off animation-heavy effects.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use crate::consts::REDUCE_MOTION_CLASS;

/// Class change implied by the current signal: `(class, present)`.
#[must_use]
pub fn class_for(reduce: bool) -> (&'static str, bool) {
    (REDUCE_MOTION_CLASS, reduce)
}

#[cfg(feature = "hydrate")]
pub use browser::MotionAdapter;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement, MediaQueryListEvent};

    use super::class_for;
    use crate::consts::REDUCED_MOTION_QUERY;
    use crate::dom::{self, Listener};
    use crate::error::SiteError;

    fn apply(root: &HtmlElement, reduce: bool) -> Result<(), SiteError> {
        let (class, present) = class_for(reduce);
        root.class_list().toggle_with_force(class, present)?;
        Ok(())
    }

    pub struct MotionAdapter {
        _listener: Option<Listener>,
    }

    impl MotionAdapter {
        /// Apply the current preference and follow changes.
        ///
        /// # Errors
        ///
        /// Returns an error when the class cannot be set or the listener
        /// cannot be registered.
        pub fn mount(document: &Document) -> Result<Self, SiteError> {
            let window = dom::window()?;
            let (Some(root), Some(query)) = (dom::root(document), dom::media_query(&window, REDUCED_MOTION_QUERY))
            else {
                return Ok(Self { _listener: None });
            };

            apply(&root, query.matches())?;
            log::debug!("reduced motion: {}", query.matches());

            let listener = Listener::new(&query, "change", move |event| {
                if let Some(event) = event.dyn_ref::<MediaQueryListEvent>() {
                    dom::report("reduced motion", apply(&root, event.matches()));
                }
            })?;
            Ok(Self { _listener: Some(listener) })
        }
    }
}
