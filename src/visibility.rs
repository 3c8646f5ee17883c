//! One-shot visibility watchers.
//!
//! A watcher observes a set of elements and fires its callback the first time
//! each one becomes sufficiently visible, then stops observing that element.
//! Scrolling away and back never fires again.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

/// Browsers report ratios like `0.9999` for elements that are fully on
/// screen at fractional pixel offsets.
pub const RATIO_TOLERANCE: f64 = 1e-3;

/// Whether an intersection report meets `threshold`.
#[must_use]
pub fn qualifies(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio + RATIO_TOLERANCE >= threshold
}

#[cfg(feature = "hydrate")]
pub use browser::OneShotWatcher;

#[cfg(feature = "hydrate")]
mod browser {
    use js_sys::Array;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::qualifies;
    use crate::error::SiteError;

    type EntryCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

    /// `IntersectionObserver` wrapper that unobserves each element after its
    /// first qualifying report.
    pub struct OneShotWatcher {
        observer: IntersectionObserver,
        _callback: EntryCallback,
    }

    impl OneShotWatcher {
        /// Build a watcher that calls `on_visible` once per element.
        ///
        /// # Errors
        ///
        /// Returns [`SiteError::Js`] when the observer cannot be created.
        pub fn new<F>(threshold: f64, mut on_visible: F) -> Result<Self, SiteError>
        where
            F: FnMut(&Element) + 'static,
        {
            let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !qualifies(entry.is_intersecting(), entry.intersection_ratio(), threshold) {
                        continue;
                    }
                    let target = entry.target();
                    observer.unobserve(&target);
                    on_visible(&target);
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>);

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(threshold));
            let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
            Ok(Self { observer, _callback: callback })
        }

        /// Start watching `element`.
        pub fn watch(&self, element: &Element) {
            self.observer.observe(element);
        }
    }

    impl Drop for OneShotWatcher {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }
}
