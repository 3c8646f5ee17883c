//! Animated numeric counters.
//!
//! Elements declaring `data-count="N"` climb (or, for negative N, descend)
//! from 0 to N once they are fully on screen. Each frame renders
//! `floor(progress * N)`, where progress is the elapsed fraction of the
//! animation clamped to `[0, 1]`. Counters never share state, so any number
//! can run at once.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Parse a `data-count` value the way the page's markup expects numbers to
/// read: blank means 0, fractions floor, and negative targets count down.
/// Non-finite and non-numeric values yield `None`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn parse_target(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    let value = trimmed.parse::<f64>().ok()?;
    value.is_finite().then(|| value.floor() as i64)
}

/// Group digits in threes with commas: `-1234567` -> `"-1,234,567"`.
#[must_use]
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Progress of one counter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountAnimation {
    target: i64,
    duration_ms: f64,
    start_ms: Option<f64>,
}

impl CountAnimation {
    #[must_use]
    pub fn new(target: i64, duration_ms: f64) -> Self {
        Self { target, duration_ms, start_ms: None }
    }

    /// Pin the start time. Without this the first frame becomes the start.
    #[must_use]
    pub fn started_at(mut self, start_ms: f64) -> Self {
        self.start_ms = Some(start_ms);
        self
    }

    /// Elapsed fraction at `now_ms`, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f64 {
        let Some(start) = self.start_ms else {
            return 0.0;
        };
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - start) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Value to display at `now_ms`: `floor(progress * target)`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn value_at(&self, now_ms: f64) -> i64 {
        let progress = self.progress(now_ms);
        if progress >= 1.0 {
            return self.target;
        }
        let value = (progress * self.target as f64).floor() as i64;
        if self.target < 0 { value.max(self.target) } else { value.min(self.target) }
    }

    /// Advance to the frame at `now_ms`. Returns the value to render and
    /// whether another frame is needed.
    pub fn frame(&mut self, now_ms: f64) -> (i64, bool) {
        if self.start_ms.is_none() {
            self.start_ms = Some(now_ms);
        }
        (self.value_at(now_ms), self.progress(now_ms) < 1.0)
    }
}

#[cfg(feature = "hydrate")]
pub use browser::CounterAnimator;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use js_sys::{Array, Function, Intl, Object};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, Element, Window};

    use super::{CountAnimation, group_thousands, parse_target};
    use crate::consts::{COUNT_ATTR, COUNT_SELECTOR};
    use crate::dom;
    use crate::error::SiteError;
    use crate::visibility::OneShotWatcher;

    type FrameHolder = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

    /// `Intl.NumberFormat().format` bound to the browser's default locale.
    fn default_formatter() -> Function {
        Intl::NumberFormat::new(&Array::new(), &Object::new()).format()
    }

    /// Locale-grouped text for `value`, falling back to comma grouping if
    /// the formatter throws.
    #[allow(clippy::cast_precision_loss)]
    fn format_count(formatter: &Function, value: i64) -> String {
        match formatter.call1(&JsValue::NULL, &JsValue::from_f64(value as f64)) {
            Ok(text) => text.as_string().unwrap_or_else(|| group_thousands(value)),
            Err(err) => {
                dom::warn_js("Intl.NumberFormat", &err.into());
                group_thousands(value)
            }
        }
    }

    /// Drive one counter with `requestAnimationFrame` until it lands on its
    /// target.
    fn run(window: &Window, element: Element, mut animation: CountAnimation, formatter: Function) -> Result<(), SiteError> {
        let holder: FrameHolder = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let window_for_cb = window.clone();
        let cb = Closure::wrap(Box::new(move |now: f64| {
            let (value, more) = animation.frame(now);
            element.set_text_content(Some(&format_count(&formatter, value)));
            if !more {
                holder_for_cb.borrow_mut().take();
                return;
            }
            let scheduled = holder_for_cb
                .borrow()
                .as_ref()
                .map(|cb| window_for_cb.request_animation_frame(cb.as_ref().unchecked_ref()));
            if let Some(Err(err)) = scheduled {
                dom::warn_js("requestAnimationFrame", &err.into());
                holder_for_cb.borrow_mut().take();
            }
        }) as Box<dyn FnMut(f64)>);

        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
        *holder.borrow_mut() = Some(cb);
        Ok(())
    }

    pub struct CounterAnimator {
        _watcher: OneShotWatcher,
        tracked: usize,
    }

    impl CounterAnimator {
        /// Watch every `[data-count]` element with a usable target.
        ///
        /// # Errors
        ///
        /// Returns an error when the observer cannot be created or the
        /// selector is rejected.
        pub fn mount(document: &Document, threshold: f64, duration_ms: f64) -> Result<Self, SiteError> {
            let window = dom::window()?;
            let formatter = default_formatter();
            let watcher = OneShotWatcher::new(threshold, move |element| {
                let Some(target) = element.get_attribute(COUNT_ATTR).as_deref().and_then(parse_target) else {
                    return;
                };
                let mut animation = CountAnimation::new(target, duration_ms);
                if let Some(performance) = window.performance() {
                    animation = animation.started_at(performance.now());
                }
                dom::report("counter", run(&window, element.clone(), animation, formatter.clone()));
            })?;

            let mut tracked = 0;
            for element in dom::query_all(document, COUNT_SELECTOR)? {
                let usable = element.get_attribute(COUNT_ATTR).as_deref().and_then(parse_target).is_some();
                if usable {
                    watcher.watch(&element);
                    tracked += 1;
                }
            }
            log::debug!("counter animator tracking {tracked} elements");
            Ok(Self { _watcher: watcher, tracked })
        }

        #[must_use]
        pub fn tracked(&self) -> usize {
            self.tracked
        }
    }
}
