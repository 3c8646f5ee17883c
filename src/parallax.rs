//! Pointer-driven parallax on the hero's decorative orbital.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

/// A viewport-space rectangle, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Edges count as inside.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}

/// Orbital offset for a pointer at `(x, y)`, or `None` when the pointer is
/// outside `hero` or the hero has no area.
///
/// Each axis maps the pointer's position across the hero from `0..1`,
/// recentres it on `0.5`, and scales by `strength`, so a strength of 20
/// gives roughly ±10 px.
#[must_use]
pub fn offset(hero: Rect, x: f64, y: f64, strength: f64) -> Option<(f64, f64)> {
    if hero.width <= 0.0 || hero.height <= 0.0 || !hero.contains(x, y) {
        return None;
    }
    let dx = ((x - hero.left) / hero.width - 0.5) * strength;
    let dy = ((y - hero.top) / hero.height - 0.5) * strength;
    Some((dx, dy))
}

/// CSS `transform` value for an offset.
#[must_use]
pub fn transform((dx, dy): (f64, f64)) -> String {
    format!("translate({dx}px, {dy}px)")
}

#[cfg(feature = "hydrate")]
pub use browser::ParallaxEffect;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlElement, MouseEvent};

    use super::{Rect, offset, transform};
    use crate::consts::{HERO_SELECTOR, ORBITAL_SELECTOR};
    use crate::dom::{self, Listener};
    use crate::error::SiteError;

    fn hero_rect(hero: &Element) -> Rect {
        let rect = hero.get_bounding_client_rect();
        Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    pub struct ParallaxEffect {
        _listener: Option<Listener>,
    }

    impl ParallaxEffect {
        /// Follow the pointer when both the hero and orbital exist.
        ///
        /// # Errors
        ///
        /// Returns [`SiteError::Js`] when the listener cannot be registered.
        pub fn mount(document: &Document, strength: f64) -> Result<Self, SiteError> {
            let hero = dom::query(document, HERO_SELECTOR);
            let orbital = dom::query(document, ORBITAL_SELECTOR).and_then(|el| el.dyn_into::<HtmlElement>().ok());
            let (Some(hero), Some(orbital)) = (hero, orbital) else {
                return Ok(Self { _listener: None });
            };

            let listener = Listener::new(document, "mousemove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let x = f64::from(event.client_x());
                let y = f64::from(event.client_y());
                if let Some(delta) = offset(hero_rect(&hero), x, y, strength) {
                    dom::report(
                        "parallax",
                        orbital.style().set_property("transform", &transform(delta)).map_err(SiteError::from),
                    );
                }
            })?;
            Ok(Self { _listener: Some(listener) })
        }
    }
}
