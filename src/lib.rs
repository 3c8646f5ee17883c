//! Interactive enhancements for the Anunnaki marketing page.
//!
//! This crate is compiled to WebAssembly and attaches to markup that the page
//! already ships. It never renders views of its own: every component finds its
//! elements by id or selector, subscribes to browser events, and mutates
//! classes, attributes, and inline styles in response.
//!
//! Each component is split into a browser-free core (decision logic, tested
//! natively) and a thin `web-sys` shell compiled only with the `hydrate`
//! feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Light/dark mode resolution, application, persistence |
//! | [`visibility`] | One-shot intersection watchers |
//! | [`reveal`] | Scroll-triggered reveal classes |
//! | [`counter`] | Animated numeric counters |
//! | [`toast`] | Transient notifications cloned from a template |
//! | [`forms`] | Contact and newsletter submit acknowledgements |
//! | [`nav`] | Smooth anchor scrolling and the mobile menu |
//! | [`parallax`] | Pointer-driven hero offset |
//! | [`motion`] | Reduced-motion class toggle |
//! | [`footer`] | Current-year stamp |
//! | [`config`] | Tunables, optionally overridden by inline page JSON |
//! | [`consts`] | DOM contract: ids, selectors, class names |
//! | [`error`] | Crate error type |

pub mod config;
pub mod consts;
pub mod counter;
pub mod error;
pub mod footer;
pub mod forms;
pub mod motion;
pub mod nav;
pub mod parallax;
pub mod reveal;
pub mod theme;
pub mod toast;
pub mod visibility;

#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod site;

pub use config::SiteConfig;
pub use error::SiteError;

/// WASM entry point: mount every enhancement once the module loads.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    site::boot();
}
