//! Crate error type.
//!
//! Missing page elements are not errors: components skip silently when their
//! markup is absent. `SiteError` covers the rarer cases where the browser
//! rejects a call or the inline config is malformed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),

    /// No `window` global (not running in a browser document).
    #[error("no browser window available")]
    NoWindow,

    /// Inline config was not valid JSON for [`crate::SiteConfig`].
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// Inline config parsed but held an out-of-range value.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
