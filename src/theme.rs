//! Light/dark theme resolution, application, and persistence.
//!
//! Dark is the stylesheet's baseline. Light is layered on top with inline
//! custom properties on `<html>` plus a body class, so switching back to dark
//! only has to clear them.
//!
//! Precedence when resolving the effective mode: an explicit stored choice,
//! then the ambient `prefers-color-scheme` signal, then dark. Ambient changes
//! are followed live only while nothing is stored.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

/// Custom properties set inline for the light palette and cleared for dark.
pub const LIGHT_PALETTE: [(&str, &str); 7] = [
    ("--bg", "#f5f6ff"),
    ("--bg-alt", "#ffffff"),
    ("--surface", "rgba(255, 255, 255, 0.8)"),
    ("--card", "rgba(255, 255, 255, 0.65)"),
    ("--text", "#0f172a"),
    ("--muted", "#475569"),
    ("--border", "rgba(79, 70, 229, 0.2)"),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Mode implied by the ambient `prefers-color-scheme: dark` signal.
    #[must_use]
    pub fn from_ambient(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// The inline style changes that put this mode on screen.
    #[must_use]
    pub fn style(self) -> ThemeStyle {
        let light = self == Self::Light;
        ThemeStyle {
            attr: self.as_str(),
            properties: LIGHT_PALETTE
                .iter()
                .map(|&(name, value)| (name, light.then_some(value)))
                .collect(),
            light_class: light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownThemeMode(pub String);

impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownThemeMode(other.to_owned())),
        }
    }
}

/// Parse a raw stored value; anything unrecognized counts as no preference.
#[must_use]
pub fn parse_stored(raw: Option<&str>) -> Option<ThemeMode> {
    raw.and_then(|value| value.parse().ok())
}

/// Concrete DOM changes for one mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeStyle {
    /// Value for `data-theme` on `<html>`.
    pub attr: &'static str,
    /// `Some(value)` sets the property, `None` removes it.
    pub properties: Vec<(&'static str, Option<&'static str>)>,
    /// Whether the body carries the light-theme class.
    pub light_class: bool,
}

/// Theme decisions without any browser access.
#[derive(Debug, Clone)]
pub struct ThemeCore {
    applied: ThemeMode,
}

impl ThemeCore {
    /// Resolve the initial mode from the stored choice and ambient signal.
    #[must_use]
    pub fn initialize(stored: Option<ThemeMode>, prefers_dark: Option<bool>) -> Self {
        let applied = stored
            .or_else(|| prefers_dark.map(ThemeMode::from_ambient))
            .unwrap_or_default();
        Self { applied }
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.applied
    }

    /// Explicitly choose `mode`. The caller applies and persists it.
    pub fn set_mode(&mut self, mode: ThemeMode) -> ThemeMode {
        self.applied = mode;
        mode
    }

    /// Flip the applied mode and record it as an explicit choice.
    pub fn toggle(&mut self) -> ThemeMode {
        self.set_mode(self.applied.flipped())
    }

    /// React to an ambient color-scheme change.
    ///
    /// `stored_now` is the preference as read at event time, so a cleared
    /// storage entry lets ambient tracking resume. Returns the mode to apply,
    /// or `None` when an explicit choice wins.
    pub fn ambient_changed(&mut self, stored_now: Option<ThemeMode>, prefers_dark: bool) -> Option<ThemeMode> {
        if stored_now.is_some() {
            return None;
        }
        self.applied = ThemeMode::from_ambient(prefers_dark);
        Some(self.applied)
    }
}

#[cfg(feature = "hydrate")]
pub use browser::ThemeController;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement, MediaQueryListEvent, Storage};

    use super::{ThemeCore, ThemeMode, parse_stored};
    use crate::consts::{LIGHT_THEME_CLASS, PREFERS_DARK_QUERY, THEME_ATTR, THEME_TOGGLE_ID};
    use crate::dom::{self, Listener};
    use crate::error::SiteError;

    fn read_stored(storage: Option<&Storage>, key: &str) -> Option<ThemeMode> {
        match storage?.get_item(key) {
            Ok(raw) => parse_stored(raw.as_deref()),
            Err(err) => {
                dom::warn_js("localStorage.getItem", &err.into());
                None
            }
        }
    }

    struct ThemeShell {
        core: ThemeCore,
        root: HtmlElement,
        body: Option<HtmlElement>,
        storage: Option<Storage>,
        storage_key: String,
    }

    impl ThemeShell {
        fn read_stored(&self) -> Option<ThemeMode> {
            read_stored(self.storage.as_ref(), &self.storage_key)
        }

        fn persist(&self, mode: ThemeMode) {
            if let Some(storage) = &self.storage {
                dom::report(
                    "localStorage.setItem",
                    storage.set_item(&self.storage_key, mode.as_str()).map_err(SiteError::from),
                );
            }
        }

        fn apply(&self, mode: ThemeMode) -> Result<(), SiteError> {
            let style = mode.style();
            self.root.set_attribute(THEME_ATTR, style.attr)?;
            let declarations = self.root.style();
            for (name, value) in style.properties {
                match value {
                    Some(value) => declarations.set_property(name, value)?,
                    None => {
                        declarations.remove_property(name)?;
                    }
                }
            }
            if let Some(body) = &self.body {
                body.class_list().toggle_with_force(LIGHT_THEME_CLASS, style.light_class)?;
            }
            log::debug!("theme applied: {mode}");
            Ok(())
        }

        fn set_mode(&mut self, mode: ThemeMode) {
            self.core.set_mode(mode);
            dom::report("apply theme", self.apply(mode));
            self.persist(mode);
        }

        fn toggle(&mut self) -> ThemeMode {
            let next = self.core.toggle();
            dom::report("apply theme", self.apply(next));
            self.persist(next);
            next
        }
    }

    /// Owns the theme state and its toggle/ambient subscriptions.
    pub struct ThemeController {
        shell: Rc<RefCell<ThemeShell>>,
        _listeners: Vec<Listener>,
    }

    impl ThemeController {
        /// Resolve and apply the initial mode, then wire the toggle button and
        /// the ambient color-scheme listener.
        ///
        /// # Errors
        ///
        /// Returns an error when `<html>` is unavailable or a listener cannot
        /// be registered.
        pub fn mount(document: &Document, storage_key: &str) -> Result<Self, SiteError> {
            let window = dom::window()?;
            let root = dom::root(document).ok_or(SiteError::NoWindow)?;
            let storage = match window.local_storage() {
                Ok(storage) => storage,
                Err(err) => {
                    dom::warn_js("localStorage", &err.into());
                    None
                }
            };
            let prefers_dark = dom::media_query(&window, PREFERS_DARK_QUERY);

            let core = ThemeCore::initialize(
                read_stored(storage.as_ref(), storage_key),
                prefers_dark.as_ref().map(|mq| mq.matches()),
            );
            let shell = ThemeShell {
                core,
                root,
                body: document.body(),
                storage,
                storage_key: storage_key.to_owned(),
            };
            shell.apply(shell.core.mode())?;
            log::info!("theme initialized as {}", shell.core.mode());

            let shell = Rc::new(RefCell::new(shell));
            let mut listeners = Vec::new();

            if let Some(mq) = prefers_dark {
                let shell = Rc::clone(&shell);
                listeners.push(Listener::new(&mq, "change", move |event| {
                    let Some(event) = event.dyn_ref::<MediaQueryListEvent>() else {
                        return;
                    };
                    let mut shell = shell.borrow_mut();
                    let stored_now = shell.read_stored();
                    if let Some(mode) = shell.core.ambient_changed(stored_now, event.matches()) {
                        dom::report("apply theme", shell.apply(mode));
                    }
                })?);
            }

            if let Some(button) = document.get_element_by_id(THEME_TOGGLE_ID) {
                let shell = Rc::clone(&shell);
                listeners.push(Listener::new(&button, "click", move |_| {
                    shell.borrow_mut().toggle();
                })?);
            }

            Ok(Self { shell, _listeners: listeners })
        }

        /// Currently applied mode.
        #[must_use]
        pub fn mode(&self) -> ThemeMode {
            self.shell.borrow().core.mode()
        }

        /// Apply and persist `mode`.
        pub fn set_mode(&self, mode: ThemeMode) {
            self.shell.borrow_mut().set_mode(mode);
        }

        /// Flip the applied mode and persist it.
        pub fn toggle(&self) -> ThemeMode {
            self.shell.borrow_mut().toggle()
        }
    }
}
