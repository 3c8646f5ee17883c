//! In-page anchor scrolling and the mobile menu.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::{CLOSE_MENU_LABEL, OPEN_MENU_LABEL};

/// Fragment id an in-page link points at. `"#"` alone points nowhere.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Key that closes the mobile menu from anywhere on the page.
#[must_use]
pub fn is_close_key(key: &str) -> bool {
    key == "Escape"
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Attribute values that present a menu state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuAttrs {
    pub hidden: bool,
    pub aria_expanded: &'static str,
    pub aria_label: &'static str,
    pub body_open: bool,
}

impl MenuState {
    /// The menu's `hidden` flag is the source of truth.
    #[must_use]
    pub fn from_hidden(hidden: bool) -> Self {
        if hidden { Self::Closed } else { Self::Open }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    #[must_use]
    pub fn attrs(self) -> MenuAttrs {
        match self {
            Self::Closed => MenuAttrs {
                hidden: true,
                aria_expanded: "false",
                aria_label: OPEN_MENU_LABEL,
                body_open: false,
            },
            Self::Open => MenuAttrs {
                hidden: false,
                aria_expanded: "true",
                aria_label: CLOSE_MENU_LABEL,
                body_open: true,
            },
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::NavController;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{
        Document, Element, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    };

    use super::{MenuState, anchor_target, is_close_key};
    use crate::consts::{ANCHOR_SELECTOR, MENU_OPEN_CLASS, MENU_TOGGLE_ID, MOBILE_MENU_ID};
    use crate::dom::{self, Listener};
    use crate::error::SiteError;

    /// Toggle button, menu container, and body, all present.
    #[derive(Clone)]
    struct Menu {
        toggle: Element,
        panel: HtmlElement,
        body: Option<HtmlElement>,
    }

    impl Menu {
        fn lookup(document: &Document) -> Option<Self> {
            let toggle = document.get_element_by_id(MENU_TOGGLE_ID)?;
            let panel = document.get_element_by_id(MOBILE_MENU_ID)?.dyn_into::<HtmlElement>().ok()?;
            Some(Self { toggle, panel, body: document.body() })
        }

        fn state(&self) -> MenuState {
            MenuState::from_hidden(self.panel.hidden())
        }

        fn present(&self, state: MenuState) -> Result<(), SiteError> {
            let attrs = state.attrs();
            self.panel.set_hidden(attrs.hidden);
            self.toggle.set_attribute("aria-expanded", attrs.aria_expanded)?;
            self.toggle.set_attribute("aria-label", attrs.aria_label)?;
            if let Some(body) = &self.body {
                body.class_list().toggle_with_force(MENU_OPEN_CLASS, attrs.body_open)?;
            }
            Ok(())
        }

        fn toggle(&self) {
            let next = self.state().toggled();
            dom::report("menu toggle", self.present(next));
        }

        fn close(&self) {
            dom::report("menu close", self.present(MenuState::Closed));
        }
    }

    fn scroll_to(target: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }

    /// Anchor, menu, and Escape-key listeners.
    pub struct NavController {
        _listeners: Vec<Listener>,
    }

    impl NavController {
        /// # Errors
        ///
        /// Returns [`SiteError::Js`] when a selector or listener is rejected.
        pub fn mount(document: &Document) -> Result<Self, SiteError> {
            let mut listeners = Vec::new();

            for link in dom::query_all(document, ANCHOR_SELECTOR)? {
                let doc = document.clone();
                let href_source = link.clone();
                listeners.push(Listener::new(&link, "click", move |event| {
                    let Some(href) = href_source.get_attribute("href") else {
                        return;
                    };
                    let Some(target) = anchor_target(&href).and_then(|id| doc.get_element_by_id(id)) else {
                        return;
                    };
                    event.prevent_default();
                    scroll_to(&target);
                })?);
            }

            if let Some(menu) = Menu::lookup(document) {
                let on_toggle = menu.clone();
                listeners.push(Listener::new(&menu.toggle, "click", move |_| on_toggle.toggle())?);

                for link in dom::query_all(&menu.panel, "a")? {
                    let on_link = menu.clone();
                    listeners.push(Listener::new(&link, "click", move |_| on_link.close())?);
                }

                let on_key = menu.clone();
                listeners.push(Listener::new(document, "keydown", move |event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if is_close_key(&event.key()) {
                        on_key.close();
                    }
                })?);
            }

            log::debug!("navigation listeners attached: {}", listeners.len());
            Ok(Self { _listeners: listeners })
        }
    }
}
