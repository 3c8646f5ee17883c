//! Scroll-triggered reveal animations.
//!
//! Targets get the `reveal` marker on registration and `visible` the first
//! time enough of them enters the viewport. `visible` is never removed.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    /// Derive the state from whether the element carries the visible class.
    #[must_use]
    pub fn from_marked(marked: bool) -> Self {
        if marked { Self::Visible } else { Self::Hidden }
    }

    /// Next state after an intersection report. Visible is terminal.
    #[must_use]
    pub fn observe(self, qualifies: bool) -> Self {
        match self {
            Self::Visible => Self::Visible,
            Self::Hidden if qualifies => Self::Visible,
            Self::Hidden => Self::Hidden,
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::RevealAnimator;

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::Document;

    use super::RevealState;
    use crate::consts::{REVEAL_CLASS, REVEAL_SELECTOR, VISIBLE_CLASS};
    use crate::dom;
    use crate::error::SiteError;
    use crate::visibility::OneShotWatcher;

    pub struct RevealAnimator {
        _watcher: OneShotWatcher,
        tracked: usize,
    }

    impl RevealAnimator {
        /// Mark and watch every reveal target in `document`.
        ///
        /// # Errors
        ///
        /// Returns an error when the observer cannot be created or the
        /// selector is rejected.
        pub fn mount(document: &Document, threshold: f64) -> Result<Self, SiteError> {
            let watcher = OneShotWatcher::new(threshold, |element| {
                let classes = element.class_list();
                let before = RevealState::from_marked(classes.contains(VISIBLE_CLASS));
                if before.observe(true) != before {
                    dom::report("reveal", classes.add_1(VISIBLE_CLASS).map_err(SiteError::from));
                }
            })?;

            let targets = dom::query_all(document, REVEAL_SELECTOR)?;
            for element in &targets {
                element.class_list().add_1(REVEAL_CLASS)?;
                watcher.watch(element);
            }
            log::debug!("reveal animator tracking {} elements", targets.len());
            Ok(Self { _watcher: watcher, tracked: targets.len() })
        }

        #[must_use]
        pub fn tracked(&self) -> usize {
            self.tracked
        }
    }
}
