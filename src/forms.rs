//! Contact and newsletter submit acknowledgements.
//!
//! Neither form talks to a server. Submitting shows a toast and resets the
//! form.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// Fallback recipient when the newsletter email is blank.
pub const INBOX_FALLBACK: &str = "your inbox";

/// Whitespace-only counts as empty; anything else is used as typed.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Toast text for a contact submission.
#[must_use]
pub fn contact_message(name: Option<&str>) -> String {
    match non_blank(name) {
        Some(name) => format!("Transmission locked in, {name}."),
        None => "Transmission locked in.".to_owned(),
    }
}

/// Toast text for a newsletter signup.
#[must_use]
pub fn newsletter_message(email: Option<&str>) -> String {
    format!("Weekly signal dispatched to {}.", non_blank(email).unwrap_or(INBOX_FALLBACK))
}

#[cfg(feature = "hydrate")]
pub use browser::FormHandlers;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, FormData, HtmlFormElement, HtmlInputElement};

    use super::{contact_message, newsletter_message};
    use crate::consts::{CONTACT_FORM_SELECTOR, CONTACT_NAME_FIELD, NEWSLETTER_EMAIL_SELECTOR, NEWSLETTER_FORM_SELECTOR};
    use crate::dom::{self, Listener};
    use crate::error::SiteError;
    use crate::toast::Toaster;

    fn form(document: &Document, selector: &str) -> Option<HtmlFormElement> {
        dom::query(document, selector).and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    }

    fn contact_name(form: &HtmlFormElement) -> Result<Option<String>, SiteError> {
        Ok(FormData::new_with_form(form)?.get(CONTACT_NAME_FIELD).as_string())
    }

    fn newsletter_email(form: &HtmlFormElement) -> Result<Option<String>, SiteError> {
        Ok(form
            .query_selector(NEWSLETTER_EMAIL_SELECTOR)?
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value()))
    }

    /// Submit listeners for the contact and newsletter forms.
    pub struct FormHandlers {
        _listeners: Vec<Listener>,
    }

    impl FormHandlers {
        /// Attach to whichever of the two forms exist.
        ///
        /// # Errors
        ///
        /// Returns [`SiteError::Js`] when a listener cannot be registered.
        pub fn mount(document: &Document, toaster: &Toaster) -> Result<Self, SiteError> {
            let mut listeners = Vec::new();

            if let Some(contact) = form(document, CONTACT_FORM_SELECTOR) {
                let toaster = toaster.clone();
                let target = contact.clone();
                listeners.push(Listener::new(&contact, "submit", move |event| {
                    event.prevent_default();
                    let name = match contact_name(&target) {
                        Ok(name) => name,
                        Err(err) => {
                            dom::warn_js("contact form data", &err);
                            None
                        }
                    };
                    toaster.show(&contact_message(name.as_deref()));
                    target.reset();
                })?);
            }

            if let Some(newsletter) = form(document, NEWSLETTER_FORM_SELECTOR) {
                let toaster = toaster.clone();
                let target = newsletter.clone();
                listeners.push(Listener::new(&newsletter, "submit", move |event| {
                    event.prevent_default();
                    let email = match newsletter_email(&target) {
                        Ok(email) => email,
                        Err(err) => {
                            dom::warn_js("newsletter email", &err);
                            None
                        }
                    };
                    toaster.show(&newsletter_message(email.as_deref()));
                    target.reset();
                })?);
            }

            log::debug!("form handlers attached: {}", listeners.len());
            Ok(Self { _listeners: listeners })
        }
    }
}
