//! Footer copyright year.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

/// Text written into the year element.
#[must_use]
pub fn year_text(year: u32) -> String {
    year.to_string()
}

/// Write the current year into `#year`, if the page has one.
#[cfg(feature = "hydrate")]
pub fn stamp_year(document: &web_sys::Document) {
    if let Some(el) = document.get_element_by_id(crate::consts::YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year_text(year)));
    }
}
