//! DOM contract shared by the page markup and this crate.
//!
//! The markup and stylesheet are authored elsewhere; these names must match
//! them exactly.

// ── Theme ───────────────────────────────────────────────────────

/// Id of the button that flips between light and dark.
pub const THEME_TOGGLE_ID: &str = "themeToggle";

/// Attribute on `<html>` mirroring the applied mode.
pub const THEME_ATTR: &str = "data-theme";

/// Body class present while the light palette is applied.
pub const LIGHT_THEME_CLASS: &str = "light-theme";

/// Media query for the ambient dark color scheme.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

// ── Reveal / counters ───────────────────────────────────────────

/// Elements that fade in the first time they scroll into view.
pub const REVEAL_SELECTOR: &str = ".reveal, .card, .timeline-item, .showcase-card, .team-card";

/// Marker class added to every reveal target at registration.
pub const REVEAL_CLASS: &str = "reveal";

/// Terminal class added once a reveal target has been seen.
pub const VISIBLE_CLASS: &str = "visible";

/// Attribute carrying a counter's target value.
pub const COUNT_ATTR: &str = "data-count";

/// Selector for animated counters.
pub const COUNT_SELECTOR: &str = "[data-count]";

// ── Toast / forms ───────────────────────────────────────────────

/// Id of the `<template>` holding toast markup.
pub const TOAST_TEMPLATE_ID: &str = "toast-template";

/// Selector for the text node inside a toast.
pub const TOAST_TEXT_SELECTOR: &str = "p";

pub const CONTACT_FORM_SELECTOR: &str = ".contact-form";
pub const CONTACT_NAME_FIELD: &str = "name";
pub const NEWSLETTER_FORM_SELECTOR: &str = ".newsletter form";
pub const NEWSLETTER_EMAIL_SELECTOR: &str = "input[type='email']";

// ── Navigation ──────────────────────────────────────────────────

/// In-page anchor links.
pub const ANCHOR_SELECTOR: &str = "a[href^='#']";

pub const MENU_TOGGLE_ID: &str = "menuToggle";
pub const MOBILE_MENU_ID: &str = "mobileMenu";

/// Body class present while the mobile menu is open.
pub const MENU_OPEN_CLASS: &str = "menu-open";

pub const OPEN_MENU_LABEL: &str = "Open navigation";
pub const CLOSE_MENU_LABEL: &str = "Close navigation";

// ── Parallax / motion / footer ──────────────────────────────────

pub const HERO_SELECTOR: &str = ".hero";
pub const ORBITAL_SELECTOR: &str = ".orbital";

/// Media query for the ambient reduced-motion preference.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Class on `<html>` that disables animation-heavy styling.
pub const REDUCE_MOTION_CLASS: &str = "reduce-motion";

pub const YEAR_ID: &str = "year";

/// Id of the optional inline JSON config block.
pub const CONFIG_SCRIPT_ID: &str = "site-config";
