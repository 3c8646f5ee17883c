//! Page bootstrap.
//!
//! SYSTEM CONTEXT
//! ==============
//! `boot` runs once when the WASM module starts. It reads config, installs
//! the console logger, and mounts each component. Components are independent:
//! one that fails to mount is logged and skipped while the rest carry on.
//! The mounted [`Site`] lives in a thread-local for the rest of the page
//! session, which keeps every listener, observer, and timer attached.

use std::cell::RefCell;

use log::LevelFilter;
use web_sys::Document;

use crate::config::SiteConfig;
use crate::consts::CONFIG_SCRIPT_ID;
use crate::counter::CounterAnimator;
use crate::dom;
use crate::error::SiteError;
use crate::footer;
use crate::forms::FormHandlers;
use crate::motion::MotionAdapter;
use crate::nav::NavController;
use crate::parallax::ParallaxEffect;
use crate::reveal::RevealAnimator;
use crate::theme::ThemeController;
use crate::toast::Toaster;

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

/// Every mounted component. Dropping it detaches them all.
pub struct Site {
    pub theme: Option<ThemeController>,
    pub reveal: Option<RevealAnimator>,
    pub counters: Option<CounterAnimator>,
    pub toaster: Toaster,
    pub forms: Option<FormHandlers>,
    pub nav: Option<NavController>,
    pub parallax: Option<ParallaxEffect>,
    pub motion: Option<MotionAdapter>,
}

fn mounted<T>(component: &str, result: Result<T, SiteError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{component} not mounted: {err}");
            None
        }
    }
}

impl Site {
    /// Mount every component against `document`.
    #[must_use]
    pub fn mount(document: &Document, config: &SiteConfig) -> Self {
        footer::stamp_year(document);

        let toaster = Toaster::mount(document, config.toast_duration_ms);
        let site = Self {
            theme: mounted("theme", ThemeController::mount(document, &config.storage_key)),
            reveal: mounted("reveal", RevealAnimator::mount(document, config.reveal_threshold)),
            counters: mounted(
                "counters",
                CounterAnimator::mount(document, config.counter_threshold, config.count_duration_ms),
            ),
            forms: mounted("forms", FormHandlers::mount(document, &toaster)),
            nav: mounted("nav", NavController::mount(document)),
            parallax: mounted("parallax", ParallaxEffect::mount(document, config.parallax_strength)),
            motion: mounted("motion", MotionAdapter::mount(document)),
            toaster,
        };
        log::info!(
            "site mounted: {} reveal targets, {} counters",
            site.reveal.as_ref().map_or(0, RevealAnimator::tracked),
            site.counters.as_ref().map_or(0, CounterAnimator::tracked),
        );
        site
    }
}

/// Config from the inline JSON block, if the page has one.
fn read_config(document: &Document) -> Result<SiteConfig, SiteError> {
    match document.get_element_by_id(CONFIG_SCRIPT_ID).and_then(|el| el.text_content()) {
        Some(raw) => SiteConfig::from_json(&raw),
        None => Ok(SiteConfig::default()),
    }
}

fn init_logging(level: LevelFilter) {
    let Some(level) = level.to_level() else {
        return;
    };
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already installed");
    }
}

/// Load config, start logging, mount everything.
pub fn boot() {
    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            init_logging(LevelFilter::Warn);
            log::warn!("site not mounted: {err}");
            return;
        }
    };

    let (config, config_err) = match read_config(&document) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };
    init_logging(config.level_filter().unwrap_or(LevelFilter::Info));
    if let Some(err) = config_err {
        log::warn!("ignoring #{CONFIG_SCRIPT_ID}: {err}");
    }

    let site = Site::mount(&document, &config);
    SITE.with(|slot| *slot.borrow_mut() = Some(site));
}
