//! Page Components
//!
//! Browser bindings for each behavior. Every component is wired on its own,
//! so a failure in one leaves the others working.

mod activity_form;
mod form_guard;
mod password_reveal;
mod score_chart;
mod theme_toggle;
mod widgets;

pub use activity_form::bind_activity_form;
pub use form_guard::bind_form_guards;
pub use password_reveal::bind_password_toggles;
pub use score_chart::init_score_chart;
pub use theme_toggle::{bind_theme_toggle, check_theme_preference};
pub use widgets::init_widgets;

use crate::config::PageConfig;
use crate::dom;

/// Script-load entry: theme first, everything else once the page is parsed.
pub fn boot() {
    console_error_panic_hook::set_once();

    let config = PageConfig::default().with_log_level(dom::meta_content("log-level").as_deref());
    if console_logger::init(config.log_level).is_err() {
        web_sys::console::warn_1(&"[boot] logger already installed".into());
    }

    check_theme_preference(&config);
    dom::on_ready(move || run_page(&config));
}

fn run_page(config: &PageConfig) {
    match init_widgets(config) {
        Ok(count) => log::info!("initialized {} widgets", count),
        Err(e) => log::error!("{}", e),
    }
    match bind_form_guards(config) {
        Ok(count) => log::info!("guarding {} forms", count),
        Err(e) => log::error!("{}", e),
    }
    match bind_password_toggles(config) {
        Ok(count) => log::debug!("bound {} password toggles", count),
        Err(e) => log::error!("{}", e),
    }
    if let Err(e) = bind_theme_toggle(config) {
        log::error!("{}", e);
    }
    match bind_activity_form(config) {
        Ok(true) => log::info!("activity form ready"),
        Ok(false) => {}
        Err(e) => log::error!("{}", e),
    }
    if let Err(e) = init_score_chart(config) {
        log::error!("{}", e);
    }
}
