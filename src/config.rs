//! Page Configuration
//!
//! Markup contracts and constants shared by the page components.

use std::time::Duration;

use log::LevelFilter;

/// Everything the components need to find their elements and talk to the
/// server. All fields are static, so the config is freely copied into
/// event handlers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageConfig {
    // Activity submission
    pub log_activity_endpoint: &'static str,
    pub reload_delay: Duration,
    pub activity_form_id: &'static str,
    pub activity_modal_id: &'static str,
    pub activity_toast_id: &'static str,
    pub total_score_selector: &'static str,
    pub user_level_selector: &'static str,

    // Theme
    pub theme_storage_key: &'static str,
    pub theme_attribute: &'static str,
    pub theme_toggle_selector: &'static str,
    pub theme_icon_selector: &'static str,

    // Widgets and forms
    pub tooltip_selector: &'static str,
    pub popover_selector: &'static str,
    pub validation_class: &'static str,
    pub validated_class: &'static str,
    pub password_toggle_selector: &'static str,
    pub password_icon_selector: &'static str,

    // Chart
    pub chart_canvas_id: &'static str,
    pub chart_data_id: &'static str,

    pub log_level: LevelFilter,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            log_activity_endpoint: "/log-activity",
            reload_delay: Duration::from_millis(1500),
            activity_form_id: "activityForm",
            activity_modal_id: "logActivityModal",
            activity_toast_id: "activityToast",
            total_score_selector: ".total-score",
            user_level_selector: ".user-level",

            theme_storage_key: "theme",
            theme_attribute: "data-bs-theme",
            theme_toggle_selector: ".theme-toggle",
            theme_icon_selector: ".theme-toggle i",

            tooltip_selector: "[data-bs-toggle=\"tooltip\"]",
            popover_selector: "[data-bs-toggle=\"popover\"]",
            validation_class: "needs-validation",
            validated_class: "was-validated",
            password_toggle_selector: ".toggle-password",
            password_icon_selector: "i",

            chart_canvas_id: "scoreChart",
            chart_data_id: "chartData",

            log_level: LevelFilter::Info,
        }
    }
}

impl PageConfig {
    /// Apply the `<meta name="log-level">` override. Unknown values keep
    /// the current level.
    pub fn with_log_level(mut self, raw: Option<&str>) -> Self {
        if let Some(level) = raw.and_then(|value| value.trim().parse::<LevelFilter>().ok()) {
            self.log_level = level;
        }
        self
    }
}
