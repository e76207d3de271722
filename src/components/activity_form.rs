//! Activity Form Binding
//!
//! Intercepts the activity form, posts it asynchronously and applies the
//! outcome to the page.

use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::{set_timeout_with_handle, TimeoutHandle};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, FormData, HtmlFormElement};

use crate::activity::{
    parse_points, ActivitySubmitter, ActivityView, ReloadHandle, ReloadScheduler,
};
use crate::bindings::{Modal, Toast};
use crate::commands::HttpActivityApi;
use crate::config::PageConfig;
use crate::dom;
use crate::models::ActivityRecord;

// ========================
// Page Side Effects
// ========================

struct DomActivityView {
    form: HtmlFormElement,
    config: PageConfig,
}

impl ActivityView for DomActivityView {
    fn set_total_score(&self, text: &str) {
        if let Some(display) = dom::query(self.config.total_score_selector) {
            display.set_text_content(Some(text));
        }
    }

    fn set_level(&self, text: &str) {
        if let Some(display) = dom::query(self.config.user_level_selector) {
            display.set_text_content(Some(text));
        }
    }

    fn reset_form(&self) {
        self.form.reset();
    }

    fn hide_modal(&self) {
        let modal = dom::element_by_id(self.config.activity_modal_id)
            .and_then(|element| Modal::get_instance(&element));
        if let Some(modal) = modal {
            modal.hide();
        }
    }

    fn show_toast(&self) {
        let Some(element) = dom::element_by_id(self.config.activity_toast_id) else {
            log::warn!("toast #{} not found", self.config.activity_toast_id);
            return;
        };
        match Toast::new(&element) {
            Ok(toast) => toast.show(),
            Err(e) => log::warn!("toast init failed: {:?}", e),
        }
    }

    fn alert(&self, message: &str) {
        dom::alert(message);
    }
}

// ========================
// Reload Timer
// ========================

struct PageReload;

struct PendingReload(TimeoutHandle);

impl ReloadHandle for PendingReload {
    fn cancel(self) {
        self.0.clear();
    }
}

impl ReloadScheduler for PageReload {
    type Handle = PendingReload;

    fn schedule_reload(&self, delay: Duration) -> Option<PendingReload> {
        set_timeout_with_handle(dom::reload, delay)
            .map(PendingReload)
            .map_err(|e| log::error!("setTimeout failed: {:?}", e))
            .ok()
    }
}

// ========================
// Binding
// ========================

fn read_record(form: &HtmlFormElement) -> Result<ActivityRecord, String> {
    let data = FormData::new_with_form(form).map_err(|_| "failed to read activity form".to_string())?;
    let points = data.get("points").as_string();
    Ok(ActivityRecord {
        activity_type: data.get("activity_type").as_string(),
        description: data.get("description").as_string(),
        points: parse_points(points.as_deref()),
    })
}

/// Returns false when the page has no activity form.
pub fn bind_activity_form(config: &PageConfig) -> Result<bool, String> {
    let Some(element) = dom::element_by_id(config.activity_form_id) else {
        return Ok(false);
    };
    let form: HtmlFormElement = element
        .dyn_into()
        .map_err(|_| format!("#{} is not a form", config.activity_form_id))?;

    let submitter = Rc::new(ActivitySubmitter::new(
        HttpActivityApi::new(config.log_activity_endpoint),
        DomActivityView {
            form: form.clone(),
            config: *config,
        },
        PageReload,
        config.reload_delay,
    ));

    let source = form.clone();
    dom::listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        let record = match read_record(&source) {
            Ok(record) => record,
            Err(e) => {
                log::error!("{}", e);
                return;
            }
        };
        let submitter = submitter.clone();
        spawn_local(async move {
            // Failures are already alerted and logged by the submitter.
            let _ = submitter.submit(record).await;
        });
    })?;
    Ok(true)
}
