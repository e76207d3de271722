//! Activity Submission
//!
//! Posts one activity to the server and drives the page through the
//! outcome: on success update the score, reset the form, close the modal,
//! toast, and schedule a reload; on failure alert and leave the form as is.
//!
//! The network, the page and the reload timer are all injected, so the
//! whole flow runs in tests without a browser.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use crate::error::SubmitError;
use crate::models::{ActivityRecord, LogActivityResponse};

// ========================
// Seams
// ========================

#[allow(async_fn_in_trait)]
pub trait ActivityApi {
    async fn log_activity(&self, record: &ActivityRecord) -> Result<LogActivityResponse, SubmitError>;
}

/// Page side effects of a submission.
pub trait ActivityView {
    fn set_total_score(&self, text: &str);
    fn set_level(&self, text: &str);
    fn reset_form(&self);
    fn hide_modal(&self);
    fn show_toast(&self);
    fn alert(&self, message: &str);
}

pub trait ReloadHandle {
    fn cancel(self);
}

pub trait ReloadScheduler {
    type Handle: ReloadHandle;

    fn schedule_reload(&self, delay: Duration) -> Option<Self::Handle>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Reloading,
}

// ========================
// Form Values
// ========================

/// Parse the points field the way the browser's `parseFloat` does: skip
/// leading whitespace, take the longest numeric prefix, NaN if there is none.
pub fn parse_points(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return f64::NAN;
    };
    let text = raw.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if text[end..].starts_with("Infinity") {
        return if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - digits_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }
        mantissa_digits += fraction_end - fraction_start;
        if mantissa_digits > 0 {
            end = fraction_end;
        }
    }
    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+') | Some(b'-')) {
            exponent_end += 1;
        }
        let exponent_digits_start = exponent_end;
        while exponent_end < bytes.len() && bytes[exponent_end].is_ascii_digit() {
            exponent_end += 1;
        }
        if exponent_end > exponent_digits_start {
            end = exponent_end;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

/// Round half up, as the browser's `Math.round` does, and render the
/// result without a fractional part.
pub fn format_rounded(value: f64) -> String {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    if rounded == 0.0 {
        // -0.4 rounds to -0
        "0".to_string()
    } else if rounded.is_infinite() {
        if rounded > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        format!("{}", rounded)
    }
}

// ========================
// Submitter
// ========================

pub struct ActivitySubmitter<A, V, R: ReloadScheduler> {
    api: A,
    view: V,
    scheduler: R,
    reload_delay: Duration,
    state: Cell<SubmitState>,
    pending_reload: RefCell<Option<R::Handle>>,
}

impl<A, V, R> ActivitySubmitter<A, V, R>
where
    A: ActivityApi,
    V: ActivityView,
    R: ReloadScheduler,
{
    pub fn new(api: A, view: V, scheduler: R, reload_delay: Duration) -> Self {
        Self {
            api,
            view,
            scheduler,
            reload_delay,
            state: Cell::new(SubmitState::Idle),
            pending_reload: RefCell::new(None),
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state.get()
    }

    pub async fn submit(&self, record: ActivityRecord) -> Result<(), SubmitError> {
        if self.state() == SubmitState::Submitting {
            log::debug!("another submission is still in flight");
        }
        self.state.set(SubmitState::Submitting);
        log::info!(
            "logging {} activity ({} points)",
            record
                .category()
                .map(|category| category.label())
                .or(record.activity_type.as_deref())
                .unwrap_or("untyped"),
            record.points
        );

        match self.send(&record).await {
            Ok(response) => {
                self.on_success(&response);
                Ok(())
            }
            Err(error) => {
                log::error!("activity submission failed: {}", error);
                self.view.alert(error.alert_text());
                self.state.set(SubmitState::Idle);
                Err(error)
            }
        }
    }

    async fn send(&self, record: &ActivityRecord) -> Result<LogActivityResponse, SubmitError> {
        let response = self.api.log_activity(record).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(SubmitError::Rejected {
                message: response.rejection_message(),
            })
        }
    }

    fn on_success(&self, response: &LogActivityResponse) {
        if let Some(total) = response.total_score {
            self.view.set_total_score(&format_rounded(total));
        }
        if let Some(level) = response.level {
            self.view.set_level(&format_rounded(level));
        }
        self.view.reset_form();
        self.view.hide_modal();
        self.view.show_toast();

        // One reload timer at a time.
        if self.cancel_reload() {
            log::debug!("replaced pending reload");
        }
        let handle = self.scheduler.schedule_reload(self.reload_delay);
        if handle.is_none() {
            log::warn!("could not schedule page reload");
        }
        *self.pending_reload.borrow_mut() = handle;
        self.state.set(SubmitState::Reloading);
        log::info!("activity saved, reloading in {} ms", self.reload_delay.as_millis());
    }

    /// Cancel a scheduled reload. Returns false if none was pending.
    pub fn cancel_reload(&self) -> bool {
        match self.pending_reload.borrow_mut().take() {
            Some(handle) => {
                handle.cancel();
                self.state.set(SubmitState::Idle);
                true
            }
            None => false,
        }
    }
}
