//! Form Guard Binding
//!
//! Hooks the submit-time validity check onto marked forms.

use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlFormElement};

use crate::config::PageConfig;
use crate::dom;
use crate::form_guard::{FormGuard, GuardVerdict, GuardedForm, SubmitInterception};

struct DomForm(HtmlFormElement);

impl GuardedForm for DomForm {
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn check_validity(&self) -> bool {
        self.0.check_validity()
    }

    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }
}

impl SubmitInterception for Event {
    fn prevent_default(&self) {
        Event::prevent_default(self);
    }

    fn stop_propagation(&self) {
        Event::stop_propagation(self);
    }
}

pub fn bind_form_guards(config: &PageConfig) -> Result<usize, String> {
    let guard = FormGuard::new(config.validation_class, config.validated_class);
    let forms: Vec<DomForm> = dom::query_all("form")
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlFormElement>().ok())
        .map(DomForm)
        .filter(|form| guard.applies_to(form))
        .collect();

    let count = forms.len();
    for form in forms {
        let target = form.0.clone();
        dom::listen(&target, "submit", move |event: Event| {
            if guard.on_submit(&form, &event) == GuardVerdict::Blocked {
                log::debug!("blocked invalid form submission");
            }
        })?;
    }
    Ok(count)
}
