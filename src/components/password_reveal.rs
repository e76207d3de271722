//! Password Reveal Binding
//!
//! Each `.toggle-password` control is paired with its input once, at bind
//! time.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::config::PageConfig;
use crate::dom;
use crate::password::{resolve_input, PasswordReveal, RevealControl, RevealTarget};

struct DomPasswordField {
    input: HtmlInputElement,
    icon: Option<Element>,
}

impl RevealTarget for DomPasswordField {
    fn input_type(&self) -> String {
        self.input.type_()
    }

    fn set_input_type(&self, input_type: &str) {
        self.input.set_type(input_type);
    }

    fn swap_icon_class(&self, remove: &str, add: &str) {
        if let Some(icon) = &self.icon {
            let classes = icon.class_list();
            let _ = classes.remove_1(remove);
            let _ = classes.add_1(add);
        }
    }
}

struct DomControl<'a>(&'a Element);

impl RevealControl for DomControl<'_> {
    type Node = Element;
    type Input = HtmlInputElement;

    fn aria_controls(&self) -> Option<String> {
        self.0.get_attribute("aria-controls")
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        dom::element_by_id(id)
    }

    fn preceding_sibling(&self) -> Option<Element> {
        self.0.previous_element_sibling()
    }

    fn as_input(&self, node: Element) -> Option<HtmlInputElement> {
        node.dyn_into::<HtmlInputElement>().ok()
    }
}

pub fn bind_password_toggles(config: &PageConfig) -> Result<usize, String> {
    let mut bound = 0;
    for control in dom::query_all(config.password_toggle_selector) {
        let Some(input) = resolve_input(&DomControl(&control)) else {
            log::warn!("password toggle without a target input, skipped");
            continue;
        };
        let icon = control
            .query_selector(config.password_icon_selector)
            .ok()
            .flatten();
        let reveal = PasswordReveal::new(DomPasswordField { input, icon });

        dom::listen(&control, "click", move |_| {
            reveal.toggle();
        })?;
        bound += 1;
    }
    Ok(bound)
}
