//! Page Library Bindings
//!
//! Bootstrap and Chart.js are loaded by the page as globals; these are the
//! pieces of their APIs the components use.

use wasm_bindgen::prelude::*;
use web_sys::Element;

// ========================
// Bootstrap
// ========================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Tooltip;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Tooltip")]
    pub fn new(element: &Element) -> Result<Tooltip, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Popover;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Popover")]
    pub fn new(element: &Element) -> Result<Popover, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Toast;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Toast")]
    pub fn new(element: &Element) -> Result<Toast, JsValue>;

    #[wasm_bindgen(method)]
    pub fn show(this: &Toast);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Modal;

    /// The modal instance attached to `element`, if Bootstrap created one.
    #[wasm_bindgen(static_method_of = Modal, js_namespace = bootstrap, js_class = "Modal", js_name = getInstance)]
    pub fn get_instance(element: &Element) -> Option<Modal>;

    #[wasm_bindgen(method)]
    pub fn hide(this: &Modal);
}

// ========================
// Chart.js
// ========================

#[wasm_bindgen]
extern "C" {
    pub type Chart;

    #[wasm_bindgen(catch, constructor, js_class = "Chart")]
    pub fn new(item: &JsValue, config: &JsValue) -> Result<Chart, JsValue>;
}
