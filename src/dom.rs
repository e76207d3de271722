//! DOM Helpers
//!
//! Thin lookups and listener plumbing over `web_sys`.

use leptos::prelude::{document, window};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget};

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok().flatten()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Ok(nodes) = document().query_selector_all(selector) else {
        log::warn!("invalid selector {}", selector);
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

/// Content of `<meta name="...">`, if present.
pub fn meta_content(name: &str) -> Option<String> {
    query(&format!("meta[name=\"{}\"]", name)).and_then(|meta| meta.get_attribute("content"))
}

/// Attach a listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), String>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(|_| format!("failed to attach {} listener", event))?;
    callback.forget();
    Ok(())
}

/// Run `f` once the document is parsed: on `DOMContentLoaded`, or right away
/// if that already fired.
pub fn on_ready<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let doc = document();
    if doc.ready_state() != "loading" {
        f();
        return;
    }
    let callback = Closure::once_into_js(f);
    if doc
        .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        .is_err()
    {
        log::error!("failed to register page-ready handler");
    }
}

pub fn alert(message: &str) {
    if window().alert_with_message(message).is_err() {
        log::warn!("alert suppressed: {}", message);
    }
}

pub fn reload() {
    if let Err(err) = window().location().reload() {
        log::error!("page reload failed: {:?}", err);
    }
}
