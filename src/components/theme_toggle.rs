//! Theme Toggle Binding
//!
//! Browser-backed preference store (localStorage) and theme target (the
//! root element attribute plus the toggle icon).

use leptos::prelude::{document, window};
use web_sys::Storage;

use crate::config::PageConfig;
use crate::dom;
use crate::error::ThemeError;
use crate::theme::{PreferenceStore, ThemeController, ThemeTarget};

pub struct LocalStoragePreference {
    key: &'static str,
}

impl LocalStoragePreference {
    fn storage(&self) -> Option<Storage> {
        window().local_storage().ok().flatten()
    }
}

impl PreferenceStore for LocalStoragePreference {
    fn read(&self) -> Option<String> {
        self.storage()?.get_item(self.key).ok().flatten()
    }

    fn write(&self, value: &str) -> Result<(), ThemeError> {
        self.storage()
            .ok_or(ThemeError::StorageUnavailable)?
            .set_item(self.key, value)
            .map_err(|e| ThemeError::Write(format!("{:?}", e)))
    }
}

pub struct DocumentTheme {
    attribute: &'static str,
    icon_selector: &'static str,
}

impl ThemeTarget for DocumentTheme {
    fn is_dark(&self) -> bool {
        document()
            .document_element()
            .and_then(|root| root.get_attribute(self.attribute))
            .as_deref()
            == Some("dark")
    }

    fn set_dark(&self, dark: bool) {
        let Some(root) = document().document_element() else {
            return;
        };
        let result = if dark {
            root.set_attribute(self.attribute, "dark")
        } else {
            root.remove_attribute(self.attribute)
        };
        if result.is_err() {
            log::warn!("failed to update {} attribute", self.attribute);
        }
    }

    fn set_icon(&self, class: &str) -> bool {
        match dom::query(self.icon_selector) {
            Some(icon) => {
                icon.set_class_name(class);
                true
            }
            None => false,
        }
    }
}

pub fn theme_controller(config: &PageConfig) -> ThemeController<LocalStoragePreference, DocumentTheme> {
    ThemeController::new(
        LocalStoragePreference {
            key: config.theme_storage_key,
        },
        DocumentTheme {
            attribute: config.theme_attribute,
            icon_selector: config.theme_icon_selector,
        },
    )
}

/// Runs at script evaluation, before the page is parsed.
pub fn check_theme_preference(config: &PageConfig) {
    let preference = theme_controller(config).check_preference();
    log::debug!("initial theme {}", preference.as_str());
}

pub fn bind_theme_toggle(config: &PageConfig) -> Result<usize, String> {
    let controls = dom::query_all(config.theme_toggle_selector);
    let count = controls.len();
    for control in controls {
        let theme = theme_controller(config);
        dom::listen(&control, "click", move |_| {
            if let Err(e) = theme.toggle() {
                log::warn!("{}", e);
            }
        })?;
    }
    Ok(count)
}
