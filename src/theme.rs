//! Theme Preference
//!
//! Light/dark preference kept in durable storage and mirrored onto the
//! document. Storage and document are injected so the controller never
//! touches browser globals directly.

use crate::error::ThemeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Anything other than "dark" (including nothing) reads as light.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => ThemePreference::Dark,
            _ => ThemePreference::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Icon shown while this theme is active: it depicts the theme the
    /// toggle switches to.
    pub fn icon_class(self) -> &'static str {
        match self {
            ThemePreference::Light => "bi bi-moon",
            ThemePreference::Dark => "bi bi-sun",
        }
    }
}

/// Durable storage for the raw preference string.
pub trait PreferenceStore {
    fn read(&self) -> Option<String>;
    fn write(&self, value: &str) -> Result<(), ThemeError>;
}

/// The live document the preference is applied to.
pub trait ThemeTarget {
    fn is_dark(&self) -> bool;
    fn set_dark(&self, dark: bool);
    /// Returns false when the icon element does not exist (yet).
    fn set_icon(&self, class: &str) -> bool;
}

pub struct ThemeController<S, T> {
    store: S,
    target: T,
}

impl<S: PreferenceStore, T: ThemeTarget> ThemeController<S, T> {
    pub fn new(store: S, target: T) -> Self {
        Self { store, target }
    }

    pub fn read_preference(&self) -> ThemePreference {
        ThemePreference::parse(self.store.read().as_deref())
    }

    pub fn apply_preference(&self, preference: ThemePreference) {
        self.target.set_dark(preference == ThemePreference::Dark);
        if !self.target.set_icon(preference.icon_class()) {
            log::debug!("theme icon not present, skipped icon update");
        }
    }

    /// Reconcile the document with storage. Runs before the page is parsed.
    pub fn check_preference(&self) -> ThemePreference {
        let preference = self.read_preference();
        self.apply_preference(preference);
        preference
    }

    /// Flip the theme currently shown on the document and persist it.
    ///
    /// The document is updated even if storage rejects the write.
    pub fn toggle(&self) -> Result<ThemePreference, ThemeError> {
        let current = if self.target.is_dark() {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        };
        let next = current.toggled();
        self.apply_preference(next);
        self.store.write(next.as_str())?;
        log::info!("theme switched to {}", next.as_str());
        Ok(next)
    }
}
