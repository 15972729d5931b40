use std::{cell::RefCell, collections::HashMap, rc::Rc};

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} mode")
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

/// Where the initial theme came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeSource {
    Stored,
    System,
    Default,
}

impl ThemeSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stored => "stored",
            Self::System => "system",
            Self::Default => "default",
        }
    }
}

/// Durable key-value storage for user preferences.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// Process-local store, shared between clones.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Current theme bound to the store it persists into.
pub struct ThemePreference<S> {
    store: S,
    theme: Theme,
    source: ThemeSource,
}

impl<S: PreferenceStore> ThemePreference<S> {
    /// Any non-empty saved value wins, then the OS dark-mode signal, then light.
    /// Saved values other than `"dark"` resolve to light.
    pub fn resolve(store: S, system_prefers_dark: bool) -> Self {
        let stored = store
            .load(THEME_KEY)
            .filter(|value| !value.is_empty())
            .map(|value| Theme::from_str(&value).unwrap_or(Theme::Light));

        let (theme, source) = match stored {
            Some(theme) => (theme, ThemeSource::Stored),
            None if system_prefers_dark => (Theme::Dark, ThemeSource::System),
            None => (Theme::Light, ThemeSource::Default),
        };

        Self {
            store,
            theme,
            source,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn source(&self) -> ThemeSource {
        self.source
    }

    /// Flips the theme and persists the new value immediately.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.store.save(THEME_KEY, self.theme.as_str());
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_dark_applies_without_saved_value() {
        let preference = ThemePreference::resolve(MemoryStore::default(), true);

        assert_eq!(preference.theme(), Theme::Dark);
        assert_eq!(preference.source(), ThemeSource::System);
    }

    #[test]
    fn defaults_to_light() {
        let preference = ThemePreference::resolve(MemoryStore::default(), false);

        assert_eq!(preference.theme(), Theme::Light);
        assert_eq!(preference.source(), ThemeSource::Default);
    }

    #[test]
    fn toggle_persists_and_reload_ignores_system_signal() {
        let store = MemoryStore::default();
        let mut preference = ThemePreference::resolve(store.clone(), true);

        assert_eq!(preference.toggle(), Theme::Light);
        assert_eq!(store.load(THEME_KEY).as_deref(), Some("light"));

        let reloaded = ThemePreference::resolve(store, true);
        assert_eq!(reloaded.theme(), Theme::Light);
        assert_eq!(reloaded.source(), ThemeSource::Stored);
    }

    #[test]
    fn every_toggle_writes_through() {
        let store = MemoryStore::default();
        let mut preference = ThemePreference::resolve(store.clone(), false);

        preference.toggle();
        assert_eq!(store.load(THEME_KEY).as_deref(), Some("dark"));
        preference.toggle();
        assert_eq!(store.load(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn unrecognised_saved_value_counts_as_light() {
        let store = MemoryStore::default();
        store.save(THEME_KEY, "sepia");

        let preference = ThemePreference::resolve(store, true);
        assert_eq!(preference.theme(), Theme::Light);
        assert_eq!(preference.source(), ThemeSource::Stored);
    }

    #[test]
    fn empty_saved_value_is_absent() {
        let store = MemoryStore::default();
        store.save(THEME_KEY, "");

        let preference = ThemePreference::resolve(store, true);
        assert_eq!(preference.theme(), Theme::Dark);
        assert_eq!(preference.source(), ThemeSource::System);
    }

    #[test]
    fn toggle_label_names_the_next_mode() {
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark mode");
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light mode");
    }
}
