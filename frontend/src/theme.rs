use log::warn;

use crate::storage::{KeyValueStore, THEME_KEY};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label for the toggle button, naming the theme it switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Dark Mode",
            Theme::Dark => "Light Mode",
        }
    }

    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(THEME_KEY) {
            Ok(Some(value)) => Theme::parse(&value).unwrap_or_default(),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!("Could not read theme: {}", e);
                Theme::default()
            }
        }
    }

    pub fn save(&self, store: &dyn KeyValueStore) {
        if let Err(e) = store.set(THEME_KEY, self.as_str()) {
            warn!("Could not save theme: {}", e);
        }
    }
}

/// Mirrors the theme onto `<html class="dark">`.
pub fn apply_to_document(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let result = match theme {
        Theme::Dark => classes.add_1("dark"),
        Theme::Light => classes.remove_1("dark"),
    };
    if result.is_err() {
        warn!("Could not apply {} theme", theme.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_defaults_to_light() {
        let store = MemoryStore::default();
        assert_eq!(Theme::load(&store), Theme::Light);
        store.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let store = MemoryStore::default();
        let theme = Theme::load(&store).toggled();
        theme.save(&store);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(Theme::load(&store), Theme::Dark);
        assert_eq!(theme.toggled(), Theme::Light);
    }
}
