use web_sys::window;

use crate::config::THEME_STORAGE_KEY;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Theme> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Reads the stored theme, falling back to light.
    pub fn load() -> Theme {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok())
            .flatten()
            .and_then(|value| Theme::parse(&value))
            .unwrap_or_default()
    }

    /// Stores the theme and swaps the class on `<html>`.
    pub fn apply(self) {
        let Some(window) = window() else { return };
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(THEME_STORAGE_KEY, self.as_str());
        }
        if let Some(root) = window.document().and_then(|d| d.document_element()) {
            let classes = root.class_list();
            let _ = classes.remove_1(self.toggled().as_str());
            let _ = classes.add_1(self.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_values() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse(" light\n"), Some(Theme::Light));
        assert_eq!(Theme::parse("system"), None);
    }

    #[test]
    fn toggles_back_and_forth() {
        assert_eq!(Theme::default().toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
