use serde::{Deserialize, Serialize};

/// daisyUI theme variants the app ships with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to the `data-theme` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_light(&self) -> bool {
        matches!(self, Theme::Light)
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

const THEME_STORAGE_KEY: &str = "notedown-theme";

/// Load theme from localStorage
pub fn load_theme_from_storage() -> Theme {
    use gloo_storage::{LocalStorage, Storage};

    LocalStorage::get(THEME_STORAGE_KEY).unwrap_or_default()
}

/// Save theme to localStorage
pub fn save_theme_to_storage(theme: Theme) {
    use gloo_storage::{LocalStorage, Storage};

    let _ = LocalStorage::set(THEME_STORAGE_KEY, theme);
}

/// Apply theme to the document root and persist it.
pub fn apply_theme(theme: Theme) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }

    save_theme_to_storage(theme);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert!(Theme::default().is_light());
    }

    #[test]
    fn toggling_flips_between_the_two_themes() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn serializes_as_lowercase_attribute_values() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(
            serde_json::from_str::<Theme>("\"dark\"").unwrap(),
            Theme::Dark
        );
        assert_eq!(Theme::Dark.as_str(), "dark");
    }
}
