//! Light/dark theme switching.
//!
//! The preference is persisted in localStorage and applied as a
//! `data-theme` attribute on `<body>`, which the stylesheet keys on.

use leptos::prelude::*;
use web_sys::window;

/// Available themes. Light is the default for new visitors.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Theme name used for the body attribute and localStorage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

const THEME_STORAGE_KEY: &str = "store-theme";

fn load_theme_from_storage() -> Theme {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| Theme::from_str(&s))
        .unwrap_or_default()
}

fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

fn apply_theme(theme: Theme) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Sets the theme, persists it and updates the body attribute.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme_to_storage(theme);
        apply_theme(theme);
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get().toggled());
    }
}

/// Provides the theme context and applies the stored theme on startup.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial_theme = load_theme_from_storage();
    let theme = RwSignal::new(initial_theme);

    apply_theme(initial_theme);

    provide_context(ThemeContext { theme });

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap the app with ThemeProvider.")
}

/// Sun/moon button that flips between the two themes.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="navbar-icon-btn"
            title="Toggle theme"
            on:click=move |_| ctx.toggle()
        >
            {move || {
                if ctx.theme.get() == Theme::Dark {
                    crate::shared::icons::icon("sun")
                } else {
                    crate::shared::icons::icon("moon")
                }
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_round_trip() {
        assert_eq!(Theme::from_str(Theme::Dark.as_str()), Theme::Dark);
        assert_eq!(Theme::from_str(Theme::Light.as_str()), Theme::Light);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_light() {
        assert_eq!(Theme::from_str("forest"), Theme::Light);
        assert_eq!(Theme::from_str(""), Theme::Light);
    }

    #[test]
    fn test_toggle_alternates() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
