//! Theme system for the portfolio app.
//!
//! Provides 3 themes: Light, Dark, and Boreal.

use dioxus::prelude::*;

/// Available themes for the application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Boreal,
}

impl Theme {
    /// Returns the CSS data-theme attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Boreal => "boreal",
        }
    }

    /// Parses a data-theme value back into a theme, defaulting to Light.
    pub fn from_css_value(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            "boreal" => Theme::Boreal,
            _ => Theme::Light,
        }
    }

    /// Returns the display name for the theme.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::Boreal => "Boreal",
        }
    }

    /// Returns all available themes.
    pub fn all() -> &'static [Theme] {
        &[Theme::Light, Theme::Dark, Theme::Boreal]
    }
}

/// Global signal for current theme.
pub static CURRENT_THEME: GlobalSignal<Theme> = GlobalSignal::new(|| Theme::default());

/// Themed root wrapper component.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}

/// Theme switcher dropdown component.
///
/// Writes the global theme signal; persistence is the caller's concern
/// (the app watches the signal and saves the preference).
#[component]
pub fn ThemeSwitcher() -> Element {
    let current_theme = *CURRENT_THEME.read();

    rsx! {
        div { class: "theme-switcher",
            select {
                value: "{current_theme.css_value()}",
                onchange: move |evt| {
                    *CURRENT_THEME.write() = Theme::from_css_value(&evt.value());
                },
                for t in Theme::all() {
                    option {
                        value: "{t.css_value()}",
                        selected: *t == current_theme,
                        "{t.display_name()}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_values_round_trip() {
        for t in Theme::all() {
            assert_eq!(Theme::from_css_value(t.css_value()), *t);
        }
    }

    #[test]
    fn unknown_css_value_defaults_to_light() {
        assert_eq!(Theme::from_css_value("solarized"), Theme::Light);
    }
}
