//! Appearance section: UI theme, icon set and code-block theme selection.
//!
//! The theme and icon lists are filled in by the package installer. This
//! module only holds the selected identifiers; a selection that is not in
//! the installed list is kept as-is and left for the installer to repair.
//! `themeVer` and `iconVer` record the installed version of the selection so
//! an updater can spot drift.

use serde::{Deserialize, Serialize};

use crate::types::{CloseButtonBehavior, Mode};

/// An installed appearance theme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppearanceTheme {
    /// Stable identifier, e.g. `daylight`
    pub name: String,
    /// Localized display name
    pub label: String,
}

impl AppearanceTheme {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appearance {
    #[serde(default)]
    pub mode: Mode,

    /// When true the OS light/dark preference wins over `mode`
    #[serde(rename = "modeOS", default = "crate::defaults::bool_true")]
    pub mode_os: bool,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub dark_themes: Vec<AppearanceTheme>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub light_themes: Vec<AppearanceTheme>,

    #[serde(default = "crate::defaults::theme_dark")]
    pub theme_dark: String,

    #[serde(default = "crate::defaults::theme_light")]
    pub theme_light: String,

    #[serde(default)]
    pub theme_ver: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub icons: Vec<String>,

    #[serde(default = "crate::defaults::icon")]
    pub icon: String,

    #[serde(default)]
    pub icon_ver: String,

    #[serde(default = "crate::defaults::code_block_theme_light")]
    pub code_block_theme_light: String,

    #[serde(default = "crate::defaults::code_block_theme_dark")]
    pub code_block_theme_dark: String,

    /// Interface language, kept equal to the application-level `lang`
    #[serde(default = "crate::defaults::lang")]
    pub lang: String,

    /// Allow installed themes to run their bundled script
    #[serde(rename = "themeJS", default)]
    pub theme_js: bool,

    #[serde(default)]
    pub close_button_behavior: CloseButtonBehavior,

    #[serde(default)]
    pub hide_status_bar: bool,
}

/// Older documents persist empty lists as `null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            mode: Mode::Light,
            mode_os: true,
            dark_themes: Vec::new(),
            light_themes: Vec::new(),
            theme_dark: crate::defaults::theme_dark(),
            theme_light: crate::defaults::theme_light(),
            theme_ver: String::new(),
            icons: Vec::new(),
            icon: crate::defaults::icon(),
            icon_ver: String::new(),
            code_block_theme_light: crate::defaults::code_block_theme_light(),
            code_block_theme_dark: crate::defaults::code_block_theme_dark(),
            lang: crate::defaults::lang(),
            theme_js: false,
            close_button_behavior: CloseButtonBehavior::Exit,
            hide_status_bar: false,
        }
    }
}

impl Appearance {
    /// Factory defaults used on first run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the mode actually in effect, given the OS preference.
    pub fn effective_mode(&self, os_prefers_dark: bool) -> Mode {
        if self.mode_os {
            if os_prefers_dark { Mode::Dark } else { Mode::Light }
        } else {
            self.mode
        }
    }

    /// Selected UI theme identifier for `mode`.
    pub fn selected_theme(&self, mode: Mode) -> &str {
        match mode {
            Mode::Light => &self.theme_light,
            Mode::Dark => &self.theme_dark,
        }
    }

    /// Selected code-block theme identifier for `mode`.
    pub fn code_block_theme(&self, mode: Mode) -> &str {
        match mode {
            Mode::Light => &self.code_block_theme_light,
            Mode::Dark => &self.code_block_theme_dark,
        }
    }

    /// Installed themes for `mode`.
    pub fn themes(&self, mode: Mode) -> &[AppearanceTheme] {
        match mode {
            Mode::Light => &self.light_themes,
            Mode::Dark => &self.dark_themes,
        }
    }

    /// Whether the theme selected for `mode` is in the installed list.
    ///
    /// Nothing here acts on the answer; the installer decides the fallback.
    pub fn is_theme_installed(&self, mode: Mode) -> bool {
        let selected = self.selected_theme(mode);
        self.themes(mode).iter().any(|t| t.name == selected)
    }

    /// Whether the selected icon set is in the installed list.
    pub fn is_icon_installed(&self) -> bool {
        self.icons.iter().any(|i| *i == self.icon)
    }
}
