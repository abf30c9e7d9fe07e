use anyhow::{Context, Result};

use crate::config::{DARK_MODE_KEY, SWITCH_TO_DARK_LABEL, SWITCH_TO_LIGHT_LABEL};
use crate::storage::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemePreference::Dark)
    }

    /// Label for the toggle control, naming the action a click performs.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ThemePreference::Light => SWITCH_TO_DARK_LABEL,
            ThemePreference::Dark => SWITCH_TO_LIGHT_LABEL,
        }
    }

    fn encode(&self) -> &'static str {
        match self {
            ThemePreference::Light => "false",
            ThemePreference::Dark => "true",
        }
    }

    /// Only the exact string `"true"` selects dark mode.
    fn decode(raw: Option<&str>) -> Self {
        match raw {
            Some("true") => ThemePreference::Dark,
            _ => ThemePreference::Light,
        }
    }
}

impl From<bool> for ThemePreference {
    fn from(dark: bool) -> Self {
        if dark {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }
}

/// Where the theme becomes visible: the document root's class and the label
/// of the toggle control, if one is mounted.
pub(crate) trait ThemeSurface {
    fn is_dark(&self) -> bool;
    fn set_dark(&mut self, dark: bool);
    /// No-op when there is no toggle control.
    fn set_toggle_label(&mut self, label: &'static str);
}

/// Read the stored preference. Never fails: unset, unrecognized or
/// unreadable values all mean light.
pub(crate) fn get_preference(store: &dyn PreferenceStore) -> ThemePreference {
    match store.get_item(DARK_MODE_KEY) {
        Ok(raw) => ThemePreference::decode(raw.as_deref()),
        Err(e) => {
            tracing::warn!(error = %format!("{e:#}"), "failed to read theme preference");
            ThemePreference::Light
        }
    }
}

pub(crate) fn set_preference(store: &dyn PreferenceStore, theme: ThemePreference) -> Result<()> {
    store
        .set_item(DARK_MODE_KEY, theme.encode())
        .with_context(|| format!("failed to save {} theme", theme.as_str()))
}

pub(crate) fn apply_theme(surface: &mut dyn ThemeSurface, theme: ThemePreference) {
    surface.set_dark(theme.is_dark());
    surface.set_toggle_label(theme.toggle_label());
}

/// Flip the visible theme and persist it.
///
/// The new theme is only applied once it has been stored, so a failed write
/// leaves both the page and the store on the previous theme.
pub(crate) fn toggle_theme(
    surface: &mut dyn ThemeSurface,
    store: &dyn PreferenceStore,
) -> Result<ThemePreference> {
    let next = ThemePreference::from(surface.is_dark()).toggle();
    set_preference(store, next)?;
    apply_theme(surface, next);
    Ok(next)
}

/// Page-load initialization. Adds or removes the dark class so the page
/// matches the store whatever state it was left in.
pub(crate) fn load_theme(
    surface: &mut dyn ThemeSurface,
    store: &dyn PreferenceStore,
) -> ThemePreference {
    let theme = get_preference(store);
    apply_theme(surface, theme);
    theme
}
