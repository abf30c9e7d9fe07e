use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_primitives::toast::{ToastOptions, use_toast};

use crate::dom::DocumentSurface;
use crate::storage::PreferenceStore;
use crate::theme::{ThemePreference, load_theme, toggle_theme};

/// Hook to restore the stored theme on mount and provide the toggle handler.
///
/// Returns the toggle control's current label and the click callback.
pub(crate) fn use_theme(
    store: Rc<dyn PreferenceStore>,
) -> (Signal<&'static str>, Callback<()>) {
    let toggle_label = use_signal(|| ThemePreference::default().toggle_label());
    let toast_api = use_toast();

    // Apply theme on mount
    let load_store = store.clone();
    use_effect(move || {
        let mut surface = DocumentSurface::attach(Some(toggle_label));
        let theme = load_theme(&mut surface, load_store.as_ref());
        tracing::info!(theme = theme.as_str(), "restored theme preference");
    });

    let on_toggle_click = use_callback(move |_| {
        let mut surface = DocumentSurface::attach(Some(toggle_label));
        match toggle_theme(&mut surface, store.as_ref()) {
            Ok(theme) => tracing::debug!(theme = theme.as_str(), "theme toggled"),
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "theme preference not saved");
                toast_api.warning(
                    "Could not change theme".to_string(),
                    ToastOptions::new().description(format!("{e:#}")),
                );
            }
        }
    });

    (toggle_label, on_toggle_click)
}
