//! Browser-backed implementations of the theme and popup seams.

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use dioxus::prelude::*;
use dioxus_primitives::toast::{ToastOptions, Toasts};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlElement, js_sys, window};

use crate::config::DARK_CLASS;
use crate::popup::{Clipboard, Notifier, PopupDisplay, PopupSurface};
use crate::theme::ThemeSurface;

/// The `<html>` element plus the toggle control's label, when mounted.
pub(crate) struct DocumentSurface {
    root: Option<web_sys::Element>,
    toggle_label: Option<Signal<&'static str>>,
}

impl DocumentSurface {
    pub(crate) fn attach(toggle_label: Option<Signal<&'static str>>) -> Self {
        let root = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if root.is_none() {
            tracing::warn!("document root is unavailable, theme class will not be applied");
        }
        Self { root, toggle_label }
    }
}

impl ThemeSurface for DocumentSurface {
    fn is_dark(&self) -> bool {
        self.root
            .as_ref()
            .is_some_and(|root| root.class_list().contains(DARK_CLASS))
    }

    fn set_dark(&mut self, dark: bool) {
        let Some(root) = &self.root else {
            return;
        };
        let classes = root.class_list();
        let result = if dark {
            classes.add_1(DARK_CLASS)
        } else {
            classes.remove_1(DARK_CLASS)
        };
        if let Err(e) = result {
            tracing::warn!(error = ?e, dark, "failed to update theme class");
        }
    }

    fn set_toggle_label(&mut self, label: &'static str) {
        if let Some(toggle_label) = self.toggle_label.as_mut() {
            toggle_label.set(label);
        }
    }
}

/// The popup container, shown and hidden through its inline `display` style.
pub(crate) struct PopupElement {
    element: Option<HtmlElement>,
}

impl PopupElement {
    pub(crate) fn attach(id: &str) -> Self {
        let element = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|e| e.dyn_into::<HtmlElement>().ok());
        if element.is_none() {
            tracing::warn!(id, "popup element not found");
        }
        Self { element }
    }
}

impl PopupSurface for PopupElement {
    fn display(&self) -> PopupDisplay {
        self.element
            .as_ref()
            .and_then(|e| e.style().get_property_value("display").ok())
            .map(|inline| PopupDisplay::from_inline(&inline))
            .unwrap_or_default()
    }

    fn set_display(&mut self, display: PopupDisplay) {
        let Some(element) = &self.element else {
            return;
        };
        if let Err(e) = element.style().set_property("display", display.as_inline()) {
            tracing::warn!(error = ?e, "failed to update popup display");
        }
    }
}

/// Text content of the element with `id`, if it exists.
pub(crate) fn element_text(id: &str) -> Option<String> {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if element.is_none() {
        tracing::warn!(id, "element not found");
    }
    element.and_then(|e| e.text_content())
}

/// `navigator.clipboard`.
pub(crate) struct NavigatorClipboard;

#[async_trait(?Send)]
impl Clipboard for NavigatorClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let navigator = window().context("window is unavailable")?.navigator();
        // Absent outside secure contexts.
        let available = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .map(|v| !v.is_undefined())
            .unwrap_or(false);
        if !available {
            return Err(anyhow!("clipboard access is unavailable on this page"));
        }
        JsFuture::from(navigator.clipboard().write_text(text))
            .await
            .map_err(|e| anyhow!("clipboard write rejected: {e:?}"))?;
        Ok(())
    }
}

impl Notifier for Toasts {
    fn success(&self, title: &str) {
        Toasts::success(self, title.to_string(), ToastOptions::new());
    }

    fn failure(&self, title: &str, detail: &str) {
        Toasts::error(
            self,
            title.to_string(),
            ToastOptions::new().description(detail.to_string()),
        );
    }
}
