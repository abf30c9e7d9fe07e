use anyhow::Result;
use async_trait::async_trait;

use crate::config::{COPY_FAILURE_MESSAGE, COPY_SUCCESS_MESSAGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupDisplay {
    #[default]
    Hidden,
    Shown,
}

impl PopupDisplay {
    /// Anything but an explicit `block` counts as hidden, including the empty
    /// inline value of a popup hidden by the stylesheet.
    pub fn from_inline(display: &str) -> Self {
        if display.trim() == "block" {
            PopupDisplay::Shown
        } else {
            PopupDisplay::Hidden
        }
    }

    pub fn as_inline(&self) -> &'static str {
        match self {
            PopupDisplay::Hidden => "none",
            PopupDisplay::Shown => "block",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            PopupDisplay::Hidden => PopupDisplay::Shown,
            PopupDisplay::Shown => PopupDisplay::Hidden,
        }
    }
}

pub(crate) trait PopupSurface {
    fn display(&self) -> PopupDisplay;
    fn set_display(&mut self, display: PopupDisplay);
}

impl PopupSurface for PopupDisplay {
    fn display(&self) -> PopupDisplay {
        *self
    }

    fn set_display(&mut self, display: PopupDisplay) {
        *self = display;
    }
}

pub(crate) fn toggle_popup(popup: &mut dyn PopupSurface) -> PopupDisplay {
    let next = popup.display().toggle();
    popup.set_display(next);
    next
}

#[async_trait(?Send)]
pub(crate) trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// User-facing feedback channel.
pub(crate) trait Notifier {
    fn success(&self, title: &str);
    fn failure(&self, title: &str, detail: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CopyOutcome {
    Copied,
    Failed,
    /// No email element, or it was empty.
    NoSource,
}

pub(crate) async fn copy_email_to_clipboard(
    email: Option<String>,
    clipboard: &dyn Clipboard,
    notifier: &dyn Notifier,
) -> CopyOutcome {
    let Some(email) = email.filter(|e| !e.trim().is_empty()) else {
        tracing::warn!("no email text to copy");
        return CopyOutcome::NoSource;
    };

    match clipboard.write_text(&email).await {
        Ok(()) => {
            tracing::info!("copied email to clipboard");
            notifier.success(COPY_SUCCESS_MESSAGE);
            CopyOutcome::Copied
        }
        Err(e) => {
            let detail = format!("{e:#}");
            tracing::warn!(error = %detail, "clipboard write failed");
            notifier.failure(COPY_FAILURE_MESSAGE, &detail);
            CopyOutcome::Failed
        }
    }
}
