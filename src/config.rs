//! Build-time configuration for the page chrome.
//!
//! The DOM ids and class names are a contract with the stylesheet and with
//! any server-rendered markup around the app, so they live here rather than
//! inline in the components.

/// `localStorage` key holding the dark mode preference.
pub(crate) const DARK_MODE_KEY: &str = "darkMode";

/// Class set on `<html>` while dark mode is active.
pub(crate) const DARK_CLASS: &str = "dark";

pub(crate) const TOGGLE_BUTTON_CLASS: &str = "dark-mode-toggle";
pub(crate) const EMAIL_POPUP_ID: &str = "emailPopup";
pub(crate) const EMAIL_ADDRESS_ID: &str = "emailAddress";

pub(crate) const SWITCH_TO_LIGHT_LABEL: &str = "☀️ Light Mode";
pub(crate) const SWITCH_TO_DARK_LABEL: &str = "🌙 Dark Mode";

pub(crate) const COPY_SUCCESS_MESSAGE: &str = "Email copied to clipboard!";
pub(crate) const COPY_FAILURE_MESSAGE: &str = "Could not copy email";

/// Contact address shown in the popup, overridable with `SITE_CONTACT_EMAIL`
/// at build time.
pub(crate) const CONTACT_EMAIL: &str = match option_env!("SITE_CONTACT_EMAIL") {
    Some(email) => email,
    None => "contact@example.com",
};
