mod email_popup;
pub mod theme_provider;
pub mod ui;

pub use email_popup::{ContactButton, EmailPopup};
pub(crate) use theme_provider::use_theme;
