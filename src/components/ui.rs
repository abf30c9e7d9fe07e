//! Shared utility class bundles reused across components.

pub const PANEL: &str = "bg-base-100 rounded-md border border-base-300";

pub const BUTTON_PRIMARY: &str =
    "px-4 py-2 bg-green-500 text-white rounded-md hover:bg-green-600 whitespace-nowrap";
pub const BUTTON_GHOST: &str =
    "px-4 py-2 border border-green-500 text-green-500 rounded-md hover:bg-green-50";
pub const BUTTON_ICON: &str = "px-3 py-1.5 rounded-md text-sm hover:bg-base-200";
