use dioxus::prelude::*;

use crate::components::ui::{BUTTON_GHOST, BUTTON_PRIMARY, PANEL};
use crate::config::{EMAIL_ADDRESS_ID, EMAIL_POPUP_ID};

/// Fixed panel with the contact address, hidden by the stylesheet until its
/// inline `display` is set. The style attribute is left out of the markup so
/// re-renders never reset it.
#[component]
pub fn EmailPopup(
    email: String,
    on_copy: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            id: EMAIL_POPUP_ID,
            class: "email-popup bottom-20 right-6 z-50 p-4 shadow-lg {PANEL}",
            p { class: "text-sm opacity-75 mb-1", "Get in touch" }
            span { id: EMAIL_ADDRESS_ID, class: "font-mono select-all", "{email}" }
            div { class: "flex gap-2 mt-3",
                button {
                    class: "{BUTTON_PRIMARY}",
                    onclick: move |_| on_copy.call(()),
                    "Copy"
                }
                button {
                    class: "{BUTTON_GHOST}",
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
        }
    }
}

/// Round button pinned to the corner of the viewport that opens the popup.
#[component]
pub fn ContactButton(on_click: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "contact-float",
            title: "Contact",
            aria_label: "Contact",
            onclick: move |_| on_click.call(()),
            "✉️"
        }
    }
}
