use dioxus::prelude::*;
use dioxus_primitives::toast::{ToastOptions, use_toast};

use crate::components::ui::BUTTON_ICON;
use crate::components::{ContactButton, EmailPopup, use_theme};
use crate::config::{CONTACT_EMAIL, EMAIL_ADDRESS_ID, EMAIL_POPUP_ID, TOGGLE_BUTTON_CLASS};
use crate::dom::{NavigatorClipboard, PopupElement, element_text};
use crate::popup::{PopupDisplay, PopupSurface, copy_email_to_clipboard, toggle_popup};
use crate::storage;

#[component]
pub(crate) fn MainLayout() -> Element {
    let opened = use_hook(storage::open_store);
    let toast_api = use_toast();

    let persistent = opened.persistent;
    use_effect(move || {
        if !persistent {
            toast_api.warning(
                "Preferences will not be saved".to_string(),
                ToastOptions::new().description(
                    "This browser blocks local storage, so your theme resets on reload."
                        .to_string(),
                ),
            );
        }
    });

    // Theme management
    let (toggle_label, on_toggle_click) = use_theme(opened.store);

    let on_contact_click = move |_: ()| {
        let shown = toggle_popup(&mut PopupElement::attach(EMAIL_POPUP_ID));
        tracing::debug!(display = shown.as_inline(), "email popup toggled");
    };

    let on_close_click = move |_: ()| {
        PopupElement::attach(EMAIL_POPUP_ID).set_display(PopupDisplay::Hidden);
    };

    let on_copy_click = move |_: ()| {
        let email = element_text(EMAIL_ADDRESS_ID);
        spawn(async move {
            let outcome = copy_email_to_clipboard(email, &NavigatorClipboard, &toast_api).await;
            tracing::debug!(?outcome, "email copy finished");
        });
    };

    rsx! {
        div { class: "min-h-screen flex flex-col",
            header { class: "flex items-center justify-between px-8 py-4 border-b border-base-300",
                h1 { class: "text-primary text-xl font-semibold tracking-tight", "Site" }
                button {
                    class: "{TOGGLE_BUTTON_CLASS} {BUTTON_ICON}",
                    onclick: move |_| on_toggle_click.call(()),
                    "{toggle_label()}"
                }
            }

            main { class: "flex-1" }

            ContactButton { on_click: on_contact_click }
            EmailPopup {
                email: CONTACT_EMAIL.to_string(),
                on_copy: on_copy_click,
                on_close: on_close_click,
            }
        }
    }
}
