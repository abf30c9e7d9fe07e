use std::cell::RefCell;

use dioxus::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, window};

use crate::config::{
    DARK_CLASS, DARK_MODE_KEY, EMAIL_POPUP_ID, SWITCH_TO_DARK_LABEL, SWITCH_TO_LIGHT_LABEL,
};
use crate::dom::{DocumentSurface, PopupElement, element_text};
use crate::popup::{
    CopyOutcome, Notifier, PopupDisplay, PopupSurface, copy_email_to_clipboard, toggle_popup,
};
use crate::storage::{LocalStore, PreferenceStore, open_store};
use crate::theme::{ThemePreference, apply_theme, get_preference, load_theme, toggle_theme};

wasm_bindgen_test_configure!(run_in_browser);

fn root_has_dark_class() -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|root| root.class_list().contains(DARK_CLASS))
        .unwrap_or(false)
}

fn clear_preference() {
    let storage = window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item(DARK_MODE_KEY).unwrap();
}

struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn success(&self, _title: &str) {}
    fn failure(&self, _title: &str, _detail: &str) {}
}

#[wasm_bindgen_test]
fn local_store_round_trips_preference() {
    clear_preference();
    let store = LocalStore::open().expect("localStorage should be available in the test browser");
    assert_eq!(get_preference(&store), ThemePreference::Light);

    store.set_item(DARK_MODE_KEY, "true").unwrap();
    assert_eq!(get_preference(&store), ThemePreference::Dark);

    // A fresh handle sees the same origin-scoped value.
    let reopened = LocalStore::open().unwrap();
    assert_eq!(get_preference(&reopened), ThemePreference::Dark);
    clear_preference();
}

#[wasm_bindgen_test]
fn toggle_updates_root_class_and_storage() {
    clear_preference();
    let store = LocalStore::open().unwrap();
    let mut surface = DocumentSurface::attach(None);

    load_theme(&mut surface, &store);
    assert!(!root_has_dark_class());

    let applied = toggle_theme(&mut surface, &store).unwrap();
    assert_eq!(applied, ThemePreference::Dark);
    assert!(root_has_dark_class());
    assert_eq!(store.get_item(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));

    toggle_theme(&mut surface, &store).unwrap();
    assert!(!root_has_dark_class());
    assert_eq!(get_preference(&store), ThemePreference::Light);
    clear_preference();
}

#[wasm_bindgen_test]
fn load_removes_class_left_by_earlier_page_state() {
    clear_preference();
    let store = LocalStore::open().unwrap();
    let mut surface = DocumentSurface::attach(None);
    toggle_theme(&mut surface, &store).unwrap();
    clear_preference();

    load_theme(&mut surface, &store);
    assert!(!root_has_dark_class());
    load_theme(&mut surface, &store);
    assert!(!root_has_dark_class());
}

#[wasm_bindgen_test]
fn missing_email_element_reads_none() {
    assert_eq!(element_text("no-such-element"), None);
}

#[wasm_bindgen_test]
async fn copy_without_email_element_is_skipped() {
    let outcome = copy_email_to_clipboard(
        element_text("no-such-element"),
        &crate::dom::NavigatorClipboard,
        &SilentNotifier,
    )
    .await;
    assert_eq!(outcome, CopyOutcome::NoSource);
}

fn mount_popup() -> HtmlElement {
    let document = window().unwrap().document().unwrap();
    let popup = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    popup.set_id(EMAIL_POPUP_ID);
    document.body().unwrap().append_child(&popup).unwrap();
    popup
}

#[wasm_bindgen_test]
fn popup_inline_display_flips_between_block_and_none() {
    let element = mount_popup();
    let inline = || element.style().get_property_value("display").unwrap();
    let mut popup = PopupElement::attach(EMAIL_POPUP_ID);
    assert_eq!(popup.display(), PopupDisplay::Hidden);

    assert_eq!(toggle_popup(&mut popup), PopupDisplay::Shown);
    assert_eq!(inline(), "block");

    assert_eq!(toggle_popup(&mut popup), PopupDisplay::Hidden);
    assert_eq!(inline(), "none");

    // A freshly attached handle reads the state back from the element.
    toggle_popup(&mut popup);
    assert_eq!(PopupElement::attach(EMAIL_POPUP_ID).display(), PopupDisplay::Shown);
    element.remove();
}

#[wasm_bindgen_test]
fn toggling_missing_popup_is_a_no_op() {
    let mut popup = PopupElement::attach("no-such-popup");
    toggle_popup(&mut popup);
    assert_eq!(popup.display(), PopupDisplay::Hidden);
}

thread_local! {
    static SEEN_LABELS: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
}

fn label_harness() -> Element {
    let label = use_signal(|| "");
    use_hook(move || {
        let mut surface = DocumentSurface::attach(Some(label));
        apply_theme(&mut surface, ThemePreference::Dark);
        SEEN_LABELS.with_borrow_mut(|seen| seen.push(*label.peek()));
        apply_theme(&mut surface, ThemePreference::Light);
        SEEN_LABELS.with_borrow_mut(|seen| seen.push(*label.peek()));
    });
    rsx! {}
}

#[wasm_bindgen_test]
fn document_surface_updates_toggle_label_signal() {
    SEEN_LABELS.with_borrow_mut(Vec::clear);

    let mut dom = VirtualDom::new(label_harness);
    dom.rebuild_in_place();

    let seen = SEEN_LABELS.with_borrow(Clone::clone);
    assert_eq!(seen, vec![SWITCH_TO_LIGHT_LABEL, SWITCH_TO_DARK_LABEL]);
    assert!(!root_has_dark_class());
}

#[wasm_bindgen_test]
fn open_store_uses_local_storage_in_browser() {
    clear_preference();
    let opened = open_store();
    assert!(opened.persistent);

    opened.store.set_item(DARK_MODE_KEY, "true").unwrap();
    let reopened = LocalStore::open().unwrap();
    assert_eq!(get_preference(&reopened), ThemePreference::Dark);
    clear_preference();
}
